use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeqAssertError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON input error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing input: {what}")]
    MissingInputError { what: String },
}

pub type Result<T> = std::result::Result<T, SeqAssertError>;
