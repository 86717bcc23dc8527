use crate::config::{CheckMode, InputFormat, TomlConfig};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "seqassert")]
#[command(about = "Check that one sequence contains another, optionally in order")]
pub struct CliConfig {
    /// File holding the expected elements
    #[arg(long)]
    pub expected: PathBuf,

    /// File holding the actual elements
    #[arg(long)]
    pub actual: PathBuf,

    /// Containment check to run (overrides the config file)
    #[arg(long, value_enum)]
    pub mode: Option<CheckMode>,

    /// Also require the expected order
    #[arg(long)]
    pub in_order: bool,

    /// How both files are parsed (overrides the config file)
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Cap on elements listed per failure line (overrides the config file)
    #[arg(long)]
    pub max_listed_elements: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the TOML file (if any) and applies command line overrides.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(mode) = self.mode {
            config.check.mode = mode;
        }
        if self.in_order {
            config.check.in_order = true;
        }
        if let Some(input_format) = self.input_format {
            config.check.input_format = input_format;
        }
        if let Some(max) = self.max_listed_elements {
            config.format.max_listed_elements = max;
        }
        if self.verbose {
            config.logging.raise_to("debug");
        }

        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("expected", &self.expected.to_string_lossy())?;
        validate_path("actual", &self.actual.to_string_lossy())?;
        Ok(())
    }
}
