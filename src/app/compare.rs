use crate::config::{CheckMode, InputFormat, TomlConfig};
use crate::core::expect::Expect;
use crate::domain::model::AssertionFailure;
use crate::domain::ports::Ordered;
use crate::utils::error::{Result, SeqAssertError};
use serde_json::Value;
use std::fmt;
use std::path::Path;

pub const EXIT_PASSED: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
/// Usage, configuration or input errors.
pub const EXIT_ERROR: i32 = 2;

/// A sequence element read from a file. Renders as compact JSON.
#[derive(Clone, PartialEq)]
pub struct Element(pub Value);

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Element {
    fn from(text: &str) -> Self {
        Element(Value::String(text.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub mode: CheckMode,
    pub in_order: bool,
    pub failures: Vec<AssertionFailure>,
}

impl ComparisonReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            EXIT_PASSED
        } else {
            EXIT_FAILED
        }
    }
}

pub fn parse_sequence(content: &str, format: InputFormat) -> Result<Vec<Element>> {
    match format {
        InputFormat::Lines => Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(Element::from)
            .collect()),
        InputFormat::Json => match serde_json::from_str::<Value>(content)? {
            Value::Array(items) => Ok(items.into_iter().map(Element).collect()),
            other => Err(SeqAssertError::InvalidConfigValueError {
                field: "input".to_string(),
                value: other.to_string(),
                reason: "JSON input must be an array".to_string(),
            }),
        },
    }
}

pub fn read_sequence<P: AsRef<Path>>(path: P, format: InputFormat) -> Result<Vec<Element>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SeqAssertError::MissingInputError {
            what: path.display().to_string(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    let sequence = parse_sequence(&content, format)?;
    tracing::debug!("Read {} elements from {}", sequence.len(), path.display());
    Ok(sequence)
}

/// Runs the configured containment check, and the order check when enabled,
/// collecting every failure.
pub fn compare(expected: Vec<Element>, actual: Vec<Element>, config: &TomlConfig) -> ComparisonReport {
    let expect = Expect::with_format(config.format.clone());

    let ordered = match config.check.mode {
        CheckMode::Exactly => expect.that(actual).contains_exactly(expected),
        CheckMode::AtLeast => expect.that(actual).contains_at_least(expected),
    };
    if config.check.in_order {
        ordered.in_order();
    }

    let failures = match expect.finish() {
        Ok(()) => Vec::new(),
        Err(err) => err.failures,
    };
    tracing::info!(
        "Comparison ({:?}, in order: {}) finished with {} failure(s)",
        config.check.mode,
        config.check.in_order,
        failures.len()
    );

    ComparisonReport {
        mode: config.check.mode,
        in_order: config.check.in_order,
        failures,
    }
}

/// Reads both files and compares them.
pub fn compare_files<P: AsRef<Path>>(expected: P, actual: P, config: &TomlConfig) -> Result<ComparisonReport> {
    let format = config.check.input_format;
    let expected = read_sequence(expected, format)?;
    let actual = read_sequence(actual, format)?;
    Ok(compare(expected, actual, config))
}
