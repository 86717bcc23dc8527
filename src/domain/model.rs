use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One line of a failure message. A fact without a value is a headline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub key: String,
    pub value: Option<String>,
}

impl Fact {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    pub fn simple(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Elements missing from or unexpected in the actual sequence.
    ContentsMismatch,
    /// Map keys missing, unexpected or bound to other values.
    EntriesMismatch,
    /// Contents matched but the relative order did not.
    OrderMismatch,
    /// A sequence was not sorted.
    NotInOrder,
    /// Size, emptiness or single-element checks.
    ValueMismatch,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::ContentsMismatch => "contents mismatch",
            FailureKind::EntriesMismatch => "entries mismatch",
            FailureKind::OrderMismatch => "order mismatch",
            FailureKind::NotInOrder => "not in order",
            FailureKind::ValueMismatch => "value mismatch",
        };
        f.write_str(name)
    }
}

/// A failed assertion, delivered to a [`FailureStrategy`].
///
/// [`FailureStrategy`]: crate::domain::ports::FailureStrategy
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{}", render_facts(.facts))]
pub struct AssertionFailure {
    pub kind: FailureKind,
    pub facts: Vec<Fact>,
}

impl AssertionFailure {
    pub fn new(kind: FailureKind, facts: Vec<Fact>) -> Self {
        Self { kind, facts }
    }

    pub fn fact_value(&self, key: &str) -> Option<&str> {
        self.facts
            .iter()
            .find(|fact| fact.key == key)
            .and_then(|fact| fact.value.as_deref())
    }

    pub fn headline(&self) -> Option<&str> {
        self.facts
            .iter()
            .find(|fact| fact.value.is_none())
            .map(|fact| fact.key.as_str())
    }
}

/// Renders facts one per line with keys padded to the widest key.
pub fn render_facts(facts: &[Fact]) -> String {
    let width = facts
        .iter()
        .filter(|fact| fact.value.is_some())
        .map(|fact| fact.key.chars().count())
        .max()
        .unwrap_or(0);

    facts
        .iter()
        .map(|fact| match &fact.value {
            Some(value) => format!("{:<width$}: {}", fact.key, value, width = width),
            None => fact.key.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
