use crate::core::format::FormatConfig;
use crate::core::map_subject::MapSubject;
use crate::core::strategy::PanicStrategy;
use crate::core::subject::IterableSubject;
use crate::domain::model::{AssertionFailure, Fact, FailureKind};
use crate::domain::ports::FailureStrategy;
use std::fmt;
use std::sync::Arc;

/// A failure strategy paired with rendering options.
///
/// Subjects and the [`Ordered`](crate::domain::ports::Ordered) values they
/// return all carry a clone of the `Check` that created them.
#[derive(Clone)]
pub struct Check {
    strategy: Arc<dyn FailureStrategy>,
    format: FormatConfig,
}

impl Check {
    pub fn new(strategy: Arc<dyn FailureStrategy>, format: FormatConfig) -> Self {
        Self { strategy, format }
    }

    pub fn panicking() -> Self {
        Self::new(Arc::new(PanicStrategy), FormatConfig::default())
    }

    pub fn with_format(mut self, format: FormatConfig) -> Self {
        self.format = format;
        self
    }

    pub fn format(&self) -> &FormatConfig {
        &self.format
    }

    pub fn that<I: IntoIterator>(&self, actual: I) -> IterableSubject<I::Item> {
        IterableSubject::new(self.clone(), actual)
    }

    pub fn that_map<K, V, I>(&self, entries: I) -> MapSubject<K, V>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        MapSubject::new(self.clone(), entries)
    }

    /// Builds the failure, appends the subject name and hands it off.
    pub(crate) fn fail(&self, kind: FailureKind, mut facts: Vec<Fact>, name: Option<&str>) {
        if let Some(name) = name {
            facts.push(Fact::new("value of", name));
        }
        let failure = AssertionFailure::new(kind, facts);
        tracing::debug!("assertion failed ({}): {}", failure.kind, failure);
        self.strategy.fail(failure);
    }
}

impl Default for Check {
    fn default() -> Self {
        Self::panicking()
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

/// Starts a panicking assertion chain on a sequence.
pub fn assert_that<I: IntoIterator>(actual: I) -> IterableSubject<I::Item> {
    Check::panicking().that(actual)
}

/// Starts a panicking assertion chain on map entries, in iteration order.
pub fn assert_that_map<K, V, I>(entries: I) -> MapSubject<K, V>
where
    I: IntoIterator<Item = (K, V)>,
{
    Check::panicking().that_map(entries)
}
