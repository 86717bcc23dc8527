use crate::core::check::Check;
use crate::core::format::FormatConfig;
use crate::core::map_subject::MapSubject;
use crate::core::strategy::Collector;
use crate::core::subject::IterableSubject;
use crate::domain::model::AssertionFailure;
use std::sync::Arc;
use thiserror::Error;

/// Every failure recorded by an [`Expect`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} expectation(s) failed:\n\n{}", .failures.len(), render_all(.failures))]
pub struct ExpectFailures {
    pub failures: Vec<AssertionFailure>,
}

fn render_all(failures: &[AssertionFailure]) -> String {
    failures
        .iter()
        .enumerate()
        .map(|(i, failure)| format!("{}. {}", i + 1, failure))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Soft assertions: failures are collected and reported together by
/// [`finish`](Expect::finish).
///
/// Dropping an `Expect` that still holds failures panics, unless the thread
/// is already unwinding.
#[derive(Debug)]
pub struct Expect {
    collector: Arc<Collector>,
    check: Check,
    finished: bool,
}

impl Expect {
    pub fn new() -> Self {
        Self::with_format(FormatConfig::default())
    }

    pub fn with_format(format: FormatConfig) -> Self {
        let collector = Arc::new(Collector::new());
        let check = Check::new(collector.clone(), format);
        Self {
            collector,
            check,
            finished: false,
        }
    }

    pub fn that<I: IntoIterator>(&self, actual: I) -> IterableSubject<I::Item> {
        self.check.that(actual)
    }

    pub fn that_map<K, V, I>(&self, entries: I) -> MapSubject<K, V>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.check.that_map(entries)
    }

    /// The underlying check, for building subjects elsewhere.
    pub fn check(&self) -> &Check {
        &self.check
    }

    pub fn failure_count(&self) -> usize {
        self.collector.len()
    }

    pub fn finish(mut self) -> Result<(), ExpectFailures> {
        self.finished = true;
        let failures = self.collector.take();
        if failures.is_empty() {
            Ok(())
        } else {
            Err(ExpectFailures { failures })
        }
    }
}

impl Default for Expect {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Expect {
    fn drop(&mut self) {
        if self.finished || std::thread::panicking() {
            return;
        }
        let failures = self.collector.take();
        if !failures.is_empty() {
            tracing::warn!("Expect dropped with {} unreported failure(s)", failures.len());
            panic!("{}", ExpectFailures { failures });
        }
    }
}
