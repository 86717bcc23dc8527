use crate::domain::model::AssertionFailure;
use crate::domain::ports::FailureStrategy;
use std::sync::Mutex;

/// Panics with the rendered failure, the usual test-runner failure path.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicStrategy;

impl FailureStrategy for PanicStrategy {
    fn fail(&self, failure: AssertionFailure) {
        panic!("{}", failure);
    }
}

/// Records failures instead of raising them. Safe to share across threads.
#[derive(Debug, Default)]
pub struct Collector {
    failures: Mutex<Vec<AssertionFailure>>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&self) -> Vec<AssertionFailure> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<AssertionFailure>> {
        // A panic while holding the lock cannot leave the Vec half-written.
        self.failures
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FailureStrategy for Collector {
    fn fail(&self, failure: AssertionFailure) {
        self.lock().push(failure);
    }
}
