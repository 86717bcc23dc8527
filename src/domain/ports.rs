use crate::domain::model::AssertionFailure;

/// Follow-up order check offered by containment assertions.
///
/// An implementer closes over the expected and actual sequences of the
/// assertion that produced it. `in_order` returns normally when the expected
/// elements appeared in the actual sequence in the declared relative order,
/// and reports an [`FailureKind::OrderMismatch`] failure otherwise.
///
/// The call never mutates the captured state and may be repeated.
///
/// [`FailureKind::OrderMismatch`]: crate::domain::model::FailureKind::OrderMismatch
pub trait Ordered {
    fn in_order(&self);
}

/// Where assertion failures go: a panic, a collector, ...
pub trait FailureStrategy: Send + Sync {
    fn fail(&self, failure: AssertionFailure);
}
