//! Implementers of [`Ordered`] returned by containment assertions.

use crate::core::check::Check;
use crate::core::matching::{match_at_least, match_entries, same_sequence};
use crate::domain::model::{Fact, FailureKind};
use crate::domain::ports::Ordered;
use std::fmt::Debug;

/// The containment assertion already failed; the order is not checked again.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlreadyFailed;

impl Ordered for AlreadyFailed {
    fn in_order(&self) {}
}

/// The containment assertion already saw the elements in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlreadyInOrder;

impl Ordered for AlreadyInOrder {
    fn in_order(&self) {}
}

/// Same elements, possibly in a different order.
#[derive(Debug)]
pub struct ExactOrder<T, E> {
    actual: Vec<T>,
    expected: Vec<E>,
    check: Check,
    name: Option<String>,
}

impl<T, E> ExactOrder<T, E> {
    pub(crate) fn new(actual: Vec<T>, expected: Vec<E>, check: Check, name: Option<String>) -> Self {
        Self {
            actual,
            expected,
            check,
            name,
        }
    }
}

impl<T: PartialEq<E> + Debug, E: Debug> Ordered for ExactOrder<T, E> {
    fn in_order(&self) {
        if same_sequence(&self.actual, &self.expected) {
            return;
        }

        let format = self.check.format();
        self.check.fail(
            FailureKind::OrderMismatch,
            vec![
                Fact::simple("contents match, but order was wrong"),
                Fact::new("expected", format.render_list(&self.expected)),
                Fact::new("but was", format.render_list(&self.actual)),
            ],
            self.name.as_deref(),
        );
    }
}

/// Every required element was found; their relative order is checked here.
#[derive(Debug)]
pub struct RequiredOrder<T, E> {
    actual: Vec<T>,
    expected: Vec<E>,
    check: Check,
    name: Option<String>,
}

impl<T, E> RequiredOrder<T, E> {
    pub(crate) fn new(actual: Vec<T>, expected: Vec<E>, check: Check, name: Option<String>) -> Self {
        Self {
            actual,
            expected,
            check,
            name,
        }
    }
}

impl<T: PartialEq<E> + Debug, E: Debug> Ordered for RequiredOrder<T, E> {
    fn in_order(&self) {
        if match_at_least(&self.actual, &self.expected).in_order {
            return;
        }

        let format = self.check.format();
        self.check.fail(
            FailureKind::OrderMismatch,
            vec![
                Fact::simple("required elements were all found, but order was wrong"),
                Fact::new(
                    "expected order for required elements",
                    format.render_list(&self.expected),
                ),
                Fact::new("but was", format.render_list(&self.actual)),
            ],
            self.name.as_deref(),
        );
    }
}

/// Map entries matched by key; the key order is checked here.
#[derive(Debug)]
pub struct EntryOrder<K, V, EK, EV> {
    actual: Vec<(K, V)>,
    expected: Vec<(EK, EV)>,
    exact: bool,
    check: Check,
    name: Option<String>,
}

impl<K, V, EK, EV> EntryOrder<K, V, EK, EV> {
    pub(crate) fn new(
        actual: Vec<(K, V)>,
        expected: Vec<(EK, EV)>,
        exact: bool,
        check: Check,
        name: Option<String>,
    ) -> Self {
        Self {
            actual,
            expected,
            exact,
            check,
            name,
        }
    }
}

impl<K, V, EK, EV> Ordered for EntryOrder<K, V, EK, EV>
where
    K: PartialEq<EK> + Debug,
    V: PartialEq<EV> + Debug,
    EK: Debug,
    EV: Debug,
{
    fn in_order(&self) {
        if match_entries(&self.actual, &self.expected, self.exact).in_order {
            return;
        }

        let format = self.check.format();
        let facts = if self.exact {
            vec![
                Fact::simple("entries match, but order was wrong"),
                Fact::new("expected", format.render_entries(&self.expected)),
                Fact::new("but was", format.render_entries(&self.actual)),
            ]
        } else {
            vec![
                Fact::simple("required entries were all found, but order was wrong"),
                Fact::new(
                    "expected to contain at least",
                    format.render_entries(&self.expected),
                ),
                Fact::new("but was", format.render_entries(&self.actual)),
            ]
        };
        self.check
            .fail(FailureKind::OrderMismatch, facts, self.name.as_deref());
    }
}
