use crate::core::check::Check;
use crate::core::matching::{match_at_least, match_exactly};
use crate::core::ordered::{AlreadyFailed, AlreadyInOrder, ExactOrder, RequiredOrder};
use crate::domain::model::{Fact, FailureKind};
use crate::domain::ports::Ordered;
use std::cmp::Ordering;
use std::fmt::Debug;

/// Assertions over a finite sequence, captured in iteration order.
#[derive(Debug)]
pub struct IterableSubject<T> {
    actual: Vec<T>,
    check: Check,
    name: Option<String>,
}

impl<T> IterableSubject<T> {
    pub(crate) fn new<I: IntoIterator<Item = T>>(check: Check, actual: I) -> Self {
        Self {
            actual: actual.into_iter().collect(),
            check,
            name: None,
        }
    }

    /// Labels the sequence in failure messages.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn actual(&self) -> &[T] {
        &self.actual
    }
}

impl<T: Debug> IterableSubject<T> {
    /// Fails unless `actual` holds exactly the `expected` elements, with
    /// duplicates counted. Call [`Ordered::in_order`] on the result to also
    /// require the declared order.
    pub fn contains_exactly<'o, E, I>(self, expected: I) -> Box<dyn Ordered + 'o>
    where
        I: IntoIterator<Item = E>,
        T: PartialEq<E> + 'o,
        E: Debug + 'o,
    {
        let expected: Vec<E> = expected.into_iter().collect();
        let outcome = match_exactly(&self.actual, &expected);
        tracing::debug!(
            "contains_exactly: {} actual, {} expected, in order: {}",
            self.actual.len(),
            expected.len(),
            outcome.in_order
        );

        if outcome.in_order {
            return Box::new(AlreadyInOrder);
        }

        if outcome.contents_match() {
            return Box::new(ExactOrder::new(self.actual, expected, self.check, self.name));
        }

        let format = self.check.format();
        let mut facts = Vec::new();
        if !outcome.missing.is_empty() {
            facts.push(Fact::new(
                format!("missing ({})", outcome.missing.len()),
                format.render_counted(&outcome.missing),
            ));
        }
        if !outcome.unexpected.is_empty() {
            facts.push(Fact::new(
                format!("unexpected ({})", outcome.unexpected.len()),
                format.render_counted(&outcome.unexpected),
            ));
        }
        facts.push(Fact::new("expected", format.render_list(&expected)));
        facts.push(Fact::new("but was", format.render_list(&self.actual)));

        self.check
            .fail(FailureKind::ContentsMismatch, facts, self.name.as_deref());
        Box::new(AlreadyFailed)
    }

    /// Fails unless every `expected` element occurs in `actual`, each matched
    /// by a distinct element. [`Ordered::in_order`] on the result requires the
    /// expected elements to appear as a subsequence.
    pub fn contains_at_least<'o, E, I>(self, expected: I) -> Box<dyn Ordered + 'o>
    where
        I: IntoIterator<Item = E>,
        T: PartialEq<E> + 'o,
        E: Debug + 'o,
    {
        let expected: Vec<E> = expected.into_iter().collect();
        let outcome = match_at_least(&self.actual, &expected);
        tracing::debug!(
            "contains_at_least: {} actual, {} required, {} missing",
            self.actual.len(),
            expected.len(),
            outcome.missing.len()
        );

        if !outcome.all_found() {
            let format = self.check.format();
            let facts = vec![
                Fact::new(
                    format!("missing ({})", outcome.missing.len()),
                    format.render_counted(&outcome.missing),
                ),
                Fact::new("expected to contain at least", format.render_list(&expected)),
                Fact::new("but was", format.render_list(&self.actual)),
            ];
            self.check
                .fail(FailureKind::ContentsMismatch, facts, self.name.as_deref());
            return Box::new(AlreadyFailed);
        }

        if outcome.in_order {
            Box::new(AlreadyInOrder)
        } else {
            Box::new(RequiredOrder::new(self.actual, expected, self.check, self.name))
        }
    }

    pub fn contains<E>(&self, element: E)
    where
        T: PartialEq<E>,
        E: Debug,
    {
        if !self.actual.iter().any(|a| *a == element) {
            let format = self.check.format();
            self.check.fail(
                FailureKind::ContentsMismatch,
                vec![
                    Fact::new("expected to contain", format!("{:?}", element)),
                    Fact::new("but was", format.render_list(&self.actual)),
                ],
                self.name.as_deref(),
            );
        }
    }

    pub fn is_empty(&self) {
        if !self.actual.is_empty() {
            self.check.fail(
                FailureKind::ValueMismatch,
                vec![
                    Fact::simple("expected to be empty"),
                    Fact::new("but was", self.check.format().render_list(&self.actual)),
                ],
                self.name.as_deref(),
            );
        }
    }

    pub fn has_size(&self, expected: usize) {
        if self.actual.len() != expected {
            self.check.fail(
                FailureKind::ValueMismatch,
                vec![
                    Fact::new("value of", "size()"),
                    Fact::new("expected", expected.to_string()),
                    Fact::new("but was", self.actual.len().to_string()),
                    Fact::new("contents", self.check.format().render_list(&self.actual)),
                ],
                self.name.as_deref(),
            );
        }
    }
}

impl<T: PartialOrd + Debug> IterableSubject<T> {
    /// Each element is less than or equal to the next.
    pub fn is_in_order(&self) {
        self.check_sorted(false);
    }

    /// Each element is strictly less than the next.
    pub fn is_in_strict_order(&self) {
        self.check_sorted(true);
    }

    fn check_sorted(&self, strict: bool) {
        let breach = self.actual.windows(2).find(|pair| {
            !matches!(
                (pair[0].partial_cmp(&pair[1]), strict),
                (Some(Ordering::Less), _) | (Some(Ordering::Equal), false)
            )
        });

        if let Some(pair) = breach {
            let headline = if strict {
                "expected to be in strict order"
            } else {
                "expected to be in order"
            };
            self.check.fail(
                FailureKind::NotInOrder,
                vec![
                    Fact::simple(headline),
                    Fact::new("but contained", format!("{:?}, followed by {:?}", pair[0], pair[1])),
                    Fact::new("full contents", self.check.format().render_list(&self.actual)),
                ],
                self.name.as_deref(),
            );
        }
    }
}
