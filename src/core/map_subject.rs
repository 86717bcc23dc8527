use crate::core::check::Check;
use crate::core::matching::{match_entries, EntryMatch};
use crate::core::ordered::{AlreadyFailed, AlreadyInOrder, EntryOrder};
use crate::domain::model::{Fact, FailureKind};
use crate::domain::ports::Ordered;
use std::fmt::Debug;

/// Assertions over map entries, captured in iteration order.
///
/// Any `IntoIterator<Item = (K, V)>` works: a `BTreeMap`, a `HashMap`
/// (whose order is arbitrary, so only use `in_order` on ordered maps),
/// or a plain list of pairs.
#[derive(Debug)]
pub struct MapSubject<K, V> {
    entries: Vec<(K, V)>,
    check: Check,
    name: Option<String>,
}

impl<K, V> MapSubject<K, V> {
    pub(crate) fn new<I: IntoIterator<Item = (K, V)>>(check: Check, entries: I) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            check,
            name: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl<K: Debug, V: Debug> MapSubject<K, V> {
    /// Fails unless the map has exactly the `expected` entries.
    /// [`Ordered::in_order`] on the result also requires the same key order.
    pub fn contains_exactly<'o, EK, EV, I>(self, expected: I) -> Box<dyn Ordered + 'o>
    where
        I: IntoIterator<Item = (EK, EV)>,
        K: PartialEq<EK> + 'o,
        V: PartialEq<EV> + 'o,
        EK: Debug + 'o,
        EV: Debug + 'o,
    {
        self.contains_entries(expected.into_iter().collect(), true)
    }

    /// Fails unless every `expected` entry is present. [`Ordered::in_order`]
    /// on the result requires the expected keys to appear in the same
    /// relative order.
    pub fn contains_at_least<'o, EK, EV, I>(self, expected: I) -> Box<dyn Ordered + 'o>
    where
        I: IntoIterator<Item = (EK, EV)>,
        K: PartialEq<EK> + 'o,
        V: PartialEq<EV> + 'o,
        EK: Debug + 'o,
        EV: Debug + 'o,
    {
        self.contains_entries(expected.into_iter().collect(), false)
    }

    pub fn contains_key<EK>(&self, key: EK)
    where
        K: PartialEq<EK>,
        EK: Debug,
    {
        if !self.entries.iter().any(|(k, _)| *k == key) {
            let keys: Vec<&K> = self.entries.iter().map(|(k, _)| k).collect();
            self.check.fail(
                FailureKind::EntriesMismatch,
                vec![
                    Fact::new("value of", "map.keys()"),
                    Fact::new("expected to contain", format!("{:?}", key)),
                    Fact::new("but was", self.check.format().render_list(&keys)),
                ],
                self.name.as_deref(),
            );
        }
    }

    fn contains_entries<'o, EK, EV>(self, expected: Vec<(EK, EV)>, exact: bool) -> Box<dyn Ordered + 'o>
    where
        K: PartialEq<EK> + 'o,
        V: PartialEq<EV> + 'o,
        EK: Debug + 'o,
        EV: Debug + 'o,
    {
        let outcome = match_entries(&self.entries, &expected, exact);
        tracing::debug!(
            "map contains_{}: {} entries, {} expected, match: {}, in order: {}",
            if exact { "exactly" } else { "at_least" },
            self.entries.len(),
            expected.len(),
            outcome.entries_match(),
            outcome.in_order
        );

        if !outcome.entries_match() {
            let facts = self.mismatch_facts(&outcome, &expected, exact);
            self.check
                .fail(FailureKind::EntriesMismatch, facts, self.name.as_deref());
            return Box::new(AlreadyFailed);
        }

        if outcome.in_order {
            Box::new(AlreadyInOrder)
        } else {
            Box::new(EntryOrder::new(self.entries, expected, exact, self.check, self.name))
        }
    }

    fn mismatch_facts<EK: Debug, EV: Debug>(
        &self,
        outcome: &EntryMatch<'_, K, V, EK, EV>,
        expected: &[(EK, EV)],
        exact: bool,
    ) -> Vec<Fact> {
        let format = self.check.format();
        let mut facts = Vec::new();

        if !outcome.missing_keys.is_empty() {
            facts.push(Fact::new(
                format!("missing keys ({})", outcome.missing_keys.len()),
                format.render_list(&outcome.missing_keys),
            ));
        }
        if !outcome.unexpected_keys.is_empty() {
            facts.push(Fact::new(
                format!("unexpected keys ({})", outcome.unexpected_keys.len()),
                format.render_list(&outcome.unexpected_keys),
            ));
        }
        if !outcome.wrong_values.is_empty() {
            facts.push(Fact::simple(format!(
                "keys with wrong values ({})",
                outcome.wrong_values.len()
            )));
            for wrong in &outcome.wrong_values {
                facts.push(Fact::new("for key", format!("{:?}", wrong.key)));
                facts.push(Fact::new("expected value", format!("{:?}", wrong.expected)));
                facts.push(Fact::new("but got value", format!("{:?}", wrong.actual)));
            }
        }

        let expected_key = if exact {
            "expected"
        } else {
            "expected to contain at least"
        };
        facts.push(Fact::new(expected_key, format.render_entries(expected)));
        facts.push(Fact::new("but was", format.render_entries(&self.entries)));
        facts
    }
}
