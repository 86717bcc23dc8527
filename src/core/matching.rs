//! Containment and order matching over slices.
//!
//! Equality is `T: PartialEq<E>` between the actual and expected element
//! types. Duplicates are significant: every expected element must be matched
//! by a distinct actual element.

/// Outcome of matching `actual` against `expected` exactly.
#[derive(Debug)]
pub struct ExactMatch<'a, T, E> {
    pub in_order: bool,
    pub missing: Vec<&'a E>,
    pub unexpected: Vec<&'a T>,
}

impl<T, E> ExactMatch<'_, T, E> {
    pub fn contents_match(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

/// Outcome of matching `actual` against a required subset `expected`.
#[derive(Debug)]
pub struct AtLeastMatch<'a, E> {
    pub in_order: bool,
    pub missing: Vec<&'a E>,
}

impl<E> AtLeastMatch<'_, E> {
    pub fn all_found(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Both sequences have the same length and are equal element by element.
pub fn same_sequence<T: PartialEq<E>, E>(actual: &[T], expected: &[E]) -> bool {
    actual.len() == expected.len() && actual.iter().zip(expected).all(|(a, e)| a == e)
}

pub fn match_exactly<'a, T: PartialEq<E>, E>(
    actual: &'a [T],
    expected: &'a [E],
) -> ExactMatch<'a, T, E> {
    let prefix = actual
        .iter()
        .zip(expected)
        .take_while(|(a, e)| *a == *e)
        .count();

    if prefix == actual.len() && prefix == expected.len() {
        return ExactMatch {
            in_order: true,
            missing: Vec::new(),
            unexpected: Vec::new(),
        };
    }

    let rest = &actual[prefix..];
    let mut used = vec![false; rest.len()];
    let mut missing = Vec::new();

    for e in &expected[prefix..] {
        let slot = rest
            .iter()
            .enumerate()
            .position(|(i, a)| !used[i] && a == e);
        match slot {
            Some(i) => used[i] = true,
            None => missing.push(e),
        }
    }

    let unexpected = rest
        .iter()
        .zip(&used)
        .filter(|(_, taken)| !**taken)
        .map(|(a, _)| a)
        .collect();

    tracing::trace!(
        "exact match diverged at index {}: {} missing",
        prefix,
        missing.len()
    );

    ExactMatch {
        in_order: false,
        missing,
        unexpected,
    }
}

pub fn match_at_least<'a, T: PartialEq<E>, E>(
    actual: &'a [T],
    expected: &'a [E],
) -> AtLeastMatch<'a, E> {
    let mut cursor = 0;
    let mut parked: Vec<usize> = Vec::new();
    let mut in_order = true;
    let mut missing = Vec::new();

    for e in expected {
        if let Some(offset) = actual[cursor..].iter().position(|a| a == e) {
            // Everything skipped over may still satisfy a later expectation.
            parked.extend(cursor..cursor + offset);
            cursor += offset + 1;
        } else if let Some(slot) = parked.iter().position(|&i| actual[i] == *e) {
            parked.remove(slot);
            in_order = false;
        } else {
            missing.push(e);
        }
    }

    AtLeastMatch { in_order, missing }
}

/// Outcome of matching map entries.
#[derive(Debug)]
pub struct EntryMatch<'a, K, V, EK, EV> {
    pub in_order: bool,
    pub missing_keys: Vec<&'a EK>,
    pub unexpected_keys: Vec<&'a K>,
    pub wrong_values: Vec<WrongValue<'a, EK, EV, V>>,
}

#[derive(Debug)]
pub struct WrongValue<'a, EK, EV, V> {
    pub key: &'a EK,
    pub expected: &'a EV,
    pub actual: &'a V,
}

impl<K, V, EK, EV> EntryMatch<'_, K, V, EK, EV> {
    pub fn entries_match(&self) -> bool {
        self.missing_keys.is_empty()
            && self.unexpected_keys.is_empty()
            && self.wrong_values.is_empty()
    }
}

/// Matches entries by key. With `exact`, actual keys not named in
/// `expected` are reported as unexpected; otherwise they are ignored.
///
/// `in_order` holds when the matched actual positions are strictly
/// increasing, i.e. the expected keys form a subsequence of the actual keys.
pub fn match_entries<'a, K, V, EK, EV>(
    actual: &'a [(K, V)],
    expected: &'a [(EK, EV)],
    exact: bool,
) -> EntryMatch<'a, K, V, EK, EV>
where
    K: PartialEq<EK>,
    V: PartialEq<EV>,
{
    let mut used = vec![false; actual.len()];
    let mut slots: Vec<Option<usize>> = vec![None; expected.len()];

    // Entries equal in key and value claim their actual entry first, so a
    // repeated key in a pair list is not mistaken for a wrong value.
    for (j, (ek, ev)) in expected.iter().enumerate() {
        let slot = actual
            .iter()
            .enumerate()
            .position(|(i, (k, v))| !used[i] && k == ek && v == ev);
        if let Some(i) = slot {
            used[i] = true;
            slots[j] = Some(i);
        }
    }

    let mut missing_keys = Vec::new();
    let mut wrong_values = Vec::new();

    for (j, (ek, ev)) in expected.iter().enumerate() {
        if slots[j].is_some() {
            continue;
        }
        let slot = actual
            .iter()
            .enumerate()
            .position(|(i, (k, _))| !used[i] && k == ek);
        match slot {
            Some(i) => {
                used[i] = true;
                slots[j] = Some(i);
                wrong_values.push(WrongValue {
                    key: ek,
                    expected: ev,
                    actual: &actual[i].1,
                });
            }
            None => missing_keys.push(ek),
        }
    }

    let positions: Vec<usize> = slots.into_iter().flatten().collect();

    let unexpected_keys = if exact {
        actual
            .iter()
            .zip(&used)
            .filter(|(_, taken)| !**taken)
            .map(|((k, _), _)| k)
            .collect()
    } else {
        Vec::new()
    };

    let in_order = positions.windows(2).all(|pair| pair[0] < pair[1]);

    EntryMatch {
        in_order,
        missing_keys,
        unexpected_keys,
        wrong_values,
    }
}
