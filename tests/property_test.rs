//! Property-based tests for containment and order checks.

use proptest::prelude::*;
use seqassert::{Check, Collector, FailureKind, FormatConfig, Ordered};
use std::sync::Arc;

fn collecting() -> (Arc<Collector>, Check) {
    let collector = Arc::new(Collector::new());
    let check = Check::new(collector.clone(), FormatConfig::default());
    (collector, check)
}

/// Small alphabet so duplicates show up often.
fn sequence_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..6, 0..12)
}

/// A sequence together with a shuffled copy of it.
fn permuted_pair() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    sequence_strategy().prop_flat_map(|seq| {
        let original = seq.clone();
        Just(seq).prop_shuffle().prop_map(move |shuffled| (original.clone(), shuffled))
    })
}

/// A sequence and a subsequence of it.
fn subsequence_pair() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    sequence_strategy().prop_flat_map(|seq| {
        let len = seq.len();
        (Just(seq), prop::collection::vec(any::<bool>(), len)).prop_map(|(seq, keep)| {
            let sub: Vec<u8> = seq
                .iter()
                .zip(&keep)
                .filter(|(_, keep)| **keep)
                .map(|(x, _)| *x)
                .collect();
            (seq, sub)
        })
    })
}

proptest! {
    #[test]
    fn prop_sequence_is_exactly_itself_in_order(seq in sequence_strategy()) {
        let (collector, check) = collecting();
        check.that(seq.clone()).contains_exactly(seq).in_order();
        prop_assert!(collector.is_empty());
    }

    #[test]
    fn prop_permutation_matches_and_order_fails_iff_different((original, shuffled) in permuted_pair()) {
        let (collector, check) = collecting();

        let ordered = check.that(shuffled.clone()).contains_exactly(original.clone());
        prop_assert!(collector.is_empty());

        ordered.in_order();
        let failures = collector.take();
        if shuffled == original {
            prop_assert!(failures.is_empty());
        } else {
            prop_assert_eq!(failures.len(), 1);
            prop_assert_eq!(failures[0].kind, FailureKind::OrderMismatch);
        }
    }

    #[test]
    fn prop_subsequence_is_contained_in_order((seq, sub) in subsequence_pair()) {
        let (collector, check) = collecting();
        check.that(seq).contains_at_least(sub).in_order();
        prop_assert!(collector.is_empty());
    }

    #[test]
    fn prop_failed_containment_reports_once(seq in sequence_strategy(), extra in 6u8..10) {
        let (collector, check) = collecting();

        let mut expected = seq.clone();
        expected.push(extra);

        let ordered = check.that(seq).contains_exactly(expected);
        ordered.in_order();
        ordered.in_order();

        let failures = collector.take();
        prop_assert_eq!(failures.len(), 1);
        prop_assert_eq!(failures[0].kind, FailureKind::ContentsMismatch);
    }
}
