use seqassert::{assert_that, assert_that_map, Check, Collector, Expect, FailureKind, FormatConfig, Ordered};
use std::collections::BTreeMap;
use std::sync::Arc;

fn collecting() -> (Arc<Collector>, Check) {
    let collector = Arc::new(Collector::new());
    let check = Check::new(collector.clone(), FormatConfig::default());
    (collector, check)
}

#[test]
fn test_charsets_in_declared_order_pass() {
    assert_that(["UTF-8", "US-ASCII"])
        .contains_exactly(["UTF-8", "US-ASCII"])
        .in_order();
}

#[test]
#[should_panic(expected = "contents match, but order was wrong")]
fn test_charsets_swapped_fail_in_order() {
    assert_that(["US-ASCII", "UTF-8"])
        .contains_exactly(["UTF-8", "US-ASCII"])
        .in_order();
}

#[test]
fn test_swapped_contents_still_pass_containment() {
    // Without in_order the containment check alone holds.
    assert_that(["US-ASCII", "UTF-8"]).contains_exactly(["UTF-8", "US-ASCII"]);
}

#[test]
fn test_order_mismatch_message() {
    let (collector, check) = collecting();

    check
        .that(vec!["US-ASCII".to_string(), "UTF-8".to_string()])
        .named("charsets")
        .contains_exactly(["UTF-8", "US-ASCII"])
        .in_order();

    let failures = collector.take();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].kind, FailureKind::OrderMismatch);
    assert_eq!(
        failures[0].to_string(),
        "contents match, but order was wrong\n\
         expected: [\"UTF-8\", \"US-ASCII\"]\n\
         but was : [\"US-ASCII\", \"UTF-8\"]\n\
         value of: charsets"
    );
}

#[test]
fn test_in_order_does_not_change_failed_containment() {
    let (collector, check) = collecting();

    let ordered = check.that([3, 1]).contains_exactly([1, 2]);
    assert_eq!(collector.len(), 1);

    ordered.in_order();
    ordered.in_order();

    let failures = collector.take();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].kind, FailureKind::ContentsMismatch);
}

#[test]
fn test_in_order_does_not_change_passed_containment() {
    let (collector, check) = collecting();

    let ordered = check.that([2, 1]).contains_exactly([1, 2]);
    assert!(collector.is_empty());

    ordered.in_order();
    let failures = collector.take();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].kind, FailureKind::OrderMismatch);
}

#[test]
fn test_duplicates_are_order_sensitive() {
    let (collector, check) = collecting();

    check.that([1, 2, 1]).contains_exactly([1, 1, 2]).in_order();

    assert_eq!(collector.take()[0].kind, FailureKind::OrderMismatch);
}

#[test]
fn test_contains_at_least_in_order() {
    assert_that(["a", "x", "b", "y", "c"])
        .contains_at_least(["a", "b", "c"])
        .in_order();
}

#[test]
fn test_contains_at_least_out_of_order() {
    let (collector, check) = collecting();

    check.that(["a", "x", "b"]).contains_at_least(["b", "a"]).in_order();

    let failures = collector.take();
    assert_eq!(failures.len(), 1);
    assert_eq!(
        failures[0].headline(),
        Some("required elements were all found, but order was wrong")
    );
    assert_eq!(
        failures[0].fact_value("expected order for required elements"),
        Some(r#"["b", "a"]"#)
    );
}

#[test]
fn test_empty_sequences() {
    assert_that(Vec::<i32>::new())
        .contains_exactly(Vec::<i32>::new())
        .in_order();
    assert_that([1, 2]).contains_at_least(Vec::<i32>::new()).in_order();
}

#[test]
fn test_borrowed_strings_against_str() {
    let actual = vec!["UTF-8".to_string(), "US-ASCII".to_string()];
    assert_that(&actual)
        .contains_exactly(["UTF-8", "US-ASCII"].iter())
        .in_order();
}

#[test]
fn test_map_entries_in_order() {
    let mut map = BTreeMap::new();
    map.insert("alpha", 1);
    map.insert("beta", 2);
    map.insert("gamma", 3);

    assert_that_map(map.clone())
        .contains_exactly([("alpha", 1), ("beta", 2), ("gamma", 3)])
        .in_order();
    assert_that_map(map)
        .contains_at_least([("alpha", 1), ("gamma", 3)])
        .in_order();
}

#[test]
#[should_panic(expected = "required entries were all found, but order was wrong")]
fn test_map_required_entries_out_of_order() {
    assert_that_map([("alpha", 1), ("beta", 2)])
        .contains_at_least([("beta", 2), ("alpha", 1)])
        .in_order();
}

#[test]
fn test_truncated_listing() {
    let (collector, check) = collecting();
    let check = check.with_format(FormatConfig {
        max_listed_elements: 3,
        show_copy_counts: true,
    });

    check.that(1..=10).contains_exactly((1..=10).rev()).in_order();

    let failures = collector.take();
    assert_eq!(failures[0].fact_value("expected"), Some("[10, 9, 8, ... (7 more)]"));
    assert_eq!(failures[0].fact_value("but was"), Some("[1, 2, 3, ... (7 more)]"));
}

#[test]
fn test_expect_collects_order_failures() {
    let expect = Expect::new();

    let orders: Vec<Box<dyn Ordered>> = vec![
        expect.that([1, 2]).contains_exactly([1, 2]),
        expect.that([2, 1]).contains_exactly([1, 2]),
        expect.that(["b", "a"]).contains_at_least(["a", "b"]),
    ];
    for ordered in &orders {
        ordered.in_order();
    }

    let err = expect.finish().unwrap_err();
    assert_eq!(err.failures.len(), 2);
    assert!(err
        .failures
        .iter()
        .all(|failure| failure.kind == FailureKind::OrderMismatch));
}
