//! End-to-end listener behavior for the documented example runs.

use suite_randomizer::{
    flatten, Overrides, RandomizerConfig, RandomizerError, RunOrder, Seed, Shuffler,
    SuiteListener, TestNode, TestSuite, TestSuiteListener,
};

/// A(leaf1, B(leaf2, leaf3), leaf4)
fn suite_a() -> TestNode<&'static str> {
    TestNode::suite(TestSuite::new("A").with_tests([
        TestNode::test("leaf1"),
        TestNode::suite(
            TestSuite::new("B").with_tests([TestNode::test("leaf2"), TestNode::test("leaf3")]),
        ),
        TestNode::test("leaf4"),
    ]))
}

fn run_order(root: &TestNode<&'static str>) -> Vec<&'static str> {
    flatten(root.as_suite().unwrap()).into_iter().copied().collect()
}

#[test]
fn random_with_seed_42() {
    let listener = TestSuiteListener::with_overrides(
        RunOrder::Random,
        &Overrides::new().with_order("random").with_seed("42"),
    );
    let flat = ["leaf1", "leaf2", "leaf3", "leaf4"];

    let mut first = suite_a();
    listener.start_test_suite(&mut first).unwrap();
    let mut second = suite_a();
    listener.start_test_suite(&mut second).unwrap();

    let order = run_order(&first);
    assert_eq!(order, run_order(&second));
    assert!(first.as_suite().unwrap().is_flat());

    assert_eq!(order, ["leaf3", "leaf4", "leaf1", "leaf2"]);
    let via_permutation: Vec<&str> = Shuffler::new(42)
        .permutation(flat.len())
        .into_iter()
        .map(|i| flat[i])
        .collect();
    assert_eq!(order, via_permutation);

    let mut out = Vec::new();
    assert!(listener.end_test_suite_to(&mut out).unwrap());
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("42"), "report must contain the seed: {text:?}");
}

#[test]
fn normal_order_leaves_suite_alone() {
    let listener =
        TestSuiteListener::with_overrides(RunOrder::Random, &Overrides::new().with_order("normal"));
    let mut root = suite_a();
    listener.start_test_suite(&mut root).unwrap();
    assert_eq!(root, suite_a());
    assert_eq!(root.as_suite().unwrap().tests().len(), 3);

    let mut out = Vec::new();
    assert!(!listener.end_test_suite_to(&mut out).unwrap());
    assert!(out.is_empty());
}

#[test]
fn bogus_order_override_falls_back_to_default() {
    let cfg = RandomizerConfig::resolve(RunOrder::Normal, &Overrides::new().with_order("bogus"));
    assert_eq!(cfg.order(), RunOrder::Normal);
    assert!(cfg.seed().is_none());
}

#[test]
fn seed_override_beats_normal_order_override() {
    let cfg = RandomizerConfig::resolve(
        RunOrder::Normal,
        &Overrides::new().with_seed("7").with_order("normal"),
    );
    assert_eq!(cfg.order(), RunOrder::Random);
    assert_eq!(cfg.seed().and_then(|s| s.value().ok()), Some(7));
}

#[test]
fn empty_suite_is_fine() {
    let listener = TestSuiteListener::from_config(RandomizerConfig::seeded(42u64));
    let mut root: TestNode<&str> = TestNode::suite(TestSuite::new("empty"));
    listener.start_test_suite(&mut root).unwrap();
    assert!(root.as_suite().unwrap().is_empty());

    // Nested but leafless suites collapse to nothing.
    let mut root: TestNode<&str> = TestNode::suite(
        TestSuite::new("outer").with_tests([TestNode::suite(TestSuite::new("inner"))]),
    );
    listener.start_test_suite(&mut root).unwrap();
    assert!(root.as_suite().unwrap().is_empty());
}

#[test]
fn invalid_seed_is_fatal_and_leaves_order() {
    let listener =
        TestSuiteListener::with_overrides(RunOrder::Random, &Overrides::new().with_seed("abc"));
    let mut root = suite_a();
    match listener.start_test_suite(&mut root) {
        Err(RandomizerError::InvalidSeed { raw, .. }) => assert_eq!(raw, "abc"),
        other => panic!("expected InvalidSeed, got {other:?}"),
    }
    assert_eq!(root, suite_a());
}

#[test]
fn reporting_is_idempotent() {
    let listener = TestSuiteListener::from_config(RandomizerConfig::seeded(Seed::from_raw("99")));
    let before = listener.config().clone();
    let mut root = suite_a();
    listener.start_test_suite(&mut root).unwrap();
    let ordered = root.clone();

    let mut first = Vec::new();
    let mut second = Vec::new();
    listener.end_test_suite_to(&mut first).unwrap();
    listener.end_test_suite_to(&mut second).unwrap();
    listener.end_test_suite(&root).unwrap();

    assert_eq!(first, second);
    assert_eq!(root, ordered);
    assert_eq!(listener.config(), &before);
}
