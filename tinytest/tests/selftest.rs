//! The framework running its own checks: this target has no libtest harness,
//! its exit status is the number of failed tests.

use tinytest::{
    FixedBuf, Fixture, Registry, ReportConfig, Runner, TestCase, TestContext, def_test, unit_fn,
};

#[def_test(matchers)]
pub fn equality_across_types(t: &TestContext) {
    t.expect_eq(String::from("abc"), "abc");
    t.expect_ne(1.5_f32, 2.5_f32);
    t.expect_eq([1, 2, 3], [1, 2, 3]);
}

#[def_test(matchers)]
pub fn ordering(t: &TestContext) {
    t.expect_gt(10_i64, -10_i64);
    t.expect_ge('z', 'a');
    t.expect_lt(Some(1), Some(2));
    t.expect_le("apple", "apple");
}

#[def_test(matchers)]
pub fn results_are_returned(t: &TestContext) {
    let holds = t.expect_true(1 < 2);
    t.expect_true(holds);
}

#[def_test(isolation)]
pub fn nested_registry_is_independent(t: &TestContext) {
    let mut broken = unit_fn(|inner| {
        inner.expect_eq(1, 2);
    });
    let record = TestCase::new("inner", "broken", &mut broken);
    let mut registry = Registry::new();
    t.expect_true(registry.append(&record));

    let mut buf = FixedBuf::<2048>::new();
    let stats = Runner::new(&registry, ReportConfig::plain()).run(&mut buf);

    t.expect_eq(stats.failed(), 1);
    t.expect_false(record.passed());
    t.expect_true(buf.as_str().contains("  x  broken"));
    // The inner failure must not leak into this test's record.
    t.expect_true(t.current().is_some_and(|r| r.passed()));
}

#[derive(Default)]
pub struct Scratch {
    buffer: [u8; 4],
    torn_down: bool,
}

impl Fixture for Scratch {
    fn setup(&mut self) {
        self.buffer = [0xAA; 4];
    }

    fn teardown(&mut self) {
        self.torn_down = true;
    }
}

#[def_test(fixture = Scratch)]
pub fn fixture_is_prepared(scratch: &mut Scratch, t: &TestContext) {
    t.expect_eq(scratch.buffer, [0xAA; 4]);
    t.expect_false(scratch.torn_down);
}

tinytest::test_main!(
    equality_across_types,
    ordering,
    results_are_returned,
    nested_registry_is_independent,
    fixture_is_prepared,
);
