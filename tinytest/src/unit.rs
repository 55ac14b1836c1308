//! Test units: the behaviour behind each declared test.

use crate::matcher::TestContext;

/// What a test does.
///
/// The runner calls [`setup`](TestUnit::setup), [`execute`](TestUnit::execute)
/// and [`teardown`](TestUnit::teardown) in that order; `teardown` runs even
/// when `execute` recorded failures. Pass/fail is never returned: matchers on
/// the [`TestContext`] mark the running record instead.
pub trait TestUnit {
    fn setup(&mut self) {}

    fn teardown(&mut self) {}

    fn execute(&mut self, t: &TestContext<'_, '_>);
}

impl<F> TestUnit for F
where
    F: FnMut(&TestContext<'_, '_>),
{
    fn execute(&mut self, t: &TestContext<'_, '_>) {
        self(t)
    }
}

/// Pins a closure to the [`TestUnit`] signature so it can be registered
/// directly.
pub fn unit_fn<F>(f: F) -> F
where
    F: FnMut(&TestContext<'_, '_>),
{
    f
}

/// Reusable setup/teardown shared by several tests.
///
/// A fixture test owns a fresh fixture value and forwards its own `setup` and
/// `teardown` to it; see `#[def_test(fixture = ...)]`.
pub trait Fixture: Default {
    fn setup(&mut self) {}

    fn teardown(&mut self) {}
}

/// A test unit produced by `#[def_test]`, carrying its registration names.
pub trait DeclaredTest: TestUnit + Sized {
    const SUITE: &'static str;
    const NAME: &'static str;

    fn instantiate() -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportConfig;
    use crate::console::Console;
    use crate::record::TestCase;
    use crate::registry::Registry;

    #[derive(Default)]
    struct Tally {
        setups: u32,
        teardowns: u32,
    }

    impl Fixture for Tally {
        fn setup(&mut self) {
            self.setups += 1;
        }

        fn teardown(&mut self) {
            self.teardowns += 1;
        }
    }

    #[tinytest::def_test(units)]
    fn plain(t: &TestContext) {
        t.expect_true(true);
    }

    #[tinytest::def_test(fixture = Tally)]
    fn with_tally(tally: &mut Tally, t: &TestContext) {
        t.expect_eq(tally.setups, 1);
        t.expect_eq(tally.teardowns, 0);
    }

    #[test]
    fn declared_plain_test_carries_names() {
        assert_eq!(plain::SUITE, "units");
        assert_eq!(plain::NAME, "plain");
    }

    #[test]
    fn fixture_suite_defaults_to_fixture_name() {
        assert_eq!(with_tally::SUITE, "Tally");
        assert_eq!(with_tally::NAME, "with_tally");
    }

    #[test]
    fn fixture_unit_forwards_setup_and_teardown() {
        let mut out = String::new();
        let mut unit = with_tally::instantiate();
        {
            let record = TestCase::new(with_tally::SUITE, with_tally::NAME, &mut unit);
            let mut registry = Registry::new();
            registry.append(&record);
            registry.set_current(Some(&record));

            let console = Console::new(&mut out, ReportConfig::plain());
            let t = TestContext::new(&registry, &console);
            assert!(record.execute(&t));
        }
        assert_eq!(unit.fixture.setups, 1);
        assert_eq!(unit.fixture.teardowns, 1);
        assert!(out.is_empty());
    }

    #[test]
    fn closures_are_units() {
        let mut calls = 0;
        let mut unit = unit_fn(|_t| calls += 1);
        let record = TestCase::new("closures", "counting", &mut unit);
        let registry = Registry::new();
        let mut out = String::new();
        let console = Console::new(&mut out, ReportConfig::plain());
        let t = TestContext::new(&registry, &console);

        assert!(record.execute(&t));
        assert!(record.execute(&t));
        drop(t);
        drop(record);
        drop(unit);
        assert_eq!(calls, 2);
    }
}
