//! Soft-assertion matchers.
//!
//! Every test body receives a [`TestContext`]. Its `expect_*` methods evaluate
//! a condition and, when it does not hold, print the call site and a
//! description of the operands, then mark the registry's current record
//! failed. They never unwind: a body keeps running after a failed matcher, so
//! one test can report several independent failures.

use core::fmt::Debug;
use core::panic::Location;

use crate::console::{Color, Console};
use crate::record::TestCase;
use crate::registry::Registry;

/// Execution context handed to [`TestUnit::execute`](crate::TestUnit::execute).
pub struct TestContext<'r, 'a> {
    registry: &'r Registry<'a>,
    console: &'r Console<'r>,
}

impl<'r, 'a> TestContext<'r, 'a> {
    pub fn new(registry: &'r Registry<'a>, console: &'r Console<'r>) -> Self {
        Self { registry, console }
    }

    pub fn registry(&self) -> &'r Registry<'a> {
        self.registry
    }

    pub fn console(&self) -> &'r Console<'r> {
        self.console
    }

    /// The record currently executing, if any.
    pub fn current(&self) -> Option<&'a TestCase<'a>> {
        self.registry.current()
    }

    /// The generic matcher all others build on.
    ///
    /// On failure prints `location` and marks the current record failed.
    pub fn check(&self, passed: bool, location: &Location<'_>) -> bool {
        trace!("check at {}:{} -> {}", location.file(), location.line(), passed);

        if !passed {
            self.console.println(format_args!(
                "        Called from: {}:{}",
                location.file(),
                location.line()
            ));
            match self.registry.current() {
                Some(record) => record.fail(),
                None => warn!(
                    "matcher failed at {}:{} outside of a running test",
                    location.file(),
                    location.line()
                ),
            }
        }
        passed
    }

    #[track_caller]
    pub fn expect_true(&self, x: bool) -> bool {
        self.unary("expect_true", x, x, Location::caller())
    }

    #[track_caller]
    pub fn expect_false(&self, x: bool) -> bool {
        self.unary("expect_false", !x, x, Location::caller())
    }

    #[track_caller]
    pub fn expect_eq<A, B>(&self, a: A, b: B) -> bool
    where
        A: PartialEq<B> + Debug,
        B: Debug,
    {
        let passed = a == b;
        self.binary("expect_eq", passed, &a, &b, Location::caller())
    }

    #[track_caller]
    pub fn expect_ne<A, B>(&self, a: A, b: B) -> bool
    where
        A: PartialEq<B> + Debug,
        B: Debug,
    {
        let passed = a != b;
        self.binary("expect_ne", passed, &a, &b, Location::caller())
    }

    #[track_caller]
    pub fn expect_gt<A, B>(&self, a: A, b: B) -> bool
    where
        A: PartialOrd<B> + Debug,
        B: Debug,
    {
        let passed = a > b;
        self.binary("expect_gt", passed, &a, &b, Location::caller())
    }

    #[track_caller]
    pub fn expect_lt<A, B>(&self, a: A, b: B) -> bool
    where
        A: PartialOrd<B> + Debug,
        B: Debug,
    {
        let passed = a < b;
        self.binary("expect_lt", passed, &a, &b, Location::caller())
    }

    #[track_caller]
    pub fn expect_ge<A, B>(&self, a: A, b: B) -> bool
    where
        A: PartialOrd<B> + Debug,
        B: Debug,
    {
        let passed = a >= b;
        self.binary("expect_ge", passed, &a, &b, Location::caller())
    }

    #[track_caller]
    pub fn expect_le<A, B>(&self, a: A, b: B) -> bool
    where
        A: PartialOrd<B> + Debug,
        B: Debug,
    {
        let passed = a <= b;
        self.binary("expect_le", passed, &a, &b, Location::caller())
    }

    fn unary(&self, matcher: &str, passed: bool, x: bool, location: &Location<'_>) -> bool {
        if !self.check(passed, location) {
            self.console.println(format_args!(
                "    {}Assertion failed:{} {}(x), where x = {}",
                self.console.color(Color::Red),
                self.console.reset(),
                matcher,
                x
            ));
        }
        passed
    }

    fn binary(
        &self,
        matcher: &str,
        passed: bool,
        a: &dyn Debug,
        b: &dyn Debug,
        location: &Location<'_>,
    ) -> bool {
        if !self.check(passed, location) {
            self.console.println(format_args!(
                "    {}Assertion failed:{} {}(a, b), where a = {:?}, b = {:?}",
                self.console.color(Color::Red),
                self.console.reset(),
                matcher,
                a,
                b
            ));
        }
        passed
    }
}
