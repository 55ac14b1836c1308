//! Test-case records: one registry entry per declared test.

use core::cell::{Cell, RefCell};
use core::fmt;

use intrusive_collections::LinkedListLink;

use crate::matcher::TestContext;
use crate::unit::TestUnit;

/// A declared test: its names, its unit, and whether it has passed so far.
///
/// The record only borrows its unit. `passed` starts out `true` and can only
/// ever be cleared; nothing sets it back.
pub struct TestCase<'a> {
    suite: &'static str,
    name: &'static str,
    unit: RefCell<&'a mut dyn TestUnit>,
    passed: Cell<bool>,
    pub(crate) link: LinkedListLink,
}

impl<'a> TestCase<'a> {
    pub fn new(suite: &'static str, name: &'static str, unit: &'a mut dyn TestUnit) -> Self {
        Self {
            suite,
            name,
            unit: RefCell::new(unit),
            passed: Cell::new(true),
            link: LinkedListLink::new(),
        }
    }

    pub fn suite(&self) -> &'static str {
        self.suite
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn passed(&self) -> bool {
        self.passed.get()
    }

    /// Marks the test failed. Sticky.
    pub fn fail(&self) {
        if self.passed.replace(false) {
            debug!("{}::{} marked failed", self.suite, self.name);
        }
    }

    /// Whether the record is already part of a registry.
    pub fn is_linked(&self) -> bool {
        self.link.is_linked()
    }

    /// Runs setup, body and teardown, then reports the (sticky) outcome.
    pub(crate) fn execute(&self, t: &TestContext<'_, '_>) -> bool {
        let mut unit = self.unit.borrow_mut();

        trace!("{}::{} setup", self.suite, self.name);
        unit.setup();
        unit.execute(t);
        trace!("{}::{} teardown", self.suite, self.name);
        unit.teardown();

        self.passed()
    }
}

impl fmt::Debug for TestCase<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("suite", &self.suite)
            .field("name", &self.name)
            .field("passed", &self.passed.get())
            .finish_non_exhaustive()
    }
}
