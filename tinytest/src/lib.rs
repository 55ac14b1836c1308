//! Allocation-free test framework for constrained targets.
//!
//! Tests are declared with [`def_test`], collected in an explicit, ordered
//! [`Registry`] and executed by the [`Runner`]. Assertions are *soft*: a failing
//! matcher marks the running [`TestCase`] failed and the test body keeps going.
//!
//! ```ignore
//! use tinytest::{def_test, TestContext};
//!
//! #[def_test(math)]
//! fn addition(t: &TestContext) {
//!     t.expect_eq(2 + 2, 4);
//! }
//!
//! tinytest::test_main!(addition);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[macro_use]
extern crate log;

// Lets the proc-macro output (`::tinytest::...`) resolve inside this crate.
extern crate self as tinytest;

pub mod config;
pub mod console;
pub mod error;
#[cfg(feature = "std")]
pub mod logger;
pub mod matcher;
pub mod record;
pub mod registry;
pub mod runner;
pub mod unit;

pub use tinytest_macros::{declare_registry, def_test, test_main};

pub use config::ReportConfig;
pub use console::{Color, Console, FixedBuf};
pub use error::{TinyError, TinyResult};
pub use matcher::TestContext;
pub use record::TestCase;
pub use registry::{Records, Registry};
pub use runner::{RunStats, Runner, test_run};
pub use unit::{DeclaredTest, Fixture, TestUnit, unit_fn};

#[cfg(feature = "std")]
pub use console::StdoutWriter;
#[cfg(feature = "std")]
pub use runner::run_tests;
