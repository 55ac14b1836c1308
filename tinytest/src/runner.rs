//! Sequential test runner.
//!
//! [`Runner::run`] walks a [`Registry`] in registration order, drives every
//! record through setup/execute/teardown and prints the report to a
//! [`fmt::Write`] sink. The failed-test count doubles as the process exit
//! status.

use core::fmt::Write;

use crate::config::{BANNER, COUNTER_WIDTH, ReportConfig, SUMMARY_RULE};
use crate::console::{CHECK_MARK, CROSS_MARK, Color, Console};
use crate::matcher::TestContext;
use crate::record::TestCase;
use crate::registry::Registry;

/// Highest status a process can report; Unix keeps only the low 8 bits.
const MAX_EXIT_CODE: usize = 255;

/// Counters of one run. Only [`add_result`](RunStats::add_result) moves
/// them, so `passed <= executed` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStats {
    executed: usize,
    passed: usize,
}

impl RunStats {
    pub const fn new() -> Self {
        Self {
            executed: 0,
            passed: 0,
        }
    }

    pub fn add_result(&mut self, passed: bool) {
        self.executed += 1;
        if passed {
            self.passed += 1;
        }
    }

    pub const fn executed(&self) -> usize {
        self.executed
    }

    pub const fn passed(&self) -> usize {
        self.passed
    }

    pub const fn failed(&self) -> usize {
        self.executed - self.passed
    }

    pub const fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Failed-test count as a process exit status: 0 when everything passed,
    /// saturating at 255 so a large count never wraps to success.
    pub fn exit_code(&self) -> i32 {
        self.failed().min(MAX_EXIT_CODE) as i32
    }
}

pub struct Runner<'r, 'a> {
    registry: &'r Registry<'a>,
    config: ReportConfig,
}

impl<'r, 'a> Runner<'r, 'a> {
    pub fn new(registry: &'r Registry<'a>, config: ReportConfig) -> Self {
        Self { registry, config }
    }

    /// Executes every registered test once and prints the report to `out`.
    ///
    /// Nothing is reset before the walk: a record that failed in an earlier
    /// run of the same registry stays failed.
    pub fn run(&self, out: &mut dyn Write) -> RunStats {
        let console = Console::new(out, self.config);
        let t = TestContext::new(self.registry, &console);
        let mut stats = RunStats::new();

        if self.registry.is_empty() {
            warn!("no tests registered");
        }

        let blue = console.color(Color::Blue);
        let reset = console.reset();
        console.println(format_args!("{blue}{BANNER}{reset}"));

        let mut suite = "";
        for record in self.registry {
            if suite != record.suite() {
                suite = record.suite();
                console.println(format_args!("{blue} -> Suite: {suite}{reset}"));
            }

            let passed = self.run_test(record, &t);
            Self::print_result(&console, record, passed);
            stats.add_result(passed);
        }
        self.registry.set_current(None);

        Self::print_final_stats(&console, &stats);
        info!(
            "executed {} tests: {} passed, {} failed",
            stats.executed,
            stats.passed,
            stats.failed()
        );

        stats
    }

    fn run_test(&self, record: &'a TestCase<'a>, t: &TestContext<'_, 'a>) -> bool {
        debug!("running {}::{}", record.suite(), record.name());
        self.registry.set_current(Some(record));
        record.execute(t)
    }

    fn print_result(console: &Console<'_>, record: &TestCase<'_>, passed: bool) {
        let name = record.name();
        let width = console.config().name_width;
        let reset = console.reset();

        if passed {
            let green = console.color(Color::Green);
            console.println(format_args!("{green}  {CHECK_MARK}  {name:<width$} {reset}"));
        } else {
            let red = console.color(Color::Red);
            console.println(format_args!("{red}  {CROSS_MARK}  {name:<width$} {reset}"));
        }
    }

    fn print_final_stats(console: &Console<'_>, stats: &RunStats) {
        let blue = console.color(Color::Blue);
        let green = console.color(Color::Green);
        let reset = console.reset();
        let failed_color = if stats.all_passed() {
            green
        } else {
            console.color(Color::Red)
        };
        let width = COUNTER_WIDTH;
        let executed = stats.executed;
        let passed = stats.passed;
        let failed = stats.failed();

        console.println(format_args!("{blue}{SUMMARY_RULE}{reset}"));
        console.println(format_args!(
            "{blue}|{reset} Executed tests: {executed:>width$}{blue} |{reset}"
        ));
        console.println(format_args!(
            "{blue}|{green} Passed tests  : {passed:>width$}{blue} |{reset}"
        ));
        console.println(format_args!(
            "{blue}|{failed_color} Failed tests  : {failed:>width$}{blue} |{reset}"
        ));
        console.println(format_args!("{blue}{SUMMARY_RULE}{reset}"));
    }
}

/// Runs `registry` with the build-time report configuration.
pub fn test_run(registry: &Registry<'_>, out: &mut dyn Write) -> RunStats {
    Runner::new(registry, ReportConfig::from_build_env()).run(out)
}

/// Runs `registry`, reporting on stdout, and returns the number of failed
/// tests for use as the process exit status.
#[cfg(feature = "std")]
pub fn run_tests(registry: &Registry<'_>) -> i32 {
    let mut stdout = crate::console::StdoutWriter;
    test_run(registry, &mut stdout).exit_code()
}
