//! Host runner: executes the demo suites with the tinytest framework and
//! exits with the number of failed tests.

use std::process::exit;

mod config;
mod error;
mod tests;

use error::HostResult;

#[macro_use]
extern crate log;

fn main() {
    match try_main() {
        Ok(failed) => exit(failed),
        Err(e) => {
            error!("{}", e);
            exit(1);
        }
    }
}

fn try_main() -> HostResult<i32> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .try_init()?;

    let report = config::load_report_config()?;

    tinytest::declare_registry!(
        registry;
        tests::ring::starts_empty,
        tests::ring::wraps_around,
        tests::ring::rejects_when_full,
        tests::checksum::empty_input,
        tests::checksum::known_vector,
        tests::checksum::detects_single_bit_flip,
        tests::parse::decimal_fields,
        tests::parse::rejects_garbage,
    );
    info!("running {} tests", registry.len());

    let mut stdout = tinytest::StdoutWriter;
    let stats = tinytest::Runner::new(&registry, report).run(&mut stdout);
    Ok(stats.exit_code())
}
