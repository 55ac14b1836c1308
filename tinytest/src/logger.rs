//! Logger implementation for the log crate.
//!
//! Writes colored records to stderr so they stay apart from the report on
//! stdout.

use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::console::Color;
use crate::error::{TinyError, TinyResult};

pub struct SimpleLogger;

impl SimpleLogger {
    fn args_color(level: Level) -> Color {
        match level {
            Level::Error => Color::Red,
            Level::Warn => Color::Yellow,
            Level::Info => Color::Green,
            Level::Debug => Color::Cyan,
            Level::Trace => Color::BrightBlack,
        }
    }
}

impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let file = record.file().unwrap_or("none");
        let line = record.line().unwrap_or(0);
        let args = record.args();
        let args_color = Self::args_color(record.level());
        let color_reset = Color::Reset;

        // [file:line] message
        let _ = writeln!(
            std::io::stderr().lock(),
            "[{file}:{line}] {args_color}{args}{color_reset}"
        );
    }

    fn flush(&self) {}
}

/// Maps the value of the `LOG` variable to a level filter; unknown or missing
/// values turn logging off.
pub fn level_filter(value: Option<&str>) -> LevelFilter {
    match value {
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Off,
    }
}

/// Installs [`SimpleLogger`] with the level chosen by `LOG` at build time.
pub fn init() -> TinyResult<()> {
    log::set_logger(&SimpleLogger).map_err(|_| TinyError::LoggerInit)?;
    log::set_max_level(level_filter(option_env!("LOG")));
    Ok(())
}
