//! Console output: ANSI colors, result symbols and the report sink.

use core::cell::RefCell;
use core::fmt::{self, Display, Write};

use crate::config::ReportConfig;

/// Marker printed in front of a passed test.
pub const CHECK_MARK: &str = "\u{2713}";

/// Marker printed in front of a failed test.
pub const CROSS_MARK: &str = "x";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
    BrightBlack,
    Reset,
}

impl Color {
    /// The escape sequence selecting this color (bold variant).
    pub const fn code(self) -> &'static str {
        match self {
            Color::Red => "\u{1B}[31;1m",
            Color::Green => "\u{1B}[32;1m",
            Color::Yellow => "\u{1B}[33;1m",
            Color::Blue => "\u{1B}[34;1m",
            Color::Cyan => "\u{1B}[36;1m",
            Color::BrightBlack => "\u{1B}[90;1m",
            Color::Reset => "\u{1B}[0m",
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Report sink shared by the runner and the matchers of the running test.
///
/// Output goes to any [`fmt::Write`]: a UART writer on a board, a
/// [`StdoutWriter`] on a host, a `String` or [`FixedBuf`] in tests. Write
/// errors are swallowed, printing never fails a run.
pub struct Console<'w> {
    out: RefCell<&'w mut dyn Write>,
    config: ReportConfig,
}

impl<'w> Console<'w> {
    pub fn new(out: &'w mut dyn Write, config: ReportConfig) -> Self {
        Self {
            out: RefCell::new(out),
            config,
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Escape sequence for `color`, or nothing when colors are disabled.
    pub fn color(&self, color: Color) -> &'static str {
        if self.config.colors { color.code() } else { "" }
    }

    pub fn reset(&self) -> &'static str {
        self.color(Color::Reset)
    }

    pub fn print(&self, args: fmt::Arguments<'_>) {
        let _ = self.out.borrow_mut().write_fmt(args);
    }

    pub fn println(&self, args: fmt::Arguments<'_>) {
        let mut out = self.out.borrow_mut();
        let _ = out.write_fmt(args);
        let _ = out.write_char('\n');
    }
}

/// Fixed-capacity text buffer for capturing output without an allocator.
///
/// The first write that does not fit is cut at a character boundary; from
/// then on the buffer is sealed and further input is dropped, so the content
/// is always a prefix of what was written.
pub struct FixedBuf<const N: usize> {
    buffer: [u8; N],
    len: usize,
    truncated: bool,
}

impl<const N: usize> FixedBuf<N> {
    pub const fn new() -> Self {
        Self {
            buffer: [0; N],
            len: 0,
            truncated: false,
        }
    }

    pub fn as_str(&self) -> &str {
        // Writes only ever stop on a char boundary.
        core::str::from_utf8(&self.buffer[..self.len]).unwrap_or_default()
    }

    /// Whether some input was dropped.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    pub fn clear(&mut self) {
        self.len = 0;
        self.truncated = false;
    }
}

impl<const N: usize> Write for FixedBuf<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }

        let mut end = s.len().min(N - self.len);
        if end < s.len() {
            self.truncated = true;
            while !s.is_char_boundary(end) {
                end -= 1;
            }
        }

        let (head, _) = s.split_at(end);
        self.buffer[self.len..self.len + end].copy_from_slice(head.as_bytes());
        self.len += end;
        Ok(())
    }
}

impl<const N: usize> Default for FixedBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// [`fmt::Write`] adapter over the process's standard output.
#[cfg(feature = "std")]
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutWriter;

#[cfg(feature = "std")]
impl Write for StdoutWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        use std::io::Write as _;

        std::io::stdout()
            .lock()
            .write_all(s.as_bytes())
            .map_err(|_| fmt::Error)
    }
}
