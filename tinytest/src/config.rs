//! Report configuration and layout constants.

/// Width of the test-name column in result lines.
pub const NAME_WIDTH: usize = 50;

/// Start banner printed before the first test.
pub const BANNER: &str = "<---    Executing tests    --->";

/// Horizontal rule framing the summary block.
pub const SUMMARY_RULE: &str = " ----------------------------";

/// Width of the counters in the summary block.
pub const COUNTER_WIDTH: usize = 10;

/// How the runner renders its report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Emit ANSI color escape sequences.
    pub colors: bool,
    /// Test names are right-padded to this many characters.
    pub name_width: usize,
}

impl ReportConfig {
    pub const fn new() -> Self {
        Self {
            colors: true,
            name_width: NAME_WIDTH,
        }
    }

    /// Same as [`ReportConfig::new`] with colors disabled.
    pub const fn plain() -> Self {
        Self {
            colors: false,
            name_width: NAME_WIDTH,
        }
    }

    /// Configuration baked in at build time: colors are dropped when `NO_COLOR`
    /// was set while compiling.
    pub const fn from_build_env() -> Self {
        match option_env!("NO_COLOR") {
            Some(_) => Self::plain(),
            None => Self::new(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new()
    }
}
