//! Host configuration, read from an optional `tinytest.toml` at the project
//! root:
//!
//! ```toml
//! [report]
//! colors = false
//! name_width = 40
//! ```

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use tinytest::ReportConfig;

use crate::error::HostResult;

const CONFIG_FILE: &str = "tinytest.toml";

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ReportSection {
    colors: bool,
    name_width: usize,
}

impl Default for ReportSection {
    fn default() -> Self {
        let base = ReportConfig::from_build_env();
        Self {
            colors: base.colors,
            name_width: base.name_width,
        }
    }
}

/// Project root directory
pub fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn load_report_config() -> HostResult<ReportConfig> {
    let config_path = project_root().join(CONFIG_FILE);

    if !config_path.exists() {
        debug!("{} not found, using default report settings", config_path.display());
        return Ok(ReportConfig::from_build_env());
    }

    let content = fs::read_to_string(&config_path)?;
    parse_report_config(&content)
}

/// Reads the `[report]` table. A missing table means defaults; a table with
/// values of the wrong type is an error, like a malformed document.
pub fn parse_report_config(content: &str) -> HostResult<ReportConfig> {
    let config: toml::Value = toml::from_str(content)?;

    let report: ReportSection = match config.get("report") {
        Some(table) => table.clone().try_into()?,
        None => ReportSection::default(),
    };

    Ok(ReportConfig {
        colors: report.colors,
        name_width: report.name_width,
    })
}
