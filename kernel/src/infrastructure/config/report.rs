//! Report presentation configuration.

use serde::Deserialize;

use crate::render::OutputFormat;

/// Settings for rendered diff output.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    /// Heading of HTML reports (default: "Tandem Diff")
    #[serde(default = "default_title")]
    pub title: String,

    /// Format used by `tandem diff` when none is given (default: table)
    #[serde(default)]
    pub default_format: OutputFormat,

    /// Column width of side-by-side output (default: 60)
    #[serde(default = "default_column_width")]
    pub column_width: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            default_format: OutputFormat::default(),
            column_width: default_column_width(),
        }
    }
}

fn default_title() -> String {
    "Tandem Diff".to_string()
}

const fn default_column_width() -> usize {
    60
}
