//! Presentation of edit scripts.
//!
//! Every renderer takes an [`EditScript`] over lines and produces text:
//!
//! - [`OutputFormat::Table`]: one row per operation, prefixed by its tag
//! - [`OutputFormat::SideBySide`]: aligned columns for terminals
//! - [`OutputFormat::Html`]: a standalone report page
//! - [`OutputFormat::Json`]: counts plus the operations, for tooling

pub mod html;
pub mod side_by_side;
pub mod table;

pub use html::format_html;
pub use side_by_side::{Cell, SideBySideRow, format_side_by_side, side_by_side};
pub use table::format_table;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tandem_engine::{DiffStats, EditScript};
use thiserror::Error;

/// Errors that can occur while rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rendering format for `tandem diff`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Tagged rows.
    #[default]
    Table,
    /// Two aligned columns.
    SideBySide,
    /// Standalone HTML page.
    Html,
    /// Machine-readable JSON.
    Json,
}

/// Parameters shared by the renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Heading of HTML output.
    pub title: String,
    /// Column width of side-by-side output.
    pub width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Tandem Diff".to_string(),
            width: 60,
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    identical: bool,
    stats: DiffStats,
    ops: &'a EditScript<String>,
}

/// Serializes a script with its counts as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn format_json(script: &EditScript<String>) -> Result<String, RenderError> {
    let report = JsonReport {
        identical: script.is_identical(),
        stats: script.stats(),
        ops: script,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Renders `script` in `format`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(
    format: OutputFormat,
    script: &EditScript<String>,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    match format {
        OutputFormat::Table => Ok(format_table(script)),
        OutputFormat::SideBySide => Ok(format_side_by_side(&side_by_side(script), options.width)),
        OutputFormat::Html => Ok(format_html(script, &options.title)),
        OutputFormat::Json => format_json(script),
    }
}
