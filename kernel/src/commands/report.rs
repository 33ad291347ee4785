//! `tandem report`: write an HTML diff report.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use super::{Outcome, confirm, emit};
use crate::compare::Comparator;
use crate::error::Result;
use crate::infrastructure::config::Settings;
use crate::render::format_html;
use crate::text::InputLimits;

/// Write a standalone HTML report comparing two files.
#[derive(Debug, Clone, Args)]
pub struct ReportCommand {
    /// Original file
    #[arg(long)]
    pub left: PathBuf,

    /// Changed file
    #[arg(long)]
    pub right: PathBuf,

    /// Destination of the HTML page
    #[arg(long)]
    pub out: PathBuf,

    /// Page heading (defaults to `report.title`)
    #[arg(long)]
    pub title: Option<String>,
}

impl ReportCommand {
    /// Writes the report and prints its path.
    ///
    /// # Errors
    ///
    /// Returns an error if an input is rejected or the report cannot be
    /// written.
    pub fn execute(&self, settings: &Settings, stdout: &mut dyn Write) -> Result<Outcome> {
        let comparator = Comparator::new(InputLimits::from(&settings.limits));
        let diff = comparator.diff_files(&self.left, &self.right)?;

        let title = self.title.as_deref().unwrap_or(&settings.report.title);
        emit(Some(&self.out), format_html(&diff.script, title).as_bytes(), stdout)?;
        confirm(&self.out, stdout)?;

        Ok(Outcome::from_changed(!diff.script.is_identical()))
    }
}
