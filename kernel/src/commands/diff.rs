//! `tandem diff`: compare two files.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use super::{Outcome, confirm, emit};
use crate::compare::Comparator;
use crate::error::Result;
use crate::infrastructure::config::Settings;
use crate::render::{OutputFormat, RenderOptions, render};
use crate::text::InputLimits;

/// Compare two files line by line.
#[derive(Debug, Clone, Args)]
pub struct DiffCommand {
    /// Original file
    pub left: PathBuf,

    /// Changed file
    pub right: PathBuf,

    /// Output format (defaults to `report.default_format`)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Column width for side-by-side output
    #[arg(long)]
    pub width: Option<usize>,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl DiffCommand {
    /// Runs the comparison and writes the rendered script.
    ///
    /// # Errors
    ///
    /// Returns an error if an input is rejected or the output cannot be
    /// written.
    pub fn execute(&self, settings: &Settings, stdout: &mut dyn Write) -> Result<Outcome> {
        let format = self.format.unwrap_or(settings.report.default_format);
        let options = RenderOptions {
            title: settings.report.title.clone(),
            width: self.width.unwrap_or(settings.report.column_width),
        };
        debug!(?format, width = options.width, "rendering diff");

        let comparator = Comparator::new(InputLimits::from(&settings.limits));
        let diff = comparator.diff_files(&self.left, &self.right)?;
        let text = render(format, &diff.script, &options)?;

        emit(self.out.as_deref(), text.as_bytes(), stdout)?;
        if let Some(path) = &self.out {
            confirm(path, stdout)?;
        }

        Ok(Outcome::from_changed(!diff.script.is_identical()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn command(dir: &Path, left: &str, right: &str) -> DiffCommand {
        let (l, r) = (dir.join("left.txt"), dir.join("right.txt"));
        fs::write(&l, left).unwrap();
        fs::write(&r, right).unwrap();
        DiffCommand {
            left: l,
            right: r,
            format: None,
            width: None,
            out: None,
        }
    }

    #[test]
    fn test_identical_is_clean() {
        let dir = tempfile::tempdir().unwrap();
        let mut stdout = Vec::new();

        let outcome = command(dir.path(), "a\nb\n", "a\nb\n")
            .execute(&Settings::default(), &mut stdout)
            .unwrap();

        assert_eq!(outcome, Outcome::Clean);
        assert_eq!(String::from_utf8(stdout).unwrap(), "  a\n  b\n");
    }

    #[test]
    fn test_changes_use_configured_format() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.report.default_format = OutputFormat::Json;
        let mut stdout = Vec::new();

        let outcome = command(dir.path(), "a\nb\nc\n", "a\nx\nc\n")
            .execute(&settings, &mut stdout)
            .unwrap();

        assert_eq!(outcome, Outcome::Changed);
        let json: serde_json::Value = serde_json::from_slice(&stdout).unwrap();
        assert_eq!(json["stats"]["deleted"], 1);
    }

    #[test]
    fn test_out_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("diff.txt");
        let mut cmd = command(dir.path(), "a\n", "b\n");
        cmd.format = Some(OutputFormat::SideBySide);
        cmd.width = Some(3);
        cmd.out = Some(out.clone());
        let mut stdout = Vec::new();

        cmd.execute(&Settings::default(), &mut stdout).unwrap();

        let text = fs::read_to_string(&out).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains('<'));
        assert!(String::from_utf8(stdout).unwrap().starts_with("Wrote "));
    }
}
