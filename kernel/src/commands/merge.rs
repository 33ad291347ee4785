//! `tandem merge`: merge two derivatives of a common base.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use tandem_engine::MergeOptions;
use tracing::warn;

use super::{Outcome, confirm, emit};
use crate::compare::Comparator;
use crate::error::Result;
use crate::infrastructure::config::Settings;
use crate::persist::{ConflictPolicy, SaveOptions, encode_merged, render_merged, save_merged};
use crate::text::InputLimits;

/// Merge LEFT and RIGHT, both derived from BASE.
#[derive(Debug, Clone, Args)]
pub struct MergeCommand {
    /// Common ancestor
    pub base: PathBuf,

    /// First derivative
    pub left: PathBuf,

    /// Second derivative
    pub right: PathBuf,

    /// Save the merged text to a file instead of printing it
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Save even when conflicts remain
    #[arg(long)]
    pub allow_conflicts: bool,

    /// Join adjacent conflicts into one block
    #[arg(long)]
    pub coalesce: bool,
}

impl MergeCommand {
    /// Merges the inputs and prints or saves the result.
    ///
    /// Output uses the encoding, line ending and final-newline style of
    /// LEFT. Printed output always includes conflict markers; the conflict
    /// policy only applies to `--out`.
    ///
    /// # Errors
    ///
    /// Returns an error if an input is rejected, or if saving is refused or
    /// fails.
    pub fn execute(&self, settings: &Settings, stdout: &mut dyn Write) -> Result<Outcome> {
        MergeRequest {
            base: Some(self.base.as_path()),
            left: &self.left,
            right: &self.right,
            out: self.out.as_deref(),
            allow_conflicts: self.allow_conflicts,
            coalesce: self.coalesce,
        }
        .run(settings, stdout)
    }
}

/// One merge run, shared by `merge` and the git mergetool mode.
pub(crate) struct MergeRequest<'a> {
    pub(crate) base: Option<&'a Path>,
    pub(crate) left: &'a Path,
    pub(crate) right: &'a Path,
    pub(crate) out: Option<&'a Path>,
    pub(crate) allow_conflicts: bool,
    pub(crate) coalesce: bool,
}

impl MergeRequest<'_> {
    pub(crate) fn run(&self, settings: &Settings, stdout: &mut dyn Write) -> Result<Outcome> {
        let options = MergeOptions {
            coalesce_conflicts: self.coalesce || settings.merge.coalesce_conflicts,
        };
        let comparator = Comparator::new(InputLimits::from(&settings.limits));
        let merged = comparator.merge_files(self.base, self.left, self.right, &options)?;

        let markers = settings.merge.markers();
        let conflicts = merged.result.conflict_count();
        if conflicts > 0 {
            warn!(conflicts, "Merge has unresolved conflicts");
        }

        match self.out {
            Some(path) => {
                let policy = if self.allow_conflicts {
                    ConflictPolicy::Allow
                } else {
                    settings.merge.policy()
                };
                let save = SaveOptions {
                    markers,
                    policy,
                    line_ending: merged.left.line_ending,
                    trailing_newline: merged.left.trailing_newline,
                    encoding: merged.left.encoding,
                };
                save_merged(path, &merged.result, &save)?;
                confirm(path, stdout)?;
            }
            None => {
                let text = render_merged(
                    &merged.result,
                    &markers,
                    merged.left.line_ending,
                    merged.left.trailing_newline,
                );
                let bytes = encode_merged(Path::new("-"), &text, merged.left.encoding)?;
                emit(None, &bytes, stdout)?;
            }
        }

        Ok(Outcome::from_changed(conflicts > 0))
    }
}
