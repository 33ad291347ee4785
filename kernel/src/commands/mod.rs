//! Subcommands of the `tandem` binary.
//!
//! Each command is a clap `Args` struct with an `execute` method. It takes
//! the loaded [`Settings`](crate::infrastructure::config::Settings) and a
//! writer for its primary output, and reports whether differences or
//! conflicts were found.

pub mod diff;
pub mod git;
pub mod merge;
pub mod report;

pub use diff::DiffCommand;
pub use git::{GitCommand, GitDiffArgs, GitMergeArgs, GitTool};
pub use merge::MergeCommand;
pub use report::ReportCommand;

use std::io::Write;
use std::path::Path;

use crate::error::{KernelError, Result};
use crate::persist::write_atomic;

/// What a command found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Inputs are identical, or the merge is conflict free.
    Clean,
    /// Differences or conflicts were reported.
    Changed,
}

impl Outcome {
    /// Process exit status: 0 for [`Outcome::Clean`], 1 for [`Outcome::Changed`].
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Clean => 0,
            Self::Changed => 1,
        }
    }

    pub(crate) const fn from_changed(changed: bool) -> Self {
        if changed { Self::Changed } else { Self::Clean }
    }
}

/// Writes `contents` to `out` when given, otherwise to `stdout`.
fn emit(out: Option<&Path>, contents: &[u8], stdout: &mut dyn Write) -> Result<()> {
    match out {
        Some(path) => write_atomic(path, contents).map_err(|e| KernelError::output(path, e)),
        None => stdout
            .write_all(contents)
            .and_then(|()| stdout.flush())
            .map_err(|e| KernelError::output("-", e)),
    }
}

/// Prints a confirmation line for a written file.
fn confirm(path: &Path, stdout: &mut dyn Write) -> Result<()> {
    writeln!(stdout, "Wrote {}", path.display()).map_err(|e| KernelError::output("-", e))
}
