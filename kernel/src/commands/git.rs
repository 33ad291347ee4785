//! `tandem git`: run as a git difftool or mergetool.
//!
//! Git exports `LOCAL`, `REMOTE`, `BASE` and `MERGED` to the tool it
//! launches, so every path falls back to those variables:
//!
//! ```text
//! git config difftool.tandem.cmd  'tandem git diff "$LOCAL" "$REMOTE"'
//! git config mergetool.tandem.cmd 'tandem git merge'
//! git config mergetool.tandem.trustExitCode true
//! ```

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use tracing::info;

use super::merge::MergeRequest;
use super::{DiffCommand, Outcome};
use crate::error::Result;
use crate::infrastructure::config::Settings;
use crate::render::OutputFormat;

/// Git integration.
#[derive(Debug, Clone, Args)]
pub struct GitCommand {
    /// Tool role
    #[command(subcommand)]
    pub tool: GitTool,
}

/// Role git launched the tool in.
#[derive(Debug, Clone, Subcommand)]
pub enum GitTool {
    /// Difftool: show LOCAL against REMOTE
    Diff(GitDiffArgs),
    /// Mergetool: merge LOCAL and REMOTE into MERGED
    Merge(GitMergeArgs),
}

/// Difftool arguments.
#[derive(Debug, Clone, Args)]
pub struct GitDiffArgs {
    /// Pre-image
    #[arg(env = "LOCAL")]
    pub local: PathBuf,

    /// Post-image
    #[arg(env = "REMOTE")]
    pub remote: PathBuf,

    /// Output format (defaults to `report.default_format`)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Mergetool arguments.
#[derive(Debug, Clone, Args)]
pub struct GitMergeArgs {
    /// Our side of the merge
    #[arg(long, env = "LOCAL")]
    pub local: PathBuf,

    /// Their side of the merge
    #[arg(long, env = "REMOTE")]
    pub remote: PathBuf,

    /// Common ancestor; absent for add/add conflicts
    #[arg(long, env = "BASE")]
    pub base: Option<PathBuf>,

    /// File git expects the resolution in
    #[arg(long, env = "MERGED")]
    pub merged: PathBuf,

    /// Save even when conflicts remain
    #[arg(long)]
    pub allow_conflicts: bool,

    /// Join adjacent conflicts into one block
    #[arg(long)]
    pub coalesce: bool,
}

impl GitCommand {
    /// Runs the requested tool role.
    ///
    /// The difftool succeeds once the diff is shown, whatever it contains.
    /// The mergetool writes MERGED only when the merge can be saved, so a
    /// refused save leaves git's own conflict markers in place and exits 2.
    ///
    /// # Errors
    ///
    /// Returns an error if an input is rejected or the result cannot be
    /// written.
    pub fn execute(&self, settings: &Settings, stdout: &mut dyn Write) -> Result<Outcome> {
        match &self.tool {
            GitTool::Diff(args) => {
                info!(
                    local = %args.local.display(),
                    remote = %args.remote.display(),
                    "git difftool"
                );
                DiffCommand {
                    left: args.local.clone(),
                    right: args.remote.clone(),
                    format: args.format,
                    width: None,
                    out: None,
                }
                .execute(settings, stdout)?;
                Ok(Outcome::Clean)
            }
            GitTool::Merge(args) => {
                info!(merged = %args.merged.display(), base = ?args.base, "git mergetool");
                MergeRequest {
                    base: args.base.as_deref(),
                    left: &args.local,
                    right: &args.remote,
                    out: Some(args.merged.as_path()),
                    allow_conflicts: args.allow_conflicts,
                    coalesce: args.coalesce,
                }
                .run(settings, stdout)
            }
        }
    }
}
