//! File comparison on top of the engine.
//!
//! A [`Comparator`] loads inputs through the size and binary guards, runs the
//! configured diff algorithm or the merge, and reports the outcome as a
//! structured event.

use std::path::Path;

use tandem_engine::{
    DiffAlgorithm, EditScript, MergeOptions, MergeResult, MyersDiff, merge_with_options,
};
use tracing::{info, instrument};

use crate::infrastructure::events::{ComparisonEvent, log_event};
use crate::text::{InputError, InputLimits, LineBuffer, load};

/// Two loaded inputs and the edit script between them.
#[derive(Debug, Clone)]
pub struct FileDiff {
    /// Left input.
    pub left: LineBuffer,
    /// Right input.
    pub right: LineBuffer,
    /// Edit script from left to right.
    pub script: EditScript<String>,
}

/// Three loaded inputs and their merge.
#[derive(Debug, Clone)]
pub struct FileMerge {
    /// Common ancestor; empty when none was given.
    pub base: LineBuffer,
    /// Left derivative.
    pub left: LineBuffer,
    /// Right derivative.
    pub right: LineBuffer,
    /// Merge of left and right.
    pub result: MergeResult<String>,
}

/// Loads files and compares them with a diff algorithm.
#[derive(Debug, Clone, Default)]
pub struct Comparator<A: DiffAlgorithm = MyersDiff> {
    algorithm: A,
    limits: InputLimits,
}

impl Comparator {
    /// Creates a comparator using the Myers algorithm.
    #[must_use]
    pub const fn new(limits: InputLimits) -> Self {
        Self {
            algorithm: MyersDiff::new(),
            limits,
        }
    }
}

impl<A: DiffAlgorithm> Comparator<A> {
    /// Creates a comparator with a custom algorithm.
    #[must_use]
    pub const fn with_algorithm(algorithm: A, limits: InputLimits) -> Self {
        Self { algorithm, limits }
    }

    /// Input guards in effect.
    #[must_use]
    pub const fn limits(&self) -> &InputLimits {
        &self.limits
    }

    /// Loads one input, reporting rejections as events.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable or rejected by a guard.
    pub fn load(&self, path: &Path) -> Result<LineBuffer, InputError> {
        load(path, &self.limits).inspect_err(|e| {
            log_event(&ComparisonEvent::InputRejected {
                path: path.display().to_string(),
                reason: e.to_string(),
            });
        })
    }

    /// Diffs two files line by line.
    ///
    /// # Errors
    ///
    /// Returns an error if either input cannot be loaded.
    #[instrument(skip_all, fields(left = %left.display(), right = %right.display()))]
    pub fn diff_files(&self, left: &Path, right: &Path) -> Result<FileDiff, InputError> {
        let left_buffer = self.load(left)?;
        let right_buffer = self.load(right)?;

        let script = self.algorithm.diff(&left_buffer.lines, &right_buffer.lines);
        let stats = script.stats();

        info!(distance = stats.distance(), "Diff completed");
        log_event(&ComparisonEvent::DiffCompleted {
            left: left.display().to_string(),
            right: right.display().to_string(),
            equal: stats.equal,
            deleted: stats.deleted,
            inserted: stats.inserted,
        });

        Ok(FileDiff {
            left: left_buffer,
            right: right_buffer,
            script,
        })
    }

    /// Merges two derivatives of `base`. Without a base the ancestor is
    /// taken to be empty.
    ///
    /// # Errors
    ///
    /// Returns an error if any input cannot be loaded.
    #[instrument(
        skip_all,
        fields(base = ?base, left = %left.display(), right = %right.display())
    )]
    pub fn merge_files(
        &self,
        base: Option<&Path>,
        left: &Path,
        right: &Path,
        options: &MergeOptions,
    ) -> Result<FileMerge, InputError> {
        let base_buffer = base
            .map(|path| self.load(path))
            .transpose()?
            .unwrap_or_default();
        let left_buffer = self.load(left)?;
        let right_buffer = self.load(right)?;

        let result = merge_with_options(
            &base_buffer.lines,
            &left_buffer.lines,
            &right_buffer.lines,
            options,
        );

        info!(conflicts = result.conflict_count(), "Merge completed");
        log_event(&ComparisonEvent::MergeCompleted {
            left: left.display().to_string(),
            right: right.display().to_string(),
            chunks: result.chunks().len(),
            conflicts: result.conflict_count(),
        });

        Ok(FileMerge {
            base: base_buffer,
            left: left_buffer,
            right: right_buffer,
            result,
        })
    }
}
