//! Merge persistence.
//!
//! Merged output is written through a staging file created next to the
//! destination and then renamed over it, so readers never observe a partially
//! written result. A [`ConflictPolicy`] decides whether a result that still
//! contains conflict blocks may be written at all.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tandem_engine::{ConflictMarkers, MergeChunk, MergeResult};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::infrastructure::events::{ComparisonEvent, log_event};
use crate::text::{LineEnding, TextEncoding, join_lines};

/// Errors that can occur while saving a merge result.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The result still has conflicts and the policy forbids saving them.
    #[error("Refusing to save merge with {count} unresolved conflict(s)")]
    UnresolvedConflicts {
        /// Number of conflict blocks.
        count: usize,
    },

    /// The merged text has characters the output encoding cannot represent.
    #[error("Cannot encode merge result for {path} as {encoding}")]
    Unencodable {
        /// Destination path.
        path: PathBuf,
        /// Name of the output encoding.
        encoding: &'static str,
    },

    /// Writing the destination failed.
    #[error("Failed to write {path}: {source}")]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Whether unresolved conflicts block a save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// Refuse to write a result with conflicts.
    #[default]
    Refuse,
    /// Write conflict blocks with markers.
    Allow,
}

impl ConflictPolicy {
    /// `Allow` when `allow` is true, `Refuse` otherwise.
    #[must_use]
    pub const fn from_allow(allow: bool) -> Self {
        if allow { Self::Allow } else { Self::Refuse }
    }
}

/// How a merge result is written.
#[derive(Debug, Clone, Default)]
pub struct SaveOptions {
    /// Marker lines for conflict blocks.
    pub markers: ConflictMarkers,
    /// Conflict handling.
    pub policy: ConflictPolicy,
    /// Line terminator of the output.
    pub line_ending: LineEnding,
    /// Whether the output ends with a terminator.
    pub trailing_newline: bool,
    /// Character encoding of the output.
    pub encoding: TextEncoding,
}

/// Summary of a completed save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveReport {
    /// Destination path.
    pub path: PathBuf,
    /// Lines written, including marker lines.
    pub lines: usize,
    /// Bytes written.
    pub bytes: usize,
    /// Name of the output encoding.
    pub encoding: &'static str,
    /// Conflict blocks written.
    pub conflicts: usize,
}

/// Renders a merge result as text, expanding conflicts with `markers`.
#[must_use]
pub fn render_merged(
    result: &MergeResult<String>,
    markers: &ConflictMarkers,
    line_ending: LineEnding,
    trailing_newline: bool,
) -> String {
    join_lines(&result.to_lines(markers), line_ending, trailing_newline)
}

/// Encodes rendered merge text for `path`.
///
/// # Errors
///
/// Returns [`PersistError::Unencodable`] when `text` does not fit `encoding`.
pub fn encode_merged(
    path: &Path,
    text: &str,
    encoding: TextEncoding,
) -> Result<Vec<u8>, PersistError> {
    encoding.encode(text).ok_or_else(|| PersistError::Unencodable {
        path: path.to_path_buf(),
        encoding: encoding.name(),
    })
}

/// Counts clean lines that read as conflict markers.
///
/// Such lines come from the inputs themselves, for example an unfinished
/// earlier merge, and cannot be told apart from real conflicts once written.
#[must_use]
pub fn marker_collisions(result: &MergeResult<String>, markers: &ConflictMarkers) -> usize {
    result
        .chunks()
        .iter()
        .filter(|chunk| matches!(chunk, MergeChunk::Clean(line) if markers.is_marker(line)))
        .count()
}

/// Writes `result` to `path` atomically.
///
/// # Errors
///
/// Returns [`PersistError::UnresolvedConflicts`] when the result has
/// conflicts under [`ConflictPolicy::Refuse`], [`PersistError::Unencodable`]
/// when the text does not fit the output encoding, or [`PersistError::Io`]
/// when staging or renaming fails. The destination is left untouched in every
/// case.
pub fn save_merged(
    path: &Path,
    result: &MergeResult<String>,
    options: &SaveOptions,
) -> Result<SaveReport, PersistError> {
    let conflicts = result.conflict_count();
    if conflicts > 0 && options.policy == ConflictPolicy::Refuse {
        log_event(&ComparisonEvent::MergeRefused {
            path: path.display().to_string(),
            conflicts,
        });
        return Err(PersistError::UnresolvedConflicts { count: conflicts });
    }

    let collisions = marker_collisions(result, &options.markers);
    if collisions > 0 {
        warn!(
            path = %path.display(),
            collisions,
            "Merged text has lines that look like conflict markers"
        );
    }

    let lines = result.to_lines(&options.markers);
    let text = join_lines(&lines, options.line_ending, options.trailing_newline);
    let bytes = encode_merged(path, &text, options.encoding)?;

    write_atomic(path, &bytes).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), lines = lines.len(), conflicts, "Merge result saved");
    log_event(&ComparisonEvent::MergeSaved {
        path: path.display().to_string(),
        conflicts,
    });

    Ok(SaveReport {
        path: path.to_path_buf(),
        lines: lines.len(),
        bytes: bytes.len(),
        encoding: options.encoding.name(),
        conflicts,
    })
}

/// Stages `contents` beside `path`, then renames the staging file over it.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "destination has no file name"))?;

    let staging_path = dir.join(format!(
        ".{}.tandem-{}",
        name.to_string_lossy(),
        uuid::Uuid::new_v4()
    ));

    let staged = fs::write(&staging_path, contents).and_then(|()| {
        debug!("Staged merge result at {:?}", staging_path);
        fs::rename(&staging_path, path)
    });

    if let Err(e) = staged {
        warn!(
            "Failed to move staged file {:?} to {:?}: {}",
            staging_path, path, e
        );
        if staging_path.exists() {
            let _ = fs::remove_file(&staging_path);
        }
        return Err(e);
    }

    Ok(())
}
