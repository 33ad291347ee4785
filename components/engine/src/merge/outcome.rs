//! Outcome types for merge operations.

use serde::{Deserialize, Serialize};

use super::conflict::{ConflictBlock, ConflictMarkers};

/// One position of a merged sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MergeChunk<T> {
    /// An element both sides agree on, or that only one side holds.
    Clean(T),
    /// A disputed region.
    Conflict(ConflictBlock<T>),
}

/// Options for [`merge_with_options`](super::merge_with_options).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOptions {
    /// Join adjacent conflict blocks into a single block (default: false).
    #[serde(default)]
    pub coalesce_conflicts: bool,
}

/// A merged sequence: clean elements interleaved with conflict blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MergeResult<T> {
    chunks: Vec<MergeChunk<T>>,
}

impl<T> MergeResult<T> {
    pub(crate) const fn new(chunks: Vec<MergeChunk<T>>) -> Self {
        Self { chunks }
    }

    /// Returns the merged chunks in order.
    #[must_use]
    pub fn chunks(&self) -> &[MergeChunk<T>] {
        &self.chunks
    }

    /// Number of conflict blocks.
    #[must_use]
    pub fn conflict_count(&self) -> usize {
        self.conflicts().count()
    }

    /// Returns true if at least one conflict block is present.
    #[must_use]
    pub fn has_conflicts(&self) -> bool {
        self.conflicts().next().is_some()
    }

    /// Iterates over the conflict blocks.
    pub fn conflicts(&self) -> impl Iterator<Item = &ConflictBlock<T>> {
        self.chunks.iter().filter_map(|chunk| match chunk {
            MergeChunk::Conflict(block) => Some(block),
            MergeChunk::Clean(_) => None,
        })
    }
}

impl<T: Clone> MergeResult<T> {
    /// Returns the merged sequence if the merge is conflict free.
    #[must_use]
    pub fn resolved(&self) -> Option<Vec<T>> {
        self.chunks
            .iter()
            .map(|chunk| match chunk {
                MergeChunk::Clean(value) => Some(value.clone()),
                MergeChunk::Conflict(_) => None,
            })
            .collect()
    }
}

impl<T: AsRef<str>> MergeResult<T> {
    /// Renders the merged sequence as lines, expanding conflict blocks with
    /// `markers`.
    #[must_use]
    pub fn to_lines(&self, markers: &ConflictMarkers) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.chunks.len());
        for chunk in &self.chunks {
            match chunk {
                MergeChunk::Clean(line) => lines.push(line.as_ref().to_string()),
                MergeChunk::Conflict(block) => lines.extend(block.marker_lines(markers)),
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MergeResult<&'static str> {
        MergeResult::new(vec![
            MergeChunk::Clean("1"),
            MergeChunk::Conflict(ConflictBlock::new(vec!["2"], vec!["Z"])),
            MergeChunk::Clean("3"),
        ])
    }

    #[test]
    fn test_conflict_queries() {
        let result = sample();
        assert!(result.has_conflicts());
        assert_eq!(result.conflict_count(), 1);
        assert_eq!(result.resolved(), None);
    }

    #[test]
    fn test_to_lines_expands_markers() {
        assert_eq!(
            sample().to_lines(&ConflictMarkers::default()),
            vec!["1", "<<<<<<< LEFT", "2", "=======", "Z", ">>>>>>> RIGHT", "3"]
        );
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json[0]["kind"], "clean");
        assert_eq!(json[1]["kind"], "conflict");
        assert_eq!(json[1]["value"]["left"][0], "2");
        assert_eq!(json[1]["value"]["right"][0], "Z");
    }
}
