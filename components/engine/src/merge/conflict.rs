//! Conflict blocks and their textual markers.

use serde::{Deserialize, Serialize};

/// A region where the two derived sequences disagree.
///
/// Base content is not carried; the block only records what each side holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictBlock<T> {
    left: Vec<T>,
    right: Vec<T>,
}

impl<T> ConflictBlock<T> {
    /// Creates a new conflict block.
    #[must_use]
    pub const fn new(left: Vec<T>, right: Vec<T>) -> Self {
        Self { left, right }
    }

    /// Returns the left-side content.
    #[must_use]
    pub fn left(&self) -> &[T] {
        &self.left
    }

    /// Returns the right-side content.
    #[must_use]
    pub fn right(&self) -> &[T] {
        &self.right
    }

    pub(crate) fn push_pair(&mut self, left: T, right: T) {
        self.left.push(left);
        self.right.push(right);
    }
}

impl<T: AsRef<str>> ConflictBlock<T> {
    /// Renders the block as marker-delimited lines.
    #[must_use]
    pub fn marker_lines(&self, markers: &ConflictMarkers) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.left.len() + self.right.len() + 3);
        lines.push(markers.start.clone());
        lines.extend(self.left.iter().map(|line| line.as_ref().to_string()));
        lines.push(markers.separator.clone());
        lines.extend(self.right.iter().map(|line| line.as_ref().to_string()));
        lines.push(markers.end.clone());
        lines
    }
}

/// Marker lines bracketing a conflict block in textual output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictMarkers {
    /// Opens the block, precedes the left content.
    pub start: String,
    /// Separates left content from right content.
    pub separator: String,
    /// Closes the block, follows the right content.
    pub end: String,
}

impl ConflictMarkers {
    /// Builds Git-style markers naming each side.
    #[must_use]
    pub fn with_labels(left: impl AsRef<str>, right: impl AsRef<str>) -> Self {
        Self {
            start: format!("<<<<<<< {}", left.as_ref()),
            separator: "=======".to_string(),
            end: format!(">>>>>>> {}", right.as_ref()),
        }
    }

    /// Returns true if `line` is one of the three markers.
    #[must_use]
    pub fn is_marker(&self, line: &str) -> bool {
        line == self.start || line == self.separator || line == self.end
    }
}

impl Default for ConflictMarkers {
    fn default() -> Self {
        Self::with_labels("LEFT", "RIGHT")
    }
}
