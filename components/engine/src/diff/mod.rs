//! Line-level edit scripts.
//!
//! This module provides the element-wise edit script produced by the Myers
//! search, the ranged hunk view derived from it, and a trait so callers can
//! swap the algorithm behind a consistent interface.

pub mod hunk;
pub mod myers;

use serde::{Deserialize, Serialize};

pub use hunk::DiffOp;
pub use myers::MyersDiff;

/// A single operation of an edit script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum EditOp<T> {
    /// Element present in both sequences.
    Equal(T),
    /// Element present only in the left sequence.
    Delete(T),
    /// Element present only in the right sequence.
    Insert(T),
}

impl<T> EditOp<T> {
    /// Returns the report tag for this operation: `' '`, `'-'` or `'+'`.
    #[must_use]
    pub const fn tag(&self) -> char {
        match self {
            Self::Equal(_) => ' ',
            Self::Delete(_) => '-',
            Self::Insert(_) => '+',
        }
    }

    /// Returns the element carried by this operation.
    #[must_use]
    pub const fn value(&self) -> &T {
        match self {
            Self::Equal(value) | Self::Delete(value) | Self::Insert(value) => value,
        }
    }

    /// Consumes the operation and returns its element.
    #[must_use]
    pub fn into_value(self) -> T {
        match self {
            Self::Equal(value) | Self::Delete(value) | Self::Insert(value) => value,
        }
    }

    /// Returns true if this operation represents a change (not equal).
    #[must_use]
    pub const fn is_change(&self) -> bool {
        !matches!(self, Self::Equal(_))
    }
}

/// Operation counts of an edit script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    /// Number of `Equal` operations.
    pub equal: usize,
    /// Number of `Delete` operations.
    pub deleted: usize,
    /// Number of `Insert` operations.
    pub inserted: usize,
}

impl DiffStats {
    /// Edit distance: deletions plus insertions.
    #[must_use]
    pub const fn distance(&self) -> usize {
        self.deleted + self.inserted
    }
}

/// An ordered edit script transforming a left sequence into a right one.
///
/// Replaying the `Equal` and `Delete` elements in order yields the left
/// sequence; replaying the `Equal` and `Insert` elements yields the right one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditScript<T> {
    ops: Vec<EditOp<T>>,
}

impl<T> EditScript<T> {
    /// Wraps an already ordered list of operations.
    #[must_use]
    pub const fn from_ops(ops: Vec<EditOp<T>>) -> Self {
        Self { ops }
    }

    /// Returns the operations in forward order.
    #[must_use]
    pub fn ops(&self) -> &[EditOp<T>] {
        &self.ops
    }

    /// Consumes the script and returns its operations.
    #[must_use]
    pub fn into_ops(self) -> Vec<EditOp<T>> {
        self.ops
    }

    /// Number of operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns true if the script has no operations (both inputs empty).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterates over the operations.
    pub fn iter(&self) -> std::slice::Iter<'_, EditOp<T>> {
        self.ops.iter()
    }

    /// Left-side projection: `Equal` and `Delete` elements in order.
    pub fn left(&self) -> impl Iterator<Item = &T> {
        self.ops.iter().filter_map(|op| match op {
            EditOp::Equal(v) | EditOp::Delete(v) => Some(v),
            EditOp::Insert(_) => None,
        })
    }

    /// Right-side projection: `Equal` and `Insert` elements in order.
    pub fn right(&self) -> impl Iterator<Item = &T> {
        self.ops.iter().filter_map(|op| match op {
            EditOp::Equal(v) | EditOp::Insert(v) => Some(v),
            EditOp::Delete(_) => None,
        })
    }

    /// Counts operations by kind.
    #[must_use]
    pub fn stats(&self) -> DiffStats {
        self.ops
            .iter()
            .fold(DiffStats::default(), |mut stats, op| {
                match op {
                    EditOp::Equal(_) => stats.equal += 1,
                    EditOp::Delete(_) => stats.deleted += 1,
                    EditOp::Insert(_) => stats.inserted += 1,
                }
                stats
            })
    }

    /// Number of non-equal operations.
    #[must_use]
    pub fn distance(&self) -> usize {
        self.ops.iter().filter(|op| op.is_change()).count()
    }

    /// Returns true if the script contains only `Equal` operations.
    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.ops.iter().all(|op| !op.is_change())
    }

    /// Groups the script into ranged hunks.
    ///
    /// A run of deletions immediately followed by a run of insertions is
    /// reported as a single `Replace`.
    #[must_use]
    pub fn hunks(&self) -> Vec<DiffOp> {
        hunk::group_hunks(&self.ops)
    }
}

impl<T> IntoIterator for EditScript<T> {
    type Item = EditOp<T>;
    type IntoIter = std::vec::IntoIter<EditOp<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a EditScript<T> {
    type Item = &'a EditOp<T>;
    type IntoIter = std::slice::Iter<'a, EditOp<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

/// Trait for diff algorithms.
///
/// Implementations must be deterministic: equal inputs always produce the
/// same script. The `Send + Sync` bound allows sharing one instance across
/// threads.
pub trait DiffAlgorithm: Send + Sync {
    /// Computes the edit script transforming `left` into `right`.
    fn diff<T: PartialEq + Clone>(&self, left: &[T], right: &[T]) -> EditScript<T>;
}

/// Computes the shortest edit script between two sequences with [`MyersDiff`].
///
/// # Example
///
/// ```
/// use tandem_engine::{EditOp, diff};
///
/// let script = diff(&["a", "b", "c"], &["a", "x", "c"]);
/// assert_eq!(
///     script.ops(),
///     &[
///         EditOp::Equal("a"),
///         EditOp::Delete("b"),
///         EditOp::Insert("x"),
///         EditOp::Equal("c"),
///     ]
/// );
/// ```
#[must_use]
pub fn diff<T: PartialEq + Clone>(left: &[T], right: &[T]) -> EditScript<T> {
    MyersDiff::new().diff(left, right)
}
