//! Three-way merge.
//!
//! Merges two derived sequences of a common base. Positions where both sides
//! agree, or where only one side still has elements, are emitted as is;
//! positions where both sides have differing elements become conflict blocks.
//!
//! The alignment is a two-pointer walk over the derived sequences only. The
//! base is accepted for API symmetry with diff3-style merges but does not
//! influence the result.
//!
//! # Example
//!
//! ```
//! use tandem_engine::{ConflictMarkers, MergeChunk, merge};
//!
//! let result = merge(&["1", "2"], &["1", "2"], &["1", "Z"]);
//! assert_eq!(result.conflict_count(), 1);
//! assert_eq!(result.chunks()[0], MergeChunk::Clean("1"));
//!
//! let lines = result.to_lines(&ConflictMarkers::default());
//! assert_eq!(lines, ["1", "<<<<<<< LEFT", "2", "=======", "Z", ">>>>>>> RIGHT"]);
//! ```

pub mod algorithm;
pub mod conflict;
pub mod outcome;

// Re-export main types
pub use algorithm::{merge, merge_with_options};
pub use conflict::{ConflictBlock, ConflictMarkers};
pub use outcome::{MergeChunk, MergeOptions, MergeResult};
