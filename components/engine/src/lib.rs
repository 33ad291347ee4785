//! Tandem Engine
//!
//! The pure core of Tandem. It:
//! 1. Computes the shortest edit script between two line sequences (Myers, O(ND))
//! 2. Merges two derived sequences of a common base, flagging disagreements
//!    as conflict blocks
//!
//! Both engines are synchronous, allocation-local and side-effect free. They
//! never fail over finite inputs; callers bound the work by limiting input size.

pub mod diff;
pub mod merge;

pub use diff::{DiffAlgorithm, DiffOp, DiffStats, EditOp, EditScript, MyersDiff, diff};
pub use merge::{
    ConflictBlock, ConflictMarkers, MergeChunk, MergeOptions, MergeResult, merge,
    merge_with_options,
};
