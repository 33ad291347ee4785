//! Two-pointer merge alignment.

use tracing::debug;

use super::conflict::ConflictBlock;
use super::outcome::{MergeChunk, MergeOptions, MergeResult};

/// Merges `left` and `right` with the default options.
///
/// Produces one conflict block per mismatched pair of elements.
#[must_use]
pub fn merge<T: PartialEq + Clone>(base: &[T], left: &[T], right: &[T]) -> MergeResult<T> {
    merge_with_options(base, left, right, &MergeOptions::default())
}

/// Merges `left` and `right`, honoring `options`.
///
/// Walks both sequences in lockstep:
/// - equal elements are emitted once and both sides advance;
/// - once one side is exhausted the remainder of the other is emitted;
/// - differing elements form a conflict block and both sides advance.
#[must_use]
pub fn merge_with_options<T: PartialEq + Clone>(
    base: &[T],
    left: &[T],
    right: &[T],
    options: &MergeOptions,
) -> MergeResult<T> {
    let mut chunks = Vec::with_capacity(left.len().max(right.len()));
    let (mut i, mut j) = (0, 0);

    loop {
        match (left.get(i), right.get(j)) {
            (Some(l), Some(r)) if l == r => {
                chunks.push(MergeChunk::Clean(l.clone()));
                i += 1;
                j += 1;
            }
            (Some(l), Some(r)) => {
                push_conflict(&mut chunks, l, r, options.coalesce_conflicts);
                i += 1;
                j += 1;
            }
            (Some(l), None) => {
                chunks.push(MergeChunk::Clean(l.clone()));
                i += 1;
            }
            (None, Some(r)) => {
                chunks.push(MergeChunk::Clean(r.clone()));
                j += 1;
            }
            (None, None) => break,
        }
    }

    let result = MergeResult::new(chunks);
    debug!(
        base_len = base.len(),
        left_len = left.len(),
        right_len = right.len(),
        conflicts = result.conflict_count(),
        "merge completed"
    );
    result
}

fn push_conflict<T: Clone>(chunks: &mut Vec<MergeChunk<T>>, left: &T, right: &T, coalesce: bool) {
    if coalesce && let Some(MergeChunk::Conflict(block)) = chunks.last_mut() {
        block.push_pair(left.clone(), right.clone());
        return;
    }
    chunks.push(MergeChunk::Conflict(ConflictBlock::new(
        vec![left.clone()],
        vec![right.clone()],
    )));
}
