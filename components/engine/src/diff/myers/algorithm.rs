//! Myers diff algorithm.

use tracing::debug;

use super::frontier::{Frontier, steps_down};
use crate::diff::{DiffAlgorithm, EditOp, EditScript};

/// Myers diff algorithm.
///
/// This implementation uses the classic O(ND) algorithm described by Eugene Myers
/// in "An O(ND) Difference Algorithm and Its Variations" (1986). Time is
/// `O((N + M) * D)`. The live diagonals of every explored distance are kept so
/// the path can be recovered, which bounds the trace at `O(D^2)` entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct MyersDiff;

impl MyersDiff {
    /// Creates a new Myers diff algorithm instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DiffAlgorithm for MyersDiff {
    fn diff<T: PartialEq + Clone>(&self, left: &[T], right: &[T]) -> EditScript<T> {
        let steps = compute_ses(left, right);
        let script = materialize(&steps, left, right);
        debug!(
            left_len = left.len(),
            right_len = right.len(),
            distance = script.distance(),
            "edit script computed"
        );
        script
    }
}

/// A single move on the edit grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Diagonal move over equal elements.
    Keep,
    /// Rightward move consuming a left element.
    Delete,
    /// Downward move consuming a right element.
    Insert,
}

/// Computes the shortest edit script (SES) between two sequences.
///
/// Runs the forward search, then backtracks from `(N, M)`.
pub(crate) fn compute_ses<T: PartialEq>(left: &[T], right: &[T]) -> Vec<Step> {
    let trace = forward(left, right);
    backtrack(left.len() as isize, right.len() as isize, &trace)
}

/// Searches until some diagonal reaches `(N, M)`.
///
/// Entry `d` of the returned trace holds the diagonals `-(d + 1)..=d + 1` as
/// they stood at the start of distance `d`.
pub(crate) fn forward<T: PartialEq>(left: &[T], right: &[T]) -> Vec<Frontier> {
    let (n, m) = (left.len() as isize, right.len() as isize);
    let max_d = left.len() + right.len();

    let mut frontier = Frontier::new(max_d);
    let mut trace: Vec<Frontier> = Vec::new();

    'search: for d in 0..=max_d as isize {
        trace.push(frontier.snapshot(d));

        for k in (-d..=d).step_by(2) {
            let mut x = if steps_down(&frontier, k, d) {
                frontier.get(k + 1)
            } else {
                frontier.get(k - 1) + 1
            };
            let mut y = x - k;

            // Follow the snake
            while x < n && y < m && left[x as usize] == right[y as usize] {
                x += 1;
                y += 1;
            }

            frontier.set(k, x);

            if x >= n && y >= m {
                break 'search;
            }
        }
    }

    trace
}

/// Walks the trace from `(n, m)` back to the origin and returns the steps in
/// forward order.
pub(crate) fn backtrack(n: isize, m: isize, trace: &[Frontier]) -> Vec<Step> {
    let mut steps = Vec::with_capacity((n + m) as usize);
    let (mut x, mut y) = (n, m);

    for (d, frontier) in trace.iter().enumerate().rev() {
        let d = d as isize;

        if d == 0 {
            // Only the initial snake from the origin remains
            while x > 0 && y > 0 {
                steps.push(Step::Keep);
                x -= 1;
                y -= 1;
            }
            break;
        }

        let k = x - y;
        let prev_k = if steps_down(frontier, k, d) { k + 1 } else { k - 1 };
        let prev_x = frontier.get(prev_k);
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            steps.push(Step::Keep);
            x -= 1;
            y -= 1;
        }

        if x == prev_x {
            steps.push(Step::Insert);
            y -= 1;
        } else {
            steps.push(Step::Delete);
            x -= 1;
        }
    }

    steps.reverse();
    steps
}

/// Pairs grid moves with the elements they consume.
pub(crate) fn materialize<T: Clone>(steps: &[Step], left: &[T], right: &[T]) -> EditScript<T> {
    let (mut x, mut y) = (0, 0);
    let ops = steps
        .iter()
        .map(|step| match step {
            Step::Keep => {
                let op = EditOp::Equal(left[x].clone());
                x += 1;
                y += 1;
                op
            }
            Step::Delete => {
                let op = EditOp::Delete(left[x].clone());
                x += 1;
                op
            }
            Step::Insert => {
                let op = EditOp::Insert(right[y].clone());
                y += 1;
                op
            }
        })
        .collect();

    EditScript::from_ops(ops)
}
