//! Per-call search frontier for the Myers forward pass.

/// Furthest-reaching `x` per diagonal `k = x - y`, indexed by diagonal offset.
#[derive(Debug, Clone)]
pub(crate) struct Frontier {
    offset: isize,
    reach: Vec<isize>,
}

impl Frontier {
    /// Creates a frontier able to address diagonals `-(max_d + 1)..=max_d + 1`.
    pub(crate) fn new(max_d: usize) -> Self {
        Self {
            offset: max_d as isize + 1,
            reach: vec![0; 2 * max_d + 3],
        }
    }

    /// Furthest `x` recorded on diagonal `k`.
    pub(crate) fn get(&self, k: isize) -> isize {
        self.reach[(k + self.offset) as usize]
    }

    /// Records the furthest `x` reached on diagonal `k`.
    pub(crate) fn set(&mut self, k: isize, x: isize) {
        self.reach[(k + self.offset) as usize] = x;
    }

    /// Copies the diagonals a step at distance `d` can read, `-(d + 1)..=d + 1`.
    ///
    /// `d` must not exceed the `max_d` this frontier was created with.
    pub(crate) fn snapshot(&self, d: isize) -> Self {
        let low = (self.offset - d - 1) as usize;
        let high = (self.offset + d + 1) as usize;
        Self {
            offset: d + 1,
            reach: self.reach[low..=high].to_vec(),
        }
    }

    /// Number of diagonals stored.
    #[cfg(test)]
    pub(crate) fn width(&self) -> usize {
        self.reach.len()
    }
}

/// Decides how the furthest path on diagonal `k` at distance `d` was entered.
///
/// Returns true for a downward move from diagonal `k + 1` (an insertion) and
/// false for a rightward move from diagonal `k - 1` (a deletion). On equal
/// reach the deletion wins. The forward search and the backtrack both call
/// this so they always agree on the predecessor.
pub(crate) fn steps_down(frontier: &Frontier, k: isize, d: isize) -> bool {
    k == -d || (k != d && frontier.get(k - 1) < frontier.get(k + 1))
}
