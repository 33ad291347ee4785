//! Ranged view of an edit script.

use serde::Serialize;

use super::EditOp;

/// A run of edit operations of one kind, expressed as line ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffOp {
    /// Lines that are unchanged between both texts.
    Equal {
        /// Start line index in the old text (0-based, inclusive).
        old_start: usize,
        /// End line index in the old text (0-based, exclusive).
        old_end: usize,
        /// Start line index in the new text (0-based, inclusive).
        new_start: usize,
        /// End line index in the new text (0-based, exclusive).
        new_end: usize,
    },
    /// Lines that were inserted in the new text.
    Insert {
        /// Start line index in the new text (0-based, inclusive).
        new_start: usize,
        /// End line index in the new text (0-based, exclusive).
        new_end: usize,
    },
    /// Lines that were deleted from the old text.
    Delete {
        /// Start line index in the old text (0-based, inclusive).
        old_start: usize,
        /// End line index in the old text (0-based, exclusive).
        old_end: usize,
    },
    /// Lines that were replaced (deleted and inserted).
    Replace {
        /// Start line index in the old text (0-based, inclusive).
        old_start: usize,
        /// End line index in the old text (0-based, exclusive).
        old_end: usize,
        /// Start line index in the new text (0-based, inclusive).
        new_start: usize,
        /// End line index in the new text (0-based, exclusive).
        new_end: usize,
    },
}

impl DiffOp {
    /// Returns the range of lines affected in the old text, if applicable.
    #[must_use]
    pub const fn old_range(&self) -> Option<(usize, usize)> {
        match *self {
            Self::Equal {
                old_start, old_end, ..
            }
            | Self::Delete { old_start, old_end }
            | Self::Replace {
                old_start, old_end, ..
            } => Some((old_start, old_end)),
            Self::Insert { .. } => None,
        }
    }

    /// Returns the range of lines affected in the new text, if applicable.
    #[must_use]
    pub const fn new_range(&self) -> Option<(usize, usize)> {
        match *self {
            Self::Equal {
                new_start, new_end, ..
            }
            | Self::Insert { new_start, new_end }
            | Self::Replace {
                new_start, new_end, ..
            } => Some((new_start, new_end)),
            Self::Delete { .. } => None,
        }
    }

    /// Returns true if this operation represents a change (not equal).
    #[must_use]
    pub const fn is_change(&self) -> bool {
        !matches!(self, Self::Equal { .. })
    }
}

/// Folds element-wise operations into ranged hunks.
pub(crate) fn group_hunks<T>(ops: &[EditOp<T>]) -> Vec<DiffOp> {
    let (mut hunks, mut old, mut new) = (Vec::new(), 0, 0);

    for op in ops {
        match op {
            EditOp::Equal(_) => {
                match hunks.last_mut() {
                    Some(DiffOp::Equal {
                        old_end, new_end, ..
                    }) => {
                        *old_end += 1;
                        *new_end += 1;
                    }
                    _ => hunks.push(DiffOp::Equal {
                        old_start: old,
                        old_end: old + 1,
                        new_start: new,
                        new_end: new + 1,
                    }),
                }
                old += 1;
                new += 1;
            }
            EditOp::Delete(_) => {
                match hunks.last_mut() {
                    Some(DiffOp::Delete { old_end, .. }) => *old_end += 1,
                    _ => hunks.push(DiffOp::Delete {
                        old_start: old,
                        old_end: old + 1,
                    }),
                }
                old += 1;
            }
            EditOp::Insert(_) => {
                let extended = match hunks.last_mut() {
                    Some(DiffOp::Insert { new_end, .. } | DiffOp::Replace { new_end, .. }) => {
                        *new_end += 1;
                        true
                    }
                    Some(last) => {
                        if let DiffOp::Delete { old_start, old_end } = *last {
                            *last = DiffOp::Replace {
                                old_start,
                                old_end,
                                new_start: new,
                                new_end: new + 1,
                            };
                            true
                        } else {
                            false
                        }
                    }
                    None => false,
                };
                if !extended {
                    hunks.push(DiffOp::Insert {
                        new_start: new,
                        new_end: new + 1,
                    });
                }
                new += 1;
            }
        }
    }

    hunks
}
