//! Merge configuration.

use serde::Deserialize;
use tandem_engine::{ConflictMarkers, MergeOptions};

use crate::persist::ConflictPolicy;

/// Merge marker labels and conflict handling.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct MergeSettings {
    /// Label after the start marker (default: "LEFT")
    #[serde(default = "default_left_label")]
    pub left_label: String,

    /// Label after the end marker (default: "RIGHT")
    #[serde(default = "default_right_label")]
    pub right_label: String,

    /// Join adjacent conflict blocks (default: false)
    #[serde(default)]
    pub coalesce_conflicts: bool,

    /// Save merged output even when conflicts remain (default: false)
    #[serde(default)]
    pub allow_conflicts: bool,
}

impl MergeSettings {
    /// Marker lines built from the configured labels.
    #[must_use]
    pub fn markers(&self) -> ConflictMarkers {
        ConflictMarkers::with_labels(&self.left_label, &self.right_label)
    }

    /// Engine options.
    #[must_use]
    pub const fn options(&self) -> MergeOptions {
        MergeOptions {
            coalesce_conflicts: self.coalesce_conflicts,
        }
    }

    /// Save policy for unresolved conflicts.
    #[must_use]
    pub const fn policy(&self) -> ConflictPolicy {
        ConflictPolicy::from_allow(self.allow_conflicts)
    }
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            left_label: default_left_label(),
            right_label: default_right_label(),
            coalesce_conflicts: false,
            allow_conflicts: false,
        }
    }
}

fn default_left_label() -> String {
    "LEFT".to_string()
}

fn default_right_label() -> String {
    "RIGHT".to_string()
}
