use serde::Serialize;
use tracing::{info, info_span};

/// Target of comparison events; filter on it to route them separately.
pub const EVENT_TARGET: &str = "tandem::events";

/// Outcome of a comparison or merge, structured for JSON serialization.
#[derive(Debug, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum ComparisonEvent {
    /// Two files were diffed.
    DiffCompleted {
        /// Left input path.
        left: String,
        /// Right input path.
        right: String,
        /// Unchanged lines.
        equal: usize,
        /// Lines only on the left.
        deleted: usize,
        /// Lines only on the right.
        inserted: usize,
    },
    /// Three files were merged.
    MergeCompleted {
        /// Left input path.
        left: String,
        /// Right input path.
        right: String,
        /// Merged positions, counting each conflict block once.
        chunks: usize,
        /// Conflict blocks in the result.
        conflicts: usize,
    },
    /// A merge result was written to disk.
    MergeSaved {
        /// Destination path.
        path: String,
        /// Conflict blocks written.
        conflicts: usize,
    },
    /// A merge result was not written because conflicts remain.
    MergeRefused {
        /// Destination path.
        path: String,
        /// Unresolved conflict blocks.
        conflicts: usize,
    },
    /// An input was rejected before diffing.
    InputRejected {
        /// Offending path.
        path: String,
        /// Human-readable reason.
        reason: String,
    },
}

/// Logs a comparison event on [`EVENT_TARGET`] as structured JSON.
pub fn log_event(event: &ComparisonEvent) {
    let span = info_span!(target: "tandem::events", "comparison_event");
    let _enter = span.enter();

    let json = serde_json::to_string(event).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"));
    info!(target: "tandem::events", event_json = %json, "Comparison event");
}
