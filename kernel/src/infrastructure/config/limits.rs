//! Input size guards.
//!
//! Diffing is quadratic in the worst case, so oversized inputs are rejected
//! before they reach the engine.

use serde::Deserialize;

/// Default byte limit per input (10 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Default line limit per input.
pub const DEFAULT_MAX_LINES: usize = 200_000;

/// Limits applied to every input file.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LimitSettings {
    /// Maximum input size in bytes (default: 10 MiB)
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,

    /// Maximum number of lines per input (default: 200000)
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,
}

impl Default for LimitSettings {
    fn default() -> Self {
        Self {
            max_bytes: default_max_bytes(),
            max_lines: default_max_lines(),
        }
    }
}

const fn default_max_bytes() -> u64 {
    DEFAULT_MAX_BYTES
}

const fn default_max_lines() -> usize {
    DEFAULT_MAX_LINES
}
