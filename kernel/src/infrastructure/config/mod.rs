//! Configuration management for Tandem.
//!
//! Settings are layered: built-in defaults, then a TOML file (`tandem.toml`
//! in the working directory, or an explicit path), then environment
//! variables prefixed with `TANDEM` using `__` as the section separator.
//!
//! # Example
//!
//! ```
//! use tandem_kernel::infrastructure::config::Settings;
//!
//! let settings = Settings::new().expect("Failed to load configuration");
//! assert_eq!(settings.merge.left_label, "LEFT");
//! ```

pub mod limits;
pub mod merge;
pub mod report;
pub mod telemetry;

pub use limits::LimitSettings;
pub use merge::MergeSettings;
pub use report::ReportSettings;
pub use telemetry::TelemetrySettings;

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Input size guards.
    #[serde(default)]
    pub limits: LimitSettings,
    /// Merge markers and conflict policy.
    #[serde(default)]
    pub merge: MergeSettings,
    /// Report presentation.
    #[serde(default)]
    pub report: ReportSettings,
    /// Logging settings.
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

impl Settings {
    /// Loads settings from defaults, an optional `tandem.toml` and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be built or deserialized.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Loads settings, reading `path` instead of `tandem.toml` when given.
    ///
    /// An explicit path must exist; the implicit `tandem.toml` is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed, or if a value
    /// has the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name("tandem").required(false),
        };

        let s = Config::builder()
            // Start with default values
            .set_default("merge.left_label", "LEFT")?
            .set_default("merge.right_label", "RIGHT")?
            .set_default("telemetry.log_level", "warn")?
            .add_source(file)
            // Merge in Environment variables
            .add_source(
                Environment::with_prefix("TANDEM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }
}
