/// Configuration management.
pub mod config;
/// Structured comparison events.
pub mod events;
/// Logging setup.
pub mod telemetry;
