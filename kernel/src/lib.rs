//! Tandem Kernel - file comparison and merging on top of `tandem-engine`.
//!
//! This crate loads text inputs behind size and binary guards, renders edit
//! scripts as tables, side-by-side columns, HTML or JSON, persists merge
//! results atomically, and hosts the `tandem` command-line interface.

#![warn(clippy::pedantic)]

/// Subcommands of the `tandem` binary.
pub mod commands;
/// Loading and comparing files.
pub mod compare;
/// Kernel error type.
pub mod error;
/// Infrastructure components (config, events, telemetry).
pub mod infrastructure;
/// Writing merge results.
pub mod persist;
/// Edit script presentation.
pub mod render;
/// Text acquisition and input guards.
pub mod text;

pub use error::{KernelError, Result};
