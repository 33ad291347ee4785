//! Shared test utilities for integration tests.
//!
//! Provides a scratch directory with helpers for writing input files and
//! reading results back.

#![allow(dead_code)]

use anyhow::Result;
use std::path::{Path, PathBuf};
use tandem_kernel::infrastructure::config::Settings;
use tempfile::TempDir;

/// Integration test context providing a scratch directory.
pub struct TestWorkspace {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
}

impl TestWorkspace {
    /// Creates an empty workspace.
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
        })
    }

    /// Returns the workspace root.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` to `name` and returns its path.
    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> Result<PathBuf> {
        let path = self.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Reads `name` back as text.
    pub fn read(&self, name: &str) -> Result<String> {
        Ok(std::fs::read_to_string(self.path().join(name))?)
    }

    /// Writes a `tandem.toml` and loads settings from it.
    pub fn settings(&self, toml: &str) -> Result<Settings> {
        let path = self.write("tandem.toml", toml)?;
        Ok(Settings::load(Some(&path))?)
    }
}

/// Converts string literals into owned lines.
pub fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
