use std::path::PathBuf;

use thiserror::Error;

use crate::persist::PersistError;
use crate::render::RenderError;
use crate::text::InputError;

/// Errors surfaced by Tandem commands.
#[derive(Debug, Error)]
pub enum KernelError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// An input was unreadable or rejected by a guard.
    #[error(transparent)]
    Input(#[from] InputError),

    /// A merge result could not be saved.
    #[error(transparent)]
    Persist(#[from] PersistError),

    /// Output could not be rendered.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Writing command output failed.
    #[error("Failed to write output to {path}: {source}")]
    Output {
        /// Output path, or `-` for stdout.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl KernelError {
    pub(crate) fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for kernel operations.
pub type Result<T> = std::result::Result<T, KernelError>;
