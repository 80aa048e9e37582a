//! Error types for seedbed-scaffold

use camino::Utf8PathBuf;
use thiserror::Error;

/// Result type alias using seedbed-scaffold's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Unknown template id
    #[error("Template not found: {id}")]
    TemplateNotFound { id: String },

    /// Directory or file creation failure, with the offending path
    #[error("Filesystem error at {path}: {source}")]
    Filesystem {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Interactive prompt failure (closed terminal, interrupted read)
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Core library error
    #[error("Core error: {0}")]
    Core(#[from] seedbed_core::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a template not found error
    pub fn template_not_found(id: impl Into<String>) -> Self {
        Self::TemplateNotFound { id: id.into() }
    }

    /// Create a filesystem error for a specific path
    pub fn filesystem(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}
