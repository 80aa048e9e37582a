//! Error types for seedbed-core

use thiserror::Error;

/// Result type alias using seedbed-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for Seedbed
#[derive(Error, Debug)]
pub enum Error {
    /// Package manifest not found in the target root
    #[error("No Cargo.toml found at {path}. Run this command from the root of a Cargo package")]
    ManifestNotFound { path: String },

    /// The web framework the scaffold targets is not declared in the manifest
    #[error("{manifest} does not list '{dependency}' under [dependencies]. Add it before installing")]
    FrameworkDependencyMissing { manifest: String, dependency: String },

    /// Unknown database driver
    #[error("Unknown database driver: {value}. Valid drivers: mysql, postgresql, sqlite")]
    InvalidDriver { value: String },

    /// Unknown notification channel
    #[error("Unknown notification channel: {value}. Valid channels: email, slack")]
    InvalidChannel { value: String },

    /// Manifest parsing error
    #[error("Failed to parse Cargo.toml: {0}")]
    ManifestParse(#[from] toml::de::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a manifest not found error
    pub fn manifest_not_found(path: impl Into<String>) -> Self {
        Self::ManifestNotFound { path: path.into() }
    }

    /// Create a framework dependency missing error
    pub fn framework_dependency_missing(
        manifest: impl Into<String>,
        dependency: impl Into<String>,
    ) -> Self {
        Self::FrameworkDependencyMissing {
            manifest: manifest.into(),
            dependency: dependency.into(),
        }
    }

    /// Create an invalid driver error
    pub fn invalid_driver(value: impl Into<String>) -> Self {
        Self::InvalidDriver {
            value: value.into(),
        }
    }

    /// Create an invalid channel error
    pub fn invalid_channel(value: impl Into<String>) -> Self {
        Self::InvalidChannel {
            value: value.into(),
        }
    }
}
