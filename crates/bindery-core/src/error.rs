//! Error types for the Bindery publishing pipeline.

use std::path::{Path, PathBuf};

/// Errors that can occur while publishing workshop materials.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error with the path that was being accessed
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being read or written when the error occurred
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Content could not be parsed (frontmatter, notebook JSON, metadata)
    #[error("Parse error: {message}")]
    Parse {
        /// What went wrong
        message: String,
    },

    /// Notebook JSON serialization/deserialization error
    #[error("Notebook serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML deserialization error (config files, frontmatter)
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// A referenced asset (slide deck, data file) could not be found
    #[error("Asset not found: {}", path.display())]
    AssetNotFound {
        /// Path that was searched for
        path: PathBuf,
    },

    /// Archive creation error
    #[error("Archive error: {message}")]
    Archive {
        /// What went wrong while writing the archive
        message: String,
    },
}

/// Convenience `Result` type alias for Bindery operations.
///
/// This is the standard Result type used throughout the Bindery codebase.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an I/O error carrying the offending path.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a new parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a missing-asset error.
    pub fn asset(path: impl AsRef<Path>) -> Self {
        Error::AssetNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates a new archive error.
    pub fn archive<S: Into<String>>(message: S) -> Self {
        Error::Archive {
            message: message.into(),
        }
    }
}
