//! Error handling for the template importer.
//!
//! This module defines the main error type `ImportError` used throughout the
//! library, along with a convenient `Result` type alias. It uses `thiserror`
//! and keeps the import target attached to every file-related variant so the
//! CLI can report which macro failed.
//!
//! # Examples
//!
//! ```
//! use cfn_import::core::error::{ImportError, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(ImportError::file_not_found("lambda.py"))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for import operations
pub type Result<T> = std::result::Result<T, ImportError>;

/// Main error type for import operations
#[derive(Debug, Error)]
pub enum ImportError {
    /// Neither an explicit mode nor a recognizable file extension was given
    #[error("Unknown file type, use --json or --yaml to specify (input: {source_name})")]
    ModeUndetermined { source_name: String },

    /// The file named by a macro does not exist
    #[error("Import file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The file named by a macro exists but could not be read
    #[error("Failed to read import file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the input document or writing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ImportError {
    /// Create a new mode undetermined error for the named input
    pub fn mode_undetermined<S: Into<String>>(source_name: S) -> Self {
        Self::ModeUndetermined {
            source_name: source_name.into(),
        }
    }

    /// Create a new file not found error
    pub fn file_not_found<P: Into<PathBuf>>(path: P) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Map an I/O failure on an import target to the matching variant
    pub fn from_import_io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::file_not_found(path),
            _ => Self::Unreadable {
                path: path.into(),
                source,
            },
        }
    }
}
