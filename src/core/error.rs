use std::{io, path::PathBuf, result};

use thiserror::Error;

/// Error types for the Confdoc application.
///
/// This enum represents all possible errors that can occur while
/// enumerating settings manifests and writing the generated document.
#[derive(Error, Debug)]
pub enum ConfdocError {
    /// A settings manifest declares inconsistent metadata.
    ///
    /// The generator never produces a partial document: a manifest that
    /// cannot be trusted aborts the whole run.
    #[error("settings manifest validation failed for '{setting}': {details}")]
    ManifestValidation {
        /// Name of the setting that failed validation
        setting: String,
        /// Validation error details
        details: String,
    },

    /// The same setting name is declared by more than one manifest.
    #[error("duplicate setting name '{name}' in settings manifests")]
    DuplicateSetting {
        /// The setting name declared twice
        name: String,
    },

    /// The generated document could not be written to its target path.
    #[error("failed to write document to '{path}': {details}")]
    DocumentWrite {
        /// Path being written
        path: PathBuf,
        /// Write error details
        details: String,
    },

    /// The setting-name recognition pattern failed to compile.
    #[error("invalid reference pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Standard I/O operation error (for compatibility)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A specialized `Result` type for Confdoc operations.
///
/// This type alias simplifies error handling by defaulting the error type
/// to `ConfdocError` for all Confdoc operations.
pub type Result<T> = result::Result<T, ConfdocError>;
