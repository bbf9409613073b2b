use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while exporting a password store.
#[derive(Debug, Error)]
pub enum PassExportError {
    // --- Environment errors ---
    #[error("HOME is not set — cannot locate the password store")]
    HomeNotSet,

    // --- Store errors ---
    #[error("Password store at {path} cannot be read: {source}")]
    StoreUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path in password store is not valid UTF-8: {0}")]
    InvalidStorePath(PathBuf),

    // --- Decryption errors ---
    #[error("Failed to run '{program}': {source}")]
    CollaboratorUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Decrypting '{id}' failed: {stderr}")]
    DecryptionFailed { id: String, stderr: String },

    #[error("Decrypted secret '{id}' is not valid UTF-8")]
    SecretNotUtf8 { id: String },

    // --- Output errors ---
    #[error("Cannot write output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for export results.
pub type Result<T> = std::result::Result<T, PassExportError>;
