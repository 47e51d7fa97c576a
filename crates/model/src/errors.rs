//! Error types for loading, resolving and saving models.

use std::path::PathBuf;

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for model operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("File \"{0}\" does not exist.")]
    NotFound(PathBuf),

    #[error("Failed to parse \"{path}\": {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on \"{path}\": {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize model: {0}")]
    Serialize(#[from] serde_json::Error),
}
