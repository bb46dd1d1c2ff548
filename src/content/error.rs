//! Content pipeline errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while discovering or rendering content
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to list content directory {path:?}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed filename {0:?}: sequence number is not numeric")]
    MalformedFilename(String),

    #[error("Malformed filename {0:?}: sequence number does not fit in a 64-bit integer")]
    SequenceOutOfRange(String),

    #[error("Render error: {0}")]
    Render(String),
}

/// Result type for content operations
pub type Result<T> = std::result::Result<T, ContentError>;
