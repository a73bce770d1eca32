//! Structured error types for vector checks

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VectorError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse vector file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("digest error: {0}")]
    Digest(#[from] chdigest_algorithms::Error),

    #[error("{name}: expected {expected}, got {actual}")]
    Mismatch {
        name: String,
        expected: String,
        actual: String,
    },
}

pub type Result<T> = std::result::Result<T, VectorError>;
