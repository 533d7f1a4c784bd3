use std::io;

use thiserror::Error;

/// Library-wide error type for umbrelfab operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The structured-text dump primitive rejected the value tree.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON output could not be produced.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A descriptor file could not be deserialized.
    #[error("Malformed descriptor {path}: {reason}")]
    MalformedDescriptor { path: String, reason: String },
}
