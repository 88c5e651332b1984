//! Error types for hexmerkle

use thiserror::Error;

/// Result type alias for hexmerkle operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building or querying a tree
#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot build a tree from zero data blocks")]
    EmptyInput,

    #[error("Tree is empty")]
    EmptyTree,

    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
