//! Error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PackingError {
    #[error("circle index {index} out of range for {count} circles")]
    CenterOutOfRange { index: usize, count: usize },

    #[error("no packing strategy selected")]
    NoStrategy,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
