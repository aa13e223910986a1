//! Error types for headinganchor operations.
//!
//! The transform itself never fails; errors only come from decoding token
//! streams and option objects, or from I/O at the command-line surface.

use thiserror::Error;

/// Errors that can occur while reading or writing token streams.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("Unknown core rule: {0}")]
    UnknownRule(String),
}

pub type Result<T> = std::result::Result<T, Error>;
