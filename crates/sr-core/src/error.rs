//! Base error type.
//!
//! Sub-crates define their own error enums; this one covers the id parsers.

use thiserror::Error;

/// Errors produced by `sr-core` helpers.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `sr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
