//! Domain error model.

use thiserror::Error;

/// Result type used across the analytics crates.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The analytics engine itself is total: every computation degrades to a
/// default or an explicit sentinel instead of failing. Errors only arise at
/// the library boundary (identifier parsing, caller-supplied configuration).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
