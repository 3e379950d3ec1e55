//! Engine error type.
//!
//! Stepping a well-formed simulation cannot fail; the only user-facing error
//! is a configuration that breaks a construction invariant.  Sub-crates wrap
//! `SeirError` as one variant of their own error enums.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SeirError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl SeirError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SeirError::InvalidConfiguration(msg.into())
    }
}

/// Shorthand result type for all `seir-*` crates.
pub type SeirResult<T> = Result<T, SeirError>;
