//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input rejected when a record is created.
    #[error("validation error on `{field}`: {message}")]
    Validation {
        /// The input field that failed validation.
        field: &'static str,
        /// Human-readable reason.
        message: String,
    },

    /// An operation targeted a record that does not exist.
    #[error("record not found: {0}")]
    RecordNotFound(String),

    /// A record with the same identifier is already registered.
    #[error("duplicate record identifier: {0}")]
    DuplicateRecord(String),

    /// Publication was attempted before payment was confirmed.
    #[error("payment required before publication: {0}")]
    PaymentRequired(String),
}

impl DomainError {
    /// Shorthand for a [`DomainError::Validation`] on `field`.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}
