//! Errors raised by invoice, payment and refund rules.

use thiserror::Error;

/// Shorthand for results of the invoicing rules.
pub type DomainResult<T> = Result<T, DomainError>;

/// Why the back-office refused to compute or send something.
///
/// Raised before anything reaches the backend. HTTP failures are reported by
/// whoever performs the request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Entered data is out of range, e.g. a zero quantity or a percent above 100.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The invoice's status forbids the action, such as paying a cancelled invoice.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An order, invoice, customer or payment id did not parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
