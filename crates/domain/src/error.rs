//! Unified error types for the domain layer
//!
//! Aggregate mutations return `DomainError` when a business rule refuses the
//! change. Use cases translate these into their own error enums.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed for a single field
    #[error("Validation failed for {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Business rule violation
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// State transition not allowed
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    /// Cumulative load is over the carrier's limit
    #[error("Capacity exceeded: {total}/{limit}")]
    CapacityExceeded { total: u32, limit: u32 },
}

impl DomainError {
    /// Creates a validation error for a named field.
    ///
    /// # Example
    /// ```ignore
    /// if name.len() < 3 {
    ///     return Err(DomainError::validation("name", "must be at least 3 characters"));
    /// }
    /// ```
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Create a constraint violation error
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an invalid state transition error
    pub fn invalid_state_transition(msg: impl Into<String>) -> Self {
        Self::InvalidStateTransition(msg.into())
    }

    /// Create a capacity exceeded error
    pub fn capacity_exceeded(total: u32, limit: u32) -> Self {
        Self::CapacityExceeded { total, limit }
    }
}
