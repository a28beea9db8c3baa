//! Storage failures surfaced by the ports.
//!
//! Lookups report absence as `Ok(None)`, so the only failures left are the
//! ones a request cannot recover from.

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// A collection file could not be read, written or replaced.
    #[error("Storage error in {operation}: {message}")]
    Io {
        operation: &'static str,
        message: String,
    },

    /// A collection file holds JSON that does not match the entity shape.
    #[error("Malformed collection data: {0}")]
    Serialization(String),
}

impl RepoError {
    pub fn io(operation: &'static str, message: impl ToString) -> Self {
        Self::Io {
            operation,
            message: message.to_string(),
        }
    }

    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }
}
