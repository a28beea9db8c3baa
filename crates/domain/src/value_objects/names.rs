//! Validated name newtypes for domain entities
//!
//! These newtypes ensure that names are valid by construction:
//! - Trimmed of leading/trailing whitespace
//! - Between 3 and 50 characters after trimming

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Minimum length for entity names
pub const MIN_NAME_LENGTH: usize = 3;

/// Maximum length for entity names
pub const MAX_NAME_LENGTH: usize = 50;

fn validate_name(field: &'static str, name: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    let length = trimmed.chars().count();
    if trimmed.is_empty() {
        return Err(DomainError::validation(field, format!("{} cannot be empty", field)));
    }
    if length < MIN_NAME_LENGTH {
        return Err(DomainError::validation(
            field,
            format!("{} must be at least {} characters long", field, MIN_NAME_LENGTH),
        ));
    }
    if length > MAX_NAME_LENGTH {
        return Err(DomainError::validation(
            field,
            format!("{} cannot exceed {} characters", field, MAX_NAME_LENGTH),
        ));
    }
    Ok(trimmed.to_string())
}

// ============================================================================
// MoverName
// ============================================================================

/// A validated mover name (3-50 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MoverName(String);

impl MoverName {
    /// Create a new validated mover name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the trimmed name is shorter than 3
    /// or longer than 50 characters.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        validate_name("name", &name.into()).map(Self)
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MoverName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for MoverName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<MoverName> for String {
    fn from(name: MoverName) -> String {
        name.0
    }
}

// ============================================================================
// ItemName
// ============================================================================

/// A validated item name (3-50 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    /// Create a new validated item name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the trimmed name is shorter than 3
    /// or longer than 50 characters.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        validate_name("name", &name.into()).map(Self)
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ItemName> for String {
    fn from(name: ItemName) -> String {
        name.0
    }
}
