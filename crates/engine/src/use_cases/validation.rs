//! Common validation helpers for use cases.
//!
//! Input is checked field by field and every problem is collected, so a
//! client sees all invalid fields of a request at once.

use std::collections::BTreeMap;
use std::fmt;

use magic_movers_domain::DomainError;

/// Validation error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field_name} is required")]
    Required { field_name: &'static str },

    #[error("{reason}")]
    Invalid {
        field_name: &'static str,
        reason: String,
    },
}

impl ValidationError {
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Required { field_name } | Self::Invalid { field_name, .. } => *field_name,
        }
    }
}

/// Every field-level problem found in one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(error: ValidationError) -> Self {
        Self(vec![error])
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// `Ok(())` when nothing was collected.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Field name to message, first problem per field wins.
    pub fn to_field_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        for error in &self.0 {
            map.entry(error.field_name().to_string())
                .or_insert_with(|| error.to_string());
        }
        map
    }

    /// Unwrap a required field, recording its absence.
    pub fn require<T>(&mut self, value: Option<T>, field_name: &'static str) -> Option<T> {
        if value.is_none() {
            self.push(ValidationError::Required { field_name });
        }
        value
    }

    /// Keep the value of a successful domain constructor, record the failure otherwise.
    pub fn check<T>(&mut self, result: Result<T, DomainError>, field_name: &'static str) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(DomainError::Validation { field, message }) => {
                self.push(ValidationError::Invalid {
                    field_name: field,
                    reason: message,
                });
                None
            }
            Err(other) => {
                self.push(ValidationError::Invalid {
                    field_name,
                    reason: other.to_string(),
                });
                None
            }
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Narrow a raw JSON integer to the positive `u32` range the domain expects.
///
/// Zero and negatives are reported as not positive; values above `u32::MAX`
/// saturate so the domain reports them as over the limit.
pub fn positive_units(raw: i64, field_name: &'static str) -> Result<u32, DomainError> {
    if raw <= 0 {
        return Err(DomainError::validation(
            field_name,
            format!("{} must be a positive number", field_name),
        ));
    }
    Ok(u32::try_from(raw).unwrap_or(u32::MAX))
}
