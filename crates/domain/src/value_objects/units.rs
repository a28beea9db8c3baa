//! Bounded positive integers used for weights and energy.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Upper bound shared by weights, weight limits and energy.
pub const MAX_UNITS: u32 = 500;

macro_rules! define_units {
    ($name:ident, $what:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "u32", into = "u32")]
        pub struct $name(u32);

        impl $name {
            /// Validate a raw value reported under `field`.
            pub fn new(value: u32, field: &'static str) -> Result<Self, DomainError> {
                if value == 0 {
                    return Err(DomainError::validation(
                        field,
                        format!("{} must be a positive number", field),
                    ));
                }
                if value > MAX_UNITS {
                    return Err(DomainError::validation(
                        field,
                        format!("{} must be less than or equal to {}", field, MAX_UNITS),
                    ));
                }
                Ok(Self(value))
            }

            pub fn value(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<u32> for $name {
            type Error = DomainError;

            fn try_from(value: u32) -> Result<Self, Self::Error> {
                Self::new(value, $what)
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> u32 {
                value.0
            }
        }
    };
}

define_units!(Weight, "weight");
define_units!(Energy, "energy");

impl Weight {
    /// Sum a sequence of weights. Saturates instead of wrapping.
    pub fn total<I>(weights: I) -> u32
    where
        I: IntoIterator<Item = Weight>,
    {
        weights
            .into_iter()
            .fold(0u32, |acc, w| acc.saturating_add(w.value()))
    }
}
