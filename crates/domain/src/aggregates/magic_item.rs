//! MagicItem aggregate - something a mover can carry

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{ItemName, Weight};
use crate::ItemId;

/// A magic item.
///
/// # Invariants
///
/// - `is_being_used` is true exactly while the item sits in a mission that
///   has not reached `DONE`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MagicItem {
    id: ItemId,
    name: ItemName,
    weight: Weight,
    is_being_used: bool,
}

impl MagicItem {
    pub fn new(name: ItemName, weight: Weight) -> Self {
        Self {
            id: ItemId::new(),
            name,
            weight,
            is_being_used: false,
        }
    }

    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = id;
        self
    }

    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &ItemName {
        &self.name
    }

    #[inline]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    #[inline]
    pub fn is_being_used(&self) -> bool {
        self.is_being_used
    }

    /// Reserve the item for a loading mission.
    pub fn reserve(&mut self) -> Result<(), DomainError> {
        if self.is_being_used {
            return Err(DomainError::constraint(format!(
                "Items {} is being used.",
                self.name
            )));
        }
        self.is_being_used = true;
        Ok(())
    }

    /// Hand the item back once its mission is over.
    pub fn release(&mut self) {
        self.is_being_used = false;
    }
}
