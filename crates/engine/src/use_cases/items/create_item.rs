//! Create magic item use case.

use std::sync::Arc;

use magic_movers_domain::{ItemName, MagicItem, Weight};

use crate::infrastructure::ports::ItemRepo;
use crate::infrastructure::write_lock::WriteLock;
use crate::use_cases::validation::{positive_units, ValidationErrors};

use super::error::ItemError;

#[derive(Debug, Clone, Default)]
pub struct CreateItemInput {
    pub name: Option<String>,
    pub weight: Option<i64>,
}

/// Create magic item use case.
pub struct CreateItem {
    item_repo: Arc<dyn ItemRepo>,
    write_lock: Arc<WriteLock>,
}

impl CreateItem {
    pub fn new(item_repo: Arc<dyn ItemRepo>, write_lock: Arc<WriteLock>) -> Self {
        Self {
            item_repo,
            write_lock,
        }
    }

    /// Validate and store a new, unused item.
    pub async fn execute(&self, input: CreateItemInput) -> Result<MagicItem, ItemError> {
        let mut errors = ValidationErrors::new();

        let name = errors
            .require(input.name, "name")
            .and_then(|n| errors.check(ItemName::new(n), "name"));
        let weight = errors.require(input.weight, "weight").and_then(|raw| {
            errors.check(
                positive_units(raw, "weight").and_then(|v| Weight::new(v, "weight")),
                "weight",
            )
        });

        let (Some(name), Some(weight)) = (name, weight) else {
            return Err(ItemError::Validation(errors));
        };

        let _guard = self.write_lock.acquire().await;

        if self.item_repo.find_by_name(name.as_str()).await?.is_some() {
            tracing::warn!(name = %name, "Rejected item with duplicate name");
            return Err(ItemError::NameTaken(name.to_string()));
        }

        let item = MagicItem::new(name, weight);
        self.item_repo.save(&item).await?;

        tracing::info!(item_id = %item.id(), name = %item.name(), weight = item.weight().value(), "Created magic item");
        Ok(item)
    }
}
