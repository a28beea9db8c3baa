//! Create mover use case.

use std::sync::Arc;

use magic_movers_domain::{Energy, Mover, MoverName, Weight};

use crate::infrastructure::ports::MoverRepo;
use crate::infrastructure::write_lock::WriteLock;
use crate::use_cases::validation::{positive_units, ValidationErrors};

use super::error::MoverError;

/// Raw creation input as received from the API.
#[derive(Debug, Clone, Default)]
pub struct CreateMoverInput {
    pub name: Option<String>,
    pub weight_limit: Option<i64>,
    pub energy: Option<i64>,
}

/// Create mover use case.
///
/// Orchestrates: field validation, name uniqueness, persistence.
pub struct CreateMover {
    mover_repo: Arc<dyn MoverRepo>,
    write_lock: Arc<WriteLock>,
}

impl CreateMover {
    pub fn new(mover_repo: Arc<dyn MoverRepo>, write_lock: Arc<WriteLock>) -> Self {
        Self {
            mover_repo,
            write_lock,
        }
    }

    /// Execute the create mover use case.
    ///
    /// # Returns
    /// * `Ok(Mover)` - The stored mover, `RESTING` with no completed missions
    /// * `Err(MoverError::Validation)` - One or more fields are invalid
    /// * `Err(MoverError::NameTaken)` - Another mover already has this name
    pub async fn execute(&self, input: CreateMoverInput) -> Result<Mover, MoverError> {
        let mut errors = ValidationErrors::new();

        let name = errors
            .require(input.name, "name")
            .and_then(|n| errors.check(MoverName::new(n), "name"));
        let weight_limit = errors
            .require(input.weight_limit, "weightLimit")
            .and_then(|raw| {
                errors.check(
                    positive_units(raw, "weightLimit").and_then(|v| Weight::new(v, "weightLimit")),
                    "weightLimit",
                )
            });
        let energy = errors.require(input.energy, "energy").and_then(|raw| {
            errors.check(
                positive_units(raw, "energy").and_then(|v| Energy::new(v, "energy")),
                "energy",
            )
        });

        let (Some(name), Some(weight_limit), Some(energy)) = (name, weight_limit, energy) else {
            return Err(MoverError::Validation(errors));
        };

        let _guard = self.write_lock.acquire().await;

        if self.mover_repo.find_by_name(name.as_str()).await?.is_some() {
            tracing::warn!(name = %name, "Rejected mover with duplicate name");
            return Err(MoverError::NameTaken(name.to_string()));
        }

        let mover = Mover::new(name, weight_limit, energy);
        self.mover_repo.save(&mover).await?;

        tracing::info!(mover_id = %mover.id(), name = %mover.name(), "Created mover");
        Ok(mover)
    }
}
