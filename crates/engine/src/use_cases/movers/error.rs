//! Mover operation errors.

use magic_movers_domain::{DomainError, ItemId, MoverId};

use crate::infrastructure::ports::RepoError;
use crate::use_cases::validation::ValidationErrors;

/// Errors that can occur during mover operations.
#[derive(Debug, thiserror::Error)]
pub enum MoverError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Mover name already used: {0}")]
    NameTaken(String),
    #[error("Mover not found: {0}")]
    MoverNotFound(MoverId),
    #[error("Mover {0} is on another mission")]
    MoverOnMission(MoverId),
    #[error("Item {name} ({item_id}) is being used")]
    ItemInUse { item_id: ItemId, name: String },
    /// `incremental` is set when items already on the mission count toward `total`.
    #[error("Items weight {total} exceeds the mover capacity {limit}")]
    CapacityExceeded {
        total: u32,
        limit: u32,
        incremental: bool,
    },
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl MoverError {
    /// Keep a capacity refusal distinguishable from other domain errors.
    pub(super) fn over_capacity(err: DomainError, incremental: bool) -> Self {
        match err {
            DomainError::CapacityExceeded { total, limit } => Self::CapacityExceeded {
                total,
                limit,
                incremental,
            },
            other => Self::Domain(other),
        }
    }
}
