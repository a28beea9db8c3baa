//! Repository port traits for storage access.

use async_trait::async_trait;
use magic_movers_domain::{ItemId, MagicItem, Mission, MissionId, Mover, MoverId, QuestState};

use super::error::RepoError;
use super::types::ChangeSet;

// =============================================================================
// Entity Ports (one per collection)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MoverRepo: Send + Sync {
    async fn get(&self, id: MoverId) -> Result<Option<Mover>, RepoError>;
    /// All movers in insertion order.
    async fn list(&self) -> Result<Vec<Mover>, RepoError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Mover>, RepoError>;
    async fn save(&self, mover: &Mover) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepo: Send + Sync {
    async fn get(&self, id: ItemId) -> Result<Option<MagicItem>, RepoError>;
    /// All items in insertion order.
    async fn list(&self) -> Result<Vec<MagicItem>, RepoError>;
    /// Items whose ID is in `ids`, in store order. Unknown IDs are skipped.
    async fn get_many(&self, ids: &[ItemId]) -> Result<Vec<MagicItem>, RepoError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<MagicItem>, RepoError>;
    async fn save(&self, item: &MagicItem) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MissionRepo: Send + Sync {
    async fn get(&self, id: MissionId) -> Result<Option<Mission>, RepoError>;
    /// Missions in insertion order, optionally only those in `state`.
    async fn list(&self, state: Option<QuestState>) -> Result<Vec<Mission>, RepoError>;
    /// The mover's mission that is still `LOADING`, if any.
    async fn find_loading_for_mover(&self, mover_id: MoverId)
        -> Result<Option<Mission>, RepoError>;
    async fn save(&self, mission: &Mission) -> Result<(), RepoError>;
}

// =============================================================================
// Multi-collection writes
// =============================================================================

/// Applies a batch of upserts across collections as one unit.
///
/// Either every entity in the change set is stored or none is.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    async fn commit(&self, changes: ChangeSet) -> Result<(), RepoError>;
}
