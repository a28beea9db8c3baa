//! Seeds a real JSON store in a temporary directory.

use std::sync::Arc;

use tempfile::TempDir;

use magic_movers_domain::{MagicItem, Mission, Mover};

use crate::infrastructure::persistence::JsonFileStore;
use crate::infrastructure::ports::{ChangeSet, UnitOfWork};

/// A store plus the directory keeping it alive.
pub struct SeededStore {
    pub dir: TempDir,
    pub store: Arc<JsonFileStore>,
}

impl SeededStore {
    /// Empty store in a fresh temporary directory.
    pub async fn empty() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let store = JsonFileStore::open(dir.path())
            .await
            .expect("open json store");
        Self {
            dir,
            store: Arc::new(store),
        }
    }

    /// Store pre-populated with the given entities.
    pub async fn with(movers: Vec<Mover>, items: Vec<MagicItem>, missions: Vec<Mission>) -> Self {
        let seeded = Self::empty().await;
        seeded
            .store
            .commit(ChangeSet {
                movers,
                items,
                missions,
            })
            .await
            .expect("seed json store");
        seeded
    }

    /// Re-read the data directory from disk.
    pub async fn reopen(&self) -> JsonFileStore {
        JsonFileStore::open(self.dir.path())
            .await
            .expect("reopen json store")
    }
}
