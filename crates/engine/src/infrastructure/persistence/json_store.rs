//! JSON file store implementing every repository port.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;

use magic_movers_domain::{ItemId, MagicItem, Mission, MissionId, Mover, MoverId, QuestState};

use crate::infrastructure::ports::{
    ChangeSet, ItemRepo, MissionRepo, MoverRepo, RepoError, UnitOfWork,
};

pub const MOVERS_FILE: &str = "magicMovers.json";
pub const ITEMS_FILE: &str = "magicItems.json";
pub const MISSIONS_FILE: &str = "missions.json";

#[derive(Debug, Clone, Default)]
struct Collections {
    movers: Vec<Mover>,
    items: Vec<MagicItem>,
    missions: Vec<Mission>,
}

/// Which collection files a change set must rewrite.
#[derive(Debug, Clone, Copy)]
struct Touched {
    movers: bool,
    items: bool,
    missions: bool,
}

impl Touched {
    fn of(changes: &ChangeSet) -> Self {
        Self {
            movers: !changes.movers.is_empty(),
            items: !changes.items.is_empty(),
            missions: !changes.missions.is_empty(),
        }
    }
}

/// File-backed store for movers, items and missions.
///
/// Collections are cached in memory behind a lock; files are only read at
/// [`JsonFileStore::open`]. Writes replace a whole file through a temporary
/// file and a rename, so a reader never sees a half-written document.
pub struct JsonFileStore {
    dir: PathBuf,
    state: RwLock<Collections>,
}

impl JsonFileStore {
    /// Open (creating if needed) the data directory and load all collections.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, RepoError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| RepoError::io("create_data_dir", e))?;

        let state = Collections {
            movers: load_collection(&dir.join(MOVERS_FILE)).await?,
            items: load_collection(&dir.join(ITEMS_FILE)).await?,
            missions: load_collection(&dir.join(MISSIONS_FILE)).await?,
        };

        tracing::info!(
            data_dir = %dir.display(),
            movers = state.movers.len(),
            items = state.items.len(),
            missions = state.missions.len(),
            "Loaded JSON store"
        );

        Ok(Self {
            dir,
            state: RwLock::new(state),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.dir
    }

    async fn persist(&self, state: &Collections, touched: Touched) -> Result<(), RepoError> {
        if touched.missions {
            write_collection(&self.dir.join(MISSIONS_FILE), &state.missions).await?;
        }
        if touched.items {
            write_collection(&self.dir.join(ITEMS_FILE), &state.items).await?;
        }
        if touched.movers {
            write_collection(&self.dir.join(MOVERS_FILE), &state.movers).await?;
        }
        Ok(())
    }
}

async fn load_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, RepoError> {
    match tokio::fs::read(path).await {
        Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Vec::new()),
        Ok(bytes) => serde_json::from_slice(&bytes)
            .map_err(|e| RepoError::serialization(format!("{}: {}", path.display(), e))),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tokio::fs::write(path, b"[]")
                .await
                .map_err(|e| RepoError::io("create_collection", e))?;
            Ok(Vec::new())
        }
        Err(e) => Err(RepoError::io("read_collection", e)),
    }
}

async fn write_collection<T: Serialize>(path: &Path, records: &[T]) -> Result<(), RepoError> {
    let bytes = serde_json::to_vec_pretty(records).map_err(RepoError::serialization)?;
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, bytes)
        .await
        .map_err(|e| RepoError::io("write_collection", e))?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|e| RepoError::io("replace_collection", e))
}

fn upsert<T, K: PartialEq>(records: &mut Vec<T>, record: T, key: impl Fn(&T) -> K) {
    let wanted = key(&record);
    match records.iter_mut().find(|existing| key(existing) == wanted) {
        Some(slot) => *slot = record,
        None => records.push(record),
    }
}

#[async_trait]
impl UnitOfWork for JsonFileStore {
    async fn commit(&self, changes: ChangeSet) -> Result<(), RepoError> {
        if changes.is_empty() {
            return Ok(());
        }

        let touched = Touched::of(&changes);
        let mut state = self.state.write().await;
        let previous = state.clone();

        for mover in changes.movers {
            upsert(&mut state.movers, mover, Mover::id);
        }
        for item in changes.items {
            upsert(&mut state.items, item, MagicItem::id);
        }
        for mission in changes.missions {
            upsert(&mut state.missions, mission, Mission::id);
        }

        if let Err(e) = self.persist(&state, touched).await {
            tracing::error!(error = %e, "Failed to persist change set, rolling back");
            *state = previous;
            if let Err(restore) = self.persist(&state, touched).await {
                tracing::error!(error = %restore, "Failed to restore collection files");
            }
            return Err(e);
        }

        Ok(())
    }
}

#[async_trait]
impl MoverRepo for JsonFileStore {
    async fn get(&self, id: MoverId) -> Result<Option<Mover>, RepoError> {
        let state = self.state.read().await;
        Ok(state.movers.iter().find(|m| m.id() == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Mover>, RepoError> {
        Ok(self.state.read().await.movers.clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Mover>, RepoError> {
        let state = self.state.read().await;
        Ok(state.movers.iter().find(|m| m.name().as_str() == name).cloned())
    }

    async fn save(&self, mover: &Mover) -> Result<(), RepoError> {
        self.commit(ChangeSet::new().with_mover(mover.clone())).await
    }
}

#[async_trait]
impl ItemRepo for JsonFileStore {
    async fn get(&self, id: ItemId) -> Result<Option<MagicItem>, RepoError> {
        let state = self.state.read().await;
        Ok(state.items.iter().find(|i| i.id() == id).cloned())
    }

    async fn list(&self) -> Result<Vec<MagicItem>, RepoError> {
        Ok(self.state.read().await.items.clone())
    }

    async fn get_many(&self, ids: &[ItemId]) -> Result<Vec<MagicItem>, RepoError> {
        let state = self.state.read().await;
        Ok(state
            .items
            .iter()
            .filter(|i| ids.contains(&i.id()))
            .cloned()
            .collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<MagicItem>, RepoError> {
        let state = self.state.read().await;
        Ok(state.items.iter().find(|i| i.name().as_str() == name).cloned())
    }

    async fn save(&self, item: &MagicItem) -> Result<(), RepoError> {
        self.commit(ChangeSet::new().with_items([item.clone()])).await
    }
}

#[async_trait]
impl MissionRepo for JsonFileStore {
    async fn get(&self, id: MissionId) -> Result<Option<Mission>, RepoError> {
        let state = self.state.read().await;
        Ok(state.missions.iter().find(|m| m.id() == id).cloned())
    }

    async fn list(&self, state_filter: Option<QuestState>) -> Result<Vec<Mission>, RepoError> {
        let state = self.state.read().await;
        Ok(state
            .missions
            .iter()
            .filter(|m| state_filter.map_or(true, |s| m.quest_state() == s))
            .cloned()
            .collect())
    }

    async fn find_loading_for_mover(
        &self,
        mover_id: MoverId,
    ) -> Result<Option<Mission>, RepoError> {
        let state = self.state.read().await;
        Ok(state
            .missions
            .iter()
            .find(|m| m.mover_id() == mover_id && m.quest_state() == QuestState::Loading)
            .cloned())
    }

    async fn save(&self, mission: &Mission) -> Result<(), RepoError> {
        self.commit(ChangeSet::new().with_mission(mission.clone())).await
    }
}
