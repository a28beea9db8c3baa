//! Load mover use case.
//!
//! A mover can be loaded across any number of requests before it departs.
//! The first load of a cycle opens a `LOADING` mission; later loads add to
//! that same mission. Capacity is always checked against the cumulative
//! load, never just the items of the current request.

use std::sync::Arc;

use magic_movers_domain::{ItemId, MagicItem, Mission, Mover, MoverId, QuestState, Weight};

use crate::infrastructure::ports::{ChangeSet, ItemRepo, MissionRepo, MoverRepo, UnitOfWork};
use crate::infrastructure::write_lock::WriteLock;
use crate::use_cases::validation::{ValidationError, ValidationErrors};

use super::error::MoverError;

/// Field name of the requested item list.
const ITEMS_FIELD: &str = "magicItemsIds";

/// Validate the raw `magicItemsIds` list of a load request.
///
/// The list must be present and non-empty. Entries that are not UUIDs cannot
/// name an item, so they are dropped the same way unknown IDs are.
pub fn parse_item_ids(raw: Option<Vec<String>>) -> Result<Vec<ItemId>, ValidationErrors> {
    let raw = match raw {
        None => {
            return Err(ValidationErrors::single(ValidationError::Required {
                field_name: ITEMS_FIELD,
            }))
        }
        Some(raw) if raw.is_empty() => {
            return Err(ValidationErrors::single(ValidationError::Invalid {
                field_name: ITEMS_FIELD,
                reason: format!("{ITEMS_FIELD} must contain at least 1 items"),
            }))
        }
        Some(raw) => raw,
    };

    let mut ids: Vec<ItemId> = Vec::with_capacity(raw.len());
    for id in raw.iter().filter_map(|s| s.trim().parse::<uuid::Uuid>().ok()) {
        let id = ItemId::from_uuid(id);
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

/// Load mover use case.
///
/// Orchestrates: mover state check, item resolution and exclusivity,
/// find-or-create of the loading mission, cumulative capacity check, and one
/// commit covering mission, items and mover.
pub struct LoadMover {
    mover_repo: Arc<dyn MoverRepo>,
    item_repo: Arc<dyn ItemRepo>,
    mission_repo: Arc<dyn MissionRepo>,
    unit_of_work: Arc<dyn UnitOfWork>,
    write_lock: Arc<WriteLock>,
}

impl LoadMover {
    pub fn new(
        mover_repo: Arc<dyn MoverRepo>,
        item_repo: Arc<dyn ItemRepo>,
        mission_repo: Arc<dyn MissionRepo>,
        unit_of_work: Arc<dyn UnitOfWork>,
        write_lock: Arc<WriteLock>,
    ) -> Self {
        Self {
            mover_repo,
            item_repo,
            mission_repo,
            unit_of_work,
            write_lock,
        }
    }

    /// Execute the load mover use case.
    ///
    /// # Arguments
    /// * `mover_id` - The mover being loaded
    /// * `requested` - Items to put on board; unknown IDs are ignored
    ///
    /// # Returns
    /// * `Ok(Mission)` - The new or updated `LOADING` mission
    /// * `Err(MoverError)` - Nothing was changed
    pub async fn execute(
        &self,
        mover_id: MoverId,
        requested: &[ItemId],
    ) -> Result<Mission, MoverError> {
        let _guard = self.write_lock.acquire().await;

        let mut mover = self
            .mover_repo
            .get(mover_id)
            .await?
            .ok_or(MoverError::MoverNotFound(mover_id))?;

        if mover.ensure_can_load().is_err() {
            tracing::warn!(mover_id = %mover_id, "Rejected load for mover on a mission");
            return Err(MoverError::MoverOnMission(mover_id));
        }

        let mut items = self.item_repo.get_many(requested).await?;

        if let Some(in_use) = items.iter().find(|i| i.is_being_used()) {
            tracing::warn!(
                mover_id = %mover_id,
                item_id = %in_use.id(),
                "Rejected load of item already in use"
            );
            return Err(MoverError::ItemInUse {
                item_id: in_use.id(),
                name: in_use.name().to_string(),
            });
        }

        let mission = match self.mission_repo.find_loading_for_mover(mover_id).await? {
            None => self.open_mission(&mover, &items)?,
            Some(existing) => self.extend_mission(&mover, existing, &items).await?,
        };

        for item in &mut items {
            item.reserve()?;
        }

        let mut changes = ChangeSet::new().with_mission(mission.clone()).with_items(items);
        if mover.quest_state() != QuestState::Loading {
            mover.start_loading()?;
        }
        changes = changes.with_mover(mover);

        self.unit_of_work.commit(changes).await?;

        tracing::info!(
            mover_id = %mover_id,
            mission_id = %mission.id(),
            items = mission.items_ids().len(),
            "Loaded mover"
        );
        Ok(mission)
    }

    /// First load of a cycle: only the requested items count.
    fn open_mission(&self, mover: &Mover, items: &[MagicItem]) -> Result<Mission, MoverError> {
        let total = Weight::total(items.iter().map(MagicItem::weight));
        mover
            .ensure_can_carry(total)
            .map_err(|e| MoverError::over_capacity(e, false))?;

        let mission = Mission::open(mover.id(), items.iter().map(MagicItem::id));
        tracing::debug!(mission_id = %mission.id(), total_weight = total, "Opened loading mission");
        Ok(mission)
    }

    /// Incremental load: previously accepted items are re-weighed too.
    async fn extend_mission(
        &self,
        mover: &Mover,
        mut mission: Mission,
        items: &[MagicItem],
    ) -> Result<Mission, MoverError> {
        let already_loaded = self.item_repo.get_many(mission.items_ids()).await?;
        let total = Weight::total(
            already_loaded
                .iter()
                .chain(items.iter())
                .map(MagicItem::weight),
        );
        mover
            .ensure_can_carry(total)
            .map_err(|e| MoverError::over_capacity(e, true))?;

        mission.add_items(items.iter().map(MagicItem::id))?;
        tracing::debug!(mission_id = %mission.id(), total_weight = total, "Extended loading mission");
        Ok(mission)
    }
}
