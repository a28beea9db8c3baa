//! End mission use case.
//!
//! Closing a mission frees its cargo and credits the mover with one
//! completed mission.

use std::sync::Arc;

use magic_movers_domain::{Mission, MissionId, QuestState};

use crate::infrastructure::ports::{ChangeSet, ItemRepo, MissionRepo, MoverRepo, UnitOfWork};
use crate::infrastructure::write_lock::WriteLock;

use super::error::MissionError;

/// `ON_MISSION -> DONE` for mission and mover, releasing every carried item.
pub struct EndMission {
    mission_repo: Arc<dyn MissionRepo>,
    mover_repo: Arc<dyn MoverRepo>,
    item_repo: Arc<dyn ItemRepo>,
    unit_of_work: Arc<dyn UnitOfWork>,
    write_lock: Arc<WriteLock>,
}

impl EndMission {
    pub fn new(
        mission_repo: Arc<dyn MissionRepo>,
        mover_repo: Arc<dyn MoverRepo>,
        item_repo: Arc<dyn ItemRepo>,
        unit_of_work: Arc<dyn UnitOfWork>,
        write_lock: Arc<WriteLock>,
    ) -> Self {
        Self {
            mission_repo,
            mover_repo,
            item_repo,
            unit_of_work,
            write_lock,
        }
    }

    pub async fn execute(&self, mission_id: MissionId) -> Result<Mission, MissionError> {
        let _guard = self.write_lock.acquire().await;

        let mut mission = self
            .mission_repo
            .get(mission_id)
            .await?
            .ok_or(MissionError::MissionNotFound(mission_id))?;

        let state = mission.quest_state();
        if mission.end().is_err() {
            tracing::warn!(mission_id = %mission_id, state = %state, "Rejected mission end");
            return Err(MissionError::InvalidTransition {
                mission_id,
                state,
                target: QuestState::Done,
            });
        }

        let mover_id = mission.mover_id();
        let mut mover = self
            .mover_repo
            .get(mover_id)
            .await?
            .ok_or(MissionError::MoverNotFound(mover_id))?;
        let arrival = mover.complete_mission();

        // Items deleted since loading are simply skipped.
        let mut items = self.item_repo.get_many(mission.items_ids()).await?;
        for item in &mut items {
            item.release();
        }
        let released = items.len();

        self.unit_of_work
            .commit(
                ChangeSet::new()
                    .with_mission(mission.clone())
                    .with_mover(mover)
                    .with_items(items),
            )
            .await?;

        tracing::info!(
            mission_id = %mission_id,
            mover_id = %mover_id,
            released_items = released,
            from = %arrival.from,
            to = %arrival.to,
            "Mission completed"
        );
        Ok(mission)
    }
}
