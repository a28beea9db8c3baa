//! Start mission use case.

use std::sync::Arc;

use magic_movers_domain::{Mission, MissionId, QuestState};

use crate::infrastructure::ports::{ChangeSet, MissionRepo, MoverRepo, UnitOfWork};
use crate::infrastructure::write_lock::WriteLock;

use super::error::MissionError;

/// Send a loaded mover out: `LOADING -> ON_MISSION` for mission and mover.
pub struct StartMission {
    mission_repo: Arc<dyn MissionRepo>,
    mover_repo: Arc<dyn MoverRepo>,
    unit_of_work: Arc<dyn UnitOfWork>,
    write_lock: Arc<WriteLock>,
}

impl StartMission {
    pub fn new(
        mission_repo: Arc<dyn MissionRepo>,
        mover_repo: Arc<dyn MoverRepo>,
        unit_of_work: Arc<dyn UnitOfWork>,
        write_lock: Arc<WriteLock>,
    ) -> Self {
        Self {
            mission_repo,
            mover_repo,
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
        if mission.start().is_err() {
            tracing::warn!(mission_id = %mission_id, state = %state, "Rejected mission start");
            return Err(MissionError::InvalidTransition {
                mission_id,
                state,
                target: QuestState::OnMission,
            });
        }

        let mover_id = mission.mover_id();
        let mut mover = self
            .mover_repo
            .get(mover_id)
            .await?
            .ok_or(MissionError::MoverNotFound(mover_id))?;
        let departure = mover.depart();

        self.unit_of_work
            .commit(ChangeSet::new().with_mission(mission.clone()).with_mover(mover))
            .await?;

        tracing::info!(
            mission_id = %mission_id,
            mover_id = %mover_id,
            from = %departure.from,
            to = %departure.to,
            "Mission started"
        );
        Ok(mission)
    }
}
