//! List missions use case, optionally filtered by quest state.

use std::sync::Arc;

use magic_movers_domain::{Mission, QuestState};

use crate::infrastructure::ports::MissionRepo;

use super::error::MissionError;

pub struct ListMissions {
    mission_repo: Arc<dyn MissionRepo>,
}

impl ListMissions {
    pub fn new(mission_repo: Arc<dyn MissionRepo>) -> Self {
        Self { mission_repo }
    }

    /// `None` lists everything. A filter must name a quest state exactly.
    pub async fn execute(&self, state: Option<&str>) -> Result<Vec<Mission>, MissionError> {
        let filter = state.map(parse_state_filter).transpose()?;
        let missions = self.mission_repo.list(filter).await?;
        tracing::debug!(state = ?filter, count = missions.len(), "Listed missions");
        Ok(missions)
    }
}

fn parse_state_filter(raw: &str) -> Result<QuestState, MissionError> {
    raw.parse::<QuestState>().map_err(|_| {
        tracing::warn!(state = raw, "Rejected unknown mission state filter");
        MissionError::UnknownStateFilter {
            allowed: QuestState::all()
                .iter()
                .map(QuestState::as_str)
                .collect::<Vec<_>>()
                .join(" | "),
        }
    })
}
