//! Mission operation errors.

use magic_movers_domain::{DomainError, MissionId, MoverId, QuestState};

use crate::infrastructure::ports::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum MissionError {
    #[error("State should be on of ({allowed})")]
    UnknownStateFilter { allowed: String },
    #[error("Mission not found: {0}")]
    MissionNotFound(MissionId),
    #[error("Mission {mission_id} is {state}, cannot move to {target}")]
    InvalidTransition {
        mission_id: MissionId,
        state: QuestState,
        target: QuestState,
    },
    #[error("Mover not found: {0}")]
    MoverNotFound(MoverId),
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
