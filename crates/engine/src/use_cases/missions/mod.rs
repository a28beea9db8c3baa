//! Mission lifecycle use cases.

use std::sync::Arc;

mod end_mission;
mod error;
mod list_missions;
mod start_mission;

pub use end_mission::EndMission;
pub use error::MissionError;
pub use list_missions::ListMissions;
pub use start_mission::StartMission;

/// Container for mission use cases.
pub struct MissionUseCases {
    pub start: Arc<StartMission>,
    pub end: Arc<EndMission>,
    pub list: Arc<ListMissions>,
}

impl MissionUseCases {
    pub fn new(start: Arc<StartMission>, end: Arc<EndMission>, list: Arc<ListMissions>) -> Self {
        Self { start, end, list }
    }
}
