//! Quest state shared by movers and missions.
//!
//! Movers walk `RESTING -> LOADING -> ON_MISSION -> DONE` and may start a new
//! loading cycle from `DONE`. Missions are born in `LOADING` and only ever move
//! forward: `LOADING -> ON_MISSION -> DONE`.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle stage of a mover or a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestState {
    /// Mover with no mission yet. Never a mission state.
    #[default]
    Resting,
    /// Items are being loaded; the mission has not departed.
    Loading,
    /// Mission underway.
    OnMission,
    /// Mission finished. Terminal for missions.
    Done,
}

impl QuestState {
    /// All quest states in lifecycle order.
    pub fn all() -> &'static [QuestState] {
        &[
            QuestState::Resting,
            QuestState::Loading,
            QuestState::OnMission,
            QuestState::Done,
        ]
    }

    /// Wire name, e.g. `ON_MISSION`.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestState::Resting => "RESTING",
            QuestState::Loading => "LOADING",
            QuestState::OnMission => "ON_MISSION",
            QuestState::Done => "DONE",
        }
    }

    /// Whether a mission may move from `self` to `next`.
    pub fn can_advance_mission_to(&self, next: QuestState) -> bool {
        matches!(
            (self, next),
            (QuestState::Loading, QuestState::OnMission) | (QuestState::OnMission, QuestState::Done)
        )
    }
}

impl fmt::Display for QuestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestState::all()
            .iter()
            .copied()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown quest state: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_wire_names_only() {
        assert_eq!("ON_MISSION".parse::<QuestState>().unwrap(), QuestState::OnMission);
        assert_eq!("DONE".parse::<QuestState>().unwrap(), QuestState::Done);
        assert!("on_mission".parse::<QuestState>().is_err());
        assert!("".parse::<QuestState>().is_err());
    }

    #[test]
    fn serializes_in_screaming_snake_case() {
        let json = serde_json::to_string(&QuestState::OnMission).unwrap();
        assert_eq!(json, "\"ON_MISSION\"");
        let back: QuestState = serde_json::from_str("\"LOADING\"").unwrap();
        assert_eq!(back, QuestState::Loading);
    }

    #[test]
    fn mission_transitions_only_move_forward() {
        use QuestState::*;
        assert!(Loading.can_advance_mission_to(OnMission));
        assert!(OnMission.can_advance_mission_to(Done));

        assert!(!Loading.can_advance_mission_to(Done));
        assert!(!OnMission.can_advance_mission_to(Loading));
        assert!(!Done.can_advance_mission_to(Loading));
        assert!(!Done.can_advance_mission_to(OnMission));
        assert!(!Resting.can_advance_mission_to(Loading));
    }
}
