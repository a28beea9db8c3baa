//! Mover aggregate - the carrier that executes missions
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: state changes only through lifecycle methods
//! - **Newtypes**: `MoverName`, `Weight`, `Energy` are valid by construction
//! - **Internal bookkeeping**: `completed_missions_count` is persisted but
//!   never part of any outward-facing representation

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::events::QuestStateChange;
use crate::types::QuestState;
use crate::value_objects::{Energy, MoverName, Weight};
use crate::MoverId;

/// A magic mover.
///
/// # Invariants
///
/// - `name` is 3-50 characters (enforced by `MoverName`)
/// - `weight_limit` and `energy` are in `1..=500`
/// - `completed_missions_count` only ever grows, by one per finished mission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mover {
    id: MoverId,
    name: MoverName,
    weight_limit: Weight,
    energy: Energy,
    quest_state: QuestState,
    #[serde(default)]
    completed_missions_count: u32,
}

impl Mover {
    /// Create a new resting mover with no completed missions.
    pub fn new(name: MoverName, weight_limit: Weight, energy: Energy) -> Self {
        Self {
            id: MoverId::new(),
            name,
            weight_limit,
            energy,
            quest_state: QuestState::Resting,
            completed_missions_count: 0,
        }
    }

    /// Replace the generated ID (fixtures and imports).
    pub fn with_id(mut self, id: MoverId) -> Self {
        self.id = id;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> MoverId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &MoverName {
        &self.name
    }

    #[inline]
    pub fn weight_limit(&self) -> Weight {
        self.weight_limit
    }

    #[inline]
    pub fn energy(&self) -> Energy {
        self.energy
    }

    #[inline]
    pub fn quest_state(&self) -> QuestState {
        self.quest_state
    }

    #[inline]
    pub fn completed_missions_count(&self) -> u32 {
        self.completed_missions_count
    }

    // =========================================================================
    // Loading rules
    // =========================================================================

    /// Loading is refused only while the mover is away on a mission.
    ///
    /// `RESTING`, `LOADING` (incremental load) and `DONE` (new cycle) all accept
    /// more items.
    pub fn ensure_can_load(&self) -> Result<(), DomainError> {
        if self.quest_state == QuestState::OnMission {
            return Err(DomainError::constraint("The mover is on another mission."));
        }
        Ok(())
    }

    /// Check a cumulative load against the weight limit.
    pub fn ensure_can_carry(&self, total_weight: u32) -> Result<(), DomainError> {
        let limit = self.weight_limit.value();
        if total_weight > limit {
            return Err(DomainError::capacity_exceeded(total_weight, limit));
        }
        Ok(())
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Enter the loading stage of a new mission.
    pub fn start_loading(&mut self) -> Result<QuestStateChange, DomainError> {
        self.ensure_can_load()?;
        Ok(self.transition(QuestState::Loading))
    }

    /// Follow the mission out on the road.
    pub fn depart(&mut self) -> QuestStateChange {
        self.transition(QuestState::OnMission)
    }

    /// Finish the current mission and count it.
    pub fn complete_mission(&mut self) -> QuestStateChange {
        self.completed_missions_count = self.completed_missions_count.saturating_add(1);
        self.transition(QuestState::Done)
    }

    fn transition(&mut self, to: QuestState) -> QuestStateChange {
        let from = self.quest_state;
        self.quest_state = to;
        QuestStateChange { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mover(limit: u32) -> Mover {
        Mover::new(
            MoverName::new("M1-mover").unwrap(),
            Weight::new(limit, "weightLimit").unwrap(),
            Energy::new(10, "energy").unwrap(),
        )
    }

    #[test]
    fn new_mover_is_resting_with_no_missions() {
        let m = mover(100);
        assert_eq!(m.quest_state(), QuestState::Resting);
        assert_eq!(m.completed_missions_count(), 0);
    }

    #[test]
    fn cannot_load_while_on_mission() {
        let mut m = mover(100);
        m.start_loading().unwrap();
        m.depart();
        assert!(matches!(
            m.start_loading(),
            Err(DomainError::Constraint(_))
        ));
        assert_eq!(m.quest_state(), QuestState::OnMission);
    }

    #[test]
    fn done_mover_may_start_a_new_cycle() {
        let mut m = mover(100);
        m.start_loading().unwrap();
        m.depart();
        m.complete_mission();
        let change = m.start_loading().unwrap();
        assert_eq!(change.from, QuestState::Done);
        assert_eq!(change.to, QuestState::Loading);
    }

    #[test]
    fn complete_mission_counts_exactly_once() {
        let mut m = mover(100);
        m.start_loading().unwrap();
        m.depart();
        m.complete_mission();
        assert_eq!(m.completed_missions_count(), 1);
        assert_eq!(m.quest_state(), QuestState::Done);
    }

    #[test]
    fn capacity_check_is_inclusive() {
        let m = mover(100);
        assert!(m.ensure_can_carry(100).is_ok());
        assert_eq!(
            m.ensure_can_carry(110),
            Err(DomainError::capacity_exceeded(110, 100))
        );
    }

    #[test]
    fn persisted_shape_is_camel_case() {
        let m = mover(100);
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["weightLimit"], 100);
        assert_eq!(json["questState"], "RESTING");
        assert_eq!(json["completedMissionsCount"], 0);
    }
}
