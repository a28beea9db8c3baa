//! Mission aggregate - a batch of items travelling with one mover
//!
//! Missions are created already `LOADING`, collect items across any number of
//! load requests and then move strictly forward:
//!
//! ```text
//! LOADING --start--> ON_MISSION --end--> DONE
//! ```

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::events::QuestStateChange;
use crate::types::QuestState;
use crate::{ItemId, MissionId, MoverId};

/// A mission.
///
/// # Invariants
///
/// - `quest_state` is never `RESTING`
/// - `items_ids` holds each item at most once, in load order
/// - Items can only be added while `LOADING`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    id: MissionId,
    mover_id: MoverId,
    items_ids: Vec<ItemId>,
    quest_state: QuestState,
}

impl Mission {
    /// Open a new loading mission for `mover_id`.
    pub fn open(mover_id: MoverId, items: impl IntoIterator<Item = ItemId>) -> Self {
        let mut mission = Self {
            id: MissionId::new(),
            mover_id,
            items_ids: Vec::new(),
            quest_state: QuestState::Loading,
        };
        mission.push_unique(items);
        mission
    }

    pub fn with_id(mut self, id: MissionId) -> Self {
        self.id = id;
        self
    }

    #[inline]
    pub fn id(&self) -> MissionId {
        self.id
    }

    #[inline]
    pub fn mover_id(&self) -> MoverId {
        self.mover_id
    }

    #[inline]
    pub fn items_ids(&self) -> &[ItemId] {
        &self.items_ids
    }

    #[inline]
    pub fn quest_state(&self) -> QuestState {
        self.quest_state
    }

    pub fn is_active(&self) -> bool {
        self.quest_state != QuestState::Done
    }

    /// Add items to a loading mission, skipping ones already on board.
    ///
    /// Returns the IDs that were actually new.
    pub fn add_items(
        &mut self,
        items: impl IntoIterator<Item = ItemId>,
    ) -> Result<Vec<ItemId>, DomainError> {
        if self.quest_state != QuestState::Loading {
            return Err(DomainError::invalid_state_transition(format!(
                "cannot add items to a mission in the {} state",
                self.quest_state
            )));
        }
        Ok(self.push_unique(items))
    }

    /// `LOADING -> ON_MISSION`.
    pub fn start(&mut self) -> Result<QuestStateChange, DomainError> {
        self.advance(QuestState::OnMission)
    }

    /// `ON_MISSION -> DONE`.
    pub fn end(&mut self) -> Result<QuestStateChange, DomainError> {
        self.advance(QuestState::Done)
    }

    fn advance(&mut self, to: QuestState) -> Result<QuestStateChange, DomainError> {
        let from = self.quest_state;
        if !from.can_advance_mission_to(to) {
            return Err(DomainError::invalid_state_transition(format!(
                "mission {} is {}, cannot move to {}",
                self.id, from, to
            )));
        }
        self.quest_state = to;
        Ok(QuestStateChange { from, to })
    }

    fn push_unique(&mut self, items: impl IntoIterator<Item = ItemId>) -> Vec<ItemId> {
        let mut added = Vec::new();
        for id in items {
            if !self.items_ids.contains(&id) {
                self.items_ids.push(id);
                added.push(id);
            }
        }
        added
    }
}
