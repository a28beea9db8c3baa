//! Helper types for port operations.

use magic_movers_domain::{MagicItem, Mission, Mover};

/// Entities touched by one logical operation, committed together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub movers: Vec<Mover>,
    pub items: Vec<MagicItem>,
    pub missions: Vec<Mission>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mover(mut self, mover: Mover) -> Self {
        self.movers.push(mover);
        self
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = MagicItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn with_mission(mut self, mission: Mission) -> Self {
        self.missions.push(mission);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.movers.is_empty() && self.items.is_empty() && self.missions.is_empty()
    }
}
