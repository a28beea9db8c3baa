//! Quest lifecycle events

use crate::types::QuestState;

/// Outcome of moving a mover or mission to a new quest state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestStateChange {
    pub from: QuestState,
    pub to: QuestState,
}

impl QuestStateChange {
    /// Whether the state actually moved.
    pub fn is_change(&self) -> bool {
        self.from != self.to
    }
}
