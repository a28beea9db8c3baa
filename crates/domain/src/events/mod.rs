//! Domain Events
//!
//! Return types from aggregate mutations, communicating what changed so the
//! engine can log and react.

mod quest_events;

pub use quest_events::QuestStateChange;
