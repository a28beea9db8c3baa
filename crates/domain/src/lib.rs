//! Magic Movers Domain - core types, value objects and invariants.
//!
//! Pure data and rules: no I/O, no async. The engine crate wires these
//! aggregates to storage and HTTP.

pub mod aggregates;
pub mod error;
pub mod events;
pub mod ids;
pub mod types;
pub mod value_objects;

pub use aggregates::{MagicItem, Mission, Mover};
pub use error::DomainError;
pub use events::QuestStateChange;
pub use ids::{ItemId, MissionId, MoverId};
pub use types::QuestState;
pub use value_objects::{Energy, ItemName, MoverName, Weight, MAX_NAME_LENGTH, MAX_UNITS, MIN_NAME_LENGTH};
