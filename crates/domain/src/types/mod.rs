//! # Magic Movers Domain Types
//!
//! Shared vocabulary types used by the aggregates and by the wire protocol.
//!
//! ## Design Principles
//!
//! 1. **Pure data types** - No I/O, no async, no side effects
//! 2. **Stable API** - Changes here affect both domain and protocol
//! 3. **Serializable** - All types derive Serialize/Deserialize

mod quest_state;
pub use quest_state::QuestState;
