//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Has a unique identity
//! - Exposes behavior through methods, not public fields
//! - Refuses illegal mutations with a `DomainError`
//! - Returns domain events from successful state changes
//!
//! Cross-aggregate rules (a mission's items against its mover's capacity) are
//! coordinated by the engine's use cases; each aggregate only guards its own
//! invariants.

pub mod magic_item;
pub mod mission;
pub mod mover;

pub use magic_item::MagicItem;
pub use mission::Mission;
pub use mover::Mover;
