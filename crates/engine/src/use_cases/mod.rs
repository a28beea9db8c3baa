//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Mutating use cases serialize on the shared [`WriteLock`](crate::infrastructure::write_lock::WriteLock)
//! and persist multi-entity changes through a single unit of work.

pub mod items;
pub mod missions;
pub mod movers;
pub mod validation;

pub use items::ItemUseCases;
pub use missions::MissionUseCases;
pub use movers::MoverUseCases;
