//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for storage access: the JSON file store can be swapped for a
//! database without touching the use cases.

mod error;
mod repos;
mod types;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{ItemRepo, MissionRepo, MoverRepo, UnitOfWork};

// =============================================================================
// Types
// =============================================================================
pub use types::ChangeSet;

// =============================================================================
// Test-Only Mock Repositories (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{MockItemRepo, MockMissionRepo, MockMoverRepo, MockUnitOfWork};

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;
