//! Magic Movers Engine library.
//!
//! This crate contains all server-side code for the magic movers service.
//!
//! ## Structure
//!
//! - `use_cases/` - User story orchestration (movers, items, missions)
//! - `infrastructure/` - Ports, JSON file persistence, configuration
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures module for integration testing.
#[cfg(test)]
pub mod test_fixtures;

/// E2E tests driving the HTTP router against a store in a temp directory.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
