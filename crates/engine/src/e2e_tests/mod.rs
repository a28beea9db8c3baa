//! Backend E2E tests.
//!
//! These tests drive the complete HTTP router with:
//! - A real JSON file store in a temporary directory
//! - Complete App construction with all use cases
//!
//! ```bash
//! cargo test -p magic-movers-engine --lib e2e_tests
//! ```

mod e2e_helpers;
mod mission_flow_tests;

pub use e2e_helpers::*;
