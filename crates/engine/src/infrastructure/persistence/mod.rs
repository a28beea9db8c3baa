//! JSON file persistence adapter
//!
//! Each collection lives in its own JSON array document under the data
//! directory, read once at start and rewritten whole on every change.

mod json_store;

pub use json_store::{JsonFileStore, ITEMS_FILE, MISSIONS_FILE, MOVERS_FILE};
