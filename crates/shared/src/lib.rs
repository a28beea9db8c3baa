//! Magic Movers Protocol - wire types for the REST API
//!
//! This crate contains the JSON shapes exchanged with API clients:
//! - Request bodies and query strings
//! - Response bodies, including the error envelope
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json, uuid and the domain vocabulary
//! 2. **No business logic** - Pure data types and serialization
//! 3. **No domain IDs** - use raw `uuid::Uuid` in DTOs
//! 4. **camelCase on the wire** - matches the persisted JSON documents

pub mod requests;
pub mod responses;

pub use requests::{CreateMagicItemRequest, CreateMagicMoverRequest, LoadMoverRequest, MissionsQuery};
pub use responses::{
    ErrorResponse, MagicItemResponse, MagicMoverResponse, MissionResponse, RankedMoverResponse,
};

// Re-export shared vocabulary types from domain::types
pub use magic_movers_domain::types::QuestState;
