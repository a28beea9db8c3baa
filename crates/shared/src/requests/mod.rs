//! Request bodies and query strings.
//!
//! Every field is optional at the serde level so that a missing field is
//! reported by validation as "is required" instead of as a parse failure.

mod items;
mod missions;
mod movers;

pub use items::CreateMagicItemRequest;
pub use missions::MissionsQuery;
pub use movers::{CreateMagicMoverRequest, LoadMoverRequest};
