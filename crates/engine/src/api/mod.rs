//! API layer - HTTP entry points.

mod dto;
mod error;
pub mod http;
pub mod middleware;

pub use error::ApiError;
