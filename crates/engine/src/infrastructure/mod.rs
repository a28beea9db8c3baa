//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod config;
pub mod persistence;
pub mod ports;
pub mod write_lock;
