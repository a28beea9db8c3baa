//! Value objects - Immutable objects defined by their attributes

mod names;
mod units;

// Validated name newtypes
pub use names::{ItemName, MoverName, MAX_NAME_LENGTH, MIN_NAME_LENGTH};

// Bounded positive integers (weights, energy)
pub use units::{Energy, Weight, MAX_UNITS};
