//! Common test helpers for building domain entities and seeded stores.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{item, mover};
//!
//! #[test]
//! fn mover_starts_resting() {
//!     let m = mover("Carrier", 100);
//!     // ... test logic
//! }
//! ```

pub mod store_seeder;

use magic_movers_domain::{Energy, ItemName, MagicItem, Mission, Mover, MoverName, Weight};

/// A resting mover with the given weight limit and 10 energy.
pub fn mover(name: &str, weight_limit: u32) -> Mover {
    Mover::new(
        MoverName::new(name).expect("fixture mover name"),
        Weight::new(weight_limit, "weightLimit").expect("fixture weight limit"),
        Energy::new(10, "energy").expect("fixture energy"),
    )
}

/// A mover that already has an open loading mission.
pub fn loading_mover(name: &str, weight_limit: u32) -> Mover {
    let mut m = mover(name, weight_limit);
    m.start_loading().expect("fixture mover can load");
    m
}

/// A mover out on a mission.
pub fn travelling_mover(name: &str, weight_limit: u32) -> Mover {
    let mut m = loading_mover(name, weight_limit);
    m.depart();
    m
}

/// An unused item.
pub fn item(name: &str, weight: u32) -> MagicItem {
    MagicItem::new(
        ItemName::new(name).expect("fixture item name"),
        Weight::new(weight, "weight").expect("fixture item weight"),
    )
}

/// An item already reserved by some mission.
pub fn reserved_item(name: &str, weight: u32) -> MagicItem {
    let mut i = item(name, weight);
    i.reserve().expect("fixture item is free");
    i
}

/// A loading mission for `mover` holding `items`.
pub fn loading_mission(mover: &Mover, items: &[MagicItem]) -> Mission {
    Mission::open(mover.id(), items.iter().map(MagicItem::id))
}

/// A mission that has departed.
pub fn started_mission(mover: &Mover, items: &[MagicItem]) -> Mission {
    let mut mission = loading_mission(mover, items);
    mission.start().expect("fixture mission can start");
    mission
}
