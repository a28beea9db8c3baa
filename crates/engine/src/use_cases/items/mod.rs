//! Magic item use cases.

use std::sync::Arc;

mod create_item;
mod error;
mod list_items;

pub use create_item::{CreateItem, CreateItemInput};
pub use error::ItemError;
pub use list_items::ListItems;

/// Container for magic item use cases.
pub struct ItemUseCases {
    pub create: Arc<CreateItem>,
    pub list: Arc<ListItems>,
}

impl ItemUseCases {
    pub fn new(create: Arc<CreateItem>, list: Arc<ListItems>) -> Self {
        Self { create, list }
    }
}
