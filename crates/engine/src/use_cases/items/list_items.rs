//! List magic items use case.

use std::sync::Arc;

use magic_movers_domain::MagicItem;

use crate::infrastructure::ports::ItemRepo;

use super::error::ItemError;

pub struct ListItems {
    item_repo: Arc<dyn ItemRepo>,
}

impl ListItems {
    pub fn new(item_repo: Arc<dyn ItemRepo>) -> Self {
        Self { item_repo }
    }

    pub async fn execute(&self) -> Result<Vec<MagicItem>, ItemError> {
        let items = self.item_repo.list().await?;
        tracing::debug!(count = items.len(), "Listed magic items");
        Ok(items)
    }
}
