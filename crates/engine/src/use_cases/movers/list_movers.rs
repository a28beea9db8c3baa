//! List movers use case.

use std::sync::Arc;

use magic_movers_domain::Mover;

use crate::infrastructure::ports::MoverRepo;

use super::error::MoverError;

/// Read-only listing of every mover.
pub struct ListMovers {
    mover_repo: Arc<dyn MoverRepo>,
}

impl ListMovers {
    pub fn new(mover_repo: Arc<dyn MoverRepo>) -> Self {
        Self { mover_repo }
    }

    pub async fn execute(&self) -> Result<Vec<Mover>, MoverError> {
        let movers = self.mover_repo.list().await?;
        tracing::debug!(count = movers.len(), "Listed movers");
        Ok(movers)
    }
}
