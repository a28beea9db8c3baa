//! Rank movers use case.
//!
//! Leaderboard of the movers that completed the most missions.

use std::sync::Arc;

use magic_movers_domain::{MoverId, MoverName};

use crate::infrastructure::ports::MoverRepo;

use super::error::MoverError;

/// Number of movers on the leaderboard.
pub const RANK_SIZE: usize = 20;

/// One leaderboard row. The mission count itself stays internal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoverRank {
    pub id: MoverId,
    pub name: MoverName,
    /// 1-based position.
    pub rank: u32,
}

pub struct RankMovers {
    mover_repo: Arc<dyn MoverRepo>,
}

impl RankMovers {
    pub fn new(mover_repo: Arc<dyn MoverRepo>) -> Self {
        Self { mover_repo }
    }

    /// Order by completed missions, most first. Ties keep store order.
    pub async fn execute(&self) -> Result<Vec<MoverRank>, MoverError> {
        let mut movers = self.mover_repo.list().await?;
        // sort_by is stable
        movers.sort_by(|a, b| b.completed_missions_count().cmp(&a.completed_missions_count()));

        Ok(movers
            .into_iter()
            .take(RANK_SIZE)
            .zip(1u32..)
            .map(|(mover, rank)| MoverRank {
                id: mover.id(),
                name: mover.name().clone(),
                rank,
            })
            .collect())
    }
}
