//! Mover use cases.
//!
//! Creation, listing, loading and the completed-missions leaderboard.

use std::sync::Arc;

mod create_mover;
mod error;
mod list_movers;
mod load_mover;
mod rank_movers;

pub use create_mover::{CreateMover, CreateMoverInput};
pub use error::MoverError;
pub use list_movers::ListMovers;
pub use load_mover::{parse_item_ids, LoadMover};
pub use rank_movers::{MoverRank, RankMovers, RANK_SIZE};

/// Container for mover use cases.
pub struct MoverUseCases {
    pub create: Arc<CreateMover>,
    pub load: Arc<LoadMover>,
    pub list: Arc<ListMovers>,
    pub rank: Arc<RankMovers>,
}

impl MoverUseCases {
    pub fn new(
        create: Arc<CreateMover>,
        load: Arc<LoadMover>,
        list: Arc<ListMovers>,
        rank: Arc<RankMovers>,
    ) -> Self {
        Self {
            create,
            load,
            list,
            rank,
        }
    }
}
