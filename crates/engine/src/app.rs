//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    persistence::JsonFileStore,
    ports::{ItemRepo, MissionRepo, MoverRepo, UnitOfWork},
    write_lock::WriteLock,
};
use crate::use_cases::{self, items, missions, movers};

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub app_name: String,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub movers: use_cases::MoverUseCases,
    pub items: use_cases::ItemUseCases,
    pub missions: use_cases::MissionUseCases,
}

impl App {
    /// Wire every use case to one store and one write lock.
    pub fn new(store: Arc<JsonFileStore>, app_name: impl Into<String>) -> Self {
        let mover_repo: Arc<dyn MoverRepo> = store.clone();
        let item_repo: Arc<dyn ItemRepo> = store.clone();
        let mission_repo: Arc<dyn MissionRepo> = store.clone();
        let unit_of_work: Arc<dyn UnitOfWork> = store;
        let write_lock = Arc::new(WriteLock::new());

        let movers = use_cases::MoverUseCases::new(
            Arc::new(movers::CreateMover::new(
                mover_repo.clone(),
                write_lock.clone(),
            )),
            Arc::new(movers::LoadMover::new(
                mover_repo.clone(),
                item_repo.clone(),
                mission_repo.clone(),
                unit_of_work.clone(),
                write_lock.clone(),
            )),
            Arc::new(movers::ListMovers::new(mover_repo.clone())),
            Arc::new(movers::RankMovers::new(mover_repo.clone())),
        );

        let items = use_cases::ItemUseCases::new(
            Arc::new(items::CreateItem::new(item_repo.clone(), write_lock.clone())),
            Arc::new(items::ListItems::new(item_repo.clone())),
        );

        let missions = use_cases::MissionUseCases::new(
            Arc::new(missions::StartMission::new(
                mission_repo.clone(),
                mover_repo.clone(),
                unit_of_work.clone(),
                write_lock.clone(),
            )),
            Arc::new(missions::EndMission::new(
                mission_repo.clone(),
                mover_repo,
                item_repo,
                unit_of_work,
                write_lock,
            )),
            Arc::new(missions::ListMissions::new(mission_repo)),
        );

        Self {
            app_name: app_name.into(),
            use_cases: UseCases {
                movers,
                items,
                missions,
            },
        }
    }
}
