//! Application state
//!
//! Wires the store into the services and hands out shared handles. One
//! instance per process.

use crate::core::Config;
use crate::services::{BoardService, ExportService, MenuService, TableService};
use crate::store::{MemoryStore, ReservationStore, SettingsStore};
use shared::AppResult;
use std::sync::Arc;
use tracing::info;

pub struct BoardState {
    pub config: Config,
    pub board: Arc<BoardService>,
    pub tables: Arc<TableService>,
    pub menus: Arc<MenuService>,
    pub export: Arc<ExportService>,
}

impl BoardState {
    /// Build the state over explicit store handles.
    pub fn new(
        config: Config,
        reservations: Arc<dyn ReservationStore>,
        settings: Arc<dyn SettingsStore>,
    ) -> Self {
        let board = Arc::new(BoardService::new(reservations.clone()));
        let tables = Arc::new(TableService::new(board.clone(), reservations));
        let menus = Arc::new(MenuService::new(settings));
        let export = Arc::new(ExportService::new(board.clone()));
        Self {
            config,
            board,
            tables,
            menus,
            export,
        }
    }

    /// State backed by a fresh in-memory store, menus seeded.
    pub async fn in_memory(config: Config) -> AppResult<Self> {
        let store = Arc::new(MemoryStore::new());
        let state = Self::new(config, store.clone(), store);
        state.menus.ensure_seeded().await?;
        info!(date = %state.config.default_date, "board state initialized");
        Ok(state)
    }
}
