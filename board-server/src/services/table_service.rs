//! Table change service
//!
//! Moves a reservation between tables, swapping when both ends are
//! occupied. The swap is two sequential store updates with no atomicity;
//! a failure on the second update leaves the first applied and is
//! reported to the caller once.

use crate::board::rows::filter_by_date;
use crate::services::BoardService;
use crate::store::ReservationStore;
use shared::AppResult;
use shared::models::{ReservationUpdate, TableId};
use std::sync::Arc;
use tracing::{info, warn};

pub struct TableService {
    board: Arc<BoardService>,
    store: Arc<dyn ReservationStore>,
}

impl TableService {
    pub fn new(board: Arc<BoardService>, store: Arc<dyn ReservationStore>) -> Self {
        Self { board, store }
    }

    /// Move or swap between `source` and `target` on a date.
    ///
    /// Both occupied: swap. One occupied: move the occupied reservation to
    /// the empty table, whichever side it is on. Both empty: no-op.
    pub async fn change_table(&self, date: &str, source: TableId, target: TableId) -> AppResult<()> {
        if source == target {
            return Ok(());
        }
        let filtered = filter_by_date(&self.board.snapshot(), date);
        let source_res = filtered.iter().find(|r| r.table == source);
        let target_res = filtered.iter().find(|r| r.table == target);

        match (source_res, target_res) {
            (Some(s), Some(t)) => {
                self.store
                    .update(&s.id, ReservationUpdate::table_only(target))
                    .await?;
                // second leg; on failure the swap stays half applied
                if let Err(err) = self
                    .store
                    .update(&t.id, ReservationUpdate::table_only(source))
                    .await
                {
                    warn!(%date, %source, %target, "table swap half applied");
                    return Err(err);
                }
                info!(%date, %source, %target, "tables swapped");
            }
            (Some(s), None) => {
                self.store
                    .update(&s.id, ReservationUpdate::table_only(target))
                    .await?;
                info!(%date, %source, %target, "reservation moved");
            }
            (None, Some(t)) => {
                self.store
                    .update(&t.id, ReservationUpdate::table_only(source))
                    .await?;
                info!(%date, %target, %source, "reservation moved");
            }
            (None, None) => {}
        }
        Ok(())
    }
}
