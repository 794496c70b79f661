//! Board service - reservation feed plus the derived board views
//!
//! Holds the live reservation subscription and recomputes every view from
//! the latest snapshot on demand. The pipeline stages themselves are pure;
//! this is the only place that touches the feed.

use crate::board::rows::{filter_by_date, join_tables, search, stats};
use crate::board::sort::{SortConfig, sort_rows};
use crate::store::ReservationStore;
use parking_lot::{Mutex, RwLock};
use shared::AppResult;
use shared::models::{BoardRow, BoardStats, Reservation, ReservationCreate, ReservationUpdate, TableId};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

pub struct BoardService {
    store: Arc<dyn ReservationStore>,
    feed: Mutex<watch::Receiver<Vec<Reservation>>>,
    cache: RwLock<Vec<Reservation>>,
}

impl BoardService {
    pub fn new(store: Arc<dyn ReservationStore>) -> Self {
        let feed = store.subscribe();
        let cache = RwLock::new(feed.borrow().clone());
        Self {
            store,
            feed: Mutex::new(feed),
            cache,
        }
    }

    /// Pull the latest feed value into the cache if the store published
    /// since the last call.
    fn refresh(&self) {
        let mut rx = self.feed.lock();
        if rx.has_changed().unwrap_or(false) {
            *self.cache.write() = rx.borrow_and_update().clone();
        }
    }

    /// Latest known reservation snapshot, all dates.
    pub fn snapshot(&self) -> Vec<Reservation> {
        self.refresh();
        self.cache.read().clone()
    }

    // ==================== Views ====================

    /// The full board for a date: filter, table join, search, sort.
    pub fn rows(&self, date: &str, sort: SortConfig, term: &str) -> Vec<BoardRow> {
        let filtered = filter_by_date(&self.snapshot(), date);
        let mut rows = search(join_tables(&filtered), term);
        sort_rows(&mut rows, sort);
        rows
    }

    /// Occupied reservations in board order, the print/export input.
    pub fn print_reservations(&self, date: &str, sort: SortConfig, term: &str) -> Vec<Reservation> {
        self.rows(date, sort, term)
            .into_iter()
            .filter_map(|row| row.reservation)
            .collect()
    }

    pub fn stats(&self, date: &str) -> BoardStats {
        stats(&filter_by_date(&self.snapshot(), date))
    }

    /// Tables already reserved on a date, for disabling dropdown options.
    /// The reservation being edited keeps its own table selectable.
    pub fn taken_tables(&self, date: &str, exclude_id: Option<&str>) -> Vec<TableId> {
        filter_by_date(&self.snapshot(), date)
            .iter()
            .filter(|r| exclude_id != Some(r.id.as_str()))
            .map(|r| r.table)
            .collect()
    }

    // ==================== Writes ====================

    pub async fn create(&self, data: ReservationCreate) -> AppResult<Reservation> {
        let res = self.store.create(data).await?;
        info!(id = %res.id, date = %res.date, table = %res.table, "reservation created");
        Ok(res)
    }

    pub async fn update(&self, id: &str, data: ReservationUpdate) -> AppResult<()> {
        self.store.update(id, data).await?;
        info!(id = %id, "reservation updated");
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.store.delete(id).await?;
        info!(id = %id, "reservation deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::sort::{SortDirection, SortKey};
    use crate::store::MemoryStore;

    fn create_payload(date: &str, table: TableId, name: &str) -> ReservationCreate {
        ReservationCreate {
            date: date.into(),
            table,
            customer_name: name.into(),
            phone: "5321234567".into(),
            adult_count: 2,
            child_count: 0,
            note: String::new(),
            orders: vec![],
            recorded_by: "KENAN".into(),
        }
    }

    async fn service_with_data() -> BoardService {
        let store = Arc::new(MemoryStore::new());
        let svc = BoardService::new(store);
        svc.create(create_payload("2026-02-19", TableId::Numbered(3), "Zeynep Ak"))
            .await
            .unwrap();
        svc.create(create_payload("2026-02-19", TableId::Ihlara, "Ahmet Can"))
            .await
            .unwrap();
        svc.create(create_payload("2026-02-20", TableId::Numbered(3), "Başka Gün"))
            .await
            .unwrap();
        svc
    }

    #[tokio::test]
    async fn test_rows_reflect_store_writes() {
        let svc = service_with_data().await;
        let rows = svc.rows("2026-02-19", SortConfig::default(), "");
        assert_eq!(rows.len(), 41);
        assert_eq!(rows.iter().filter(|r| r.occupied()).count(), 2);
        // special table pinned first
        assert_eq!(rows[0].table, TableId::Ihlara);
    }

    #[tokio::test]
    async fn test_print_reservations_are_occupied_only_in_order() {
        let svc = service_with_data().await;
        let sort = SortConfig {
            key: SortKey::CustomerName,
            direction: SortDirection::Asc,
        };
        let printed = svc.print_reservations("2026-02-19", sort, "");
        assert_eq!(printed.len(), 2);
        assert_eq!(printed[0].customer_name, "Ahmet Can");
        assert_eq!(printed[1].customer_name, "Zeynep Ak");
    }

    #[tokio::test]
    async fn test_stats_scoped_to_date() {
        let svc = service_with_data().await;
        let s = svc.stats("2026-02-19");
        assert_eq!(s.table_count, 2);
        assert_eq!(s.adults, 4);
    }

    #[tokio::test]
    async fn test_taken_tables_excludes_edited_reservation() {
        let svc = service_with_data().await;
        let id = svc
            .snapshot()
            .iter()
            .find(|r| r.customer_name == "Zeynep Ak")
            .unwrap()
            .id
            .clone();
        let taken = svc.taken_tables("2026-02-19", Some(&id));
        assert_eq!(taken, vec![TableId::Ihlara]);
        let taken = svc.taken_tables("2026-02-19", None);
        assert_eq!(taken.len(), 2);
    }
}
