//! Export service
//!
//! Prepares the first print page for image export: the artifact filename
//! and the page content. Rasterization itself is done by an external
//! capture tool; failures from that side surface through the typed export
//! error.

use crate::board::sort::SortConfig;
use crate::printing::{ListPage, list_pages};
use crate::services::BoardService;
use chrono::NaiveDateTime;
use shared::{AppError, AppResult};
use std::sync::Arc;
use tracing::info;

/// A prepared export: the target filename and the page to rasterize.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSnapshot {
    pub file_name: String,
    pub page: ListPage,
}

pub struct ExportService {
    board: Arc<BoardService>,
}

impl ExportService {
    pub fn new(board: Arc<BoardService>) -> Self {
        Self { board }
    }

    /// Artifact filename for a date, `Rezervasyon_Listesi_<date>.png`.
    pub fn artifact_name(date: &str) -> String {
        format!("Rezervasyon_Listesi_{date}.png")
    }

    /// Build the first list page for export. Fails typed when the date has
    /// no reservations to put on a page.
    pub fn snapshot(
        &self,
        date: &str,
        sort: SortConfig,
        term: &str,
        now: NaiveDateTime,
    ) -> AppResult<ExportSnapshot> {
        let reservations = self.board.print_reservations(date, sort, term);
        let stats = self.board.stats(date);
        let pages = list_pages(date, &reservations, &stats, now);
        let page = pages
            .into_iter()
            .next()
            .ok_or_else(|| AppError::export("dışa aktarılacak rezervasyon yok"))?;
        info!(%date, rows = page.rows.len(), "export snapshot prepared");
        Ok(ExportSnapshot {
            file_name: Self::artifact_name(date),
            page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::NaiveDate;
    use shared::ErrorCode;
    use shared::models::{ReservationCreate, TableId};

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, 19)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_artifact_name() {
        assert_eq!(
            ExportService::artifact_name("2026-02-19"),
            "Rezervasyon_Listesi_2026-02-19.png"
        );
    }

    #[tokio::test]
    async fn test_snapshot_selects_first_page() {
        let store = Arc::new(MemoryStore::new());
        let board = Arc::new(BoardService::new(store));
        for n in 1..=20 {
            board
                .create(ReservationCreate {
                    date: "2026-02-19".into(),
                    table: TableId::Numbered(n),
                    customer_name: format!("Misafir {n}"),
                    phone: "5321234567".into(),
                    adult_count: 2,
                    child_count: 0,
                    note: String::new(),
                    orders: vec![],
                    recorded_by: "BATUHAN".into(),
                })
                .await
                .unwrap();
        }
        let svc = ExportService::new(board);
        let snap = svc
            .snapshot("2026-02-19", SortConfig::default(), "", noon())
            .unwrap();
        assert_eq!(snap.page.number, 1);
        assert_eq!(snap.page.rows.len(), 16);
        assert!(snap.page.stats.is_some());
    }

    #[tokio::test]
    async fn test_snapshot_empty_date_fails_typed() {
        let store = Arc::new(MemoryStore::new());
        let board = Arc::new(BoardService::new(store));
        let svc = ExportService::new(board);
        let err = svc
            .snapshot("2026-02-19", SortConfig::default(), "", noon())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ExportFailed);
    }
}
