//! Store ports
//!
//! The managed document database stays outside this system; the services
//! consume it through these injected ports. A subscription is a
//! [`watch::Receiver`]: `borrow()` is the current snapshot, `changed()`
//! the change notification, which is exactly the contract the external
//! store's live feeds provide.

use async_trait::async_trait;
use shared::models::{
    CategorizedMenus, DailyMenu, Reservation, ReservationCreate, ReservationUpdate,
};
use shared::AppResult;
use tokio::sync::watch;

/// Collection holding all reservation documents.
pub const RESERVATIONS_COLLECTION: &str = "reservations";

/// Settings document id of the categorized menu.
pub const MENUS_DOC_ID: &str = "categorized_menus_v6";

/// Settings document id of one day's featured menu.
pub fn daily_menu_doc_id(date: &str) -> String {
    format!("menu_{date}")
}

/// Reservation collection port.
///
/// Writes are fire-and-forget from the UI's perspective: a failure is
/// surfaced once as a typed error and the user retries by repeating the
/// action. No retry policy, no rollback; concurrent writers race and the
/// last one wins.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Live feed of every reservation document; fires on any
    /// insert/update/delete in the collection.
    fn subscribe(&self) -> watch::Receiver<Vec<Reservation>>;

    /// Create a document; the store assigns the id.
    async fn create(&self, data: ReservationCreate) -> AppResult<Reservation>;

    /// Merge the present fields into an existing document.
    async fn update(&self, id: &str, data: ReservationUpdate) -> AppResult<()>;

    /// Remove a document. Idempotent from the caller's perspective.
    async fn delete(&self, id: &str) -> AppResult<()>;
}

/// Settings documents port (categorized menus, per-day featured menu).
/// Settings writes are whole-document overwrites.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Live feed of the categorized menu document; `None` until the
    /// document exists.
    fn subscribe_menus(&self) -> watch::Receiver<Option<CategorizedMenus>>;

    async fn set_menus(&self, menus: CategorizedMenus) -> AppResult<()>;

    /// Live feed of one day's featured menu document.
    fn subscribe_daily_menu(&self, date: &str) -> watch::Receiver<Option<DailyMenu>>;

    async fn set_daily_menu(&self, date: &str, menu: DailyMenu) -> AppResult<()>;
}
