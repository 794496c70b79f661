//! In-memory store
//!
//! Implements both ports over process memory. Used by tests and the local
//! smoke binary; the semantics mirror the managed store: ids assigned on
//! create, field-merge updates, idempotent deletes, whole-document
//! settings overwrites, and a snapshot feed that fires on every write.

use crate::store::port::{ReservationStore, SettingsStore};
use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use shared::models::{
    CategorizedMenus, DailyMenu, Reservation, ReservationCreate, ReservationUpdate,
};
use shared::{AppError, AppResult};
use std::collections::HashMap;
use tokio::sync::watch;
use uuid::Uuid;

/// In-memory document store for reservations and settings.
pub struct MemoryStore {
    reservations: RwLock<Vec<Reservation>>,
    reservations_tx: watch::Sender<Vec<Reservation>>,
    menus_tx: watch::Sender<Option<CategorizedMenus>>,
    daily_menus: Mutex<HashMap<String, watch::Sender<Option<DailyMenu>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        let (reservations_tx, _) = watch::channel(Vec::new());
        let (menus_tx, _) = watch::channel(None);
        Self {
            reservations: RwLock::new(Vec::new()),
            reservations_tx,
            menus_tx,
            daily_menus: Mutex::new(HashMap::new()),
        }
    }

    fn publish(&self) {
        let snapshot = self.reservations.read().clone();
        // send_replace keeps working with zero receivers
        self.reservations_tx.send_replace(snapshot);
    }

    fn daily_sender(&self, date: &str) -> watch::Sender<Option<DailyMenu>> {
        let mut map = self.daily_menus.lock();
        map.entry(date.to_string())
            .or_insert_with(|| watch::channel(None).0)
            .clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReservationStore for MemoryStore {
    fn subscribe(&self) -> watch::Receiver<Vec<Reservation>> {
        self.reservations_tx.subscribe()
    }

    async fn create(&self, data: ReservationCreate) -> AppResult<Reservation> {
        let reservation = Reservation {
            id: Uuid::new_v4().to_string(),
            date: data.date,
            table: data.table,
            customer_name: data.customer_name,
            phone: data.phone,
            adult_count: data.adult_count,
            child_count: data.child_count,
            note: data.note,
            orders: data.orders,
            recorded_by: data.recorded_by,
        };
        self.reservations.write().push(reservation.clone());
        self.publish();
        Ok(reservation)
    }

    async fn update(&self, id: &str, data: ReservationUpdate) -> AppResult<()> {
        {
            let mut reservations = self.reservations.write();
            let res = reservations
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| AppError::not_found("reservation"))?;
            data.apply(res);
        }
        self.publish();
        Ok(())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.reservations.write().retain(|r| r.id != id);
        self.publish();
        Ok(())
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
    fn subscribe_menus(&self) -> watch::Receiver<Option<CategorizedMenus>> {
        self.menus_tx.subscribe()
    }

    async fn set_menus(&self, menus: CategorizedMenus) -> AppResult<()> {
        self.menus_tx.send_replace(Some(menus));
        Ok(())
    }

    fn subscribe_daily_menu(&self, date: &str) -> watch::Receiver<Option<DailyMenu>> {
        self.daily_sender(date).subscribe()
    }

    async fn set_daily_menu(&self, date: &str, menu: DailyMenu) -> AppResult<()> {
        self.daily_sender(date).send_replace(Some(menu));
        Ok(())
    }
}
