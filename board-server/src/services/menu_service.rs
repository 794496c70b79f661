//! Menu service - categorized menus and the daily featured menu
//!
//! The categorized document is read merged under the seed structure so new
//! catalog categories appear even for stale stored documents. All saves
//! overwrite the whole document.

use crate::store::SettingsStore;
use parking_lot::Mutex;
use shared::models::{CategorizedMenus, DailyMenu};
use shared::{AppError, AppResult, catalog};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

/// Daily menu shown when neither the store nor the static table has one.
const DAILY_MENU_PLACEHOLDER: [&str; 4] = ["Günün Menüsü", "Henüz Belirlenmedi", "", ""];

pub struct MenuService {
    store: Arc<dyn SettingsStore>,
    menus_feed: Mutex<watch::Receiver<Option<CategorizedMenus>>>,
}

impl MenuService {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        let menus_feed = Mutex::new(store.subscribe_menus());
        Self { store, menus_feed }
    }

    /// The categorized menus for display: stored content merged under the
    /// seed structure, categories in fixed priority order.
    pub fn categorized(&self) -> CategorizedMenus {
        let stored = self.menus_feed.lock().borrow().clone();
        match stored {
            Some(menus) => menus.merged_over_seed().sorted(),
            None => catalog::seed_menus().sorted(),
        }
    }

    /// Write the seed structure if the store holds no menu document yet.
    pub async fn ensure_seeded(&self) -> AppResult<()> {
        let missing = self.menus_feed.lock().borrow().is_none();
        if missing {
            self.store.set_menus(catalog::seed_menus()).await?;
            info!("categorized menus seeded");
        }
        Ok(())
    }

    /// Rename a menu item in place and save the whole document.
    pub async fn rename_item(&self, old_name: &str, new_name: &str) -> AppResult<()> {
        let mut menus = self.categorized();
        let mut found = false;
        for category in &mut menus.categories {
            for item in &mut category.items {
                if item.name == old_name {
                    item.name = new_name.to_string();
                    found = true;
                }
            }
        }
        if !found {
            return Err(AppError::not_found(old_name));
        }
        self.store.set_menus(menus).await
    }

    /// Save the whole categorized document.
    pub async fn save(&self, menus: CategorizedMenus) -> AppResult<()> {
        self.store.set_menus(menus).await
    }

    // ==================== Daily featured menu ====================

    /// The four daily menu lines for a date: stored document, then the
    /// static per-day table, then the placeholder.
    pub fn daily_menu(&self, date: &str) -> DailyMenu {
        if let Some(menu) = self.store.subscribe_daily_menu(date).borrow().clone() {
            return menu;
        }
        let lines = catalog::daily_menu_for(date).unwrap_or(DAILY_MENU_PLACEHOLDER);
        DailyMenu {
            items: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub async fn set_daily_menu(&self, date: &str, menu: DailyMenu) -> AppResult<()> {
        self.store.set_daily_menu(date, menu).await?;
        info!(%date, "daily menu saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use shared::ErrorCode;
    use shared::models::{MenuCategory, MenuItem};

    fn service() -> MenuService {
        MenuService::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_categorized_falls_back_to_seed() {
        let svc = service();
        let menus = svc.categorized();
        assert!(!menus.categories.is_empty());
        assert_eq!(menus.categories[0].name, catalog::CATEGORY_ORDER[0]);
    }

    #[tokio::test]
    async fn test_ensure_seeded_writes_once() {
        let store = Arc::new(MemoryStore::new());
        let svc = MenuService::new(store.clone());
        svc.ensure_seeded().await.unwrap();
        assert!(store.subscribe_menus().borrow().is_some());
    }

    #[tokio::test]
    async fn test_stored_menus_merge_under_seed() {
        let svc = service();
        svc.save(CategorizedMenus {
            categories: vec![MenuCategory {
                name: "TATLILAR".into(),
                items: vec![MenuItem {
                    name: "KÜNEFE".into(),
                    price: "150,00".into(),
                }],
            }],
        })
        .await
        .unwrap();

        let menus = svc.categorized();
        // stored category wins, seed-only categories still present
        let desserts = menus.category("TATLILAR").unwrap();
        assert_eq!(desserts.items.len(), 1);
        assert_eq!(desserts.items[0].name, "KÜNEFE");
        assert!(menus.categories.len() > 1);
    }

    #[tokio::test]
    async fn test_rename_item() {
        let svc = service();
        svc.ensure_seeded().await.unwrap();
        svc.rename_item("SÜTLAÇ", "FIRIN SÜTLAÇ").await.unwrap();
        let menus = svc.categorized();
        assert!(menus.category_rank_of_item("FIRIN SÜTLAÇ").is_some());
        assert!(menus.category_rank_of_item("SÜTLAÇ").is_none());

        let err = svc.rename_item("YOK BÖYLE ÜRÜN", "X").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_daily_menu_fallback_chain() {
        let svc = service();
        // static table hit
        let menu = svc.daily_menu("2026-02-19");
        assert_eq!(menu.items.len(), 4);
        assert_ne!(menu.items[1], "Henüz Belirlenmedi");

        // no static entry, placeholder
        let menu = svc.daily_menu("2030-01-01");
        assert_eq!(menu.items[1], "Henüz Belirlenmedi");

        // stored wins over static
        svc.set_daily_menu(
            "2026-02-19",
            DailyMenu {
                items: vec!["Çorba".into(), "Ana Yemek".into(), "Pilav".into(), "Tatlı".into()],
            },
        )
        .await
        .unwrap();
        assert_eq!(svc.daily_menu("2026-02-19").items[0], "Çorba");
    }
}
