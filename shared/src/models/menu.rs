//! Menu Models

use crate::catalog;
use serde::{Deserialize, Serialize};

/// One priced menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    /// Decimal string, comma as fractional separator (`"300,00"`).
    pub price: String,
}

/// A named menu category with its items, order preserved as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// The categorized menu document (`settings/categorized_menus_v6`).
///
/// Categories keep insertion order; display and export re-sort them by the
/// fixed priority list, unknown categories after all known ones, stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedMenus {
    pub categories: Vec<MenuCategory>,
}

impl CategorizedMenus {
    pub fn category(&self, name: &str) -> Option<&MenuCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Priority index of the category owning `item_name`, or `None` when no
    /// listed category carries it.
    pub fn category_rank_of_item(&self, item_name: &str) -> Option<usize> {
        let mut rank = None;
        for (idx, cat_name) in catalog::CATEGORY_ORDER.iter().enumerate() {
            if let Some(cat) = self.category(cat_name)
                && cat.items.iter().any(|i| i.name == item_name)
            {
                rank = Some(idx);
            }
        }
        rank
    }

    /// Categories re-ordered by the fixed priority list; unknown categories
    /// keep their stored relative order after all known ones.
    pub fn sorted(&self) -> CategorizedMenus {
        let mut categories = self.categories.clone();
        categories.sort_by_key(|c| catalog::category_rank(&c.name));
        CategorizedMenus { categories }
    }

    /// Merge stored content over the seed structure: seed categories first
    /// (stored items win per category), then stored-only categories in
    /// their stored order.
    pub fn merged_over_seed(&self) -> CategorizedMenus {
        let mut merged = catalog::seed_menus();
        for cat in &mut merged.categories {
            if let Some(stored) = self.category(&cat.name) {
                cat.items = stored.items.clone();
            }
        }
        for stored in &self.categories {
            if merged.category(&stored.name).is_none() {
                merged.categories.push(stored.clone());
            }
        }
        merged
    }
}

/// Featured menu of one day (`settings/menu_<date>`): up to four lines,
/// soup / main / side / drink.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMenu {
    pub items: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menus() -> CategorizedMenus {
        CategorizedMenus {
            categories: vec![
                MenuCategory {
                    name: "TATLILAR".into(),
                    items: vec![MenuItem { name: "SÜTLAÇ".into(), price: "90,00".into() }],
                },
                MenuCategory {
                    name: "YENİ KATEGORİ".into(),
                    items: vec![],
                },
                MenuCategory {
                    name: "GÜNÜN MENÜSÜ".into(),
                    items: vec![MenuItem { name: "GÜNÜN MENÜSÜ".into(), price: "300,00".into() }],
                },
            ],
        }
    }

    #[test]
    fn test_sorted_puts_known_categories_first() {
        let sorted = menus().sorted();
        let names: Vec<&str> = sorted.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["GÜNÜN MENÜSÜ", "TATLILAR", "YENİ KATEGORİ"]);
    }

    #[test]
    fn test_category_rank_of_item() {
        let m = menus();
        assert_eq!(m.category_rank_of_item("GÜNÜN MENÜSÜ"), Some(0));
        assert_eq!(m.category_rank_of_item("SÜTLAÇ"), Some(3));
        assert_eq!(m.category_rank_of_item("YOK BÖYLE BİR ÜRÜN"), None);
    }

    #[test]
    fn test_merge_over_seed_keeps_seed_order_and_stored_items() {
        let merged = menus().merged_over_seed();
        // seed order preserved
        assert_eq!(merged.categories[0].name, "GÜNÜN MENÜSÜ");
        // stored items replace seed items per category
        let tatlilar = merged.category("TATLILAR").unwrap();
        assert_eq!(tatlilar.items.len(), 1);
        assert_eq!(tatlilar.items[0].name, "SÜTLAÇ");
        // stored-only category appended after seed ones
        assert_eq!(merged.categories.last().unwrap().name, "YENİ KATEGORİ");
    }
}
