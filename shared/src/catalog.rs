//! Static catalog data
//!
//! Fixed tables the application loads as-is: the floor plan, the staff
//! roster, menu category priority, the seed menu structure and the Ramadan
//! calendar (featured daily menus and iftar times). None of this is
//! derived at runtime.

use crate::models::{CategorizedMenus, MenuCategory, MenuItem, TableId};

/// Category display/export priority. Unlisted categories sort after all of
/// these, stable in stored order.
pub const CATEGORY_ORDER: [&str; 5] = [
    "GÜNÜN MENÜSÜ",
    "İFTAR MENÜLERİ",
    "ALAKART MENÜLER",
    "TATLILAR",
    "PASTALAR",
];

/// Staff allowed in the `recordedBy` field (closed set).
pub const STAFF_LIST: [&str; 5] = ["HİMMET", "KENAN", "SERDAR", "İBRAHİM", "BATUHAN"];

/// Iftar time fallback for dates missing from the calendar.
pub const DEFAULT_IFTAR_TIME: &str = "18:45";

/// Priority index of a category name; unknown names rank after all known.
pub fn category_rank(name: &str) -> usize {
    CATEGORY_ORDER
        .iter()
        .position(|c| *c == name)
        .unwrap_or(99)
}

/// The full floor: tables 1..=40 then the IHLARA salon.
pub fn table_list() -> Vec<TableId> {
    let mut tables: Vec<TableId> = (1..=40).map(TableId::Numbered).collect();
    tables.push(TableId::Ihlara);
    tables
}

/// Featured menu (soup / main / side / drink) per Ramadan day.
const DAILY_MENUS: [(&str, [&str; 4]); 29] = [
    ("2026-02-19", ["Mantar Çorbası", "Uluırmak Kebabı", "Pirinç Pilavı", "Salata"]),
    ("2026-02-20", ["Mercimek Çorbası", "Tas Kebabı", "Bulgur Pilavı", "Salata"]),
    ("2026-02-21", ["Domates Çorbası", "İzmir Köfte", "Pirinç Pilavı", "Cacık"]),
    ("2026-02-22", ["Ezogelin Çorbası", "Çiftlik Kebabı", "Pirinç Pilavı", "Salata"]),
    ("2026-02-23", ["Şehriye Çorbası", "Rosto Köfte", "Pirinç Pilavı", "Salata"]),
    ("2026-02-24", ["Mercimek Çorbası", "Saksı Kebabı", "Bulgur Pilavı", "Salata"]),
    ("2026-02-25", ["Mantar Çorbası", "Patlıcan Musakka", "Pirinç Pilavı", "Cacık"]),
    ("2026-02-26", ["Domates Çorbası", "Et Sote", "Pirinç Pilavı", "Salata"]),
    ("2026-02-27", ["Ezogelin Çorbası", "Sebzeli Köfte", "Bulgur Pilavı", "Salata"]),
    ("2026-02-28", ["Şehriye Çorbası", "Orman Kebabı", "Bulgur Pilavı", "Salata"]),
    ("2026-03-01", ["Mantar Çorbası", "Karnıyarık", "Pirinç Pilavı", "Cacık"]),
    ("2026-03-02", ["Mercimek Çorbası", "Uluırmak Kebabı", "Pirinç Pilavı", "Salata"]),
    ("2026-03-03", ["Ezogelin Çorbası", "Tas Kebabı", "Bulgur Pilavı", "Salata"]),
    ("2026-03-04", ["Domates Çorbası", "İzmir Köfte", "Pirinç Pilavı", "Cacık"]),
    ("2026-03-05", ["Şehriye Çorbası", "Çiftlik Kebabı", "Pirinç Pilavı", "Salata"]),
    ("2026-03-06", ["Y. Yoğurt Çorbası", "Rosto Köfte", "Bulgur Pilavı", "Salata"]),
    ("2026-03-07", ["Şehriye Çorbası", "Saksı Kebabı", "Pirinç Pilavı", "Salata"]),
    ("2026-03-08", ["Mantar Çorbası", "Patlıcan Musakka", "Pirinç Pilavı", "Cacık"]),
    ("2026-03-09", ["Mercimek Çorbası", "Et Sote", "Pirinç Pilavı", "Salata"]),
    ("2026-03-10", ["Ezogelin Çorbası", "Sebzeli Köfte", "Bulgur Pilavı", "Salata"]),
    ("2026-03-11", ["Şehriye Çorbası", "Orman Kebabı", "Bulgur Pilavı", "Salata"]),
    ("2026-03-12", ["Mantar Çorbası", "Karnıyarık", "Pirinç Pilavı", "Cacık"]),
    ("2026-03-13", ["Mercimek Çorbası", "Uluırmak Kebabı", "Pirinç Pilavı", "Salata"]),
    ("2026-03-14", ["Ezogelin Çorbası", "Tas Kebabı", "Bulgur Pilavı", "Salata"]),
    ("2026-03-15", ["Domates Çorbası", "İzmir Köfte", "Pirinç Pilavı", "Cacık"]),
    ("2026-03-16", ["Şehriye Çorbası", "Çiftlik Kebabı", "Pirinç Pilavı", "Salata"]),
    ("2026-03-17", ["Ezogelin Çorbası", "Rosto Köfte", "Bulgur Pilavı", "Salata"]),
    ("2026-03-18", ["Mercimek Çorbası", "Saksı Kebabı", "Bulgur Pilavı", "Salata"]),
    ("2026-03-19", ["Mantar Çorbası", "Uluırmak Kebabı", "Pirinç Pilavı", "Salata"]),
];

/// Iftar time per Ramadan day.
const IFTAR_TIMES: [(&str, &str); 29] = [
    ("2026-02-19", "18:33"),
    ("2026-02-20", "18:34"),
    ("2026-02-21", "18:35"),
    ("2026-02-22", "18:36"),
    ("2026-02-23", "18:37"),
    ("2026-02-24", "18:38"),
    ("2026-02-25", "18:39"),
    ("2026-02-26", "18:40"),
    ("2026-02-27", "18:41"),
    ("2026-02-28", "18:42"),
    ("2026-03-01", "18:43"),
    ("2026-03-02", "18:44"),
    ("2026-03-03", "18:45"),
    ("2026-03-04", "18:46"),
    ("2026-03-05", "18:47"),
    ("2026-03-06", "18:48"),
    ("2026-03-07", "18:49"),
    ("2026-03-08", "18:50"),
    ("2026-03-09", "18:51"),
    ("2026-03-10", "18:52"),
    ("2026-03-11", "18:53"),
    ("2026-03-12", "18:54"),
    ("2026-03-13", "18:55"),
    ("2026-03-14", "18:56"),
    ("2026-03-15", "18:57"),
    ("2026-03-16", "18:58"),
    ("2026-03-17", "18:59"),
    ("2026-03-18", "19:00"),
    ("2026-03-19", "19:01"),
];

/// Featured menu lines for a date, if the calendar has one.
pub fn daily_menu_for(date: &str) -> Option<[&'static str; 4]> {
    DAILY_MENUS
        .iter()
        .find(|(d, _)| *d == date)
        .map(|(_, items)| *items)
}

/// All calendar dates with a featured menu, ascending.
pub fn daily_menu_dates() -> Vec<&'static str> {
    DAILY_MENUS.iter().map(|(d, _)| *d).collect()
}

/// Iftar time for a date, with the fixed fallback.
pub fn iftar_time(date: &str) -> &'static str {
    IFTAR_TIMES
        .iter()
        .find(|(d, _)| *d == date)
        .map(|(_, t)| *t)
        .unwrap_or(DEFAULT_IFTAR_TIME)
}

fn category(name: &str, items: &[(&str, &str)]) -> MenuCategory {
    MenuCategory {
        name: name.to_string(),
        items: items
            .iter()
            .map(|(name, price)| MenuItem {
                name: name.to_string(),
                price: price.to_string(),
            })
            .collect(),
    }
}

/// Seed categorized menu structure, written to the settings document the
/// first time no stored copy exists.
pub fn seed_menus() -> CategorizedMenus {
    CategorizedMenus {
        categories: vec![
            category(
                "GÜNÜN MENÜSÜ",
                &[
                    ("GÜNÜN MENÜSÜ", "300,00"),
                    ("İFTAR TABAĞI MİNİ", "75,00"),
                    ("İFTAR TABAĞI STANDART", "100,00"),
                    ("İFTAR TABAĞI EKSTRA", "150,00"),
                    ("PATATES KIZARTMASI", "75,00"),
                ],
            ),
            category(
                "İFTAR MENÜLERİ",
                &[
                    ("İFTAR ET SOTE", "750,00"),
                    ("İFTAR PİLİÇ SARMA", "600,00"),
                    ("İFTAR ROSTO KÖFTE", "700,00"),
                    ("İFTAR TAVUK SOTE", "550,00"),
                    ("İFTAR ULUIRMAK KEBABI", "700,00"),
                    ("İFTAR ULUIRMAK KÖFTE", "750,00"),
                ],
            ),
            category(
                "ALAKART MENÜLER",
                &[
                    ("TAVUK SOTE", "350,00"),
                    ("TAVUK ŞİŞ", "350,00"),
                    ("TAVUK BONFİLE", "350,00"),
                    ("MANTAR SOTE", "400,00"),
                    ("ET SOTE", "450,00"),
                    ("SAC KAVURMA", "600,00"),
                    ("KARIŞIK SOTE", "450,00"),
                    ("IZGARA KÖFTE", "400,00"),
                    ("KILIÇARSLAN ÇÖKERTMESİ", "450,00"),
                ],
            ),
            category(
                "TATLILAR",
                &[
                    ("HELVADERE", "100,00"),
                    ("SÜTLAÇ", "90,00"),
                    ("HASANDAĞI ZİRVESİ", "190,00"),
                    ("TRİLEÇE", "90,00"),
                    ("REVANİ", "90,00"),
                    ("GÜZGÜNEŞİ", "90,00"),
                    ("GÜLLAÇ", "90,00"),
                    ("KALBURABASTI", "90,00"),
                    ("PROFİTEROL", "140,00"),
                    ("İNCİM", "140,00"),
                    ("LATTEM", "100,00"),
                    ("İNCELEK", "90,00"),
                    ("KADAYIF BURMA", "175,00"),
                    ("MAGNOLYA", "90,00"),
                ],
            ),
            category(
                "PASTALAR",
                &[
                    ("RULO PASTA", "110,00"),
                    ("MOZAİK PASTA", "90,00"),
                    ("BALBADEM", "175,00"),
                    ("SULTANHANI", "175,00"),
                    ("EKLER", "30,00"),
                    ("EĞRİ MİNARE", "200,00"),
                    ("AŞIKLI HÖYÜK", "190,00"),
                    ("EKECİK", "200,00"),
                    ("PROFESÖR PASTA", "120,00"),
                    ("SARIKARAMAN", "250,00"),
                    ("TOPAKKAYA", "90,00"),
                    ("BELİSIRMA", "120,00"),
                ],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_list_shape() {
        let tables = table_list();
        assert_eq!(tables.len(), 41);
        assert_eq!(tables[0], TableId::Numbered(1));
        assert_eq!(tables[39], TableId::Numbered(40));
        assert_eq!(tables[40], TableId::Ihlara);
    }

    #[test]
    fn test_category_rank() {
        assert_eq!(category_rank("GÜNÜN MENÜSÜ"), 0);
        assert_eq!(category_rank("PASTALAR"), 4);
        assert_eq!(category_rank("BİLİNMEYEN"), 99);
    }

    #[test]
    fn test_iftar_time_fallback() {
        assert_eq!(iftar_time("2026-02-19"), "18:33");
        assert_eq!(iftar_time("2026-03-19"), "19:01");
        assert_eq!(iftar_time("2027-01-01"), DEFAULT_IFTAR_TIME);
    }

    #[test]
    fn test_seed_menus_follow_category_order() {
        let seed = seed_menus();
        let names: Vec<&str> = seed.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, CATEGORY_ORDER.to_vec());
    }

    #[test]
    fn test_daily_menu_lookup() {
        let menu = daily_menu_for("2026-02-19").unwrap();
        assert_eq!(menu[1], "Uluırmak Kebabı");
        assert!(daily_menu_for("2026-04-01").is_none());
    }
}
