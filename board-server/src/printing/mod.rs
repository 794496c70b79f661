//! Print page models
//!
//! Deterministic page layouts built over the pagination stage. These carry
//! everything the printed output shows; rendering and print CSS live
//! elsewhere.

use crate::board::paginate::{CARD_PAGE_SIZE, chunk_dynamic, chunk_fixed};
use crate::utils::time::{format_date_tr, printed_at_label, weekday_name_tr};
use chrono::NaiveDateTime;
use shared::models::{BoardStats, Reservation};
use shared::turkish;

/// Venue title printed on every list page header.
pub const VENUE_TITLE: &str = "ULUIRMAK UYGULAMA OTELİ";

// ==================== Reservation list ====================

/// One page of the printed reservation list. The first page carries the
/// stats block; page sizes follow the dynamic chunking (16 then 21).
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage {
    /// 1-based page number.
    pub number: usize,
    pub total_pages: usize,
    /// `DD.MM.YYYY` plus the Turkish weekday, e.g. `19.02.2026 Perşembe`.
    pub date_label: String,
    /// Print timestamp, `DD.MM.YYYY HH:MM:SS`.
    pub printed_at: String,
    /// Stats block, first page only.
    pub stats: Option<BoardStats>,
    pub rows: Vec<Reservation>,
}

/// Lay the sorted occupied reservations out as list pages.
pub fn list_pages(
    date: &str,
    reservations: &[Reservation],
    stats: &BoardStats,
    now: NaiveDateTime,
) -> Vec<ListPage> {
    let weekday = weekday_name_tr(date).unwrap_or_default();
    let date_label = format!("{} {}", format_date_tr(date), weekday);
    let printed_at = printed_at_label(now);
    let chunks = chunk_dynamic(reservations);
    let total_pages = chunks.len();
    chunks
        .into_iter()
        .enumerate()
        .map(|(i, rows)| ListPage {
            number: i + 1,
            total_pages,
            date_label: date_label.clone(),
            printed_at: printed_at.clone(),
            stats: (i == 0).then_some(*stats),
            rows,
        })
        .collect()
}

/// Order column cell for a list row, `2x GÜNÜN MENÜSÜ, 1x SÜTLAÇ`, or a
/// dash when the reservation has no order.
pub fn orders_summary(res: &Reservation) -> String {
    if res.orders.is_empty() {
        return "-".to_string();
    }
    res.orders
        .iter()
        .map(|o| format!("{}x {}", o.quantity, o.name))
        .collect::<Vec<_>>()
        .join(", ")
}

// ==================== Name cards ====================

/// A single table name card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCard {
    /// `G-NN` or the special label.
    pub table_label: String,
    /// Customer name, fully uppercased with Turkish rules.
    pub name: String,
    /// Font size stepped down for long names.
    pub font_pt: u32,
    pub people_count: u32,
}

/// Font step for a card name of the given length.
pub fn card_font_pt(name_len: usize) -> u32 {
    if name_len > 25 {
        14
    } else if name_len > 20 {
        17
    } else if name_len > 15 {
        19
    } else {
        22
    }
}

impl NameCard {
    pub fn for_reservation(res: &Reservation) -> Self {
        let name = turkish::to_uppercase(&res.customer_name);
        let font_pt = card_font_pt(name.chars().count());
        Self {
            table_label: res.table.label(),
            name,
            font_pt,
            people_count: res.people_count(),
        }
    }
}

/// One page of printed name cards, eight to a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPage {
    pub number: usize,
    pub total_pages: usize,
    pub cards: Vec<NameCard>,
}

pub fn card_pages(reservations: &[Reservation]) -> Vec<CardPage> {
    let chunks = chunk_fixed(reservations, CARD_PAGE_SIZE);
    let total_pages = chunks.len();
    chunks
        .into_iter()
        .enumerate()
        .map(|(i, rows)| CardPage {
            number: i + 1,
            total_pages,
            cards: rows.iter().map(NameCard::for_reservation).collect(),
        })
        .collect()
}
