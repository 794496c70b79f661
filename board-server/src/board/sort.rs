//! Board sort stage
//!
//! A pinned-row-aware total order over the joined table rows. The IHLARA
//! row is always first, no matter which key or direction is active; the
//! pin rule short-circuits every other comparison. Sorting is stable:
//! rows comparing equal keep their input order.

use serde::{Deserialize, Serialize};
use shared::models::BoardRow;
use shared::turkish;
use std::cmp::Ordering;

/// Sort key, one per clickable board header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Default,
    TableNumber,
    CustomerName,
    PeopleCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Scale an ascending ordering by this direction.
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

/// Active sort key and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    /// Header-click behavior: a second click on the active ascending key
    /// flips it descending, anything else resets to ascending.
    pub fn toggle(self, key: SortKey) -> SortConfig {
        let direction = if self.key == key && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        SortConfig { key, direction }
    }
}

type Comparator = fn(&BoardRow, &BoardRow, SortDirection) -> Ordering;

impl SortKey {
    /// Pure comparator for this key. The pin rule is applied outside,
    /// before dispatch.
    fn comparator(self) -> Comparator {
        match self {
            SortKey::Default => by_default,
            SortKey::TableNumber => by_table_number,
            SortKey::CustomerName => by_customer_name,
            SortKey::PeopleCount => by_people_count,
        }
    }
}

/// Sort joined rows in place under the pin rule plus the active key.
pub fn sort_rows(rows: &mut [BoardRow], config: SortConfig) {
    let cmp = config.key.comparator();
    rows.sort_by(|a, b| {
        // IHLARA always on top, direction-independent
        if a.table.is_special() && !b.table.is_special() {
            return Ordering::Less;
        }
        if !a.table.is_special() && b.table.is_special() {
            return Ordering::Greater;
        }
        cmp(a, b, config.direction)
    });
}

/// Ascending numeric table value, never scaled by direction. Shared
/// fallback for unoccupied pairs.
fn table_value_asc(a: &BoardRow, b: &BoardRow) -> Ordering {
    a.table.numeric().cmp(&b.table.numeric())
}

/// Occupied rows precede unoccupied ones regardless of direction.
/// Returns `None` when both sides have the same occupancy.
fn occupied_first(a: &BoardRow, b: &BoardRow) -> Option<Ordering> {
    match (a.occupied(), b.occupied()) {
        (true, false) => Some(Ordering::Less),
        (false, true) => Some(Ordering::Greater),
        _ => None,
    }
}

fn by_table_number(a: &BoardRow, b: &BoardRow, dir: SortDirection) -> Ordering {
    dir.apply(table_value_asc(a, b))
}

fn by_customer_name(a: &BoardRow, b: &BoardRow, dir: SortDirection) -> Ordering {
    if let Some(ord) = occupied_first(a, b) {
        return ord;
    }
    match (&a.reservation, &b.reservation) {
        (Some(ra), Some(rb)) => dir.apply(turkish::compare(&ra.customer_name, &rb.customer_name)),
        _ => table_value_asc(a, b),
    }
}

fn by_people_count(a: &BoardRow, b: &BoardRow, dir: SortDirection) -> Ordering {
    if let Some(ord) = occupied_first(a, b) {
        return ord;
    }
    match (&a.reservation, &b.reservation) {
        (Some(ra), Some(rb)) => dir.apply(ra.people_count().cmp(&rb.people_count())),
        _ => table_value_asc(a, b),
    }
}

fn by_default(a: &BoardRow, b: &BoardRow, _dir: SortDirection) -> Ordering {
    occupied_first(a, b).unwrap_or_else(|| table_value_asc(a, b))
}
