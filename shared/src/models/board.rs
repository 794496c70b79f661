//! Derived board rows and stats (not persisted)

use super::reservation::Reservation;
use super::table::TableId;
use serde::{Deserialize, Serialize};

/// Join of one static table against the active date's reservations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardRow {
    pub table: TableId,
    pub reservation: Option<Reservation>,
}

impl BoardRow {
    pub fn occupied(&self) -> bool {
        self.reservation.is_some()
    }
}

/// Header numbers for the board and the print list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardStats {
    /// Occupied tables on the date.
    pub table_count: usize,
    pub adults: u32,
    pub children: u32,
}

impl BoardStats {
    pub fn total_people(&self) -> u32 {
        self.adults + self.children
    }
}
