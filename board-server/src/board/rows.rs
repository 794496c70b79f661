//! Filter, table-join and search stages

use shared::catalog;
use shared::models::{BoardRow, BoardStats, Reservation};
use shared::turkish;

/// Reservations belonging to the selected date.
pub fn filter_by_date(reservations: &[Reservation], date: &str) -> Vec<Reservation> {
    reservations
        .iter()
        .filter(|r| r.date == date)
        .cloned()
        .collect()
}

/// Left-join the static floor plan against one date's reservations:
/// exactly one row per table, occupied or not. A (date, table) pair can
/// carry more than one reservation (never prevented server-side); the
/// first match wins.
pub fn join_tables(filtered: &[Reservation]) -> Vec<BoardRow> {
    catalog::table_list()
        .into_iter()
        .map(|table| BoardRow {
            reservation: filtered.iter().find(|r| r.table == table).cloned(),
            table,
        })
        .collect()
}

/// Narrow joined rows by a case-folded (Turkish) substring match on the
/// customer name. The IHLARA row is always retained; an empty term is the
/// identity.
pub fn search(rows: Vec<BoardRow>, term: &str) -> Vec<BoardRow> {
    if term.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|row| {
            row.table.is_special()
                || row
                    .reservation
                    .as_ref()
                    .is_some_and(|r| turkish::contains_fold(&r.customer_name, term))
        })
        .collect()
}

/// Header numbers over one date's reservations.
pub fn stats(filtered: &[Reservation]) -> BoardStats {
    BoardStats {
        table_count: filtered.len(),
        adults: filtered.iter().map(|r| r.adult_count).sum(),
        children: filtered.iter().map(|r| r.child_count).sum(),
    }
}
