//! Shared domain types for the Gelveri reservation board
//!
//! This crate holds everything the board server and its tests agree on:
//!
//! - **Models** (`models`): reservations, tables, menus, derived board rows
//! - **Catalog** (`catalog`): fixed floor plan, staff roster, Ramadan calendar
//! - **Errors** (`error`): unified error codes and the `AppError` type
//! - **Turkish** (`turkish`): locale-correct casing, folding and collation

pub mod catalog;
pub mod error;
pub mod models;
pub mod turkish;
pub mod util;

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{
    BoardRow, BoardStats, CategorizedMenus, DailyMenu, MenuCategory, MenuItem, OrderLine,
    Reservation, ReservationCreate, ReservationUpdate, SPECIAL_TABLE_TOKEN, TableId,
};
