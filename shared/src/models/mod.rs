//! Domain models

pub mod board;
pub mod menu;
pub mod reservation;
pub mod table;

pub use board::{BoardRow, BoardStats};
pub use menu::{CategorizedMenus, DailyMenu, MenuCategory, MenuItem};
pub use reservation::{OrderLine, Reservation, ReservationCreate, ReservationUpdate};
pub use table::{SPECIAL_TABLE_TOKEN, TableId};
