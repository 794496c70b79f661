//! Board pipeline
//!
//! The stages are pure and stateless; the service layer recomputes them
//! whenever a declared input changes (date, reservation set, sort config,
//! search term): filter → join → search → sort, and separately
//! filter → sort → paginate for the print layouts.

pub mod countdown;
pub mod paginate;
pub mod rows;
pub mod sort;

pub use sort::{SortConfig, SortDirection, SortKey};
