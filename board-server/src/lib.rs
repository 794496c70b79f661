//! Board Server - iftar reservation board for the Uluırmak hotel restaurant
//!
//! Core of the reservation dashboard: the board pipeline (date filter,
//! table join, search, sort, pagination), the WhatsApp message formatter,
//! the two-step reservation wizard and the service layer over abstract
//! document-store ports.
//!
//! # Module structure
//!
//! ```text
//! board-server/src/
//! ├── core/       # Config, application state
//! ├── board/      # Pipeline stages: rows, sort, paginate, countdown
//! ├── store/      # Store ports and the in-memory implementation
//! ├── services/   # Board, table, menu and export services
//! ├── messaging/  # WhatsApp message builders
//! ├── printing/   # Print page models
//! ├── wizard.rs   # Two-step reservation dialog state machine
//! └── utils/      # Validation, time, logging helpers
//! ```

pub mod board;
pub mod core;
pub mod messaging;
pub mod printing;
pub mod services;
pub mod store;
pub mod utils;
pub mod wizard;

pub use crate::core::{BoardState, Config};
