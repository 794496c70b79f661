//! Utility functions

pub mod logger;
pub mod time;
pub mod validation;

pub use logger::{init_logger, init_logger_with_file};
