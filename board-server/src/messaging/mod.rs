pub mod formatter;

pub use formatter::{WhatsAppMessage, confirmation, menu_link};
