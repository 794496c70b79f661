pub mod board_service;
pub mod export_service;
pub mod menu_service;
pub mod table_service;

pub use board_service::BoardService;
pub use export_service::{ExportService, ExportSnapshot};
pub use menu_service::MenuService;
pub use table_service::TableService;
