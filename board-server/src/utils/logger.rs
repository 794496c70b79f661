//! Logging Infrastructure
//!
//! Structured logging setup with optional daily file output.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Build the log filter from a directive string (`info`,
/// `board_server=debug`, ...). Unparsable input falls back to `info`.
fn build_filter(spec: &str) -> EnvFilter {
    EnvFilter::try_new(spec).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the logger with defaults (INFO, stderr only).
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with an explicit filter and optional file output.
pub fn init_logger_with_file(log_filter: Option<&str>, log_dir: Option<&str>) {
    let filter = build_filter(log_filter.unwrap_or("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "board-server");
            subscriber.with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}
