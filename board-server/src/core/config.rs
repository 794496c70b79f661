//! Runtime configuration

/// Board server configuration.
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | BOARD_DATE | 2026-02-19 | Date the board opens on |
/// | RUST_LOG | info | Log filter |
/// | LOG_DIR | (unset) | Daily log file directory; console only when unset |
#[derive(Debug, Clone)]
pub struct Config {
    /// Date the board opens on, `YYYY-MM-DD`.
    pub default_date: String,
    /// Log filter passed to the subscriber.
    pub log_filter: String,
    /// Daily log file directory; console only when unset.
    pub log_dir: Option<String>,
}

impl Config {
    /// First day of the Ramadan calendar, the date the board opens on when
    /// nothing else is configured.
    pub const DEFAULT_DATE: &'static str = "2026-02-19";

    /// Load configuration from environment variables, with defaults for
    /// anything unset.
    pub fn from_env() -> Self {
        Self {
            default_date: std::env::var("BOARD_DATE")
                .unwrap_or_else(|_| Self::DEFAULT_DATE.into()),
            log_filter: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_date: Self::DEFAULT_DATE.into(),
            log_filter: "info".into(),
            log_dir: None,
        }
    }
}
