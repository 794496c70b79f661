//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category, derived from the code range.
///
/// Mirrors the failure taxonomy of the system: advisory validation
/// failures, store operation failures, messaging rejections, export
/// failures and everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Validation / general errors (0xxx)
    Validation,
    /// Store operation errors (4xxx)
    Store,
    /// Messaging errors (5xxx)
    Messaging,
    /// Export errors (6xxx)
    Export,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from a raw code value.
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::Validation,
            4000..5000 => Self::Store,
            5000..6000 => Self::Messaging,
            6000..7000 => Self::Export,
            _ => Self::System,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Store => "store",
            Self::Messaging => "messaging",
            Self::Export => "export",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
