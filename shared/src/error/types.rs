//! Error types

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details.
///
/// Every advisory dialog and blocking alert maps to one of these; the
/// caller decides presentation.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable (Turkish) message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code.
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message.
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a required-field error.
    pub fn required(field: &str) -> Self {
        Self::new(ErrorCode::RequiredField).with_detail("field", field)
    }

    /// Create an invalid-phone error with the default advisory text.
    pub fn invalid_phone() -> Self {
        Self::new(ErrorCode::InvalidPhone)
    }

    /// Create a not found error.
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::new(ErrorCode::NotFound).with_detail("resource", r)
    }

    /// Create a store write error.
    pub fn store_write(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::StoreWrite).with_detail("cause", msg.into())
    }

    /// Create a store delete error.
    pub fn store_delete(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::StoreDelete).with_detail("cause", msg.into())
    }

    /// Create an export error.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExportFailed).with_detail("cause", msg.into())
    }

    /// Create an internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}

/// Type alias for Result with AppError.
pub type AppResult<T> = Result<T, AppError>;
