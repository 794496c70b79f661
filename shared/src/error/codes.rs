//! Unified error codes
//!
//! Error codes are organized by range:
//! - 0xxx: validation / general
//! - 4xxx: store operations
//! - 5xxx: messaging
//! - 6xxx: export
//! - 9xxx: system

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum, represented as u16 for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: Validation / General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Phone number has the wrong length (10 external / 3 internal digits)
    InvalidPhone = 10,

    // ==================== 4xxx: Store ====================
    /// Store read/subscribe failed
    StoreRead = 4001,
    /// Store create/update failed
    StoreWrite = 4002,
    /// Store delete failed
    StoreDelete = 4003,

    // ==================== 5xxx: Messaging ====================
    /// 3-digit internal extensions cannot receive WhatsApp messages
    InternalExtension = 5001,
    /// Recipient phone number is unusable
    InvalidRecipient = 5002,

    // ==================== 6xxx: Export ====================
    /// Page snapshot export failed
    ExportFailed = 6001,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
}

impl ErrorCode {
    /// Numeric code value.
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Default user-facing message for this code. User-facing text is
    /// Turkish, same wording as the advisory dialogs.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "OK",
            Self::Unknown => "Bilinmeyen bir hata oluştu.",
            Self::ValidationFailed => "Lütfen zorunlu alanları doldurunuz.",
            Self::NotFound => "Kayıt bulunamadı.",
            Self::InvalidFormat => "Geçersiz biçim.",
            Self::RequiredField => "Zorunlu alan eksik.",
            Self::InvalidPhone => {
                "Telefon numarası başında 0 olmadan 10 hane (5xxxxxxxxx) veya 3 hane (dahili) olmalıdır."
            }
            Self::StoreRead => "Veriler okunamadı. Lütfen tekrar deneyin.",
            Self::StoreWrite => "Kayıt işlemi başarısız oldu. Lütfen tekrar deneyin.",
            Self::StoreDelete => "Silme işlemi başarısız oldu. Lütfen tekrar deneyin.",
            Self::InternalExtension => "Dahili numaralara WhatsApp mesajı gönderilemez.",
            Self::InvalidRecipient => "Lütfen geçerli bir telefon numarası giriniz.",
            Self::ExportFailed => "Görsel dışa aktarma başarısız oldu.",
            Self::InternalError => "Beklenmeyen bir hata oluştu.",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            6 => Self::InvalidFormat,
            7 => Self::RequiredField,
            10 => Self::InvalidPhone,
            4001 => Self::StoreRead,
            4002 => Self::StoreWrite,
            4003 => Self::StoreDelete,
            5001 => Self::InternalExtension,
            5002 => Self::InvalidRecipient,
            6001 => Self::ExportFailed,
            9001 => Self::InternalError,
            _ => return Err(format!("unknown error code: {value}")),
        };
        Ok(code)
    }
}
