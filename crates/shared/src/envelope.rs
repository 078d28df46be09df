//! The envelope wrapped around every HTTP response body.
//!
//! ```json
//! { "success": true,  "message": "...", "data": { ... } }
//! { "success": false, "message": "...", "error": [ { "code": "...", "message": "..." } ] }
//! ```

use serde::{Deserialize, Serialize};

/// Default message for successful operations.
pub const SUCCESS_MESSAGE: &str = "Operation completed successfully";

// =============================================================================
// Envelope
// =============================================================================

/// Uniform success/failure wrapper.
///
/// Success envelopes carry `data` and never `error`; failure envelopes carry
/// `error` and never `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResult<T> {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Vec<ErrorDetail>>,
}

impl<T> ApiResult<T> {
    /// Successful result with the default message.
    pub fn success(data: T) -> Self {
        Self::success_with_message(data, SUCCESS_MESSAGE)
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
        }
    }

    /// Failed result with one or more error entries.
    pub fn failure(title: impl Into<String>, errors: Vec<ErrorDetail>) -> Self {
        Self {
            success: false,
            message: title.into(),
            data: None,
            error: Some(errors),
        }
    }

    /// Failed result with a single entry.
    pub fn failure_single(
        title: impl Into<String>,
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Self {
        Self::failure(title, vec![ErrorDetail::new(code.as_str(), message)])
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}

// =============================================================================
// Error entries
// =============================================================================

/// One `{code, message}` pair inside a failure envelope.
///
/// Validation failures use the offending field name as `code`; every other
/// failure uses an [`ErrorCode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ErrorDetail {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Error classification codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // === Client Errors (4xx) ===
    /// Request body or path could not be parsed
    BadRequest,
    /// Requested resource not found
    NotFound,

    // === Server Errors (5xx) ===
    /// Internal server error
    InternalError,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
