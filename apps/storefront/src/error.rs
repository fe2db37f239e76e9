//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  shell line: "open res9"                                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Catalog miss? ──── CoreError::RestaurantNotFound ──┐           │  │
//! │  │         │                                           │           │  │
//! │  │         ▼                                           ▼           │  │
//! │  │  Refused navigation? ─ CoreError::InvalidTransition ─ ApiError ─►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Wallet refused? ─── PaymentError ──────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  shell prints: "[NotFound] Restaurant not found: res9"                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `ApiError` also serializes (`code` + `message`) for `--json` output.

use gebeta_core::CoreError;
use serde::Serialize;

use crate::payment::PaymentError;

/// Error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INVALID_TRANSITION",
///   "message": "Cannot begin checkout from the home view"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Restaurant or menu item not in the catalog
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Navigation not reachable from the current view
    InvalidTransition,

    /// Checkout with an empty cart
    CartError,

    /// Mock payment refused
    PaymentError,

    /// Shell input did not parse
    UnknownCommand,

    /// Unexpected failure (serialization, I/O)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an unknown-command error.
    pub fn unknown_command(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::UnknownCommand, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::RestaurantNotFound(id) => ApiError::not_found("Restaurant", &id),
            CoreError::MenuItemNotFound(id) => ApiError::not_found("Menu item", &id),
            CoreError::EmptyCart => ApiError::new(ErrorCode::CartError, "Your cart is empty"),
            err @ CoreError::InvalidTransition { .. } => {
                ApiError::new(ErrorCode::InvalidTransition, err.to_string())
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts payment errors to API errors.
impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        tracing::warn!("Payment failed: {}", err);
        ApiError::new(ErrorCode::PaymentError, err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::new(ErrorCode::Internal, format!("JSON error: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
