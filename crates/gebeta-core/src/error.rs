//! # Error Types
//!
//! Domain-specific error types for gebeta-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  gebeta-core errors (this file)                                        │
//! │  ├── CoreError        - Catalog lookups, checkout preconditions        │
//! │  └── ValidationError  - Catalog / input validation failures            │
//! │                                                                         │
//! │  storefront errors (app crate)                                         │
//! │  ├── PaymentError     - Mock wallet refused the charge                 │
//! │  └── ApiError         - What the shell prints (code + message)         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The order store itself never returns these: its operations are total and
//! unknown ids are no-ops. Errors come from the catalog and from callers
//! asking up front whether a navigation would be accepted.

use thiserror::Error;

use crate::types::View;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No restaurant with this id in the catalog.
    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(String),

    /// No menu item with this id in the catalog.
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),

    /// Checkout was requested with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// A navigation action is not reachable from the current view.
    ///
    /// ```text
    /// view: Home, action: "begin checkout"
    ///      │
    ///      ▼
    /// "Cannot begin checkout from the home view"
    /// ```
    #[error("Cannot {action} from the {view} view")]
    InvalidTransition { view: View, action: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Duplicate value (e.g., two menu items sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
