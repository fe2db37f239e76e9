//! # Validation Module
//!
//! Rules that catalog data and free-form input must satisfy.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Catalog::new(categories, restaurants)                                 │
//! │  ├── ids and names present                                             │
//! │  ├── prices positive, delivery fees non-negative                       │
//! │  └── ids unique                                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Storefront shell                                                      │
//! │  └── search query length                                               │
//! │                                                                         │
//! │  The order store itself validates nothing: it only ever receives       │
//! │  items that came out of a validated catalog.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gebeta_core::money::Money;
//! use gebeta_core::validation::{validate_id, validate_price};
//!
//! assert!(validate_id("menu item id", "m1").is_ok());
//! assert!(validate_price(Money::from_minor(0)).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Rating;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_ID_LEN: usize = 64;
const MAX_NAME_LEN: usize = 200;
const MAX_QUERY_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an identifier (restaurant, menu item or category id).
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 64 characters
pub fn validate_id(field: &str, id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if id.chars().count() > MAX_ID_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_ID_LEN,
        });
    }

    Ok(())
}

/// Validates a display name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
///
/// ```rust
/// use gebeta_core::validation::validate_name;
///
/// assert!(validate_name("Doro Wat").is_ok());
/// assert!(validate_name("   ").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches everything)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a menu price. Prices must be strictly positive.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a delivery fee. Free delivery (zero) is allowed.
pub fn validate_delivery_fee(fee: Money) -> ValidationResult<()> {
    if fee.minor() < 0 {
        return Err(ValidationError::OutOfRange {
            field: "delivery fee".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a rating (0.0 to 5.0 stars).
pub fn validate_rating(rating: Rating) -> ValidationResult<()> {
    if rating.tenths() > Rating::MAX_TENTHS {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0,
            max: i64::from(Rating::MAX_TENTHS),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_id() {
        assert!(validate_id("id", "res1").is_ok());
        assert!(validate_id("id", "").is_err());
        assert!(validate_id("id", "   ").is_err());
        assert!(validate_id("id", &"x".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Habesha Delight").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("  pizza ").unwrap(), "pizza");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"q".repeat(101)).is_err());
    }

    #[test]
    fn test_limits_count_characters_not_bytes() {
        // "ሀ" is 3 bytes in UTF-8.
        let query = "ሀ".repeat(48);
        assert_eq!(query.len(), 144);
        assert_eq!(validate_search_query(&query).unwrap(), query);
        assert!(validate_search_query(&"ሀ".repeat(101)).is_err());

        assert!(validate_id("id", &"ሀ".repeat(64)).is_ok());
        assert!(validate_name(&"ሀ".repeat(200)).is_ok());
        assert!(validate_name(&"ሀ".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_minor(1)).is_ok());
        assert!(validate_price(Money::from_minor(0)).is_err());
        assert!(validate_price(Money::from_minor(-100)).is_err());
    }

    #[test]
    fn test_validate_delivery_fee() {
        assert!(validate_delivery_fee(Money::zero()).is_ok());
        assert!(validate_delivery_fee(Money::from_minor(5000)).is_ok());
        assert!(validate_delivery_fee(Money::from_minor(-1)).is_err());
    }

    #[test]
    fn test_validate_rating() {
        assert!(validate_rating(Rating::from_tenths(0)).is_ok());
        assert!(validate_rating(Rating::from_tenths(50)).is_ok());
        assert!(validate_rating(Rating::from_tenths(51)).is_err());
    }
}
