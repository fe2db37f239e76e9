//! # Money Module
//!
//! Provides the `Money` type for menu prices, delivery fees and totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Prices are held in the smallest currency unit (santim, 1/100 birr).   │
//! │                                                                         │
//! │    Doro Wat        ETB 350.00  →  35000                                 │
//! │    Delivery fee    ETB  50.00  →   5000                                 │
//! │                                                                         │
//! │  Subtotals and grand totals are plain integer sums, so the cart badge, │
//! │  the drawer and the payment screen always agree to the santim.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gebeta_core::money::Money;
//!
//! let price = Money::from_minor(35000); // ETB 350.00
//! let line = price.multiply_quantity(2);
//! let total = line + Money::from_minor(5000);
//! assert_eq!(total.minor(), 75000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use ts_rs::TS;

use crate::{CURRENCY_CODE, MINOR_UNITS_PER_MAJOR};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (santim for ETB).
///
/// ## Design Decisions
/// - **i64 (signed)**: room for adjustments, and sums never wrap in practice
/// - **Single field tuple struct**: zero-cost wrapper over i64
///
/// ## Where Money Flows
/// ```text
/// MenuItem.price ──► CartLine.line_total ──► OrderTotals.subtotal
///                                                   │
/// Restaurant.delivery_fee ──────────────────────────┤
///                                                   ▼
///                                     OrderTotals.grand_total ──► payment
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (santim).
    ///
    /// ```rust
    /// use gebeta_core::money::Money;
    ///
    /// let fee = Money::from_minor(5000);
    /// assert_eq!(fee.minor(), 5000);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from whole birr.
    ///
    /// ```rust
    /// use gebeta_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(350).minor(), 35000);
    /// ```
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * MINOR_UNITS_PER_MAJOR)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the whole-birr portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_UNITS_PER_MAJOR
    }

    /// Returns the santim portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_UNITS_PER_MAJOR).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies a unit price by a line quantity.
    ///
    /// Saturates instead of overflowing; a saturated total is still larger
    /// than anything a mock wallet would accept.
    ///
    /// ```rust
    /// use gebeta_core::money::Money;
    ///
    /// let unit = Money::from_minor(350);
    /// assert_eq!(unit.multiply_quantity(3).minor(), 1050);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Formats the amount behind a currency prefix, e.g. `Br 350.00`.
    ///
    /// ```rust
    /// use gebeta_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor(-550).format_with("Br"), "-Br 5.50");
    /// ```
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{} {}.{:02}", sign, symbol, self.major().abs(), self.minor_part())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount the way the storefront prints prices: `ETB 350.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(CURRENCY_CODE))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let money = Money::from_minor(35050);
        assert_eq!(money.minor(), 35050);
        assert_eq!(money.major(), 350);
        assert_eq!(money.minor_part(), 50);
    }

    #[test]
    fn test_from_major() {
        assert_eq!(Money::from_major(50), Money::from_minor(5000));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(35000).to_string(), "ETB 350.00");
        assert_eq!(Money::from_minor(1205).to_string(), "ETB 12.05");
        assert_eq!(Money::from_minor(0).to_string(), "ETB 0.00");
        assert_eq!(Money::from_minor(-550).to_string(), "-ETB 5.50");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_minor(35000).format_with("Br"), "Br 350.00");
        assert_eq!(Money::from_minor(-5).format_with("Br"), "-Br 0.05");
        let fee = Money::from_minor(6000);
        assert_eq!(fee.format_with(CURRENCY_CODE), fee.to_string());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);

        let mut c = a;
        c += b;
        assert_eq!(c.minor(), 1500);
    }

    #[test]
    fn test_sum() {
        let total: Money = [350, 350, 450].into_iter().map(Money::from_minor).sum();
        assert_eq!(total.minor(), 1150);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_multiply_quantity_saturates() {
        let unit = Money::from_minor(i64::MAX / 2);
        assert_eq!(unit.multiply_quantity(4).minor(), i64::MAX);
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_positive());
        assert!(Money::from_minor(1).is_positive());
    }
}
