//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   Restaurant    │   │    MenuItem     │   │    CartLine     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │ ◄─┤  id (unique)    │ ◄─┤  item           │       │
//! │  │  rating         │   │  price (santim) │   │  quantity ≥ 1   │       │
//! │  │  delivery_fee   │   │  category       │   │  restaurant_id  │       │
//! │  │  menu[]         │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Rating      │   │      View       │   │ PaymentMethod   │       │
//! │  │  tenths (u8)    │   │  Home           │   │  Telebirr       │       │
//! │  │  48 = 4.8 ★     │   │  Restaurant     │   │  AwashBirr      │       │
//! │  └─────────────────┘   │  Checkout       │   │  CbeBirr        │       │
//! │                        │  Success        │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Catalog types are immutable reference data; only `CartLine` is created by
//! user actions.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Rating
// =============================================================================

/// Restaurant rating in tenths of a star.
///
/// ## Why Tenths?
/// Same reason prices are integers: `Rating::from_tenths(48)` compares and
/// serializes exactly, and only the display layer turns it into `4.8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rating(u8);

impl Rating {
    /// Highest possible rating (5.0 stars).
    pub const MAX_TENTHS: u8 = 50;

    #[inline]
    pub const fn from_tenths(tenths: u8) -> Self {
        Rating(tenths)
    }

    #[inline]
    pub const fn tenths(&self) -> u8 {
        self.0
    }

    /// Returns the rating in stars (for display only).
    #[inline]
    pub fn stars(&self) -> f32 {
        f32::from(self.0) / 10.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

// =============================================================================
// Catalog Types
// =============================================================================

/// A browsing category shown on the home view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Emoji shown next to the name.
    pub icon: String,
    pub image: String,
}

/// A dish offered by a restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique across the whole catalog.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit price in santim.
    pub price: Money,
    pub image: String,
    /// Category label, matched against `Category::name`.
    pub category: String,
}

/// A restaurant and its menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub rating: Rating,
    /// Human-readable estimate, e.g. "20-30 min".
    pub delivery_time: String,
    pub delivery_fee: Money,
    pub image: String,
    /// Menu in display order.
    pub menu: Vec<MenuItem>,
}

impl Restaurant {
    /// Looks up an item on this restaurant's menu.
    pub fn menu_item(&self, item_id: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.id == item_id)
    }

    /// Whether any dish on the menu carries this category label.
    pub fn serves_category(&self, category: &str) -> bool {
        self.menu
            .iter()
            .any(|item| item.category.eq_ignore_ascii_case(category))
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One distinct menu item in the cart.
///
/// ## Invariants
/// - `quantity >= 1` (lines are removed explicitly, never by decrementing)
/// - `restaurant_id` is the restaurant the item was added from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: u32,
    pub restaurant_id: String,
}

impl CartLine {
    /// Creates a fresh line with quantity 1.
    pub fn new(item: MenuItem, restaurant_id: impl Into<String>) -> Self {
        CartLine {
            item,
            quantity: 1,
            restaurant_id: restaurant_id.into(),
        }
    }

    /// Id of the menu item this line tracks.
    #[inline]
    pub fn id(&self) -> &str {
        &self.item.id
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.item.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// View
// =============================================================================

/// Which screen of the storefront is showing.
///
/// ```text
///          select restaurant          begin checkout           payment completed
///   Home ─────────────────► Restaurant ──────────────► Checkout ─────────────────► Success
///    ▲  ◄─────────────────      ▲      ◄──────────────                                │
///    │        go home           │     back to restaurant                              │
///    └──────────────────────────┴─────────────── go home (clears cart) ◄──────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Home,
    Restaurant,
    Checkout,
    Success,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            View::Home => "home",
            View::Restaurant => "restaurant",
            View::Checkout => "checkout",
            View::Success => "success",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// Mobile wallets offered on the checkout view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Telebirr,
    AwashBirr,
    CbeBirr,
}

impl PaymentMethod {
    /// All methods in the order the checkout view lists them.
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Telebirr,
        PaymentMethod::AwashBirr,
        PaymentMethod::CbeBirr,
    ];

    /// Short id used on the command line (`telebirr`, `awash`, `cbe`).
    pub const fn id(&self) -> &'static str {
        match self {
            PaymentMethod::Telebirr => "telebirr",
            PaymentMethod::AwashBirr => "awash",
            PaymentMethod::CbeBirr => "cbe",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Telebirr => "Telebirr",
            PaymentMethod::AwashBirr => "Awash Birr",
            PaymentMethod::CbeBirr => "CBE Birr",
        }
    }

    /// Parses a short id, case-insensitively.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|method| method.id().eq_ignore_ascii_case(id.trim()))
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// =============================================================================
// Order Confirmation
// =============================================================================

/// What the success view shows once the mock payment went through.
///
/// Uses the snapshot pattern: lines are copied out of the cart so the
/// confirmation stays intact after "return home" clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    #[ts(as = "String")]
    pub order_id: Uuid,
    pub method: PaymentMethod,
    /// Grand total charged.
    pub amount: Money,
    pub lines: Vec<CartLine>,
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
}

impl OrderConfirmation {
    /// Total number of dishes in the order.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: i64, category: &str) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Dish {}", id),
            description: String::new(),
            price: Money::from_minor(price),
            image: String::new(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_rating_display() {
        let rating = Rating::from_tenths(48);
        assert_eq!(rating.to_string(), "4.8");
        assert!((rating.stars() - 4.8).abs() < 0.001);
        assert_eq!(Rating::from_tenths(50).to_string(), "5.0");
    }

    #[test]
    fn test_cart_line_total() {
        let mut line = CartLine::new(item("m1", 350, "Ethiopian"), "res1");
        assert_eq!(line.quantity, 1);
        line.quantity = 3;
        assert_eq!(line.line_total().minor(), 1050);
        assert_eq!(line.id(), "m1");
    }

    #[test]
    fn test_restaurant_lookups() {
        let restaurant = Restaurant {
            id: "res1".to_string(),
            name: "Habesha Delight".to_string(),
            rating: Rating::from_tenths(48),
            delivery_time: "20-30 min".to_string(),
            delivery_fee: Money::from_minor(50),
            image: String::new(),
            menu: vec![item("m1", 280, "Ethiopian"), item("m2", 350, "Ethiopian")],
        };

        assert_eq!(restaurant.menu_item("m2").map(|i| i.price.minor()), Some(350));
        assert!(restaurant.menu_item("m3").is_none());
        assert!(restaurant.serves_category("ethiopian"));
        assert!(!restaurant.serves_category("Pizza"));
    }

    #[test]
    fn test_view_default_and_display() {
        assert_eq!(View::default(), View::Home);
        assert_eq!(View::Checkout.to_string(), "checkout");
    }

    #[test]
    fn test_payment_method_ids() {
        assert_eq!(PaymentMethod::default(), PaymentMethod::Telebirr);
        assert_eq!(PaymentMethod::from_id("CBE"), Some(PaymentMethod::CbeBirr));
        assert_eq!(PaymentMethod::from_id(" awash "), Some(PaymentMethod::AwashBirr));
        assert_eq!(PaymentMethod::from_id("paypal"), None);
        assert_eq!(PaymentMethod::AwashBirr.to_string(), "Awash Birr");
    }

    #[test]
    fn test_view_serializes_snake_case() {
        let json = serde_json::to_string(&View::Checkout).unwrap();
        assert_eq!(json, "\"checkout\"");
    }
}
