//! # gebeta-core: Pure Ordering Logic for the Gebeta Storefront
//!
//! This crate holds the order state store and everything it needs, as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Gebeta Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront (apps/storefront)                    │   │
//! │  │   shell ──► commands ──► SessionState ──► MockPaymentGateway    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &SessionState                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ gebeta-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   store   │  │   cart    │  │  catalog  │  │ validation│  │   │
//! │  │   │  Action   │  │   Cart    │  │ Catalog   │  │   rules   │  │   │
//! │  │   │  reduce   │  │ CartLine  │  │ search    │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCKS • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`store`] - Order state, actions, reducer, derived totals
//! - [`cart`] - Cart lines and quantity rules
//! - [`catalog`] - Static restaurants/categories with lookups
//! - [`types`] - Domain types (MenuItem, Restaurant, View, ...)
//! - [`money`] - Integer money in santim
//! - [`validation`] - Catalog and input validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use gebeta_core::{Catalog, OrderStore};
//!
//! let catalog = Catalog::demo();
//! let mut store = OrderStore::new();
//!
//! let restaurant = catalog.restaurant("res1").unwrap().clone();
//! store.select_restaurant(restaurant);
//!
//! let (owner, doro_wat) = catalog.menu_item("m2").unwrap();
//! store.add_item(doro_wat.clone(), owner.id.clone());
//! store.add_item(doro_wat.clone(), owner.id.clone());
//!
//! let totals = store.compute_totals();
//! assert_eq!(totals.subtotal.minor(), 70000);     // 2 × ETB 350
//! assert_eq!(totals.grand_total.minor(), 75000);  // + ETB 50 delivery
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use catalog::{Catalog, SearchHit};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use store::{compute_totals, reduce, Action, OrderState, OrderStore, OrderTotals};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// ISO 4217 code of the storefront currency (Ethiopian birr).
pub const CURRENCY_CODE: &str = "ETB";

/// Santim per birr.
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;
