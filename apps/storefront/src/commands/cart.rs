//! # Cart Commands
//!
//! Cart manipulation for the current session.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Success │       │
//! │  │  Cart    │     │          │     │          │     │          │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │       ▲                │                                  │             │
//! │       │           add_to_cart                        return home        │
//! │       │           update_cart_item                   (cart cleared)     │
//! │       │           remove_from_cart                        │             │
//! │       │                │                                  │             │
//! │       │                ▼                                  │             │
//! │       └─────────── clear_cart ◄───────────────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use gebeta_core::{CartLine, OrderStore, OrderTotals};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{CatalogState, SessionState};

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: OrderTotals,
    /// Distinct dishes.
    pub item_count: usize,
    /// Sum of quantities, shown on the cart badge.
    pub total_quantity: u64,
    pub cart_open: bool,
}

impl From<&OrderStore> for CartResponse {
    fn from(store: &OrderStore) -> Self {
        CartResponse {
            lines: store.lines().to_vec(),
            totals: store.compute_totals(),
            item_count: store.cart().item_count(),
            total_quantity: store.cart().total_quantity(),
            cart_open: store.is_cart_open(),
        }
    }
}

/// Result of adding a dish: the toast text plus the updated cart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartResponse {
    pub notice: String,
    pub cart: CartResponse,
}

/// Gets the current cart contents.
pub fn get_cart(session: &SessionState) -> CartResponse {
    debug!("get_cart command");
    session.with_store(|store| CartResponse::from(store))
}

/// Adds one portion of a dish to the cart.
///
/// ## Behavior
/// - Dish already in cart: quantity + 1
/// - Dish not in cart: new line with quantity 1
/// - The line remembers the restaurant that serves the dish
///
/// ## Arguments
/// * `item_id` - Menu item id from any restaurant in the catalog
pub fn add_to_cart(
    catalog: &CatalogState,
    session: &SessionState,
    item_id: &str,
) -> Result<AddToCartResponse, ApiError> {
    debug!(item_id = %item_id, "add_to_cart command");

    let (restaurant, item) = catalog.inner().menu_item(item_id)?;

    let cart = session.with_store_mut(|store| {
        store.add_item(item.clone(), restaurant.id.clone());
        CartResponse::from(&*store)
    });

    let notice = format!("Added {} to cart", item.name);
    info!(item_id = %item_id, restaurant_id = %restaurant.id, "{}", notice);

    Ok(AddToCartResponse { notice, cart })
}

/// Changes the quantity of a cart line by `delta`.
///
/// ## Behavior
/// - Quantity never drops below 1; removing is a separate command
/// - An id that is not in the cart leaves the cart unchanged
pub fn update_cart_item(session: &SessionState, item_id: &str, delta: i64) -> CartResponse {
    debug!(item_id = %item_id, delta = %delta, "update_cart_item command");

    session.with_store_mut(|store| {
        if !store.update_quantity(item_id, delta) {
            debug!(item_id = %item_id, "Cart unchanged");
        }
        CartResponse::from(&*store)
    })
}

/// Removes a line from the cart. Absent ids are a no-op.
pub fn remove_from_cart(session: &SessionState, item_id: &str) -> CartResponse {
    debug!(item_id = %item_id, "remove_from_cart command");

    session.with_store_mut(|store| {
        if !store.remove_item(item_id) {
            debug!(item_id = %item_id, "Cart unchanged");
        }
        CartResponse::from(&*store)
    })
}

/// Clears all lines from the cart.
pub fn clear_cart(session: &SessionState) -> CartResponse {
    debug!("clear_cart command");

    session.with_store_mut(|store| {
        if store.clear_cart() {
            info!("Cart cleared");
        }
        CartResponse::from(&*store)
    })
}

/// Opens or closes the cart drawer.
pub fn toggle_cart(session: &SessionState) -> CartResponse {
    debug!("toggle_cart command");

    session.with_store_mut(|store| {
        store.toggle_cart();
        CartResponse::from(&*store)
    })
}
