//! # Order State Store
//!
//! Holds the cart, the active restaurant, the current view and the cart
//! drawer flag, and moves them forward one [`Action`] at a time.
//!
//! ## Reducer Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Action → reduce → State                              │
//! │                                                                         │
//! │   storefront command                                                    │
//! │        │  Action::AddItem { item, restaurant_id }                       │
//! │        ▼                                                                │
//! │   OrderStore::dispatch(action)                                          │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   reduce(state, &action) ──► new OrderState   (pure, no I/O)            │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   changed? ──► bool back to the caller                                  │
//! │                                                                         │
//! │   compute_totals(&state) ──► OrderTotals      (derived, never stored)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Single Writer
//! One `OrderStore` exists per session. It is created at session start and
//! handed to every consumer by reference; there is no global instance.
//!
//! ## Failure Semantics
//! None. Cart actions always apply, unknown ids are no-ops, and navigation
//! actions that are not reachable from the current view leave the state
//! untouched. Callers that want to report a refused navigation ask
//! [`OrderStore::check_transition`] first.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartLine, MenuItem, Restaurant, View};

// =============================================================================
// Actions
// =============================================================================

/// Everything that can happen to the order state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add one of `item`, or bump its quantity.
    AddItem { item: MenuItem, restaurant_id: String },
    /// Drop the line for this menu item id.
    RemoveItem { id: String },
    /// Shift a line's quantity, clamping at 1.
    UpdateQuantity { id: String, delta: i64 },
    ClearCart,
    /// Open or close the cart drawer.
    ToggleCart,
    /// Home → Restaurant; makes `restaurant` the active one.
    SelectRestaurant { restaurant: Restaurant },
    /// Restaurant → Home, or Success → Home ("return home", clears the cart).
    GoHome,
    /// Restaurant → Checkout, only with a non-empty cart.
    BeginCheckout,
    /// Checkout → Restaurant.
    BackToRestaurant,
    /// Checkout → Success, signalled by the payment collaborator.
    PaymentCompleted,
}

impl Action {
    /// Short description used in transition errors and logs.
    pub fn describe(&self) -> &'static str {
        match self {
            Action::AddItem { .. } => "add item",
            Action::RemoveItem { .. } => "remove item",
            Action::UpdateQuantity { .. } => "update quantity",
            Action::ClearCart => "clear cart",
            Action::ToggleCart => "toggle cart",
            Action::SelectRestaurant { .. } => "select restaurant",
            Action::GoHome => "go home",
            Action::BeginCheckout => "begin checkout",
            Action::BackToRestaurant => "go back to the restaurant",
            Action::PaymentCompleted => "complete payment",
        }
    }

    /// Whether this action moves between views.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Action::SelectRestaurant { .. }
                | Action::GoHome
                | Action::BeginCheckout
                | Action::BackToRestaurant
                | Action::PaymentCompleted
        )
    }
}

// =============================================================================
// State
// =============================================================================

/// The whole order state of one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderState {
    pub cart: Cart,
    /// Restaurant being viewed; its delivery fee applies to the totals.
    pub active_restaurant: Option<Restaurant>,
    pub view: View,
    pub cart_open: bool,
}

impl OrderState {
    /// Fresh session state: empty cart, home view.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Derived totals, recomputed on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub subtotal: Money,
    pub delivery_fee: Money,
    pub grand_total: Money,
}

// =============================================================================
// Transitions
// =============================================================================

/// The view an action leads to from `view`, or `None` if it is not reachable.
///
/// Cart actions never change the view and are always accepted.
///
/// ```text
/// ┌──────────────┬───────────────────┬──────────────────────────────┐
/// │ from         │ action            │ to                           │
/// ├──────────────┼───────────────────┼──────────────────────────────┤
/// │ Home         │ SelectRestaurant  │ Restaurant                   │
/// │ Restaurant   │ GoHome            │ Home                         │
/// │ Restaurant   │ BeginCheckout     │ Checkout (cart non-empty)    │
/// │ Checkout     │ BackToRestaurant  │ Restaurant                   │
/// │ Checkout     │ PaymentCompleted  │ Success                      │
/// │ Success      │ GoHome            │ Home (cart cleared)          │
/// └──────────────┴───────────────────┴──────────────────────────────┘
/// ```
pub fn next_view(view: View, action: &Action, cart_is_empty: bool) -> Option<View> {
    match (view, action) {
        (_, action) if !action.is_navigation() => Some(view),
        (View::Home, Action::SelectRestaurant { .. }) => Some(View::Restaurant),
        (View::Restaurant, Action::GoHome) => Some(View::Home),
        (View::Restaurant, Action::BeginCheckout) if !cart_is_empty => Some(View::Checkout),
        (View::Checkout, Action::BackToRestaurant) => Some(View::Restaurant),
        (View::Checkout, Action::PaymentCompleted) => Some(View::Success),
        (View::Success, Action::GoHome) => Some(View::Home),
        _ => None,
    }
}

/// Pure transition function: applies `action` to `state`.
///
/// Unreachable navigation returns the state unchanged.
pub fn reduce(mut state: OrderState, action: &Action) -> OrderState {
    let Some(target) = next_view(state.view, action, state.cart.is_empty()) else {
        return state;
    };

    match action {
        Action::AddItem {
            item,
            restaurant_id,
        } => state.cart.add_item(item, restaurant_id),
        Action::RemoveItem { id } => {
            state.cart.remove_item(id);
        }
        Action::UpdateQuantity { id, delta } => {
            state.cart.update_quantity(id, *delta);
        }
        Action::ClearCart => {
            state.cart.clear();
        }
        Action::ToggleCart => state.cart_open = !state.cart_open,
        Action::SelectRestaurant { restaurant } => {
            state.active_restaurant = Some(restaurant.clone());
        }
        Action::GoHome => {
            if state.view == View::Success {
                state.cart.clear();
            }
            state.active_restaurant = None;
        }
        Action::BeginCheckout => state.cart_open = false,
        Action::BackToRestaurant | Action::PaymentCompleted => {}
    }

    state.view = target;
    state
}

/// Derives subtotal, delivery fee and grand total.
///
/// The delivery fee is the active restaurant's fee, or zero when no
/// restaurant is active or the cart is empty.
pub fn compute_totals(state: &OrderState) -> OrderTotals {
    let subtotal = state.cart.subtotal();
    let delivery_fee = match &state.active_restaurant {
        Some(restaurant) if !state.cart.is_empty() => restaurant.delivery_fee,
        _ => Money::zero(),
    };

    OrderTotals {
        subtotal,
        delivery_fee,
        grand_total: subtotal + delivery_fee,
    }
}

// =============================================================================
// Store
// =============================================================================

/// Owner of one session's [`OrderState`].
///
/// ## Usage
/// ```rust
/// use gebeta_core::catalog::Catalog;
/// use gebeta_core::store::OrderStore;
///
/// let catalog = Catalog::demo();
/// let restaurant = catalog.restaurant("res1").unwrap().clone();
/// let dish = restaurant.menu[0].clone();
///
/// let mut store = OrderStore::new();
/// store.select_restaurant(restaurant);
/// store.add_item(dish, "res1");
///
/// assert_eq!(store.cart().total_quantity(), 1);
/// assert!(store.compute_totals().grand_total.is_positive());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    state: OrderState,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `action`. Returns whether the state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let next = reduce(self.state.clone(), &action);
        let changed = next != self.state;
        self.state = next;
        changed
    }

    /// Checks whether `action` is reachable from the current view.
    ///
    /// ## Returns
    /// - `Ok(())` if dispatching would be accepted
    /// - `Err(CoreError::EmptyCart)` for checkout with nothing in the cart
    /// - `Err(CoreError::InvalidTransition)` for any other refused navigation
    pub fn check_transition(&self, action: &Action) -> CoreResult<()> {
        if next_view(self.state.view, action, self.state.cart.is_empty()).is_some() {
            return Ok(());
        }

        if matches!(action, Action::BeginCheckout) && self.state.view == View::Restaurant {
            return Err(CoreError::EmptyCart);
        }

        Err(CoreError::InvalidTransition {
            view: self.state.view,
            action: action.describe().to_string(),
        })
    }

    // -------------------------------------------------------------------------
    // Cart operations
    // -------------------------------------------------------------------------

    pub fn add_item(&mut self, item: MenuItem, restaurant_id: impl Into<String>) -> bool {
        self.dispatch(Action::AddItem {
            item,
            restaurant_id: restaurant_id.into(),
        })
    }

    pub fn remove_item(&mut self, id: impl Into<String>) -> bool {
        self.dispatch(Action::RemoveItem { id: id.into() })
    }

    pub fn update_quantity(&mut self, id: impl Into<String>, delta: i64) -> bool {
        self.dispatch(Action::UpdateQuantity {
            id: id.into(),
            delta,
        })
    }

    pub fn clear_cart(&mut self) -> bool {
        self.dispatch(Action::ClearCart)
    }

    pub fn toggle_cart(&mut self) -> bool {
        self.dispatch(Action::ToggleCart)
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    pub fn select_restaurant(&mut self, restaurant: Restaurant) -> bool {
        self.dispatch(Action::SelectRestaurant { restaurant })
    }

    pub fn go_home(&mut self) -> bool {
        self.dispatch(Action::GoHome)
    }

    pub fn begin_checkout(&mut self) -> bool {
        self.dispatch(Action::BeginCheckout)
    }

    pub fn back_to_restaurant(&mut self) -> bool {
        self.dispatch(Action::BackToRestaurant)
    }

    pub fn payment_completed(&mut self) -> bool {
        self.dispatch(Action::PaymentCompleted)
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn state(&self) -> &OrderState {
        &self.state
    }

    pub fn cart(&self) -> &Cart {
        &self.state.cart
    }

    pub fn lines(&self) -> &[CartLine] {
        self.state.cart.lines()
    }

    pub fn view(&self) -> View {
        self.state.view
    }

    pub fn active_restaurant(&self) -> Option<&Restaurant> {
        self.state.active_restaurant.as_ref()
    }

    pub fn is_cart_open(&self) -> bool {
        self.state.cart_open
    }

    pub fn compute_totals(&self) -> OrderTotals {
        compute_totals(&self.state)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
