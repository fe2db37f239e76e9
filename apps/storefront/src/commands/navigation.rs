//! # Navigation Commands
//!
//! Moves the session between the four views.
//!
//! ```text
//!   Home ──open──► Restaurant ──checkout──► Checkout ──pay──► Success
//!    ▲                 │  ▲                     │                │
//!    └──────home───────┘  └────────back─────────┘                │
//!    ▲                                                           │
//!    └───────────────────────────home (cart cleared)─────────────┘
//! ```
//!
//! Every command checks the transition first, so a refused move comes back
//! as `INVALID_TRANSITION` (or `CART_ERROR` for checkout with an empty cart)
//! instead of a silent no-op.

use gebeta_core::{Action, OrderStore, View};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{CatalogState, SessionState};

/// Where the session is after a navigation command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResponse {
    pub view: View,
    pub active_restaurant: Option<String>,
    pub cart_open: bool,
}

impl From<&OrderStore> for ViewResponse {
    fn from(store: &OrderStore) -> Self {
        ViewResponse {
            view: store.view(),
            active_restaurant: store.active_restaurant().map(|r| r.name.clone()),
            cart_open: store.is_cart_open(),
        }
    }
}

/// Opens a restaurant from the home view.
pub fn open_restaurant(
    catalog: &CatalogState,
    session: &SessionState,
    restaurant_id: &str,
) -> Result<ViewResponse, ApiError> {
    debug!(restaurant_id = %restaurant_id, "open_restaurant command");

    let restaurant = catalog.inner().restaurant(restaurant_id)?.clone();
    navigate(session, Action::SelectRestaurant { restaurant })
}

/// Returns to the home view.
///
/// From the success view this also clears the paid cart.
pub fn go_home(session: &SessionState) -> Result<ViewResponse, ApiError> {
    debug!("go_home command");
    navigate(session, Action::GoHome)
}

/// Moves from the restaurant view to checkout. Requires a non-empty cart.
pub fn begin_checkout(session: &SessionState) -> Result<ViewResponse, ApiError> {
    debug!("begin_checkout command");
    navigate(session, Action::BeginCheckout)
}

/// Leaves checkout without paying.
pub fn back_to_restaurant(session: &SessionState) -> Result<ViewResponse, ApiError> {
    debug!("back_to_restaurant command");
    navigate(session, Action::BackToRestaurant)
}

fn navigate(session: &SessionState, action: Action) -> Result<ViewResponse, ApiError> {
    session.with_store_mut(|store| {
        store.check_transition(&action)?;

        let from = store.view();
        let description = action.describe();
        store.dispatch(action);
        info!(from = %from, to = %store.view(), "{}", description);

        Ok(ViewResponse::from(&*store))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_to_cart;
    use crate::error::ErrorCode;

    #[test]
    fn test_open_unknown_restaurant() {
        let catalog = CatalogState::demo();
        let session = SessionState::new();

        let err = open_restaurant(&catalog, &session, "res9").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(session.with_store(|s| s.view()), View::Home);
    }

    #[test]
    fn test_checkout_refused_with_empty_cart() {
        let catalog = CatalogState::demo();
        let session = SessionState::new();
        open_restaurant(&catalog, &session, "res1").unwrap();

        let err = begin_checkout(&session).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
        assert_eq!(session.with_store(|s| s.view()), View::Restaurant);
    }

    #[test]
    fn test_round_trip_through_checkout() {
        let catalog = CatalogState::demo();
        let session = SessionState::new();

        let view = open_restaurant(&catalog, &session, "res1").unwrap();
        assert_eq!(view.view, View::Restaurant);
        assert_eq!(view.active_restaurant.as_deref(), Some("Habesha Delight"));

        add_to_cart(&catalog, &session, "m1").unwrap();
        assert_eq!(begin_checkout(&session).unwrap().view, View::Checkout);
        assert_eq!(back_to_restaurant(&session).unwrap().view, View::Restaurant);

        let home = go_home(&session).unwrap();
        assert_eq!(home.view, View::Home);
        assert!(home.active_restaurant.is_none());
        // Leaving a restaurant keeps the cart.
        assert_eq!(session.with_store(|s| s.cart().total_quantity()), 1);
    }

    #[test]
    fn test_home_refused_from_checkout() {
        let catalog = CatalogState::demo();
        let session = SessionState::new();
        open_restaurant(&catalog, &session, "res2").unwrap();
        add_to_cart(&catalog, &session, "m3").unwrap();
        begin_checkout(&session).unwrap();

        let err = go_home(&session).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidTransition);
        assert_eq!(session.with_store(|s| s.view()), View::Checkout);
    }
}
