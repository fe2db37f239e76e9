//! # Session State
//!
//! The single order store of a storefront session.
//!
//! ## Ownership
//! One `SessionState` is built when the session starts and handed to every
//! command by reference. There is no global store: whoever holds the
//! reference is the one writer.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Operations                             │
//! │                                                                         │
//! │  Shell Input              Command                 Store Change          │
//! │  ───────────              ───────                 ────────────          │
//! │                                                                         │
//! │  add m2 ─────────────────► add_to_cart() ───────► Action::AddItem      │
//! │                                                                         │
//! │  inc m2 / dec m2 ────────► update_cart_item() ──► Action::UpdateQuantity│
//! │                                                                         │
//! │  remove m2 ──────────────► remove_from_cart() ──► Action::RemoveItem   │
//! │                                                                         │
//! │  pay telebirr ───────────► pay() ───────────────► Action::PaymentCompleted│
//! │                                                                         │
//! │  cart ───────────────────► get_cart() ──────────► (read only)          │
//! │                                                                         │
//! │  NOTE: writes and reads both take the lock; every action runs to        │
//! │        completion before the next one is observed.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use gebeta_core::{OrderConfirmation, OrderStore};

/// Everything one session remembers.
#[derive(Debug, Default)]
pub struct Session {
    pub store: OrderStore,
    /// Confirmation of the last paid order, shown on the success view.
    pub last_order: Option<OrderConfirmation>,
}

/// Handle to the session's order store.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Session>>` so the handle can be cloned into the payment
/// task while the store stays a single instance.
///
/// A poisoned lock means a command panicked halfway through an update; that
/// is a programmer error, so access fails fast instead of limping on.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    /// Creates a fresh session: empty cart, home view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust
    /// use gebeta_storefront::state::SessionState;
    ///
    /// let session = SessionState::new();
    /// let totals = session.with_store(|store| store.compute_totals());
    /// assert!(totals.grand_total.is_zero());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OrderStore) -> R,
    {
        self.with_session(|s| f(&s.store))
    }

    /// Executes a function with write access to the store.
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderStore) -> R,
    {
        self.with_session_mut(|s| f(&mut s.store))
    }

    /// Executes a function with read access to the whole session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.session.lock().expect("Session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the whole session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        f(&mut session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gebeta_core::{Catalog, View};

    #[test]
    fn test_clones_share_one_store() {
        let session = SessionState::new();
        let handle = session.clone();
        let catalog = Catalog::demo();
        let (restaurant, item) = catalog.menu_item("m1").unwrap();

        handle.with_store_mut(|store| store.add_item(item.clone(), restaurant.id.clone()));

        assert_eq!(session.with_store(|store| store.cart().total_quantity()), 1);
    }

    #[test]
    fn test_new_session_starts_home() {
        let session = SessionState::new();
        assert_eq!(session.with_store(|store| store.view()), View::Home);
        assert!(session.with_session(|s| s.last_order.is_none()));
    }
}
