//! # Catalog State
//!
//! Wraps the read-only `Catalog` for use in commands.
//!
//! ## Thread Safety
//! The catalog never changes after startup, so it is shared without a lock.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! pub fn open_restaurant(
//!     catalog: &CatalogState,
//!     session: &SessionState,
//!     restaurant_id: &str,
//! ) -> Result<RestaurantResponse, ApiError> {
//!     let restaurant = catalog.inner().restaurant(restaurant_id)?;
//!     ...
//! }
//! ```

use std::sync::Arc;

use gebeta_core::Catalog;

/// Wrapper around `Catalog` for state management.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
}

impl CatalogState {
    /// Creates a new CatalogState wrapping the catalog.
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(catalog),
        }
    }

    /// State backed by the built-in demo catalog.
    pub fn demo() -> Self {
        Self::new(Catalog::demo())
    }

    /// Returns a reference to the inner Catalog.
    pub fn inner(&self) -> &Catalog {
        &self.catalog
    }
}
