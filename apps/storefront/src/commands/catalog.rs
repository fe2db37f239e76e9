//! # Catalog Commands
//!
//! Browsing: restaurant list, categories, search and the open menu.
//!
//! ## Search Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Browse & Search Flow                                 │
//! │                                                                         │
//! │  User types: "tibs"                                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  validate_search_query (trim, 0..=100 chars; empty lists all)           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────┐   ┌──────────────────────────────────────┐   │
//! │  │  Restaurant names    │   │  Menu item names + descriptions      │   │
//! │  │  (case-insensitive)  │   │  (case-insensitive)                  │   │
//! │  └──────────┬───────────┘   └──────────────────┬───────────────────┘   │
//! │             └──────────────┬───────────────────┘                       │
//! │                            ▼                                            │
//! │                  Vec<SearchHit> in catalog order                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use gebeta_core::validation::validate_name;
use gebeta_core::{Category, CoreError, MenuItem, Money, Rating, Restaurant, SearchHit};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{ApiError, ErrorCode};
use crate::state::{CatalogState, SessionState};

/// Restaurant card shown on the home view (menu omitted).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSummary {
    pub id: String,
    pub name: String,
    pub rating: Rating,
    pub delivery_time: String,
    pub delivery_fee: Money,
    pub image: String,
    pub dish_count: usize,
}

impl From<&Restaurant> for RestaurantSummary {
    fn from(restaurant: &Restaurant) -> Self {
        RestaurantSummary {
            id: restaurant.id.clone(),
            name: restaurant.name.clone(),
            rating: restaurant.rating,
            delivery_time: restaurant.delivery_time.clone(),
            delivery_fee: restaurant.delivery_fee,
            image: restaurant.image.clone(),
            dish_count: restaurant.menu.len(),
        }
    }
}

/// The menu of the restaurant currently open.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub restaurant: RestaurantSummary,
    pub items: Vec<MenuItem>,
}

/// Lists every restaurant, in catalog order.
pub fn list_restaurants(catalog: &CatalogState) -> Vec<RestaurantSummary> {
    debug!("list_restaurants command");
    catalog
        .inner()
        .restaurants()
        .iter()
        .map(RestaurantSummary::from)
        .collect()
}

/// Lists the browsing categories.
pub fn list_categories(catalog: &CatalogState) -> Vec<Category> {
    debug!("list_categories command");
    catalog.inner().categories().to_vec()
}

/// Restaurants with at least one dish in `category`.
///
/// An unknown category is not an error; it just matches nothing.
pub fn restaurants_in_category(
    catalog: &CatalogState,
    category: &str,
) -> Result<Vec<RestaurantSummary>, ApiError> {
    debug!(category = %category, "restaurants_in_category command");
    validate_name(category).map_err(CoreError::from)?;

    Ok(catalog
        .inner()
        .restaurants_in_category(category)
        .into_iter()
        .map(RestaurantSummary::from)
        .collect())
}

/// Searches restaurant names and dishes.
pub fn search(catalog: &CatalogState, query: &str) -> Result<Vec<SearchHit>, ApiError> {
    debug!(query = %query, "search command");

    let hits = catalog.inner().search(query)?;
    info!(query = %query, results = hits.len(), "Catalog search completed");

    Ok(hits)
}

/// Menu of the active restaurant.
///
/// ## Errors
/// `INVALID_TRANSITION` when no restaurant is open (home, or after payment).
pub fn get_menu(session: &SessionState) -> Result<MenuResponse, ApiError> {
    debug!("get_menu command");

    session.with_store(|store| {
        let restaurant = store.active_restaurant().ok_or_else(|| {
            ApiError::new(
                ErrorCode::InvalidTransition,
                format!("No restaurant is open on the {} view", store.view()),
            )
        })?;

        Ok(MenuResponse {
            restaurant: RestaurantSummary::from(restaurant),
            items: restaurant.menu.clone(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_restaurants_keeps_catalog_order() {
        let catalog = CatalogState::demo();
        let ids: Vec<_> = list_restaurants(&catalog).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["res1", "res2", "res3"]);
    }

    #[test]
    fn test_category_filter_rejects_blank() {
        let catalog = CatalogState::demo();
        let err = restaurants_in_category(&catalog, "  ").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_category_filter_matches_pizza() {
        let catalog = CatalogState::demo();
        let hits = restaurants_in_category(&catalog, "pizza").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "res3");
    }

    #[test]
    fn test_search_query_bounds() {
        let catalog = CatalogState::demo();

        let all = search(&catalog, "").unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.iter().all(|h| matches!(h, SearchHit::Restaurant { .. })));

        let err = search(&catalog, &"q".repeat(101)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_menu_requires_open_restaurant() {
        let catalog = CatalogState::demo();
        let session = SessionState::new();

        let err = get_menu(&session).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidTransition);

        let restaurant = catalog.inner().restaurant("res2").unwrap().clone();
        session.with_store_mut(|store| store.select_restaurant(restaurant));

        let menu = get_menu(&session).unwrap();
        assert_eq!(menu.restaurant.name, "Burger King Plaza");
        assert_eq!(menu.items.len(), 2);
    }
}
