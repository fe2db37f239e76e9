//! # Catalog
//!
//! Static, read-only restaurants and categories the storefront browses.
//!
//! ## Lookup Paths
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog                                         │
//! │                                                                         │
//! │  categories ─────────► restaurants_in_category("Pizza")                 │
//! │                                 │                                       │
//! │  restaurants ──► restaurant("res3") ──► menu ──► menu_item("m5")        │
//! │                                                                         │
//! │  search("burger") ──► restaurant names, dish names, descriptions        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The demo data mirrors the storefront's mock menu. Prices are stored in
//! santim, so "ETB 350" is `35000`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Category, MenuItem, Rating, Restaurant};
use crate::validation::{
    validate_delivery_fee, validate_id, validate_name, validate_price, validate_rating,
    validate_search_query,
};

/// The browsable catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Catalog {
    categories: Vec<Category>,
    restaurants: Vec<Restaurant>,
}

/// A search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchHit {
    Restaurant { restaurant_id: String, name: String },
    MenuItem {
        restaurant_id: String,
        item_id: String,
        name: String,
        price: Money,
    },
}

impl Catalog {
    /// Builds a catalog after validating every entry.
    ///
    /// ## Rules
    /// - ids and names present
    /// - menu prices positive, delivery fees non-negative, ratings ≤ 5.0
    /// - restaurant ids unique, menu item ids unique across all restaurants
    pub fn new(categories: Vec<Category>, restaurants: Vec<Restaurant>) -> CoreResult<Self> {
        for category in &categories {
            validate_id("category id", &category.id)?;
            validate_name(&category.name)?;
        }

        let mut restaurant_ids = HashSet::new();
        let mut item_ids = HashSet::new();

        for restaurant in &restaurants {
            validate_id("restaurant id", &restaurant.id)?;
            validate_name(&restaurant.name)?;
            validate_delivery_fee(restaurant.delivery_fee)?;
            validate_rating(restaurant.rating)?;

            if !restaurant_ids.insert(restaurant.id.as_str()) {
                return Err(duplicate("restaurant id", &restaurant.id));
            }

            for item in &restaurant.menu {
                validate_id("menu item id", &item.id)?;
                validate_name(&item.name)?;
                validate_price(item.price)?;

                if !item_ids.insert(item.id.as_str()) {
                    return Err(duplicate("menu item id", &item.id));
                }
            }
        }

        Ok(Catalog {
            categories,
            restaurants,
        })
    }

    /// The storefront's built-in mock data.
    pub fn demo() -> Self {
        Catalog {
            categories: demo_categories(),
            restaurants: demo_restaurants(),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Looks up a restaurant by id.
    pub fn restaurant(&self, id: &str) -> CoreResult<&Restaurant> {
        self.restaurants
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| CoreError::RestaurantNotFound(id.to_string()))
    }

    /// Looks up a menu item anywhere in the catalog.
    ///
    /// ## Returns
    /// The owning restaurant and the item, since cart lines need both.
    pub fn menu_item(&self, item_id: &str) -> CoreResult<(&Restaurant, &MenuItem)> {
        self.restaurants
            .iter()
            .find_map(|r| r.menu_item(item_id).map(|item| (r, item)))
            .ok_or_else(|| CoreError::MenuItemNotFound(item_id.to_string()))
    }

    /// Restaurants with at least one dish in `category` (case-insensitive).
    pub fn restaurants_in_category(&self, category: &str) -> Vec<&Restaurant> {
        let category = category.trim();
        self.restaurants
            .iter()
            .filter(|r| r.serves_category(category))
            .collect()
    }

    /// Case-insensitive substring search over restaurant names, dish names
    /// and dish descriptions. An empty query lists every restaurant.
    pub fn search(&self, query: &str) -> CoreResult<Vec<SearchHit>> {
        let needle = validate_search_query(query)?.to_lowercase();
        let mut hits = Vec::new();

        for restaurant in &self.restaurants {
            if restaurant.name.to_lowercase().contains(&needle) {
                hits.push(SearchHit::Restaurant {
                    restaurant_id: restaurant.id.clone(),
                    name: restaurant.name.clone(),
                });
            }

            if needle.is_empty() {
                continue;
            }

            for item in &restaurant.menu {
                let matches = item.name.to_lowercase().contains(&needle)
                    || item.description.to_lowercase().contains(&needle);
                if matches {
                    hits.push(SearchHit::MenuItem {
                        restaurant_id: restaurant.id.clone(),
                        item_id: item.id.clone(),
                        name: item.name.clone(),
                        price: item.price,
                    });
                }
            }
        }

        Ok(hits)
    }
}

fn duplicate(field: &str, value: &str) -> CoreError {
    CoreError::Validation(ValidationError::Duplicate {
        field: field.to_string(),
        value: value.to_string(),
    })
}

// =============================================================================
// Demo Data
// =============================================================================

const IMAGE_HOST: &str =
    "https://storage.googleapis.com/dala-prod-public-storage/generated-images/ca4f8fbb-3af3-4172-8e4e-e98aaa8e6f1d";

fn hosted(file: &str) -> String {
    format!("{}/{}", IMAGE_HOST, file)
}

fn unsplash(photo: &str) -> String {
    format!(
        "https://images.unsplash.com/{}?auto=format&fit=crop&q=80&w=400",
        photo
    )
}

fn category(id: &str, name: &str, icon: &str, image: String) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        image,
    }
}

fn dish(id: &str, name: &str, description: &str, birr: i64, photo: &str, category: &str) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Money::from_major(birr),
        image: unsplash(photo),
        category: category.to_string(),
    }
}

fn demo_categories() -> Vec<Category> {
    vec![
        category("1", "Ethiopian", "🍲", hosted("ethiopian-hero-5dcba0ae-1770886291072.webp")),
        category("2", "Burgers", "🍔", hosted("burger-category-f6b56c39-1770886290872.webp")),
        category("3", "Pizza", "🍕", hosted("pizza-category-62e2b420-1770886289170.webp")),
        category("4", "Desserts", "🍰", unsplash("photo-1551024601-bec78aea704b")),
        category("5", "Drinks", "🥤", unsplash("photo-1544145945-f904253d0c7b")),
    ]
}

fn demo_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            id: "res1".to_string(),
            name: "Habesha Delight".to_string(),
            rating: Rating::from_tenths(48),
            delivery_time: "20-30 min".to_string(),
            delivery_fee: Money::from_major(50),
            image: hosted("ethiopian-hero-5dcba0ae-1770886291072.webp"),
            menu: vec![
                dish(
                    "m1",
                    "Special Beyaynetu",
                    "Assorted vegan stews with fresh Injera",
                    280,
                    "photo-1541518763669-27fef04b14ea",
                    "Ethiopian",
                ),
                dish(
                    "m2",
                    "Doro Wat",
                    "Traditional spicy chicken stew with egg",
                    350,
                    "photo-1574484284002-952d92456975",
                    "Ethiopian",
                ),
            ],
        },
        Restaurant {
            id: "res2".to_string(),
            name: "Burger King Plaza".to_string(),
            rating: Rating::from_tenths(45),
            delivery_time: "15-25 min".to_string(),
            delivery_fee: Money::from_major(40),
            image: hosted("burger-category-f6b56c39-1770886290872.webp"),
            menu: vec![
                dish(
                    "m3",
                    "Double Cheese Burger",
                    "Two juicy patties with extra cheese",
                    420,
                    "photo-1568901346375-23c9450c58cd",
                    "Burgers",
                ),
                dish(
                    "m4",
                    "Crispy Chicken Burger",
                    "Spicy breaded chicken breast",
                    380,
                    "photo-1610614819513-58e34989848b",
                    "Burgers",
                ),
            ],
        },
        Restaurant {
            id: "res3".to_string(),
            name: "Bella Pizza".to_string(),
            rating: Rating::from_tenths(46),
            delivery_time: "30-45 min".to_string(),
            delivery_fee: Money::from_major(60),
            image: hosted("pizza-category-62e2b420-1770886289170.webp"),
            menu: vec![
                dish(
                    "m5",
                    "Pepperoni Feast",
                    "Classic pepperoni with mozzarella",
                    550,
                    "photo-1628840042765-356cda07504e",
                    "Pizza",
                ),
                dish(
                    "m6",
                    "Margherita",
                    "Fresh basil and tomatoes",
                    480,
                    "photo-1574071318508-1cdbad80ad38",
                    "Pizza",
                ),
            ],
        },
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_is_valid() {
        let demo = Catalog::demo();
        let rebuilt = Catalog::new(demo.categories.clone(), demo.restaurants.clone()).unwrap();
        assert_eq!(rebuilt, demo);
        assert_eq!(demo.categories().len(), 5);
        assert_eq!(demo.restaurants().len(), 3);
    }

    #[test]
    fn test_demo_prices_in_santim() {
        let catalog = Catalog::demo();
        let (restaurant, item) = catalog.menu_item("m2").unwrap();
        assert_eq!(restaurant.id, "res1");
        assert_eq!(item.price.minor(), 35000);
        assert_eq!(restaurant.delivery_fee.to_string(), "ETB 50.00");
    }

    #[test]
    fn test_lookup_misses() {
        let catalog = Catalog::demo();
        assert!(matches!(
            catalog.restaurant("res9"),
            Err(CoreError::RestaurantNotFound(_))
        ));
        assert!(matches!(
            catalog.menu_item("m99"),
            Err(CoreError::MenuItemNotFound(_))
        ));
    }

    #[test]
    fn test_restaurants_in_category() {
        let catalog = Catalog::demo();
        let pizza: Vec<&str> = catalog
            .restaurants_in_category("pizza")
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(pizza, vec!["res3"]);
        assert!(catalog.restaurants_in_category("Desserts").is_empty());
    }

    #[test]
    fn test_search_matches_restaurants_and_dishes() {
        let catalog = Catalog::demo();
        let hits = catalog.search("BURGER").unwrap();

        assert!(hits.contains(&SearchHit::Restaurant {
            restaurant_id: "res2".to_string(),
            name: "Burger King Plaza".to_string(),
        }));
        let dishes = hits
            .iter()
            .filter(|h| matches!(h, SearchHit::MenuItem { .. }))
            .count();
        assert_eq!(dishes, 2);

        let stew = catalog.search("stew").unwrap();
        assert_eq!(stew.len(), 2);
    }

    #[test]
    fn test_empty_search_lists_restaurants() {
        let hits = Catalog::demo().search("  ").unwrap();
        assert_eq!(hits.len(), 3);
        assert!(hits.iter().all(|h| matches!(h, SearchHit::Restaurant { .. })));
    }

    #[test]
    fn test_search_accepts_long_amharic_query() {
        // 48 characters, 144 bytes
        let hits = Catalog::demo().search(&"ዶ".repeat(48)).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_rejects_duplicate_item_ids() {
        let mut restaurants = Catalog::demo().restaurants().to_vec();
        restaurants[1].menu[0].id = "m1".to_string();

        let err = Catalog::new(vec![], restaurants).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: menu item id 'm1' already exists"
        );
    }

    #[test]
    fn test_rejects_non_positive_price() {
        let mut restaurants = Catalog::demo().restaurants().to_vec();
        restaurants[0].menu[0].price = Money::zero();

        assert!(matches!(
            Catalog::new(vec![], restaurants),
            Err(CoreError::Validation(ValidationError::MustBePositive { .. }))
        ));
    }

    #[test]
    fn test_rejects_duplicate_restaurant_ids() {
        let mut restaurants = Catalog::demo().restaurants().to_vec();
        restaurants[2].id = "res1".to_string();

        assert!(Catalog::new(vec![], restaurants).is_err());
    }
}
