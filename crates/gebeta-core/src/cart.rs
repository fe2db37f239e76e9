//! # Cart
//!
//! The list of selected dishes and the operations that mutate it.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  User Action              Operation                 Cart Change         │
//! │  ───────────              ─────────                 ───────────         │
//! │                                                                         │
//! │  Click "Add" ───────────► add_item() ─────────────► qty += 1 / push     │
//! │                                                                         │
//! │  Click "+" / "-" ───────► update_quantity() ──────► qty = max(1, q+d)   │
//! │                                                                         │
//! │  Click remove ──────────► remove_item() ──────────► line dropped        │
//! │                                                                         │
//! │  Return home ───────────► clear() ────────────────► empty               │
//! │                                                                         │
//! │  NOTE: every operation is total. Unknown ids are no-ops.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each mutating method reports whether it changed anything so the store can
//! tell callers when an action was a no-op.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{CartLine, MenuItem};

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by menu item id (adding again increases quantity)
/// - Quantity is always >= 1 (decrements clamp, removal is explicit)
/// - Lines keep insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds one of `item`, or bumps the quantity if it is already in the cart.
    ///
    /// An existing line keeps the restaurant it was first added from.
    pub fn add_item(&mut self, item: &MenuItem, restaurant_id: &str) {
        if let Some(line) = self.line_mut(&item.id) {
            line.quantity = line.quantity.saturating_add(1);
            return;
        }

        self.lines.push(CartLine::new(item.clone(), restaurant_id));
    }

    /// Removes the line for `item_id`. Returns false if there was none.
    pub fn remove_item(&mut self, item_id: &str) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|line| line.id() != item_id);
        self.lines.len() != initial_len
    }

    /// Shifts a line's quantity by `delta`, clamping at 1.
    ///
    /// ## Behavior
    /// - Never removes the line, whatever the delta
    /// - Returns true only if the quantity actually changed
    pub fn update_quantity(&mut self, item_id: &str, delta: i64) -> bool {
        let Some(line) = self.line_mut(item_id) else {
            return false;
        };

        let target = i64::from(line.quantity)
            .saturating_add(delta)
            .clamp(1, i64::from(u32::MAX));
        let new_qty = u32::try_from(target).unwrap_or(u32::MAX);

        let changed = new_qty != line.quantity;
        line.quantity = new_qty;
        changed
    }

    /// Clears all lines. Returns false if the cart was already empty.
    pub fn clear(&mut self) -> bool {
        let had_lines = !self.lines.is_empty();
        self.lines.clear();
        had_lines
    }

    /// The line for `item_id`, if present.
    pub fn line(&self, item_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == item_id)
    }

    fn line_mut(&mut self, item_id: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id() == item_id)
    }

    /// Lines in the order they were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct dishes.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Total dishes across all lines (the navbar badge).
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of price × quantity over all lines.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(id: &str, price: i64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Dish {}", id),
            description: String::new(),
            price: Money::from_minor(price),
            image: String::new(),
            category: "Ethiopian".to_string(),
        }
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        cart.add_item(&dish("m1", 350), "res1");

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 1);
        assert_eq!(cart.subtotal().minor(), 350);
        assert_eq!(cart.line("m1").map(|l| l.restaurant_id.as_str()), Some("res1"));
    }

    #[test]
    fn test_repeated_adds_collapse_into_one_line() {
        let mut cart = Cart::new();
        let item = dish("m1", 350);

        for _ in 0..7 {
            cart.add_item(&item, "res1");
        }

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.line("m1").map(|l| l.quantity), Some(7));
    }

    #[test]
    fn test_existing_line_keeps_first_restaurant() {
        let mut cart = Cart::new();
        let item = dish("m1", 350);

        cart.add_item(&item, "res1");
        cart.add_item(&item, "res2");

        let line = cart.line("m1").unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.restaurant_id, "res1");
    }

    #[test]
    fn test_update_quantity_clamps_at_one() {
        let mut cart = Cart::new();
        let item = dish("m1", 350);
        cart.add_item(&item, "res1");
        cart.add_item(&item, "res1");

        assert!(cart.update_quantity("m1", -5));
        assert_eq!(cart.line("m1").map(|l| l.quantity), Some(1));

        // Already at the floor: nothing changes, line stays.
        assert!(!cart.update_quantity("m1", i64::MIN));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_update_quantity_increments() {
        let mut cart = Cart::new();
        cart.add_item(&dish("m1", 100), "res1");

        assert!(cart.update_quantity("m1", 4));
        assert_eq!(cart.total_quantity(), 5);
        assert_eq!(cart.subtotal().minor(), 500);
    }

    #[test]
    fn test_update_quantity_saturates_high() {
        let mut cart = Cart::new();
        cart.add_item(&dish("m1", 1), "res1");

        cart.update_quantity("m1", i64::MAX);
        assert_eq!(cart.line("m1").map(|l| l.quantity), Some(u32::MAX));
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut cart = Cart::new();
        cart.add_item(&dish("m1", 350), "res1");
        let before = cart.clone();

        assert!(!cart.remove_item("nope"));
        assert!(!cart.update_quantity("nope", 3));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_then_add_starts_fresh() {
        let mut cart = Cart::new();
        let item = dish("m1", 350);
        cart.add_item(&item, "res1");
        cart.add_item(&item, "res1");

        assert!(cart.remove_item("m1"));
        cart.add_item(&item, "res1");

        assert_eq!(cart.line("m1").map(|l| l.quantity), Some(1));
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        cart.add_item(&dish("m1", 350), "res1");

        assert!(cart.clear());
        assert!(cart.is_empty());
        assert!(cart.subtotal().is_zero());
        assert!(!cart.clear());
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(&dish("m2", 1), "res1");
        cart.add_item(&dish("m1", 1), "res1");
        cart.add_item(&dish("m2", 1), "res1");

        let ids: Vec<&str> = cart.lines().iter().map(CartLine::id).collect();
        assert_eq!(ids, vec!["m2", "m1"]);
    }
}
