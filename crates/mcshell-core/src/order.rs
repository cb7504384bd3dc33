//! # Order
//!
//! The order being built during a session.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Operations                                     │
//! │                                                                         │
//! │  User picks an item ─────► Order::add(&option) ─────► lines.push(line)  │
//! │                                                                         │
//! │  User picks "finish" ────► (never reaches add; rejected if it does)     │
//! │                                                                         │
//! │  Bill ───────────────────► Order::lines() ──────────► (read only)       │
//! │                                                                         │
//! │  Lines are append-only: no update, no remove, no clear.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Category, MenuOption};

/// One ordered item.
///
/// Name and price are copied from the menu option when it is picked, so the
/// line stays fixed even if the option it came from is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub price: Money,
}

impl OrderLine {
    /// Creates a line from a picked option.
    ///
    /// ## Returns
    /// - `Err(SentinelNotOrderable)` for the finish entry
    pub fn from_option(category: Category, option: &MenuOption) -> CoreResult<Self> {
        if option.is_finish() {
            return Err(CoreError::SentinelNotOrderable { category });
        }

        Ok(OrderLine {
            name: option.name.clone(),
            price: option.price,
        })
    }
}

/// The accumulated order.
///
/// ## Invariants
/// - Lines keep selection order
/// - Lines are only ever appended
/// - No line comes from a finish entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Order {
    lines: Vec<OrderLine>,
}

impl Order {
    /// Creates a new empty order.
    pub fn new() -> Self {
        Order { lines: Vec::new() }
    }

    /// Appends a picked option to the order.
    pub fn add(&mut self, category: Category, option: &MenuOption) -> CoreResult<&OrderLine> {
        let line = OrderLine::from_option(category, option)?;
        self.lines.push(line);
        Ok(&self.lines[self.lines.len() - 1])
    }

    /// Lines in selection order.
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the order is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_add_copies_name_and_price() {
        let food = Catalog::food();
        let burger = food.resolve("Veg Burger Rs. 115.0").unwrap();

        let mut order = Order::new();
        let line = order.add(Category::Food, burger).unwrap().clone();

        assert_eq!(line.name, "Veg Burger");
        assert_eq!(line.price, Money::from_rupees(115));
        assert_eq!(order.len(), 1);
    }

    #[test]
    fn test_add_keeps_selection_order_and_duplicates() {
        let food = Catalog::food();
        let drinks = Catalog::beverages();
        let mut order = Order::new();

        order.add(Category::Food, &food.options()[1]).unwrap();
        order.add(Category::Food, &food.options()[1]).unwrap();
        order.add(Category::Beverage, &drinks.options()[2]).unwrap();

        let names: Vec<&str> = order.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Veg Wrap", "Veg Wrap", "Mango Smoothie"]);
    }

    #[test]
    fn test_sentinel_is_rejected() {
        let food = Catalog::food();
        let done = food.options().last().unwrap();

        let mut order = Order::new();
        let err = order.add(Category::Food, done).unwrap_err();

        assert!(matches!(err, CoreError::SentinelNotOrderable { .. }));
        assert!(order.is_empty());
    }

    #[test]
    fn test_new_order_is_empty() {
        let order = Order::default();
        assert!(order.is_empty());
        assert_eq!(order.len(), 0);
        assert!(order.lines().is_empty());
    }
}
