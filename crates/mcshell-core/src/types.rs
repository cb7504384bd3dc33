//! # Domain Types
//!
//! Core domain types shared by the catalog, the order and the pricing engine.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐    │
//! │  │    Category     │   │   MenuOption    │   │ ServiceChargeRate   │    │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │    │
//! │  │  Food           │   │  name           │   │  percent (u32)      │    │
//! │  │  Beverage       │   │  price (Money)  │   │  0..=20             │    │
//! │  └─────────────────┘   │  kind           │   └─────────────────────┘    │
//! │                        └────────┬────────┘                              │
//! │                                 │                                       │
//! │                        ┌────────▼────────┐                              │
//! │                        │   OptionKind    │                              │
//! │                        │  Item | Finish  │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Service Charge Rate
// =============================================================================

/// Service charge rate as a whole percentage.
///
/// Stored as percent, exposed as basis points for [`Money::apply_rate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ServiceChargeRate(u32);

impl ServiceChargeRate {
    /// Creates a rate from a whole percentage.
    #[inline]
    pub const fn from_percent(percent: u32) -> Self {
        ServiceChargeRate(percent)
    }

    /// Returns the rate as a whole percentage.
    #[inline]
    pub const fn percent(&self) -> u32 {
        self.0
    }

    /// Returns the rate in basis points (1% = 100 bps).
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0 * 100
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        ServiceChargeRate(0)
    }
}

impl Default for ServiceChargeRate {
    fn default() -> Self {
        ServiceChargeRate::zero()
    }
}

impl fmt::Display for ServiceChargeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// Category
// =============================================================================

/// A menu category. Each category is offered in its own selection phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Food,
    Beverage,
}

impl Category {
    /// Prompt shown while the user is picking from this category.
    pub const fn prompt(&self) -> &'static str {
        match self {
            Category::Food => "Select a food item (Enter 'No, that's all' to finish)",
            Category::Beverage => "Select a beverage (Enter 'No, that's all' to finish)",
        }
    }

    /// Short lowercase name, used in log fields and error messages.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Beverage => "beverage",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Menu Option
// =============================================================================

/// Distinguishes orderable items from the "finish this category" entry.
///
/// The sentinel is identified by kind, never by a zero price or by its
/// formatted label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    /// A purchasable item.
    Item,
    /// Ends the current selection phase.
    Finish,
}

/// One entry of a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuOption {
    pub name: String,
    pub price: Money,
    pub kind: OptionKind,
}

impl MenuOption {
    /// Creates an orderable item.
    pub fn item(name: impl Into<String>, price: Money) -> Self {
        MenuOption {
            name: name.into(),
            price,
            kind: OptionKind::Item,
        }
    }

    /// Creates the sentinel entry that ends a category.
    pub fn finish(name: impl Into<String>) -> Self {
        MenuOption {
            name: name.into(),
            price: Money::zero(),
            kind: OptionKind::Finish,
        }
    }

    /// Display label offered in the prompt: `"<name> Rs. <price>"`.
    ///
    /// ## Example
    /// ```rust
    /// use mcshell_core::{MenuOption, Money};
    ///
    /// let burger = MenuOption::item("Veg Burger", Money::from_rupees(115));
    /// assert_eq!(burger.label(), "Veg Burger Rs. 115.0");
    ///
    /// let done = MenuOption::finish("No, that's all");
    /// assert_eq!(done.label(), "No, that's all Rs. 0.0");
    /// ```
    pub fn label(&self) -> String {
        format!("{} Rs. {}", self.name, self.price.plain_decimal())
    }

    /// True for the sentinel entry.
    #[inline]
    pub fn is_finish(&self) -> bool {
        self.kind == OptionKind::Finish
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
