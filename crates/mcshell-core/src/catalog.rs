//! # Catalog
//!
//! The fixed menus offered during a session, one per [`Category`].
//!
//! ## Lookup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog::labels()  ──►  prompt shows "Veg Burger Rs. 115.0", ...       │
//! │                                         │                               │
//! │                                 user picks a label                      │
//! │                                         │                               │
//! │                                         ▼                               │
//! │  Catalog::resolve(label) ──► Ok(&MenuOption)                            │
//! │                          └─► Err(UnrecognizedSelection)  (no default)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Category, MenuOption};
use crate::validation::validate_catalog;

/// Name of the entry that ends a category.
pub const FINISH_OPTION_NAME: &str = "No, that's all";

/// Food menu, in display order: (name, price in rupees).
const FOOD_MENU: &[(&str, i64)] = &[
    ("Veg Burger", 115),
    ("Veg Wrap", 130),
    ("Veg Happy Meal", 215),
    ("Chicken Burger", 175),
    ("Chicken Wrap", 195),
];

/// Beverage menu, in display order: (name, price in rupees).
const BEVERAGE_MENU: &[(&str, i64)] = &[
    ("Sprite (M)", 115),
    ("Sprite (L)", 130),
    ("Mango Smoothie", 215),
    ("Chocolate Smoothie", 175),
    ("Chocolate Smoothie w/ Icecream", 195),
];

/// An ordered, validated list of menu options for one category.
///
/// ## Invariants
/// - Exactly one option is the finish entry, and it costs nothing
/// - Display labels are unique, so label lookup is unambiguous
#[derive(Debug, Clone)]
pub struct Catalog {
    category: Category,
    options: Vec<MenuOption>,
}

impl Catalog {
    /// Builds a catalog from an arbitrary table, validating it first.
    pub fn new(category: Category, options: Vec<MenuOption>) -> CoreResult<Self> {
        validate_catalog(category, &options)?;
        Ok(Catalog { category, options })
    }

    /// The built-in food menu.
    pub fn food() -> Self {
        Self::from_table(Category::Food, FOOD_MENU)
    }

    /// The built-in beverage menu.
    pub fn beverages() -> Self {
        Self::from_table(Category::Beverage, BEVERAGE_MENU)
    }

    /// The built-in menu for a category.
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Food => Self::food(),
            Category::Beverage => Self::beverages(),
        }
    }

    // Built-in tables are covered by `test_builtin_catalogs_validate`.
    fn from_table(category: Category, table: &[(&str, i64)]) -> Self {
        let options = table
            .iter()
            .map(|(name, rupees)| MenuOption::item(*name, Money::from_rupees(*rupees)))
            .chain(std::iter::once(MenuOption::finish(FINISH_OPTION_NAME)))
            .collect();
        Catalog { category, options }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// All options, finish entry included, in display order.
    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    /// Display labels, in display order.
    pub fn labels(&self) -> Vec<String> {
        self.options.iter().map(MenuOption::label).collect()
    }

    /// Resolves a display label back to its option.
    ///
    /// ## Example
    /// ```rust
    /// use mcshell_core::Catalog;
    ///
    /// let food = Catalog::food();
    /// let burger = food.resolve("Veg Burger Rs. 115.0").unwrap();
    /// assert_eq!(burger.name, "Veg Burger");
    ///
    /// assert!(food.resolve("Sprite (M) Rs. 115.0").is_err());
    /// ```
    pub fn resolve(&self, label: &str) -> CoreResult<&MenuOption> {
        self.options
            .iter()
            .find(|option| option.label() == label)
            .ok_or_else(|| CoreError::UnrecognizedSelection {
                category: self.category,
                label: label.to_string(),
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
