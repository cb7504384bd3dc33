//! # Validation Module
//!
//! Checks applied to catalog tables before they are offered to the user.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Table Rules                                │
//! │                                                                         │
//! │  per option:   name not blank, price >= 0                               │
//! │  per table:    exactly one Finish entry, and it is free                 │
//! │                no two entries share a display label                     │
//! │                                                                         │
//! │  A table that fails any rule never becomes a Catalog.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mcshell_core::validation::validate_option_name;
//!
//! assert!(validate_option_name("Veg Wrap").is_ok());
//! assert!(validate_option_name("  ").is_err());
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Category, MenuOption};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Option Validators
// =============================================================================

/// Validates a menu option name.
///
/// ## Rules
/// - Must not be empty or whitespace only
pub fn validate_option_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates a menu price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items, and the finish entry)
///
/// ## Example
/// ```rust
/// use mcshell_core::money::Money;
/// use mcshell_core::validation::validate_price;
///
/// assert!(validate_price("Veg Burger", Money::from_rupees(115)).is_ok());
/// assert!(validate_price("Water", Money::zero()).is_ok());
/// assert!(validate_price("Refund", Money::from_paise(-100)).is_err());
/// ```
pub fn validate_price(name: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::NegativePrice {
            name: name.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Table Validators
// =============================================================================

/// Validates a whole catalog table.
pub fn validate_catalog(category: Category, options: &[MenuOption]) -> ValidationResult<()> {
    for option in options {
        validate_option_name(&option.name)?;
        validate_price(&option.name, option.price)?;
    }

    let sentinels: Vec<&MenuOption> = options.iter().filter(|o| o.is_finish()).collect();
    match sentinels.as_slice() {
        [] => return Err(ValidationError::MissingSentinel { category }),
        [only] if !only.price.is_zero() => {
            return Err(ValidationError::SentinelPriced { category });
        }
        [_] => {}
        many => {
            return Err(ValidationError::DuplicateSentinel {
                category,
                count: many.len(),
            });
        }
    }

    let mut seen = HashSet::new();
    for option in options {
        let label = option.label();
        if !seen.insert(label.clone()) {
            return Err(ValidationError::DuplicateLabel { category, label });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn finish() -> MenuOption {
        MenuOption::finish("No, that's all")
    }

    #[test]
    fn test_validate_option_name() {
        assert!(validate_option_name("Sprite (M)").is_ok());
        assert!(validate_option_name("").is_err());
        assert!(validate_option_name("   ").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("x", Money::zero()).is_ok());
        assert!(validate_price("x", Money::from_rupees(130)).is_ok());
        assert!(matches!(
            validate_price("x", Money::from_paise(-1)),
            Err(ValidationError::NegativePrice { .. })
        ));
    }

    #[test]
    fn test_validate_catalog_ok() {
        let options = vec![
            MenuOption::item("Veg Burger", Money::from_rupees(115)),
            finish(),
        ];
        assert!(validate_catalog(Category::Food, &options).is_ok());
    }

    #[test]
    fn test_validate_catalog_missing_sentinel() {
        let options = vec![MenuOption::item("Veg Burger", Money::from_rupees(115))];
        assert!(matches!(
            validate_catalog(Category::Food, &options),
            Err(ValidationError::MissingSentinel { .. })
        ));
    }

    #[test]
    fn test_validate_catalog_duplicate_sentinel() {
        let options = vec![finish(), MenuOption::finish("Done")];
        assert!(matches!(
            validate_catalog(Category::Beverage, &options),
            Err(ValidationError::DuplicateSentinel { count: 2, .. })
        ));
    }

    #[test]
    fn test_validate_catalog_priced_sentinel() {
        let mut done = finish();
        done.price = Money::from_rupees(1);
        assert!(matches!(
            validate_catalog(Category::Food, &[done]),
            Err(ValidationError::SentinelPriced { .. })
        ));
    }

    #[test]
    fn test_validate_catalog_duplicate_label() {
        let options = vec![
            MenuOption::item("Sprite (M)", Money::from_rupees(115)),
            MenuOption::item("Sprite (M)", Money::from_rupees(115)),
            finish(),
        ];
        assert!(matches!(
            validate_catalog(Category::Beverage, &options),
            Err(ValidationError::DuplicateLabel { .. })
        ));
    }

    #[test]
    fn test_same_name_different_price_is_allowed() {
        let options = vec![
            MenuOption::item("Sprite", Money::from_rupees(115)),
            MenuOption::item("Sprite", Money::from_rupees(130)),
            finish(),
        ];
        assert!(validate_catalog(Category::Beverage, &options).is_ok());
    }
}
