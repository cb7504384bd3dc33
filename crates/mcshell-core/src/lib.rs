//! # mcshell-core: Pure Ordering Logic for McShell
//!
//! Menus, the order being built, and the bill arithmetic. Nothing in this
//! crate touches the terminal.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        McShell Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                    mcshell-cli (apps/cli)                       │    │
//! │  │    prompts ──► session driver ──► bill renderer                 │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │               ★ mcshell-core (THIS CRATE) ★                     │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐    │    │
//! │  │   │  catalog  │  │   order   │  │  pricing  │  │   money   │    │    │
//! │  │   │  menus    │  │ OrderLine │  │ subtotal  │  │   paise   │    │    │
//! │  │   │  lookup   │  │  append   │  │  charge   │  │  format   │    │    │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘    │    │
//! │  │                                                                 │    │
//! │  │   NO I/O • PURE FUNCTIONS • INTEGER MONEY                       │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Category, MenuOption, ServiceChargeRate
//! - [`money`] - Money type with integer arithmetic
//! - [`catalog`] - The fixed food and beverage menus
//! - [`order`] - Append-only order of picked items
//! - [`pricing`] - Subtotal, tiered service charge, final amount
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog table rules
//!
//! ## Example Usage
//!
//! ```rust
//! use mcshell_core::{pricing, Catalog, Category, Order};
//!
//! let food = Catalog::food();
//! let mut order = Order::new();
//!
//! let burger = food.resolve("Veg Burger Rs. 115.0")?;
//! order.add(Category::Food, burger)?;
//!
//! let bill = pricing::BillSummary::from_order(&order)?;
//! assert_eq!(bill.final_amount.fixed_2dp(), "116.15");
//! # Ok::<(), mcshell_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod order;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, FINISH_OPTION_NAME};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{Order, OrderLine};
pub use pricing::BillSummary;
pub use types::*;
