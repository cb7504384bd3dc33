//! # Money Module
//!
//! Provides the `Money` type for rupee amounts.
//!
//! ## Integer Paise
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every amount is stored as a whole number of paise (1/100 rupee).       │
//! │                                                                         │
//! │    Rs. 115.00  ──►  Money(11500)                                        │
//! │    Rs.   1.15  ──►  Money(115)                                          │
//! │                                                                         │
//! │  Sums are exact. The only division in the system (the service charge    │
//! │  percentage) rounds half-up to the nearest paisa, explicitly.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mcshell_core::money::Money;
//!
//! let burger = Money::from_rupees(115);
//! let wrap = Money::from_rupees_paise(130, 50);
//!
//! assert_eq!((burger + wrap).paise(), 24550);
//! assert_eq!((burger + wrap).fixed_2dp(), "245.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::types::ServiceChargeRate;

// =============================================================================
// Money Type
// =============================================================================

/// A rupee amount in paise.
///
/// Signed so that intermediate arithmetic never has to special-case zero,
/// but every amount produced by the catalog and pricing engine is
/// non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise.
    ///
    /// ## Example
    /// ```rust
    /// use mcshell_core::money::Money;
    ///
    /// let charge = Money::from_paise(115);
    /// assert_eq!(charge.rupees(), 1);
    /// assert_eq!(charge.paise_part(), 15);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Creates a Money value from rupees and paise.
    ///
    /// ## Example
    /// ```rust
    /// use mcshell_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupees_paise(89, 91).paise(), 8991);
    /// ```
    #[inline]
    pub const fn from_rupees_paise(rupees: i64, paise: i64) -> Self {
        Money(rupees * 100 + paise)
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion (truncated toward zero).
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(paise) => Some(Money(paise)),
            None => None,
        }
    }

    /// Applies a service charge rate, rounding half-up to the paisa.
    ///
    /// ## Implementation
    /// Integer math on basis points: `(paise * bps + 5000) / 10000`.
    /// `i128` keeps the intermediate product from overflowing; a result that
    /// does not fit back into `i64` yields `None`.
    ///
    /// ## Example
    /// ```rust
    /// use mcshell_core::money::Money;
    /// use mcshell_core::types::ServiceChargeRate;
    ///
    /// let subtotal = Money::from_rupees(999);
    /// let charge = subtotal.apply_rate(ServiceChargeRate::from_percent(9));
    ///
    /// // Rs. 999.00 × 9% = Rs. 89.91
    /// assert_eq!(charge, Some(Money::from_paise(8991)));
    /// ```
    pub fn apply_rate(&self, rate: ServiceChargeRate) -> Option<Money> {
        let charge = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        i64::try_from(charge).ok().map(Money)
    }

    /// Formats the amount with exactly two decimal places: `115.00`.
    pub fn fixed_2dp(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }

    /// Formats the amount the way a default number-to-text conversion does:
    /// shortest form with at least one fractional digit.
    ///
    /// ## Example
    /// ```rust
    /// use mcshell_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupees(115).plain_decimal(), "115.0");
    /// assert_eq!(Money::zero().plain_decimal(), "0.0");
    /// assert_eq!(Money::from_paise(11550).plain_decimal(), "115.5");
    /// assert_eq!(Money::from_paise(11505).plain_decimal(), "115.05");
    /// ```
    pub fn plain_decimal(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let paise = self.paise_part();
        let fraction = if paise % 10 == 0 {
            format!("{}", paise / 10)
        } else {
            format!("{:02}", paise)
        };
        format!("{}{}.{}", sign, self.rupees().abs(), fraction)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Human-readable form used in messages and logs: `Rs. 115.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rs. {}", self.fixed_2dp())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
