//! # Pricing Engine
//!
//! Subtotal, tiered service charge and final amount for an order.
//!
//! ## Service Charge Tiers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  rate = min(20, floor(subtotal / Rs. 100)) percent                      │
//! │                                                                         │
//! │   subtotal          rate     charge                                     │
//! │   Rs.    0.00        0%      Rs.   0.00                                 │
//! │   Rs.  150.00        1%      Rs.   1.50                                 │
//! │   Rs.  200.00        2%      Rs.   4.00                                 │
//! │   Rs.  999.00        9%      Rs.  89.91                                 │
//! │   Rs. 2500.00       20%      Rs. 500.00   (capped)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is pure: same order in, same amounts out.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::order::Order;
use crate::types::ServiceChargeRate;

/// Highest service charge rate, in percent.
pub const MAX_SERVICE_CHARGE_PERCENT: u32 = 20;

/// Subtotal step that raises the rate by one percentage point.
pub const SERVICE_CHARGE_STEP: Money = Money::from_rupees(100);

// =============================================================================
// Amount-level Functions
// =============================================================================

/// Rate for a given subtotal: one point per full Rs. 100, capped at 20%.
pub fn service_charge_rate_for(subtotal: Money) -> ServiceChargeRate {
    let steps = subtotal.paise().div_euclid(SERVICE_CHARGE_STEP.paise()).max(0);
    let percent = steps.min(MAX_SERVICE_CHARGE_PERCENT as i64) as u32;
    ServiceChargeRate::from_percent(percent)
}

/// Service charge for a given subtotal.
pub fn service_charge_for(subtotal: Money) -> CoreResult<Money> {
    subtotal
        .apply_rate(service_charge_rate_for(subtotal))
        .ok_or(CoreError::AmountOverflow)
}

// =============================================================================
// Order-level Functions
// =============================================================================

/// Sum of all line prices; zero for an empty order.
pub fn subtotal(order: &Order) -> CoreResult<Money> {
    order
        .lines()
        .iter()
        .try_fold(Money::zero(), |acc, line| acc.checked_add(line.price))
        .ok_or(CoreError::AmountOverflow)
}

/// Service charge rate for the order.
pub fn service_charge_rate(order: &Order) -> CoreResult<ServiceChargeRate> {
    Ok(service_charge_rate_for(subtotal(order)?))
}

/// Service charge for the order.
pub fn service_charge(order: &Order) -> CoreResult<Money> {
    service_charge_for(subtotal(order)?)
}

/// Subtotal plus service charge.
pub fn final_amount(order: &Order) -> CoreResult<Money> {
    Ok(BillSummary::from_order(order)?.final_amount)
}

// =============================================================================
// Bill Summary
// =============================================================================

/// All computed amounts for one order, taken together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillSummary {
    pub subtotal: Money,
    pub rate: ServiceChargeRate,
    pub service_charge: Money,
    pub final_amount: Money,
}

impl BillSummary {
    /// Computes the summary for a subtotal.
    pub fn from_subtotal(subtotal: Money) -> CoreResult<Self> {
        let rate = service_charge_rate_for(subtotal);
        let service_charge = service_charge_for(subtotal)?;
        let final_amount = subtotal
            .checked_add(service_charge)
            .ok_or(CoreError::AmountOverflow)?;

        Ok(BillSummary {
            subtotal,
            rate,
            service_charge,
            final_amount,
        })
    }

    /// Computes the summary for an order.
    pub fn from_order(order: &Order) -> CoreResult<Self> {
        Self::from_subtotal(subtotal(order)?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
