//! # Discount Module
//!
//! Tiered discount calculation and application.
//!
//! ## Discount Schedule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Discount Tiers                              │
//! │                                                                 │
//! │   Purchase Amount          Discount                             │
//! │   ───────────────          ────────                             │
//! │   under $100                  0%                                │
//! │   $100 – $499.99             10%                                │
//! │   $500 – $999.99             15%                                │
//! │   $1000 and up               20%                                │
//! │                                                                 │
//! │   Each band is inclusive on its lower bound. The schedule is    │
//! │   fixed; per-tenant schedules are out of scope.                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::discount::{apply_discount, DiscountRate};
//! use tally_core::money::Money;
//!
//! let amount = Money::from_cents(75_000); // $750.00
//! let rate = DiscountRate::for_amount(amount).unwrap();
//! assert_eq!(rate.bps(), 1500); // 15%
//!
//! let final_amount = apply_discount(amount, rate).unwrap();
//! assert_eq!(final_amount.cents(), 63_750); // $637.50
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Tier Thresholds
// =============================================================================

/// Smallest amount earning the 10% discount ($100.00).
pub const DISCOUNT_10_MIN_CENTS: i64 = 10_000;

/// Smallest amount earning the 15% discount ($500.00).
pub const DISCOUNT_15_MIN_CENTS: i64 = 50_000;

/// Smallest amount earning the 20% discount ($1,000.00).
pub const DISCOUNT_20_MIN_CENTS: i64 = 100_000;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so 1500 bps = 15%. Integer basis points
/// keep rate math exact, and an unsigned representation makes a negative
/// rate unrepresentable rather than a runtime check.
///
/// Rates above 100% (10000 bps) are representable on purpose: applying one
/// yields a zero or negative final amount, which callers may legitimately
/// want (e.g. promotional overshoot), so it is not treated as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a discount rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        DiscountRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero discount rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Looks up the tier rate for a purchase amount.
    ///
    /// ## Errors
    /// Returns [`CoreError::NegativeAmount`] for a negative amount. That is
    /// caller misuse, not a rejection: the validator refuses non-positive
    /// amounts before this is ever reached in the normal pipeline.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::discount::DiscountRate;
    /// use tally_core::money::Money;
    ///
    /// let rate = DiscountRate::for_amount(Money::from_cents(9_999)).unwrap();
    /// assert!(rate.is_zero()); // $99.99 is below the first tier
    /// ```
    pub fn for_amount(amount: Money) -> CoreResult<DiscountRate> {
        if amount.is_negative() {
            return Err(CoreError::NegativeAmount { amount });
        }

        let bps = if amount.cents() < DISCOUNT_10_MIN_CENTS {
            0
        } else if amount.cents() < DISCOUNT_15_MIN_CENTS {
            1_000
        } else if amount.cents() < DISCOUNT_20_MIN_CENTS {
            1_500
        } else {
            2_000
        };

        Ok(DiscountRate(bps))
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Discount Application
// =============================================================================

/// Applies a discount rate to an amount and returns the final amount.
///
/// ## Rounding
/// The discount is computed in 128-bit integer math and rounded half-up to
/// whole cents: `(cents × bps + 5000) / 10000`. A $99.99 purchase at 10%
/// comes out at $89.99.
///
/// ## Errors
/// Returns [`CoreError::NegativeAmount`] for a negative amount. The rate has
/// no upper bound here; above 100% the result goes to zero or negative.
pub fn apply_discount(amount: Money, rate: DiscountRate) -> CoreResult<Money> {
    if amount.is_negative() {
        return Err(CoreError::NegativeAmount { amount });
    }

    // i128 intermediate to prevent overflow on large amounts
    let discount_cents = (amount.cents() as i128 * rate.bps() as i128 + 5000) / 10000;
    Ok(amount - Money::from_cents(discount_cents as i64))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rate_for(cents: i64) -> u32 {
        DiscountRate::for_amount(Money::from_cents(cents))
            .unwrap()
            .bps()
    }

    #[test]
    fn test_tier_boundaries() {
        // Each band is inclusive on its lower bound
        assert_eq!(rate_for(0), 0);
        assert_eq!(rate_for(9_999), 0); // $99.99
        assert_eq!(rate_for(10_000), 1_000); // $100.00
        assert_eq!(rate_for(49_999), 1_000); // $499.99
        assert_eq!(rate_for(50_000), 1_500); // $500.00
        assert_eq!(rate_for(99_999), 1_500); // $999.99
        assert_eq!(rate_for(100_000), 2_000); // $1,000.00
        assert_eq!(rate_for(500_000), 2_000);
    }

    #[test]
    fn test_negative_amount_is_contract_violation() {
        let err = DiscountRate::for_amount(Money::from_cents(-1)).unwrap_err();
        assert!(matches!(err, CoreError::NegativeAmount { .. }));

        let err = apply_discount(Money::from_cents(-1), DiscountRate::zero()).unwrap_err();
        assert!(matches!(err, CoreError::NegativeAmount { .. }));
    }

    #[test]
    fn test_apply_discount_rounding() {
        // $99.99 at 10%: 9999 × 0.10 = 999.9¢, rounds to 1000¢ off
        let final_amount =
            apply_discount(Money::from_cents(9_999), DiscountRate::from_bps(1_000)).unwrap();
        assert_eq!(final_amount.cents(), 8_999); // $89.99
    }

    #[test]
    fn test_apply_discount_exact() {
        let final_amount =
            apply_discount(Money::from_cents(75_000), DiscountRate::from_bps(1_500)).unwrap();
        assert_eq!(final_amount.cents(), 63_750); // $750.00 → $637.50
    }

    #[test]
    fn test_apply_zero_rate_is_identity() {
        let amount = Money::from_cents(5_000);
        assert_eq!(apply_discount(amount, DiscountRate::zero()).unwrap(), amount);
    }

    #[test]
    fn test_rates_above_one_hundred_percent_are_accepted() {
        // 100% leaves nothing to pay
        let free = apply_discount(Money::from_cents(10_000), DiscountRate::from_bps(10_000));
        assert_eq!(free.unwrap().cents(), 0);

        // 200% overshoots into negative; accepted, not an error
        let overshoot = apply_discount(Money::from_cents(10_000), DiscountRate::from_bps(20_000));
        assert_eq!(overshoot.unwrap().cents(), -10_000);
    }

    #[test]
    fn test_from_percentage() {
        assert_eq!(DiscountRate::from_percentage(15.0).bps(), 1_500);
        assert!((DiscountRate::from_bps(2_000).percentage() - 20.0).abs() < 0.001);
    }
}
