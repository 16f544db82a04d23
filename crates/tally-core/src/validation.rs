//! # Validation Module
//!
//! Purchase eligibility rules for Tally.
//!
//! ## Validation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Purchase Attempt                                               │
//! │                                                                 │
//! │  validate(amount, customer_age) ← THIS MODULE                   │
//! │       │                                                         │
//! │       ├── amount <= 0?        → "amount must be greater         │
//! │       │                          than zero"                     │
//! │       ├── amount > max?       → "amount exceeds the maximum     │
//! │       │                          allowed ($…)"                  │
//! │       ├── customer_age < 18?  → "customer must be of legal age" │
//! │       │                                                         │
//! │       └── OK → proceed to discount calculation                  │
//! │                                                                 │
//! │  Checks run in this fixed order; the first failure wins and no  │
//! │  further checks run.                                            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{DEFAULT_MAX_PURCHASE_CENTS, LEGAL_PURCHASE_AGE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Purchase Validator
// =============================================================================

/// Gatekeeps purchase attempts against the business rules.
///
/// The only configuration is the maximum allowed amount, fixed at
/// construction. Everything else (the legal age) is a crate constant.
#[derive(Debug, Clone)]
pub struct PurchaseValidator {
    max_amount: Money,
}

impl PurchaseValidator {
    /// Creates a validator with a custom purchase ceiling.
    pub fn new(max_amount: Money) -> Self {
        PurchaseValidator { max_amount }
    }

    /// Returns the configured purchase ceiling.
    #[inline]
    pub fn max_amount(&self) -> Money {
        self.max_amount
    }

    /// Validates a purchase attempt.
    ///
    /// Pure check with no side effects. `Ok(())` means the purchase may
    /// proceed; the error's `Display` rendering is the customer-facing
    /// rejection reason.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    /// use tally_core::validation::PurchaseValidator;
    ///
    /// let validator = PurchaseValidator::default();
    /// assert!(validator.validate(Money::from_cents(75_000), 30).is_ok());
    /// assert!(validator.validate(Money::zero(), 30).is_err());
    /// ```
    pub fn validate(&self, amount: Money, customer_age: u32) -> ValidationResult<()> {
        if !amount.is_positive() {
            return Err(ValidationError::AmountNotPositive);
        }

        if amount > self.max_amount {
            return Err(ValidationError::AmountExceedsMax {
                max: self.max_amount,
            });
        }

        if customer_age < LEGAL_PURCHASE_AGE {
            return Err(ValidationError::UnderLegalAge { age: customer_age });
        }

        Ok(())
    }
}

/// Default validator uses the standard $10,000 ceiling.
impl Default for PurchaseValidator {
    fn default() -> Self {
        PurchaseValidator::new(Money::from_cents(DEFAULT_MAX_PURCHASE_CENTS))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
