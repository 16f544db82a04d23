//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Two Failure Channels
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Failure Channels                          │
//! │                                                                 │
//! │  ValidationError  - Domain rejection. Expected, part of the     │
//! │                     normal return value: the purchase is        │
//! │                     refused with a human-readable reason and    │
//! │                     processing of later purchases continues.    │
//! │                                                                 │
//! │  CoreError        - Contract violation. A caller handed the     │
//! │                     discount engine an argument the validator   │
//! │                     would have refused (e.g. a negative         │
//! │                     amount). Raised as a real error; correct    │
//! │                     callers validate first and never see it.    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (amounts, limits)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Contract-violation errors from the discount engine.
///
/// These signal misuse by the caller rather than a business-rule rejection.
/// The processing pipeline always validates before calculating, so this
/// channel is unreachable through [`crate::processor::PurchaseProcessor`]
/// under correct use.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A negative amount was handed directly to a discount operation.
    #[error("amount cannot be negative: {amount}")]
    NegativeAmount { amount: Money },

    /// Validation error (wraps ValidationError).
    ///
    /// Lets callers that drive [`crate::validation::PurchaseValidator`]
    /// directly fold both channels into one error type with `?`.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Business-rule rejections produced by purchase validation.
///
/// The `Display` rendering of each variant is the message shown to the
/// customer-facing surface, so the wording is part of the contract.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Zero or negative purchase amount.
    #[error("amount must be greater than zero")]
    AmountNotPositive,

    /// Purchase amount above the configured ceiling.
    #[error("amount exceeds the maximum allowed ({max})")]
    AmountExceedsMax { max: Money },

    /// Customer below the legal purchase age.
    #[error("customer must be of legal age")]
    UnderLegalAge { age: u32 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::NegativeAmount {
            amount: Money::from_cents(-550),
        };
        assert_eq!(err.to_string(), "amount cannot be negative: -$5.50");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::AmountNotPositive;
        assert_eq!(err.to_string(), "amount must be greater than zero");

        let err = ValidationError::AmountExceedsMax {
            max: Money::from_cents(1_000_000),
        };
        assert_eq!(
            err.to_string(),
            "amount exceeds the maximum allowed ($10000.00)"
        );

        let err = ValidationError::UnderLegalAge { age: 17 };
        assert_eq!(err.to_string(), "customer must be of legal age");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::AmountNotPositive;
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
