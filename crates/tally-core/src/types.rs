//! # Domain Types
//!
//! Purchase records and processing outcomes.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Processing Outcomes                         │
//! │                                                                 │
//! │  PurchaseOutcome                                                │
//! │  ├── Accepted(PurchaseRecord)   appended to the ledger          │
//! │  └── Rejected(RejectedPurchase) returned to the caller only,    │
//! │                                 never recorded                  │
//! │                                                                 │
//! │  A rejection is an expected business outcome, so it travels in  │
//! │  the Ok channel; real errors (caller misuse) travel as          │
//! │  CoreError.                                                     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::discount::DiscountRate;
use crate::money::Money;

/// Fixed message carried by every accepted purchase outcome.
pub const PURCHASE_ACCEPTED_MESSAGE: &str = "purchase processed successfully";

// =============================================================================
// Purchase Record
// =============================================================================

/// A processed, accepted purchase as stored in the ledger.
///
/// Records live for the process lifetime only; a deployment needing
/// durability wires an external store on top of the ledger slice.
///
/// ## Invariant
/// `final_amount_cents` is `original_amount_cents` minus the discount
/// rounded half-up to whole cents, and `savings_cents` is exactly the
/// difference between original and final.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Customer name as given at the till.
    pub customer_name: String,

    /// Customer age at time of purchase.
    pub customer_age: u32,

    /// Amount before discount, in cents.
    pub original_amount_cents: i64,

    /// Discount applied, in basis points (1500 = 15%).
    pub discount_bps: u32,

    /// Amount actually charged, in cents.
    pub final_amount_cents: i64,

    /// Amount saved by the discount, in cents.
    pub savings_cents: i64,

    /// When the purchase was processed.
    pub processed_at: DateTime<Utc>,
}

impl PurchaseRecord {
    /// Returns the pre-discount amount as Money.
    #[inline]
    pub fn original_amount(&self) -> Money {
        Money::from_cents(self.original_amount_cents)
    }

    /// Returns the discount rate.
    #[inline]
    pub fn discount_rate(&self) -> DiscountRate {
        DiscountRate::from_bps(self.discount_bps)
    }

    /// Returns the charged amount as Money.
    #[inline]
    pub fn final_amount(&self) -> Money {
        Money::from_cents(self.final_amount_cents)
    }

    /// Returns the savings as Money.
    #[inline]
    pub fn savings(&self) -> Money {
        Money::from_cents(self.savings_cents)
    }
}

// =============================================================================
// Rejected Purchase
// =============================================================================

/// A purchase attempt refused by validation.
///
/// Carries the rejection reason and the attempted amount. Rejections are
/// never recorded in the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectedPurchase {
    /// Human-readable rejection reason from the validator.
    pub reason: String,

    /// The amount the customer attempted to spend, in cents.
    pub original_amount_cents: i64,
}

impl RejectedPurchase {
    /// Returns the attempted amount as Money.
    #[inline]
    pub fn original_amount(&self) -> Money {
        Money::from_cents(self.original_amount_cents)
    }
}

// =============================================================================
// Purchase Outcome
// =============================================================================

/// The result of one pass through the processing pipeline.
///
/// Accessors mirror the flat receipt shape an embedding surface displays:
/// a rejected attempt reads as a zero discount and a zero final amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseOutcome {
    /// Purchase passed validation and was recorded.
    Accepted(PurchaseRecord),
    /// Purchase was refused by a business rule; nothing was recorded.
    Rejected(RejectedPurchase),
}

impl PurchaseOutcome {
    /// Whether the purchase was accepted and recorded.
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, PurchaseOutcome::Accepted(_))
    }

    /// Human-readable outcome message.
    pub fn message(&self) -> &str {
        match self {
            PurchaseOutcome::Accepted(_) => PURCHASE_ACCEPTED_MESSAGE,
            PurchaseOutcome::Rejected(rejected) => &rejected.reason,
        }
    }

    /// The amount the customer attempted to spend.
    pub fn original_amount(&self) -> Money {
        match self {
            PurchaseOutcome::Accepted(record) => record.original_amount(),
            PurchaseOutcome::Rejected(rejected) => rejected.original_amount(),
        }
    }

    /// The discount applied; zero for a rejected attempt.
    pub fn discount_rate(&self) -> DiscountRate {
        match self {
            PurchaseOutcome::Accepted(record) => record.discount_rate(),
            PurchaseOutcome::Rejected(_) => DiscountRate::zero(),
        }
    }

    /// The amount charged; zero for a rejected attempt.
    pub fn final_amount(&self) -> Money {
        match self {
            PurchaseOutcome::Accepted(record) => record.final_amount(),
            PurchaseOutcome::Rejected(_) => Money::zero(),
        }
    }

    /// The amount saved; zero for a rejected attempt.
    pub fn savings(&self) -> Money {
        match self {
            PurchaseOutcome::Accepted(record) => record.savings(),
            PurchaseOutcome::Rejected(_) => Money::zero(),
        }
    }

    /// The recorded purchase, if the attempt was accepted.
    pub fn record(&self) -> Option<&PurchaseRecord> {
        match self {
            PurchaseOutcome::Accepted(record) => Some(record),
            PurchaseOutcome::Rejected(_) => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
