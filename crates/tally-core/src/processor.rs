//! # Purchase Processor
//!
//! Orchestrates the full processing pipeline and owns the purchase ledger.
//!
//! ## Processing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │              process_purchase(amount, age, name)                │
//! │                                                                 │
//! │  1. Validate ──────► rejected? → Rejected outcome, NOT recorded │
//! │       │                                                         │
//! │  2. Look up tier rate                                           │
//! │       │                                                         │
//! │  3. Apply discount                                              │
//! │       │                                                         │
//! │  4. Record ────────► PurchaseRecord appended to the ledger      │
//! │                                                                 │
//! │  Each call either appends exactly one record or nothing.        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! `PurchaseProcessor` itself is single-threaded (`&mut self` on writes).
//! Concurrent embeddings wrap it in [`SharedProcessor`], which serializes
//! appends behind a mutex and gives reads a consistent snapshot.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::discount::{apply_discount, DiscountRate};
use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{PurchaseOutcome, PurchaseRecord, RejectedPurchase};
use crate::validation::PurchaseValidator;

// =============================================================================
// Purchase Processor
// =============================================================================

/// Processes purchases end to end and keeps the ledger of accepted ones.
///
/// ## Ledger Invariants
/// - Append-only: records are never mutated or removed
/// - Insertion order is processing order
/// - Only accepted purchases are recorded; rejections leave no trace
#[derive(Debug, Default)]
pub struct PurchaseProcessor {
    validator: PurchaseValidator,
    ledger: Vec<PurchaseRecord>,
}

impl PurchaseProcessor {
    /// Creates a processor with the default validator ($10,000 ceiling).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a processor with a custom validator.
    pub fn with_validator(validator: PurchaseValidator) -> Self {
        PurchaseProcessor {
            validator,
            ledger: Vec::new(),
        }
    }

    /// Processes a purchase: validate, calculate discount, apply, record.
    ///
    /// A business-rule rejection comes back as
    /// [`PurchaseOutcome::Rejected`] in the `Ok` channel and is not
    /// recorded. The `Err` channel carries only contract violations from
    /// the discount engine, which this pipeline cannot reach because it
    /// validates first.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    /// use tally_core::processor::PurchaseProcessor;
    ///
    /// let mut processor = PurchaseProcessor::new();
    /// let outcome = processor
    ///     .process_purchase(Money::from_cents(75_000), 30, "Juan")
    ///     .unwrap();
    ///
    /// assert!(outcome.is_accepted());
    /// assert_eq!(outcome.final_amount().cents(), 63_750);
    /// assert_eq!(processor.purchase_count(), 1);
    /// ```
    pub fn process_purchase(
        &mut self,
        amount: Money,
        customer_age: u32,
        customer_name: &str,
    ) -> CoreResult<PurchaseOutcome> {
        debug!(customer = %customer_name, amount = %amount, "process_purchase");

        if let Err(rejection) = self.validator.validate(amount, customer_age) {
            debug!(customer = %customer_name, reason = %rejection, "purchase rejected");
            return Ok(PurchaseOutcome::Rejected(RejectedPurchase {
                reason: rejection.to_string(),
                original_amount_cents: amount.cents(),
            }));
        }

        let rate = DiscountRate::for_amount(amount)?;
        let final_amount = apply_discount(amount, rate)?;

        let record = PurchaseRecord {
            id: Uuid::new_v4().to_string(),
            customer_name: customer_name.to_string(),
            customer_age,
            original_amount_cents: amount.cents(),
            discount_bps: rate.bps(),
            final_amount_cents: final_amount.cents(),
            savings_cents: (amount - final_amount).cents(),
            processed_at: Utc::now(),
        };

        self.ledger.push(record.clone());

        info!(
            customer = %customer_name,
            original = %amount,
            discount_bps = rate.bps(),
            total = %final_amount,
            "Purchase recorded"
        );

        Ok(PurchaseOutcome::Accepted(record))
    }

    /// Total charged across all recorded purchases.
    ///
    /// The ledger holds only accepted purchases, so this is a plain sum.
    pub fn total_sales(&self) -> Money {
        self.ledger.iter().map(|r| r.final_amount()).sum()
    }

    /// Number of recorded purchases.
    pub fn purchase_count(&self) -> usize {
        self.ledger.len()
    }

    /// Read-only view of the ledger, in processing order.
    pub fn ledger(&self) -> &[PurchaseRecord] {
        &self.ledger
    }
}

// =============================================================================
// Shared Processor
// =============================================================================

/// Mutex-guarded processor for concurrent embeddings.
///
/// ## Thread Safety
/// - `Arc`: shared ownership across threads
/// - `Mutex`: one writer at a time, so ledger appends keep insertion order
///   and aggregate reads see a consistent snapshot
///
/// ## Why Not RwLock?
/// Processing is quick and the dominant operation mutates state; a RwLock
/// would add complexity with minimal benefit.
#[derive(Debug)]
pub struct SharedProcessor {
    inner: Arc<Mutex<PurchaseProcessor>>,
}

impl SharedProcessor {
    /// Creates a shared wrapper around a fresh default processor.
    pub fn new() -> Self {
        Self::with_processor(PurchaseProcessor::new())
    }

    /// Wraps an existing processor (e.g. one with a custom validator).
    pub fn with_processor(processor: PurchaseProcessor) -> Self {
        SharedProcessor {
            inner: Arc::new(Mutex::new(processor)),
        }
    }

    /// Executes a function with read access to the processor.
    ///
    /// ```rust,ignore
    /// let total = shared.with(|p| p.total_sales());
    /// ```
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&PurchaseProcessor) -> R,
    {
        let processor = self.inner.lock().expect("processor mutex poisoned");
        f(&processor)
    }

    /// Executes a function with write access to the processor.
    ///
    /// ```rust,ignore
    /// let outcome = shared.with_mut(|p| p.process_purchase(amount, 30, "Juan"))?;
    /// ```
    pub fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut PurchaseProcessor) -> R,
    {
        let mut processor = self.inner.lock().expect("processor mutex poisoned");
        f(&mut processor)
    }
}

impl Default for SharedProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SharedProcessor {
    fn clone(&self) -> Self {
        SharedProcessor {
            inner: Arc::clone(&self.inner),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
