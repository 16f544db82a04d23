//! # tally-core: Pure Business Logic for Tally
//!
//! This crate is the **heart** of Tally. It computes tiered purchase
//! discounts, validates purchase eligibility, and records processed
//! transactions, all as pure synchronous functions with zero I/O.
//!
//! ## Processing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      ★ tally-core ★                             │
//! │                                                                 │
//! │  process_purchase(amount, age, name)                            │
//! │       │                                                         │
//! │  ┌────▼───────┐   ┌────────────┐   ┌────────────┐               │
//! │  │ validation │──►│  discount  │──►│ processor  │               │
//! │  │   rules    │   │ tier + app │   │   ledger   │               │
//! │  └────────────┘   └────────────┘   └────────────┘               │
//! │                                                                 │
//! │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`discount`] - Tiered discount rates and their application
//! - [`validation`] - Purchase eligibility rules
//! - [`types`] - Purchase records and outcomes
//! - [`processor`] - Pipeline orchestration and the in-memory ledger
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every calculation is deterministic
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64)
//! 4. **Two Failure Channels**: Business rejections travel in the return
//!    value; caller misuse surfaces as a typed error
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{Money, PurchaseProcessor};
//!
//! let mut processor = PurchaseProcessor::new();
//!
//! // $750 purchase by a 30-year-old: 15% tier
//! let outcome = processor
//!     .process_purchase(Money::from_cents(75_000), 30, "Juan")
//!     .unwrap();
//!
//! assert!(outcome.is_accepted());
//! assert_eq!(outcome.final_amount().cents(), 63_750); // $637.50
//! assert_eq!(outcome.savings().cents(), 11_250);      // $112.50
//!
//! // Underage attempt: refused, not recorded
//! let outcome = processor
//!     .process_purchase(Money::from_cents(50_000), 17, "Maria")
//!     .unwrap();
//! assert!(!outcome.is_accepted());
//!
//! assert_eq!(processor.purchase_count(), 1);
//! assert_eq!(processor.total_sales().cents(), 63_750);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod discount;
pub mod error;
pub mod money;
pub mod processor;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Money` instead of
// `use tally_core::money::Money`

pub use discount::{apply_discount, DiscountRate};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use processor::{PurchaseProcessor, SharedProcessor};
pub use types::{PurchaseOutcome, PurchaseRecord, RejectedPurchase};
pub use validation::PurchaseValidator;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default purchase ceiling in cents ($10,000).
///
/// ## Business Reason
/// Large tickets need a manager override flow that doesn't exist yet, so
/// the validator refuses them outright. Overridable per validator at
/// construction.
pub const DEFAULT_MAX_PURCHASE_CENTS: i64 = 1_000_000;

/// Minimum customer age for a purchase.
///
/// ## Business Reason
/// The product catalog includes age-restricted goods and the till has no
/// per-item flag, so the rule applies to every purchase.
pub const LEGAL_PURCHASE_AGE: u32 = 18;
