//! # tally-core: Pure Business Logic for Tally Rewards
//!
//! This crate is the **heart** of Tally Rewards. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Tally Rewards Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    rewards-api (HTTP)                           │   │
//! │  │    POST /receipts/process ──► GET /receipts/{id}/points        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ validation│  │  points   │  │   │
//! │  │   │  Receipt  │  │  Amount   │  │   rules   │  │ sub-rules │  │   │
//! │  │   │   Item    │  │  (cents)  │  │  checks   │  │ aggregate │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ReceiptStore (in rewards-api)                      │   │
//! │  │           process-lifetime in-memory id → receipt map           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire records (Receipt, Item)
//! - [`money`] - Amount type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Receipt acceptance rules
//! - [`points`] - Reward points calculation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Absorb, Never Panic**: Validation rejects, scoring degrades to zero;
//!    neither ever faults on malformed input
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::types::{Item, Receipt};
//! use tally_core::{points, validation};
//!
//! let receipt = Receipt {
//!     retailer: Some("Target".to_string()),
//!     purchase_date: Some("2022-01-01".to_string()),
//!     purchase_time: Some("13:01".to_string()),
//!     items: Some(vec![Item {
//!         short_description: Some("Mountain Dew 12PK".to_string()),
//!         price: Some("6.49".to_string()),
//!     }]),
//!     total: Some("6.49".to_string()),
//! };
//!
//! assert!(validation::validate_receipt(&receipt));
//!
//! // "Target" has 6 alphanumeric characters, the 1st is an odd day: +6
//! assert_eq!(points::score(&receipt), 12);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod points;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Receipt` instead of
// `use tally_core::types::Receipt`

pub use error::{ParseAmountError, ValidationError};
pub use money::Amount;
pub use points::score;
pub use types::{Item, Receipt};
pub use validation::{validate_item, validate_receipt};
