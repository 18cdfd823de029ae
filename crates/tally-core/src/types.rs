//! # Wire Types
//!
//! The receipt records as they arrive over the wire.
//!
//! ## Type Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Wire Records                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────┐              │
//! │  │       Receipt        │        │        Item          │              │
//! │  │  ──────────────────  │        │  ──────────────────  │              │
//! │  │  retailer            │  1..n  │  shortDescription    │              │
//! │  │  purchaseDate        │───────►│  price               │              │
//! │  │  purchaseTime        │        └──────────────────────┘              │
//! │  │  items               │                                              │
//! │  │  total               │        Every field is Option<_>:             │
//! │  └──────────────────────┘        absence is data, not an error         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Every Field Is Optional
//! The validator and the points rules both have to cope with receipts that
//! are missing fields: the validator rejects them, the points rules score
//! the absent field as zero. Encoding presence as `Option` lets both read
//! through the same accessor instead of trusting the wire.
//!
//! ## Why Dates, Times, and Amounts Stay Text
//! Validation is format-level (`2022-02-31` passes the date regex), while
//! scoring is calendar-aware (the same date parses as invalid and scores
//! zero). Parsing at the edge into `NaiveDate`/[`crate::Amount`] would
//! collapse that asymmetry, so the records keep the wire text verbatim and
//! each rule parses what it needs.

use serde::{Deserialize, Serialize};

// =============================================================================
// Item
// =============================================================================

/// A single purchased item on a receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Short product description, e.g. `"Mountain Dew 12PK"`.
    pub short_description: Option<String>,

    /// Item price as wire text with exactly two decimal places, e.g. `"6.49"`.
    pub price: Option<String>,
}

impl Item {
    /// Creates an item with both fields present.
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            short_description: Some(short_description.into()),
            price: Some(price.into()),
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A candidate purchase record.
///
/// A receipt has no lifecycle inside the core: it is either rejected by
/// [`crate::validation::validate_receipt`] and discarded, or accepted and
/// handed to the storage collaborator unmodified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Store name, e.g. `"M&M Corner Market"`.
    pub retailer: Option<String>,

    /// Purchase date as wire text in `YYYY-MM-DD` form.
    pub purchase_date: Option<String>,

    /// Purchase time as wire text in 24-hour `HH:MM` form.
    pub purchase_time: Option<String>,

    /// Purchased items, in wire order.
    pub items: Option<Vec<Item>>,

    /// Receipt total as wire text with exactly two decimal places.
    pub total: Option<String>,
}

impl Receipt {
    /// Returns the items, treating an absent list as empty.
    ///
    /// The points rules iterate items without caring whether the field was
    /// missing or present-but-empty; both contribute zero.
    pub fn items(&self) -> &[Item] {
        self.items.as_deref().unwrap_or_default()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
