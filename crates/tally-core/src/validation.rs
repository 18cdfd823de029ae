//! # Validation Module
//!
//! Receipt acceptance rules for Tally Rewards.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Shape checks (non-text fields, scalar item lists)                 │
//! │  └── Rejected at the API boundary as invalid                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required-field presence (all five, non-empty)                     │
//! │  └── Per-field format rules (regex, short-circuit)                     │
//! │                                                                         │
//! │  The only externally visible outcome is accept/reject: the boundary    │
//! │  needs a boolean, not a rejection reason.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::types::{Item, Receipt};
//! use tally_core::validation::validate_receipt;
//!
//! let receipt = Receipt {
//!     retailer: Some("Target".to_string()),
//!     purchase_date: Some("2022-01-01".to_string()),
//!     purchase_time: Some("13:01".to_string()),
//!     items: Some(vec![Item::new("Mountain Dew 12PK", "6.49")]),
//!     total: Some("6.49".to_string()),
//! };
//! assert!(validate_receipt(&receipt));
//! assert!(!validate_receipt(&Receipt::default()));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ValidationError, ValidationResult};
use crate::types::{Item, Receipt};

// =============================================================================
// Format Rules
// =============================================================================
// Compiled once. The patterns are anchored on both ends so a match means the
// whole field conforms, and \w / \s are Unicode-aware.

/// Retailer name: word characters, whitespace, hyphens, ampersands.
static RETAILER_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w\s\-&]+$").expect("retailer pattern is valid"));

/// Item description: word characters, whitespace, hyphens. No ampersand.
static DESCRIPTION_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w\s\-]+$").expect("description pattern is valid"));

/// Monetary amount: one digit group, a dot, exactly two decimal digits.
static AMOUNT_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\d{2}$").expect("amount pattern is valid"));

/// Time of day: `HH:MM`, hour 00-23 (leading zero optional), minute 00-59.
static TIME_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]?[0-9]|2[0-3]):([0-5]?[0-9])$").expect("time pattern is valid"));

/// Calendar date: `YYYY-MM-DD`, month 01-12, day 01-31.
///
/// Format-level only: `2022-02-31` passes here. The purchase-date points
/// rule does the calendar-aware parse and scores such dates as zero.
static DATE_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])$").expect("date pattern is valid")
});

// =============================================================================
// Field Checks
// =============================================================================

/// Requires a text field to be present and non-empty, returning its value.
fn require<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, ValidationError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::Required { field }),
    }
}

/// Requires a present field to match its format rule.
fn check_format(
    field: &'static str,
    pattern: &Regex,
    reason: &'static str,
    value: &str,
) -> ValidationResult {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat { field, reason })
    }
}

/// Runs every receipt check, short-circuiting on the first failure.
///
/// The check order follows cheapest-first; it is unobservable from outside
/// since only the boolean outcome is surfaced.
fn check_receipt(receipt: &Receipt) -> ValidationResult {
    // All five fields present and non-empty. An empty items list fails here,
    // before the per-item loop ever sees it.
    let retailer = require("retailer", receipt.retailer.as_deref())?;
    let purchase_date = require("purchaseDate", receipt.purchase_date.as_deref())?;
    let purchase_time = require("purchaseTime", receipt.purchase_time.as_deref())?;
    let total = require("total", receipt.total.as_deref())?;
    if receipt.items().is_empty() {
        return Err(ValidationError::Required { field: "items" });
    }

    check_format(
        "retailer",
        &RETAILER_FORMAT,
        "expected word characters, whitespace, hyphens, and ampersands",
        retailer,
    )?;
    check_format(
        "total",
        &AMOUNT_FORMAT,
        "expected digits with exactly two decimal places",
        total,
    )?;

    for item in receipt.items() {
        check_item(item)?;
    }

    check_format(
        "purchaseTime",
        &TIME_FORMAT,
        "expected HH:MM in 24-hour form",
        purchase_time,
    )?;
    check_format("purchaseDate", &DATE_FORMAT, "expected YYYY-MM-DD", purchase_date)?;

    Ok(())
}

/// Runs every item check, short-circuiting on the first failure.
fn check_item(item: &Item) -> ValidationResult {
    let description = require("shortDescription", item.short_description.as_deref())?;
    let price = require("price", item.price.as_deref())?;

    check_format(
        "shortDescription",
        &DESCRIPTION_FORMAT,
        "expected word characters, whitespace, and hyphens",
        description,
    )?;
    check_format(
        "price",
        &AMOUNT_FORMAT,
        "expected digits with exactly two decimal places",
        price,
    )
}

// =============================================================================
// Public Surface
// =============================================================================

/// Decides whether a candidate receipt is accepted.
///
/// ## Contract
/// - Pure function of its input, no side effects
/// - Never panics, whatever shape the candidate is in
/// - Deterministic: repeated calls return the same boolean
pub fn validate_receipt(receipt: &Receipt) -> bool {
    check_receipt(receipt).is_ok()
}

/// Decides whether a single item is acceptable on its own.
pub fn validate_item(item: &Item) -> bool {
    check_item(item).is_ok()
}

// =============================================================================
// Unit Tests
// =============================================================================
