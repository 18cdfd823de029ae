//! # Points Module
//!
//! Reward points calculation for accepted receipts.
//!
//! ## Scoring Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Points Rules                                    │
//! │                                                                         │
//! │  retailer   ──► 1 point per alphanumeric character                      │
//! │  total      ──► +50 whole-dollar amount, +25 multiple of 0.25          │
//! │  items      ──► 5 per pair of items                                     │
//! │             ──► per item: trimmed description length a non-zero        │
//! │                 multiple of 3 ──► +ceil(price × 0.2)                   │
//! │  date       ──► +6 when the day of the month is odd                    │
//! │  time       ──► +10 when strictly between 14:00 and 16:00              │
//! │                                                                         │
//! │  Rules are additive and independent. A rule that cannot read its       │
//! │  field (absent, unparseable) contributes 0 - never an error.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calculator tolerates being called on unvalidated input; in the
//! intended flow the receipt has already been accepted by
//! [`crate::validation::validate_receipt`].

use chrono::{Datelike, NaiveDate};

use crate::money::Amount;
use crate::types::{Item, Receipt};

/// Points for a whole-dollar total.
const WHOLE_DOLLAR_POINTS: u64 = 50;

/// Points for a total that is an exact multiple of 0.25.
const QUARTER_MULTIPLE_POINTS: u64 = 25;

/// Points per pair of items.
const POINTS_PER_ITEM_PAIR: u64 = 5;

/// Points for an odd purchase day of the month.
const ODD_DAY_POINTS: u64 = 6;

/// Points for a purchase time strictly inside the afternoon window.
const AFTERNOON_WINDOW_POINTS: u64 = 10;

// =============================================================================
// Aggregator
// =============================================================================

/// Computes the total reward points for a receipt.
///
/// ## Contract
/// - Pure function, deterministic, never panics
/// - The result is the sum of the independent sub-rules below; evaluation
///   order does not matter
///
/// ## Example
/// ```rust
/// use tally_core::points::score;
/// use tally_core::types::{Item, Receipt};
///
/// let receipt = Receipt {
///     retailer: Some("M&M Corner Market".to_string()),
///     purchase_date: Some("2022-03-20".to_string()),
///     purchase_time: Some("14:33".to_string()),
///     items: Some(vec![Item::new("Gatorade", "2.25"); 4]),
///     total: Some("9.00".to_string()),
/// };
/// assert_eq!(score(&receipt), 109);
/// ```
pub fn score(receipt: &Receipt) -> u64 {
    retailer_points(receipt.retailer.as_deref())
        + total_points(receipt.total.as_deref())
        + items_points(receipt.items())
        + purchase_date_points(receipt.purchase_date.as_deref())
        + purchase_time_points(receipt.purchase_time.as_deref())
}

// =============================================================================
// Sub-rules
// =============================================================================

/// One point per Unicode-alphanumeric character in the retailer name.
pub fn retailer_points(retailer: Option<&str>) -> u64 {
    retailer
        .map(|name| name.chars().filter(|c| c.is_alphanumeric()).count() as u64)
        .unwrap_or(0)
}

/// 50 points for a whole-dollar total, 25 for a multiple of 0.25.
///
/// The bonuses are independent: `"10.00"` earns both (75), `"10.25"` earns
/// only the quarter bonus (25), `"10.33"` earns neither.
pub fn total_points(total: Option<&str>) -> u64 {
    let Some(amount) = total.and_then(|t| t.parse::<Amount>().ok()) else {
        return 0;
    };

    let mut points = 0;
    if amount.is_whole_dollars() {
        points += WHOLE_DOLLAR_POINTS;
    }
    if amount.is_quarter_multiple() {
        points += QUARTER_MULTIPLE_POINTS;
    }
    points
}

/// 5 points per pair of items, plus the per-description bonuses.
///
/// Both contributions live under the same bucket: their sum is what the
/// items field contributes overall. A lone trailing item earns nothing from
/// the pair count.
pub fn items_points(items: &[Item]) -> u64 {
    let pair_points = POINTS_PER_ITEM_PAIR * (items.len() as u64 / 2);
    pair_points + items.iter().map(description_points).sum::<u64>()
}

/// `ceil(price * 0.2)` when the trimmed description length is a non-zero
/// multiple of 3.
///
/// Items missing either field are skipped, not treated as an error. The
/// ceiling is computed in integer cents: a fifth of the price is
/// `cents / 500` dollars, rounded up.
fn description_points(item: &Item) -> u64 {
    let (Some(description), Some(price)) = (&item.short_description, &item.price) else {
        return 0;
    };
    let Ok(amount) = price.parse::<Amount>() else {
        return 0;
    };

    let trimmed_len = description.trim().chars().count();
    if trimmed_len == 0 || trimmed_len % 3 != 0 {
        return 0;
    }

    (amount.cents() as u64 + 499) / 500
}

/// 6 points when the purchase day of the month is odd.
///
/// Calendar-aware on purpose: a format-valid but calendar-invalid date such
/// as `2022-02-31` fails to parse here and contributes 0.
pub fn purchase_date_points(date: Option<&str>) -> u64 {
    let Some(parsed) = date.and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()) else {
        return 0;
    };

    if parsed.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// 10 points when the purchase time is strictly between 14:00 and 16:00.
///
/// Exactly 14:00 and exactly 16:00 earn nothing; the comparison is on
/// `hour * 100 + minute`, exclusive on both ends.
pub fn purchase_time_points(time: Option<&str>) -> u64 {
    let Some((hour, minute)) = time.and_then(parse_clock) else {
        return 0;
    };

    let hour_minute = hour * 100 + minute;
    if hour_minute > 1400 && hour_minute < 1600 {
        AFTERNOON_WINDOW_POINTS
    } else {
        0
    }
}

/// Splits `H:M` into its two numeric components.
fn parse_clock(time: &str) -> Option<(u64, u64)> {
    let (hour, minute) = time.split_once(':')?;
    Some((hour.parse().ok()?, minute.parse().ok()?))
}

// =============================================================================
// Unit Tests
// =============================================================================
