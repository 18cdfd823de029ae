//! # Money Module
//!
//! Provides the `Amount` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    ceil(35.00 * 0.2) = 8            ❌ (35 * 0.2 = 7.000000000000001)   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "35.00" parses to 3500 cents                                         │
//! │    multiple-of-0.25 check: cents % 25 == 0  (exact)                    │
//! │    ceil(amount * 0.2):     (cents + 499) / 500  (exact)                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Amount;
//!
//! let total: Amount = "35.35".parse().unwrap();
//! assert_eq!(total.cents(), 3535);
//!
//! // The wire format is strict: two decimal digits, no sign, no separators
//! assert!("35".parse::<Amount>().is_err());
//! assert!("35.3".parse::<Amount>().is_err());
//! assert!(".35".parse::<Amount>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseAmountError;

// =============================================================================
// Amount Type
// =============================================================================

/// A non-negative monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 cents**: integer math only, never floating point
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Strict parse**: only the wire grammar `digits "." two-digits` is
///   accepted, matching what the validator enforces on totals and prices
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Amount(i64);

impl Amount {
    /// Creates an Amount from cents.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Amount;
    ///
    /// let price = Amount::from_cents(1099); // 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Amount(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whether the value has no fractional part (a whole-dollar amount).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Amount;
    ///
    /// assert!("10.00".parse::<Amount>().unwrap().is_whole_dollars());
    /// assert!(!"10.25".parse::<Amount>().unwrap().is_whole_dollars());
    /// ```
    #[inline]
    pub const fn is_whole_dollars(&self) -> bool {
        self.0 % 100 == 0
    }

    /// Whether the value is an exact multiple of 0.25.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Amount;
    ///
    /// assert!("10.25".parse::<Amount>().unwrap().is_quarter_multiple());
    /// assert!(!"10.33".parse::<Amount>().unwrap().is_quarter_multiple());
    /// ```
    #[inline]
    pub const fn is_quarter_multiple(&self) -> bool {
        self.0 % 25 == 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Parses the wire format: one digit group, a dot, exactly two decimal
/// digits. No sign, no thousands separators, no missing fraction.
impl FromStr for Amount {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whole, fraction) = s.split_once('.').ok_or(ParseAmountError::InvalidFormat)?;

        if whole.is_empty()
            || fraction.len() != 2
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ParseAmountError::InvalidFormat);
        }

        let dollars: i64 = whole.parse().map_err(|_| ParseAmountError::OutOfRange)?;
        // Fraction is two ASCII digits, so this parse cannot fail.
        let cents: i64 = fraction.parse().map_err(|_| ParseAmountError::OutOfRange)?;

        dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Amount)
            .ok_or(ParseAmountError::OutOfRange)
    }
}

/// Display implementation shows the wire format.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_format() {
        assert_eq!("125.00".parse::<Amount>().unwrap().cents(), 12500);
        assert_eq!("6.49".parse::<Amount>().unwrap().cents(), 649);
        assert_eq!("0.00".parse::<Amount>().unwrap().cents(), 0);
        assert_eq!("007.05".parse::<Amount>().unwrap().cents(), 705);
    }

    #[test]
    fn test_parse_rejects_off_format() {
        assert_eq!(
            "125".parse::<Amount>(),
            Err(ParseAmountError::InvalidFormat)
        );
        assert_eq!(
            "125.0".parse::<Amount>(),
            Err(ParseAmountError::InvalidFormat)
        );
        assert_eq!(
            "125.000".parse::<Amount>(),
            Err(ParseAmountError::InvalidFormat)
        );
        assert_eq!(
            ".25".parse::<Amount>(),
            Err(ParseAmountError::InvalidFormat)
        );
        assert_eq!(
            "-1.00".parse::<Amount>(),
            Err(ParseAmountError::InvalidFormat)
        );
        assert_eq!(
            "1,000.00".parse::<Amount>(),
            Err(ParseAmountError::InvalidFormat)
        );
        assert_eq!("".parse::<Amount>(), Err(ParseAmountError::InvalidFormat));
        assert_eq!(
            "1.2x".parse::<Amount>(),
            Err(ParseAmountError::InvalidFormat)
        );
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert_eq!(
            "99999999999999999999.00".parse::<Amount>(),
            Err(ParseAmountError::OutOfRange)
        );
    }

    #[test]
    fn test_whole_dollars() {
        assert!("10.00".parse::<Amount>().unwrap().is_whole_dollars());
        assert!(!"10.25".parse::<Amount>().unwrap().is_whole_dollars());
        assert!(!"10.33".parse::<Amount>().unwrap().is_whole_dollars());
    }

    #[test]
    fn test_quarter_multiple() {
        assert!("10.00".parse::<Amount>().unwrap().is_quarter_multiple());
        assert!("10.25".parse::<Amount>().unwrap().is_quarter_multiple());
        assert!("10.50".parse::<Amount>().unwrap().is_quarter_multiple());
        assert!("10.75".parse::<Amount>().unwrap().is_quarter_multiple());
        assert!(!"10.33".parse::<Amount>().unwrap().is_quarter_multiple());
        assert!(!"35.35".parse::<Amount>().unwrap().is_quarter_multiple());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Amount::from_cents(1099)), "10.99");
        assert_eq!(format!("{}", Amount::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Amount::from_cents(0)), "0.00");
    }
}
