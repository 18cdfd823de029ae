//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  ├── ValidationError   - Receipt field check failures                  │
//! │  └── ParseAmountError  - Monetary string parse failures                │
//! │                                                                         │
//! │  rewards-api errors (app crate)                                        │
//! │  └── ApiError          - What HTTP clients see (serialized)            │
//! │                                                                         │
//! │  Neither core error escapes the crate boundary: validation collapses   │
//! │  to a boolean, scoring maps parse failures to zero contributions.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, reason)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Receipt validation failures.
///
/// These never cross the public API: [`crate::validation::validate_receipt`]
/// reduces them to the accept/reject boolean the boundary needs. Keeping the
/// typed variants makes the per-field validators testable on their own.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// A field does not match its wire format rule.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}

// =============================================================================
// Amount Parse Error
// =============================================================================

/// Monetary string parse failures.
///
/// The wire format for monetary values is `digits "." two-digits` with no
/// sign and no separators. Anything else fails to parse; the points rules
/// turn that failure into a zero contribution rather than an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseAmountError {
    /// Not of the form `digits "." two-digits`.
    #[error("amount must be digits with exactly two decimal places")]
    InvalidFormat,

    /// Digits are valid but the value does not fit in cents (i64).
    #[error("amount is out of the representable range")]
    OutOfRange,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for validation checks.
pub type ValidationResult = Result<(), ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required { field: "retailer" };
        assert_eq!(err.to_string(), "retailer is required");

        let err = ValidationError::InvalidFormat {
            field: "total",
            reason: "expected digits with exactly two decimal places",
        };
        assert_eq!(
            err.to_string(),
            "total has invalid format: expected digits with exactly two decimal places"
        );
    }

    #[test]
    fn test_parse_amount_error_messages() {
        assert_eq!(
            ParseAmountError::InvalidFormat.to_string(),
            "amount must be digits with exactly two decimal places"
        );
        assert_eq!(
            ParseAmountError::OutOfRange.to_string(),
            "amount is out of the representable range"
        );
    }
}
