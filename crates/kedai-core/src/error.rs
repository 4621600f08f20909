//! # Error Types
//!
//! Domain-specific error types for kedai-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kedai-core errors (this file)                                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  kedai-store errors (separate crate)                                   │
//! │  └── StoreError       - Document store operation failures              │
//! │                                                                         │
//! │  HTTP API errors (in app)                                              │
//! │  └── ApiError         - What clients see (status code + message)       │
//! │                                                                         │
//! │  Flow: ValidationError ──► ApiError (400)                              │
//! │        StoreError      ──► ApiError (5xx)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There are deliberately no business-specific error kinds here: the shop
//! has no "payment declined" and no "out of stock" path, because the payment
//! gateway is simulated and inventory is never decremented.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a request doesn't meet field constraints.
/// They are raised before any persistence attempt and map to HTTP 400.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be at least {min}")]
    BelowMinimum { field: String, min: i64 },

    /// Monetary value must not be negative.
    #[error("{field} must not be negative")]
    NegativeAmount { field: String },

    /// A computed amount exceeds the representable range.
    ///
    /// Raised when a subtotal or total would overflow i64; such carts are
    /// rejected before anything is persisted.
    #[error("{field} is out of range")]
    AmountOutOfRange { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "customer_name".to_string(),
        };
        assert_eq!(err.to_string(), "customer_name is required");

        let err = ValidationError::BelowMinimum {
            field: "quantity".to_string(),
            min: 1,
        };
        assert_eq!(err.to_string(), "quantity must be at least 1");

        let err = ValidationError::NegativeAmount {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");
    }
}
