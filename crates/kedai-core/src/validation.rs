//! # Validation Module
//!
//! Field-level constraint checks for incoming requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  └── Shape and type checks (missing fields, wrong types)               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business constraints                           │
//! │  └── Non-empty names, price ≥ 0, quantity ≥ 1                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Document store insert (only reached when Layers 1-2 pass)    │
//! │                                                                         │
//! │  Validation failures are rejected BEFORE any persistence attempt.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validators return a typed result rather than raising; callers propagate
//! the failure to the HTTP layer where it becomes a 400 with the violated
//! field named in the message.

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::Drink;
use crate::MAX_NAME_LEN;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a required text field is present and non-empty.
///
/// ## Example
/// ```rust
/// use kedai_core::validation::validate_required;
///
/// assert!(validate_required("customer_name", "Ana").is_ok());
/// assert!(validate_required("customer_name", "   ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a drink or line-item name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most [`MAX_NAME_LEN`] characters
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    validate_required(field, name)?;

    if name.trim().len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be at least 1 (no zero or negative line items)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 1 {
        return Err(ValidationError::BelowMinimum {
            field: "quantity".to_string(),
            min: 1,
        });
    }

    Ok(())
}

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (promotional free items)
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::NegativeAmount {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates a drink payload before it is persisted.
///
/// ## Example
/// ```rust
/// use kedai_core::{validation::validate_drink, Drink};
///
/// let drink: Drink = serde_json::from_str(r#"{"name":"Es Teh","price":8000}"#).unwrap();
/// assert!(validate_drink(&drink).is_ok());
/// ```
pub fn validate_drink(drink: &Drink) -> ValidationResult<()> {
    validate_name("name", &drink.name)?;
    validate_price("price", drink.price)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert!(validate_required("phone", "08123456789").is_ok());
        assert!(validate_required("phone", "").is_err());
        assert!(validate_required("phone", "   ").is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("name", "Kopi Susu Gula Aren").is_ok());
        assert!(validate_name("name", "").is_err());
        assert!(validate_name("name", &"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(12).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("price", Money::from_minor(0)).is_ok());
        assert!(validate_price("price", Money::from_minor(25000)).is_ok());
        assert!(validate_price("price", Money::from_minor(-1)).is_err());
    }

    #[test]
    fn test_validate_drink() {
        let ok: Drink = serde_json::from_str(r#"{"name":"Es Teh","price":8000}"#).unwrap();
        assert!(validate_drink(&ok).is_ok());

        let bad: Drink = serde_json::from_str(r#"{"name":"Es Teh","price":-1}"#).unwrap();
        assert!(validate_drink(&bad).is_err());

        let unnamed: Drink = serde_json::from_str(r#"{"name":"","price":8000}"#).unwrap();
        assert!(validate_drink(&unnamed).is_err());
    }
}
