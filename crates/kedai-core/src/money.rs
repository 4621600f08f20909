//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units                                      │
//! │    Rupiah has no sub-unit in practice, so prices are whole i64 values   │
//! │    (Rp25000) and sums are exact. No drift, ever.                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kedai_core::money::Money;
//!
//! let latte = Money::from_minor(25000); // Rp25.000
//! let two = latte.checked_multiply_quantity(2).unwrap(); // Rp50.000
//! assert_eq!(two.minor(), 50_000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (whole rupiah).
///
/// ## Design Decisions
/// - **i64 (signed)**: Lets validation *detect* negative amounts instead of
///   panicking during deserialization; the validators reject them.
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serde newtype**: Serializes as a plain JSON integer, so API payloads
///   read `"price": 25000`
///
/// Every monetary value in the system (drink prices, line subtotals, order
/// totals, the amount embedded in payment QR content) flows through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (whole rupiah).
    ///
    /// ## Example
    /// ```rust
    /// use kedai_core::money::Money;
    ///
    /// let price = Money::from_minor(25000);
    /// assert_eq!(price.minor(), 25000);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    ///
    /// Negative amounts are never valid in this system; the validators use
    /// this check to reject them before anything is persisted.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, returning `None` on i64 overflow.
    ///
    /// ## Example
    /// ```rust
    /// use kedai_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(25000);
    /// let subtotal = unit_price.checked_multiply_quantity(2);
    /// assert_eq!(subtotal, Some(Money::from_minor(50_000)));
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Drink: Latte Rp25.000
    /// Quantity: 2
    ///      │
    ///      ▼
    /// checked_multiply_quantity(2) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Subtotal: Rp50.000
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(minor) => Some(Money(minor)),
            None => None,
        }
    }

    /// Adds two money values, returning `None` on i64 overflow.
    ///
    /// Used when accumulating an order total, where unchecked addition could
    /// wrap around on adversarial inputs.
    #[inline]
    pub const fn checked_add(&self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(minor) => Some(Money(minor)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and debugging. Frontends format for locale themselves.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}Rp{}", sign, self.0.abs())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=), used when accumulating an order total.
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let money = Money::from_minor(25000);
        assert_eq!(money.minor(), 25000);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_minor(25000)), "Rp25000");
        assert_eq!(format!("{}", Money::from_minor(-500)), "-Rp500");
        assert_eq!(format!("{}", Money::zero()), "Rp0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(25000);
        let b = Money::from_minor(18000);

        assert_eq!((a + b).minor(), 43000);
        assert_eq!((a - b).minor(), 7000);

        let mut total = Money::zero();
        total += a;
        total += a;
        assert_eq!(total.minor(), 50_000);
    }

    #[test]
    fn test_checked_multiply_quantity() {
        let unit_price = Money::from_minor(25000);
        assert_eq!(
            unit_price.checked_multiply_quantity(2),
            Some(Money::from_minor(50_000))
        );
        assert_eq!(
            unit_price.checked_multiply_quantity(1),
            Some(Money::from_minor(25000))
        );
    }

    /// Arithmetic that would exceed i64 reports overflow instead of
    /// panicking or wrapping.
    #[test]
    fn test_overflow_is_detected() {
        let max = Money::from_minor(i64::MAX);
        assert_eq!(max.checked_multiply_quantity(2), None);
        assert_eq!(max.checked_add(Money::from_minor(1)), None);
        assert_eq!(max.checked_add(Money::zero()), Some(max));
    }

    #[test]
    fn test_negative_detection() {
        assert!(Money::from_minor(-1).is_negative());
        assert!(!Money::zero().is_negative());
        assert!(!Money::from_minor(1).is_negative());
    }

    /// The wire format is a bare JSON integer, not an object.
    #[test]
    fn test_serde_plain_integer() {
        let price = Money::from_minor(25000);
        assert_eq!(serde_json::to_string(&price).unwrap(), "25000");

        let parsed: Money = serde_json::from_str("-1").unwrap();
        assert_eq!(parsed.minor(), -1);
    }
}
