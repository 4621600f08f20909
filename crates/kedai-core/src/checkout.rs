//! # Checkout Pricing
//!
//! The pure half of the checkout engine: turns requested items into priced
//! line items and an order total.
//!
//! ## Pricing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Checkout Pricing                                   │
//! │                                                                         │
//! │  Request items: [{product_id, name, price, quantity}, ...]             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  price_cart() ← THIS MODULE                                            │
//! │       │                                                                 │
//! │       ├── empty cart?          → ValidationError (rejected)            │
//! │       ├── price < 0 / qty < 1? → ValidationError (rejected)            │
//! │       ├── subtotal/total overflows i64? → ValidationError (rejected)   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OrderItem { subtotal = price × quantity }  per item                   │
//! │  PricedCart { items, total = Σ subtotals }                             │
//! │                                                                         │
//! │  Persistence and token generation happen in the server layer.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unit prices are taken from the request as-is; there is no lookup against
//! the authoritative drink collection. `product_id` is an advisory reference
//! only. Any client-supplied subtotal is discarded and recomputed here.

use serde::Deserialize;

use crate::error::ValidationResult;
use crate::money::Money;
use crate::types::OrderItem;
use crate::validation::{validate_name, validate_price, validate_quantity, validate_required};
use crate::ValidationError;

// =============================================================================
// Requested Item
// =============================================================================

/// A line item as requested by the client: an [`OrderItem`] without the
/// server-computed subtotal.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestedItem {
    /// Drink document id as string (advisory).
    pub product_id: String,

    /// Drink name snapshot.
    pub name: String,

    /// Unit price as claimed by the client.
    pub price: Money,

    /// Quantity ordered.
    pub quantity: i64,
}

// =============================================================================
// Priced Cart
// =============================================================================

/// Result of pricing a cart: line items with computed subtotals and the
/// order total.
#[derive(Debug, Clone)]
pub struct PricedCart {
    /// Priced line items, in request order.
    pub items: Vec<OrderItem>,

    /// Sum of all line subtotals.
    pub total: Money,
}

/// Prices a cart of requested items.
///
/// For each item: `subtotal = price × quantity`. The total accumulates all
/// subtotals. An empty cart is rejected - an order must carry at least one
/// line item.
///
/// ## Errors
/// Returns a [`ValidationError`] naming the violated field when the cart is
/// empty, a name is blank, a price is negative, a quantity is below 1 or a
/// subtotal/total would overflow i64. Nothing is partially priced: the
/// first violation aborts the whole cart.
///
/// ## Example
/// ```rust
/// use kedai_core::checkout::{price_cart, RequestedItem};
/// use kedai_core::Money;
///
/// let items = vec![RequestedItem {
///     product_id: "d1".into(),
///     name: "Latte".into(),
///     price: Money::from_minor(25000),
///     quantity: 2,
/// }];
///
/// let cart = price_cart(&items).unwrap();
/// assert_eq!(cart.total.minor(), 50_000);
/// assert_eq!(cart.items[0].subtotal.minor(), 50_000);
/// ```
pub fn price_cart(items: &[RequestedItem]) -> ValidationResult<PricedCart> {
    if items.is_empty() {
        return Err(ValidationError::Required {
            field: "items".to_string(),
        });
    }

    let mut priced = Vec::with_capacity(items.len());
    let mut total = Money::zero();

    for item in items {
        validate_required("product_id", &item.product_id)?;
        validate_name("name", &item.name)?;
        validate_price("price", item.price)?;
        validate_quantity(item.quantity)?;

        // Checked arithmetic: a cart that passes the field validators can
        // still overflow i64 on extreme values
        let subtotal = item.price.checked_multiply_quantity(item.quantity).ok_or(
            ValidationError::AmountOutOfRange {
                field: "subtotal".to_string(),
            },
        )?;
        total = total
            .checked_add(subtotal)
            .ok_or(ValidationError::AmountOutOfRange {
                field: "total".to_string(),
            })?;

        priced.push(OrderItem {
            product_id: item.product_id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
            subtotal,
        });
    }

    Ok(PricedCart {
        items: priced,
        total,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: i64, quantity: i64) -> RequestedItem {
        RequestedItem {
            product_id: format!("id-{name}"),
            name: name.to_string(),
            price: Money::from_minor(price),
            quantity,
        }
    }

    #[test]
    fn test_single_item_total() {
        let cart = price_cart(&[item("Latte", 25000, 2)]).unwrap();
        assert_eq!(cart.total.minor(), 50_000);
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].subtotal.minor(), 50_000);
    }

    #[test]
    fn test_multi_item_total_is_sum_of_subtotals() {
        let cart = price_cart(&[
            item("Latte", 25000, 2),
            item("Es Teh", 8000, 3),
            item("Kopi Tubruk", 12000, 1),
        ])
        .unwrap();

        assert_eq!(cart.items[0].subtotal.minor(), 50_000);
        assert_eq!(cart.items[1].subtotal.minor(), 24_000);
        assert_eq!(cart.items[2].subtotal.minor(), 12_000);
        assert_eq!(cart.total.minor(), 86_000);
    }

    #[test]
    fn test_free_item_is_allowed() {
        let cart = price_cart(&[item("Air Putih", 0, 5)]).unwrap();
        assert_eq!(cart.total.minor(), 0);
    }

    #[test]
    fn test_empty_cart_rejected() {
        let err = price_cart(&[]).unwrap_err();
        assert!(matches!(err, ValidationError::Required { ref field } if field == "items"));
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = price_cart(&[item("Latte", -1, 1)]).unwrap_err();
        assert!(matches!(err, ValidationError::NegativeAmount { ref field } if field == "price"));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let err = price_cart(&[item("Latte", 25000, 0)]).unwrap_err();
        assert!(matches!(err, ValidationError::BelowMinimum { ref field, .. } if field == "quantity"));
    }

    #[test]
    fn test_one_bad_item_rejects_whole_cart() {
        let err = price_cart(&[item("Latte", 25000, 2), item("Es Teh", 8000, -4)]);
        assert!(err.is_err());
    }

    /// A subtotal that would exceed i64 is rejected, never wrapped into a
    /// negative amount.
    #[test]
    fn test_overflowing_subtotal_rejected() {
        let err = price_cart(&[item("Latte", i64::MAX, 2)]).unwrap_err();
        assert!(
            matches!(err, ValidationError::AmountOutOfRange { ref field } if field == "subtotal")
        );
    }

    /// Subtotals that are individually fine can still overflow the total.
    #[test]
    fn test_overflowing_total_rejected() {
        let err = price_cart(&[item("Latte", i64::MAX, 1), item("Es Teh", 1, 1)]).unwrap_err();
        assert!(matches!(err, ValidationError::AmountOutOfRange { ref field } if field == "total"));
    }
}
