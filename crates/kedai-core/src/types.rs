//! # Domain Types
//!
//! Core domain types shared across the backend.
//!
//! ## Type Relationships
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Domain Model                                      │
//! │                                                                         │
//! │  Drink (catalog record, collection "drink")                            │
//! │    │  price snapshot at purchase time                                  │
//! │    ▼                                                                    │
//! │  OrderItem ──── subtotal = price × quantity (server-computed)          │
//! │    │                                                                    │
//! │    ▼  one or more                                                      │
//! │  Order (collection "order")                                            │
//! │    ├── total = Σ item subtotals                                        │
//! │    ├── status: always Pending at creation                              │
//! │    └── payment_token / payment_qr from the simulated gateway           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Drink
// =============================================================================

/// A drink on the menu.
///
/// ## Lifecycle
/// Created via `POST /api/drinks`, never updated or deleted. The document
/// store owns the record and generates its id on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drink {
    /// Drink name (required, non-empty).
    pub name: String,

    /// Short description.
    #[serde(default)]
    pub description: Option<String>,

    /// Price in whole rupiah. Must be non-negative.
    pub price: Money,

    /// Image URL.
    #[serde(default)]
    pub image: Option<String>,

    /// Category like coffee/tea/fruit.
    #[serde(default)]
    pub category: Option<String>,

    /// Availability flag. Defaults to true when omitted from the payload.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

// =============================================================================
// Order
// =============================================================================

/// A priced line item inside an order.
///
/// ## Snapshot Pattern
/// Name and price are copied from the request at purchase time so the order
/// history stays intact even if the drink record changes later. `product_id`
/// is an advisory reference to a drink document; it is not enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    /// Drink document id as string (advisory, not enforced).
    pub product_id: String,

    /// Drink name at time of purchase.
    pub name: String,

    /// Unit price at time of purchase.
    pub price: Money,

    /// Quantity ordered (≥ 1).
    pub quantity: i64,

    /// price × quantity, computed by the checkout engine. Client-supplied
    /// subtotals are never trusted.
    pub subtotal: Money,
}

/// Order status.
///
/// Orders are always created as `Pending`. No transition logic exists in
/// this backend; `Paid` and `Cancelled` are reserved for the (simulated)
/// gateway callback a future version would add.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

/// Payment method used for an order.
///
/// The shop only takes simulated e-wallet payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Ewallet,
}

/// A persisted customer order.
///
/// ## Lifecycle
/// Assembled atomically by the checkout engine in one step and inserted into
/// the `"order"` collection. Never mutated or deleted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Customer full name.
    pub customer_name: String,

    /// Customer phone number.
    pub phone: String,

    /// Line items (non-empty).
    pub items: Vec<OrderItem>,

    /// Sum of item subtotals.
    pub total: Money,

    /// Always `Pending` at creation.
    pub status: OrderStatus,

    /// Fixed to `Ewallet`.
    pub payment_method: PaymentMethod,

    /// Caller-supplied provider name (e.g. "OVO", "GoPay", "DANA").
    /// Not validated against an enum.
    pub payment_provider: String,

    /// Generated opaque payment reference, fresh per checkout.
    pub payment_token: String,

    /// Simulated QR content encoding provider, token and amount.
    pub payment_qr: String,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drink_in_stock_defaults_to_true() {
        let drink: Drink = serde_json::from_str(r#"{"name":"Latte","price":25000}"#).unwrap();
        assert!(drink.in_stock);
        assert!(drink.description.is_none());
        assert_eq!(drink.price.minor(), 25000);
    }

    #[test]
    fn test_order_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Pending).unwrap(),
            r#""pending""#
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Cancelled).unwrap(),
            r#""cancelled""#
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Ewallet).unwrap(),
            r#""ewallet""#
        );
    }

    #[test]
    fn test_order_round_trips_through_json() {
        let order = Order {
            customer_name: "Ana".to_string(),
            phone: "0812".to_string(),
            items: vec![OrderItem {
                product_id: "d1".to_string(),
                name: "Latte".to_string(),
                price: Money::from_minor(25000),
                quantity: 2,
                subtotal: Money::from_minor(50_000),
            }],
            total: Money::from_minor(50_000),
            status: OrderStatus::Pending,
            payment_method: PaymentMethod::Ewallet,
            payment_provider: "GoPay".to_string(),
            payment_token: "token".to_string(),
            payment_qr: "qr".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total, order.total);
        assert_eq!(back.status, OrderStatus::Pending);
        assert_eq!(back.items.len(), 1);
    }
}
