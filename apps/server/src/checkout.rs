//! # Checkout Endpoint
//!
//! The checkout engine's service layer: validates the request, prices the
//! cart (kedai-core), draws a fresh payment token, builds the simulated
//! gateway payloads and persists the resulting order.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /api/checkout                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate customer_name / phone / provider                             │
//! │       │ (failure → 400, nothing persisted)                             │
//! │       ▼                                                                 │
//! │  price_cart (kedai-core): subtotals + total, rejects bad items         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  generate_payment_token (UUID v4, fresh per call)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PaymentSimulation::new (QR content + deeplink)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  insert Order into "order" collection → order_id                       │
//! │       │ (store failure → 5xx, single atomic insert, no cleanup)        │
//! │       ▼                                                                 │
//! │  {order_id, total, provider, payment_token, payment_qr, deeplink}      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Not idempotent by design: two identical requests create two orders with
//! distinct ids and distinct tokens.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use kedai_core::checkout::{price_cart, RequestedItem};
use kedai_core::payment::PaymentSimulation;
use kedai_core::validation::validate_required;
use kedai_core::{Money, Order, OrderStatus, PaymentMethod, ORDER_COLLECTION};
use kedai_store::{DocumentId, DocumentStore};

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Request / Response
// =============================================================================

/// Body of `POST /api/checkout`.
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    /// Customer full name.
    pub customer_name: String,

    /// Customer phone number.
    pub phone: String,

    /// Requested line items (order items without subtotals).
    pub items: Vec<RequestedItem>,

    /// E-wallet provider name, e.g. "OVO", "GoPay", "DANA". Embedded
    /// verbatim in the simulated payloads.
    pub provider: String,
}

/// Response of a successful checkout.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    /// Store-generated id of the persisted order.
    pub order_id: DocumentId,

    /// Server-computed order total.
    pub total: Money,

    /// Provider echoed back from the request.
    pub provider: String,

    /// Fresh opaque payment reference.
    pub payment_token: String,

    /// Simulated QR content (provider, token, amount).
    pub payment_qr: String,

    /// Simulated app deeplink (token).
    pub deeplink: Option<String>,
}

// =============================================================================
// Service
// =============================================================================

/// Runs a checkout: exactly one persisted order per successful call.
///
/// Validation failures are rejected before any persistence attempt; a store
/// failure propagates directly with no retry and no partial-state cleanup,
/// since the order insert is a single atomic operation.
pub async fn process_checkout(
    store: &DocumentStore,
    req: CheckoutRequest,
) -> Result<CheckoutResponse, ApiError> {
    validate_required("customer_name", &req.customer_name)?;
    validate_required("phone", &req.phone)?;
    validate_required("provider", &req.provider)?;

    let cart = price_cart(&req.items)?;

    // Simulate the e-wallet handshake: no payment network is contacted.
    let token = generate_payment_token();
    let sim = PaymentSimulation::new(&req.provider, &token, cart.total);

    let order = Order {
        customer_name: req.customer_name,
        phone: req.phone,
        items: cart.items,
        total: cart.total,
        status: OrderStatus::Pending,
        payment_method: PaymentMethod::Ewallet,
        payment_provider: req.provider.clone(),
        payment_token: sim.token.clone(),
        payment_qr: sim.qr_content.clone(),
        created_at: Utc::now(),
    };

    let order_id = store.collection(ORDER_COLLECTION).insert(&order).await?;

    info!(
        order_id = %order_id,
        total = %cart.total,
        provider = %req.provider,
        "Checkout complete"
    );

    Ok(CheckoutResponse {
        order_id,
        total: cart.total,
        provider: req.provider,
        payment_token: sim.token,
        payment_qr: sim.qr_content,
        deeplink: Some(sim.deeplink),
    })
}

/// `POST /api/checkout`.
pub async fn checkout_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    process_checkout(&state.store, req).await.map(Json)
}

/// Draws a fresh payment token.
///
/// UUID v4: globally unique without coordination, never reused, never
/// derived from order content.
fn generate_payment_token() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
