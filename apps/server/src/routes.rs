//! # HTTP Routes
//!
//! Router construction and the thin glue handlers: drink listing/creation,
//! order listing, liveness and store diagnostics. These handlers validate
//! (where needed) and delegate straight to the document store; the only
//! endpoint with real logic, checkout, lives in [`crate::checkout`].

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tracing::info;

use kedai_core::validation::validate_drink;
use kedai_core::{Drink, Order, DRINK_COLLECTION, ORDER_COLLECTION};
use kedai_store::{Document, DocumentId};

use crate::checkout;
use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Router
// =============================================================================

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/drinks", get(list_drinks).post(create_drink))
        .route("/api/checkout", post(checkout::checkout_handler))
        .route("/api/orders", get(list_orders))
        .route("/test", get(store_diagnostics))
        // The storefront is served from a different origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// =============================================================================
// Liveness
// =============================================================================

async fn root() -> Json<Value> {
    Json(json!({ "message": "Kedai Kita backend is running" }))
}

// =============================================================================
// Drinks
// =============================================================================

/// Response body for a successful drink creation.
#[derive(Debug, Serialize)]
struct DrinkCreated {
    id: DocumentId,
}

/// `GET /api/drinks` - every drink document, id exposed as a string field.
async fn list_drinks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Document<Drink>>>, ApiError> {
    let drinks = state
        .store
        .collection(DRINK_COLLECTION)
        .list::<Drink>()
        .await?;

    Ok(Json(drinks))
}

/// `POST /api/drinks` - validate and persist a drink.
///
/// Constraint violations are rejected before the insert, so a bad payload
/// never leaves a document behind.
async fn create_drink(
    State(state): State<Arc<AppState>>,
    Json(drink): Json<Drink>,
) -> Result<Json<DrinkCreated>, ApiError> {
    validate_drink(&drink)?;

    let id = state.store.collection(DRINK_COLLECTION).insert(&drink).await?;
    info!(id = %id, name = %drink.name, "Drink created");

    Ok(Json(DrinkCreated { id }))
}

// =============================================================================
// Orders
// =============================================================================

/// `GET /api/orders` - every order document verbatim, id as a string field.
async fn list_orders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Document<Order>>>, ApiError> {
    let orders = state
        .store
        .collection(ORDER_COLLECTION)
        .list::<Order>()
        .await?;

    Ok(Json(orders))
}

// =============================================================================
// Diagnostics
// =============================================================================

/// Diagnostic report for `GET /test`.
#[derive(Debug, Serialize)]
struct Diagnostics {
    backend: String,
    database: String,
    database_url: String,
    database_name: String,
    connection_status: String,
    collections: Vec<String>,
}

/// `GET /test` - store connectivity report. Purely observational and
/// non-authoritative: store errors are deliberately downgraded into
/// descriptive status strings rather than failing the request.
async fn store_diagnostics(State(state): State<Arc<AppState>>) -> Json<Diagnostics> {
    let mut diag = Diagnostics {
        backend: "running".to_string(),
        database: "not available".to_string(),
        database_url: env_presence("DATABASE_URL"),
        database_name: env_presence("DATABASE_NAME"),
        connection_status: "Not connected".to_string(),
        collections: Vec::new(),
    };

    if state.store.health_check().await {
        diag.database = "connected".to_string();
        diag.connection_status = "Connected".to_string();

        match state.store.list_collections().await {
            Ok(names) => diag.collections = names.into_iter().take(10).collect(),
            Err(e) => {
                diag.database = format!("connected but error: {}", truncate(&e.to_string(), 50));
            }
        }
    }

    Json(diag)
}

fn env_presence(var: &str) -> String {
    if std::env::var(var).is_ok() {
        "set".to_string()
    } else {
        "not set".to_string()
    }
}

fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;
    use kedai_core::Money;

    fn drink(name: &str, price: i64) -> Drink {
        serde_json::from_value(json!({ "name": name, "price": price })).unwrap()
    }

    #[tokio::test]
    async fn test_root_message() {
        let body = root().await.0;
        assert_eq!(body["message"], "Kedai Kita backend is running");
    }

    #[tokio::test]
    async fn test_create_then_list_drinks() {
        let state = test_state().await;

        let created = create_drink(State(state.clone()), Json(drink("Latte", 25000)))
            .await
            .unwrap()
            .0;

        let listed = list_drinks(State(state)).await.unwrap().0;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[0].body.name, "Latte");
        assert_eq!(listed[0].body.price, Money::from_minor(25000));
        assert!(listed[0].body.in_stock);
    }

    #[tokio::test]
    async fn test_negative_price_drink_rejected_and_not_persisted() {
        let state = test_state().await;

        let result = create_drink(State(state.clone()), Json(drink("Latte", -1))).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));

        let listed = list_drinks(State(state)).await.unwrap().0;
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_list_orders_empty_on_fresh_store() {
        let state = test_state().await;
        let listed = list_orders(State(state)).await.unwrap().0;
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_diagnostics_reports_connected_store() {
        let state = test_state().await;

        create_drink(State(state.clone()), Json(drink("Es Teh", 8000)))
            .await
            .unwrap();

        let diag = store_diagnostics(State(state)).await.0;
        assert_eq!(diag.backend, "running");
        assert_eq!(diag.database, "connected");
        assert_eq!(diag.connection_status, "Connected");
        assert_eq!(diag.collections, vec![DRINK_COLLECTION.to_string()]);
    }

    #[tokio::test]
    async fn test_diagnostics_survives_closed_store() {
        let state = test_state().await;
        state.store.close().await;

        let diag = store_diagnostics(State(state)).await.0;
        assert_eq!(diag.backend, "running");
        assert_eq!(diag.database, "not available");
        assert_eq!(diag.connection_status, "Not connected");
        assert!(diag.collections.is_empty());
    }
}
