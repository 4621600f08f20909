//! # kedai-core: Pure Business Logic for Kedai Kita
//!
//! This crate is the **heart** of the Kedai Kita backend. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Kedai Kita Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP Surface (axum)                          │   │
//! │  │    GET /api/drinks ── POST /api/checkout ── GET /api/orders    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kedai-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ checkout  │  │ validation│  │   │
//! │  │   │  Drink    │  │   Money   │  │ price_cart│  │   rules   │  │   │
//! │  │   │  Order    │  │           │  │           │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 kedai-store (Document Store)                    │   │
//! │  │            Named collections of JSON documents (SQLite)         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Drink, Order, OrderItem, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`checkout`] - Cart pricing: subtotals and order total
//! - [`payment`] - Simulated e-wallet payment payloads (QR, deeplink)
//! - [`error`] - Domain error types
//! - [`validation`] - Field-level constraint checks
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole rupiah (i64), never floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod error;
pub mod money;
pub mod payment;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kedai_core::Money` instead of
// `use kedai_core::money::Money`

pub use error::ValidationError;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Collection name holding drink documents.
///
/// ## Why a constant?
/// The document store addresses records by collection name; keeping the two
/// names here means every layer (handlers, services, tests) agrees on them.
pub const DRINK_COLLECTION: &str = "drink";

/// Collection name holding order documents.
pub const ORDER_COLLECTION: &str = "order";

/// Maximum length of a drink or line-item name.
pub const MAX_NAME_LEN: usize = 200;
