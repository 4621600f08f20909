//! # Kedai Kita Server
//!
//! HTTP API for the drink shop backend.
//!
//! ## Endpoint Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          HTTP Endpoints                                 │
//! │                                                                         │
//! │  GET  /               → liveness message                               │
//! │  GET  /api/drinks     → list drink documents (with string id)          │
//! │  POST /api/drinks     → validate + persist a drink, respond {id}       │
//! │  POST /api/checkout   → price cart, simulate payment, persist order    │
//! │  GET  /api/orders     → list order documents (with string id)          │
//! │  GET  /test           → store connectivity diagnostics                 │
//! │                                                                         │
//! │  Each request is handled independently; the only shared state is the   │
//! │  document store handle. No locking, no app-level transactions.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `DATABASE_URL` - store connection URL (default: `sqlite://kedai_kita.db?mode=rwc`)
//! - `DATABASE_NAME` - logical store name, reported by `/test` (default: `kedai_kita`)
//! - `PORT` - HTTP listen port (default: 8000)

pub mod checkout;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

// Re-exports
pub use config::ServerConfig;
pub use error::ApiError;
pub use state::AppState;
