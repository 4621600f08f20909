//! # kedai-store: Document Store Adapter for Kedai Kita
//!
//! Generic create/read access to named collections of JSON documents,
//! backed by SQLite through sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Kedai Kita Data Flow                              │
//! │                                                                         │
//! │  HTTP handler (create_drink, checkout, ...)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    kedai-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ DocumentStore │    │  Collection   │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │(collection.rs)│    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ insert/list/  │    │ 001_docs.sql │  │   │
//! │  │   │ Management    │    │ get/count     │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite: documents(id, collection, body, created_at)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Store configuration and connection pool
//! - [`collection`] - Generic collection handle and document id type
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kedai_store::{DocumentStore, StoreConfig};
//!
//! let store = DocumentStore::connect(StoreConfig::new("sqlite://kedai.db?mode=rwc")).await?;
//!
//! let id = store.collection("drink").insert(&drink).await?;
//! let drinks = store.collection("drink").list::<Drink>().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod collection;
pub mod error;
pub mod migrations;
pub mod pool;

// =============================================================================
// Re-exports
// =============================================================================

pub use collection::{Collection, Document, DocumentId};
pub use error::{StoreError, StoreResult};
pub use pool::{DocumentStore, StoreConfig};
