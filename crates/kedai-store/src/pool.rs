//! # Store Pool Management
//!
//! Connection pool creation and configuration for the SQLite-backed
//! document store.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Document Store Lifecycle                            │
//! │                                                                         │
//! │  Server Startup                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreConfig::new(url) ← Configure pool settings                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DocumentStore::connect(config).await ← Create pool + run migrations   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.collection("drink") / store.collection("order")                 │
//! │       │                                                                 │
//! │       │ Concurrent access from HTTP handlers                           │
//! │       ▼                                                                 │
//! │  store.close().await on shutdown                                       │
//! │                                                                         │
//! │  The store is constructed once at process start and passed into        │
//! │  handlers explicitly - there is no ambient global connection.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## WAL Mode
//! SQLite WAL (Write-Ahead Logging) mode is enabled so listings don't block
//! checkout inserts and vice versa.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::collection::Collection;
use crate::error::{StoreError, StoreResult};
use crate::migrations;

// =============================================================================
// Configuration
// =============================================================================

/// Document store configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = StoreConfig::new("sqlite://kedai.db?mode=rwc")
///     .max_connections(5)
///     .min_connections(1);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// SQLite connection URL (e.g. `sqlite://kedai.db?mode=rwc`).
    pub url: String,

    /// Maximum number of connections in the pool.
    /// Default: 5 (plenty for a small shop backend)
    pub max_connections: u32,

    /// Minimum number of connections to keep alive.
    /// Default: 1
    pub min_connections: u32,

    /// Connection timeout duration.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Idle timeout before closing a connection.
    /// Default: 10 minutes
    pub idle_timeout: Duration,

    /// Whether to run migrations on connect.
    /// Default: true
    pub run_migrations: bool,
}

impl StoreConfig {
    /// Creates a new store configuration with the given connection URL.
    pub fn new(url: impl Into<String>) -> Self {
        StoreConfig {
            url: url.into(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            run_migrations: true,
        }
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the minimum number of connections.
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets whether to run migrations on connect.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    /// Creates an in-memory store configuration (for testing).
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let store = DocumentStore::connect(StoreConfig::in_memory()).await?;
    /// // Store is isolated, perfect for tests
    /// ```
    pub fn in_memory() -> Self {
        StoreConfig {
            url: "sqlite://:memory:".to_string(),
            max_connections: 1, // In-memory requires single connection
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(60),
            run_migrations: true,
        }
    }
}

// =============================================================================
// Document Store
// =============================================================================

/// Main store handle providing collection access.
///
/// Cloning is cheap: clones share the underlying pool. The server constructs
/// one store at startup, hands it to the HTTP state, and closes it on
/// shutdown.
///
/// ## Usage in Handlers
/// ```rust,ignore
/// let drinks = state.store.collection("drink").list::<Drink>().await?;
/// ```
#[derive(Debug, Clone)]
pub struct DocumentStore {
    /// The SQLite connection pool.
    pool: SqlitePool,
}

impl DocumentStore {
    /// Connects to the document store.
    ///
    /// ## What This Does
    /// 1. Creates the database file if it doesn't exist
    /// 2. Configures SQLite:
    ///    - WAL mode for concurrent reads
    ///    - NORMAL synchronous (balance of safety/speed)
    /// 3. Creates the connection pool
    /// 4. Runs migrations (if enabled)
    ///
    /// ## Returns
    /// * `Ok(DocumentStore)` - Ready-to-use store handle
    /// * `Err(StoreError)` - Connection or migration failed
    pub async fn connect(config: StoreConfig) -> StoreResult<Self> {
        info!(url = %config.url, "Connecting to document store");

        let connect_options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?
            // WAL mode: listings don't block inserts
            .journal_mode(SqliteJournalMode::Wal)
            // NORMAL synchronous: safe from corruption, may lose the last
            // transaction on a crash
            .synchronous(SqliteSynchronous::Normal)
            // Create file if it doesn't exist
            .create_if_missing(true);

        debug!("Connection options configured");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(Some(config.idle_timeout))
            .connect_with(connect_options)
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        info!(
            max_connections = config.max_connections,
            "Document store pool created"
        );

        let store = DocumentStore { pool };

        if config.run_migrations {
            store.run_migrations().await?;
        }

        Ok(store)
    }

    /// Runs database migrations.
    ///
    /// Automatically called by `connect()` unless disabled in the config.
    /// Idempotent: safe to run multiple times.
    pub async fn run_migrations(&self) -> StoreResult<()> {
        info!("Running store migrations");
        migrations::run_migrations(&self.pool).await?;
        info!("Migrations complete");
        Ok(())
    }

    /// Returns a handle to a named collection.
    ///
    /// Collections need no explicit creation: a collection "exists" as soon
    /// as its first document is inserted.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let id = store.collection("drink").insert(&drink).await?;
    /// ```
    pub fn collection(&self, name: impl Into<String>) -> Collection {
        Collection::new(self.pool.clone(), name)
    }

    /// Returns a reference to the connection pool.
    ///
    /// For diagnostics and advanced queries not covered by collections.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Lists the names of all collections holding at least one document.
    ///
    /// Used by the diagnostic endpoint.
    pub async fn list_collections(&self) -> StoreResult<Vec<String>> {
        let names: Vec<(String,)> =
            sqlx::query_as("SELECT DISTINCT collection FROM documents ORDER BY collection")
                .fetch_all(&self.pool)
                .await?;

        Ok(names.into_iter().map(|(name,)| name).collect())
    }

    /// Checks if the store is healthy (can execute queries).
    ///
    /// ## Returns
    /// * `true` - Store is responsive
    /// * `false` - Store is unavailable
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }

    /// Closes the connection pool.
    ///
    /// ## When To Call
    /// On application shutdown. After calling close, all collection
    /// operations will fail.
    pub async fn close(&self) {
        info!("Closing document store pool");
        self.pool.close().await;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_store() {
        let store = DocumentStore::connect(StoreConfig::in_memory())
            .await
            .unwrap();

        assert!(store.health_check().await);
    }

    #[tokio::test]
    async fn test_no_collections_on_fresh_store() {
        let store = DocumentStore::connect(StoreConfig::in_memory())
            .await
            .unwrap();

        assert!(store.list_collections().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_health_check_fails_after_close() {
        let store = DocumentStore::connect(StoreConfig::in_memory())
            .await
            .unwrap();

        store.close().await;
        assert!(!store.health_check().await);
    }

    #[test]
    fn test_config_builder() {
        let config = StoreConfig::new("sqlite://test.db")
            .max_connections(10)
            .min_connections(2)
            .run_migrations(false);

        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 2);
        assert!(!config.run_migrations);
    }
}
