//! # Collection Handle
//!
//! Generic create/read access to one named collection of JSON documents.
//!
//! ## Document Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   documents table                                       │
//! │                                                                         │
//! │  id (TEXT, UUID)  collection  body (JSON)              created_at      │
//! │  ──────────────── ─────────── ──────────────────────── ──────────      │
//! │  2f4c...          drink       {"name":"Latte",...}     2026-08-..      │
//! │  9a01...          drink       {"name":"Es Teh",...}    2026-08-..      │
//! │  77de...          order       {"customer_name":...}    2026-08-..      │
//! │                                                                         │
//! │  One insert = one document = one generated id. Each insert is a        │
//! │  single atomic statement; there is nothing to roll back partially.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store generates an id for every insert and hands it back as an
//! opaque [`DocumentId`]. API consumers see it as a plain string field
//! `id`; nothing may assume numeric or ordered semantics.

use std::fmt;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::StoreResult;

// =============================================================================
// Document Id
// =============================================================================

/// Opaque identifier of a stored document.
///
/// Serializes as a plain JSON string. Generated by the store on insert
/// (UUID v4 under the hood, but callers must not rely on that).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(String);

impl DocumentId {
    /// Wraps a raw id string received from a client or read from storage.
    pub fn new(id: impl Into<String>) -> Self {
        DocumentId(id.into())
    }

    /// Generates a fresh store id.
    pub(crate) fn generate() -> Self {
        DocumentId(Uuid::new_v4().to_string())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Document
// =============================================================================

/// A stored record together with its store-generated id.
///
/// The body is flattened on serialization, so a listed drink reads
/// `{"id": "...", "name": "Latte", ...}` - the id sits alongside the
/// record's own fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document<T> {
    /// Store-generated identifier, exposed as a plain string.
    pub id: DocumentId,

    /// The record itself.
    #[serde(flatten)]
    pub body: T,
}

// =============================================================================
// Collection
// =============================================================================

/// Handle to one named collection.
///
/// Cheap to construct: obtained from [`DocumentStore::collection`] per
/// operation, holding only a pool clone and the collection name.
///
/// [`DocumentStore::collection`]: crate::pool::DocumentStore::collection
#[derive(Debug, Clone)]
pub struct Collection {
    pool: SqlitePool,
    name: String,
}

impl Collection {
    /// Creates a new collection handle.
    pub(crate) fn new(pool: SqlitePool, name: impl Into<String>) -> Self {
        Collection {
            pool,
            name: name.into(),
        }
    }

    /// The collection name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inserts a document and returns its generated id.
    ///
    /// One successful call persists exactly one document. The id is fresh
    /// per insert - identical bodies inserted twice get two distinct ids.
    pub async fn insert<T: Serialize>(&self, body: &T) -> StoreResult<DocumentId> {
        let id = DocumentId::generate();
        let json = serde_json::to_string(body)?;
        let now = Utc::now();

        debug!(collection = %self.name, id = %id, "Inserting document");

        sqlx::query(
            r#"
            INSERT INTO documents (id, collection, body, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(id.as_str())
        .bind(&self.name)
        .bind(json)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    /// Lists every document in the collection.
    ///
    /// Returned in insertion order as a convenience; callers must not
    /// depend on it.
    pub async fn list<T: DeserializeOwned>(&self) -> StoreResult<Vec<Document<T>>> {
        let rows: Vec<(String, String)> = sqlx::query_as(
            r#"
            SELECT id, body FROM documents
            WHERE collection = ?1
            ORDER BY created_at
            "#,
        )
        .bind(&self.name)
        .fetch_all(&self.pool)
        .await?;

        debug!(collection = %self.name, count = rows.len(), "Listed documents");

        rows.into_iter()
            .map(|(id, body)| {
                Ok(Document {
                    id: DocumentId::new(id),
                    body: serde_json::from_str(&body)?,
                })
            })
            .collect()
    }

    /// Gets a document by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Document))` - Document found
    /// * `Ok(None)` - No document with that id in this collection
    pub async fn get<T: DeserializeOwned>(
        &self,
        id: &DocumentId,
    ) -> StoreResult<Option<Document<T>>> {
        let row: Option<(String, String)> = sqlx::query_as(
            r#"
            SELECT id, body FROM documents
            WHERE collection = ?1 AND id = ?2
            "#,
        )
        .bind(&self.name)
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some((id, body)) => Ok(Some(Document {
                id: DocumentId::new(id),
                body: serde_json::from_str(&body)?,
            })),
            None => Ok(None),
        }
    }

    /// Counts documents in the collection (for diagnostics and tests).
    pub async fn count(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM documents WHERE collection = ?1
            "#,
        )
        .bind(&self.name)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{DocumentStore, StoreConfig};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Snack {
        name: String,
        price: i64,
    }

    async fn test_store() -> DocumentStore {
        DocumentStore::connect(StoreConfig::in_memory())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_insert_then_list() {
        let store = test_store().await;
        let snacks = store.collection("snack");

        let id = snacks
            .insert(&Snack {
                name: "Pisang Goreng".to_string(),
                price: 5000,
            })
            .await
            .unwrap();

        let listed = snacks.list::<Snack>().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, id);
        assert_eq!(listed[0].body.name, "Pisang Goreng");
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let store = test_store().await;
        let snacks = store.collection("snack");

        let id = snacks
            .insert(&Snack {
                name: "Tahu Isi".to_string(),
                price: 3000,
            })
            .await
            .unwrap();

        let found = snacks.get::<Snack>(&id).await.unwrap().unwrap();
        assert_eq!(found.body.price, 3000);

        let missing = snacks
            .get::<Snack>(&DocumentId::new("no-such-id"))
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let store = test_store().await;

        store
            .collection("snack")
            .insert(&Snack {
                name: "Risol".to_string(),
                price: 4000,
            })
            .await
            .unwrap();

        assert_eq!(store.collection("snack").count().await.unwrap(), 1);
        assert_eq!(store.collection("other").count().await.unwrap(), 0);
        assert!(store
            .collection("other")
            .list::<Snack>()
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_identical_bodies_get_distinct_ids() {
        let store = test_store().await;
        let snacks = store.collection("snack");
        let snack = Snack {
            name: "Cireng".to_string(),
            price: 2000,
        };

        let a = snacks.insert(&snack).await.unwrap();
        let b = snacks.insert(&snack).await.unwrap();

        assert_ne!(a, b);
        assert_eq!(snacks.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_list_collections_after_inserts() {
        let store = test_store().await;

        store
            .collection("snack")
            .insert(&Snack {
                name: "Bakwan".to_string(),
                price: 2500,
            })
            .await
            .unwrap();

        let names = store.list_collections().await.unwrap();
        assert_eq!(names, vec!["snack".to_string()]);
    }

    /// The flattened serialization keeps the id next to the body fields.
    #[test]
    fn test_document_serializes_with_flat_id() {
        let doc = Document {
            id: DocumentId::new("abc"),
            body: Snack {
                name: "Combro".to_string(),
                price: 2000,
            },
        };

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["id"], "abc");
        assert_eq!(value["name"], "Combro");
        assert_eq!(value["price"], 2000);
    }
}
