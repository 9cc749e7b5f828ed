//! # Document Store
//!
//! The catalog store: per-collection JSON documents over SQLite.
//!
//! ## How It Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Document Store Layout                              │
//! │                                                                         │
//! │  documents table                                                        │
//! │  ┌────────────┬──────┬──────────────────────────────────────────┐      │
//! │  │ collection │ id   │ body (JSON)                              │      │
//! │  ├────────────┼──────┼──────────────────────────────────────────┤      │
//! │  │ customers  │ c-1  │ {"name":"Ana","phone":…}                 │      │
//! │  │ products   │ p-1  │ {"name":"Elf Bar","amount":12,…}         │      │
//! │  │ sales      │ v-1  │ {"price":10000,"seller":{"id":"s-1"},…}  │      │
//! │  │ flavors    │ f-1  │ {"name":"Mint"}                          │      │
//! │  └────────────┴──────┴──────────────────────────────────────────┘      │
//! │                                                                         │
//! │  Contract (what the screens rely on):                                  │
//! │  • insert     - new document, generated UUID id                        │
//! │  • overwrite  - full replacement of the body (upsert, no patching)     │
//! │  • delete     - by id; deleting a missing document is a no-op          │
//! │  • list       - fetch-all for a collection, no pagination              │
//! │  • query      - equality on a field path, or array-contains            │
//! │                                                                         │
//! │  Filtering uses SQLite's json_extract / json_each over the body, so   │
//! │  nested paths like "seller.id" work without per-collection schemas.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde_json::Value;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};

// =============================================================================
// Types
// =============================================================================

/// A document read back from a collection: the store-assigned id plus the
/// JSON body exactly as written.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub body: Value,
}

/// A filter applied to a collection query. Values are compared as text,
/// which covers the id-equality filtering the screens use.
#[derive(Debug, Clone)]
pub enum FieldFilter {
    /// Field at `path` (dot-separated, e.g. `seller.id`) equals `value`.
    Eq { path: String, value: String },

    /// The array at `path` has an element whose `field` equals `value`
    /// (e.g. path `products`, field `id`: "sale includes this product").
    ArrayContains {
        path: String,
        field: String,
        value: String,
    },
}

impl FieldFilter {
    pub fn eq(path: impl Into<String>, value: impl Into<String>) -> Self {
        FieldFilter::Eq {
            path: path.into(),
            value: value.into(),
        }
    }

    pub fn array_contains(
        path: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        FieldFilter::ArrayContains {
            path: path.into(),
            field: field.into(),
            value: value.into(),
        }
    }
}

// =============================================================================
// Document Store
// =============================================================================

/// Handle for document operations against one pool.
///
/// ## Usage
/// ```rust,ignore
/// let store = DocumentStore::new(pool);
/// let id = store.insert("flavors", &serde_json::json!({"name": "Mint"})).await?;
/// let all = store.list("flavors").await?;
/// ```
#[derive(Debug, Clone)]
pub struct DocumentStore {
    pool: SqlitePool,
}

impl DocumentStore {
    /// Creates a new DocumentStore.
    pub fn new(pool: SqlitePool) -> Self {
        DocumentStore { pool }
    }

    /// Inserts a new document and returns its generated id.
    ///
    /// The id is never part of the body; reads attach it separately.
    pub async fn insert(&self, collection: &str, body: &Value) -> DbResult<String> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let body_text = body.to_string();

        debug!(collection = %collection, id = %id, "Inserting document");

        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, body, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(collection)
        .bind(&id)
        .bind(body_text)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    /// Fully replaces a document body (upsert: creates the document when it
    /// does not exist yet). Fields omitted from `body` are gone; there is
    /// no partial patching.
    pub async fn overwrite(&self, collection: &str, id: &str, body: &Value) -> DbResult<()> {
        let now = Utc::now().to_rfc3339();
        let body_text = body.to_string();

        debug!(collection = %collection, id = %id, "Overwriting document");

        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, body, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?4)
            ON CONFLICT (collection, id)
            DO UPDATE SET body = excluded.body, updated_at = excluded.updated_at
            "#,
        )
        .bind(collection)
        .bind(id)
        .bind(body_text)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Deletes a document by id. Deleting a missing document is a no-op,
    /// matching document-store semantics.
    pub async fn delete(&self, collection: &str, id: &str) -> DbResult<()> {
        debug!(collection = %collection, id = %id, "Deleting document");

        sqlx::query("DELETE FROM documents WHERE collection = ?1 AND id = ?2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Gets a single document by id.
    pub async fn get(&self, collection: &str, id: &str) -> DbResult<Option<Document>> {
        let row: Option<(String, String)> = sqlx::query_as(
            "SELECT id, body FROM documents WHERE collection = ?1 AND id = ?2",
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|(id, body)| parse_document(collection, id, &body))
            .transpose()
    }

    /// Lists every document in a collection, oldest first. No pagination;
    /// the screens fetch everything.
    pub async fn list(&self, collection: &str) -> DbResult<Vec<Document>> {
        self.query(collection, &[]).await
    }

    /// Queries a collection with equality / array-contains filters, ANDed
    /// together. An empty filter slice is a plain list.
    pub async fn query(
        &self,
        collection: &str,
        filters: &[FieldFilter],
    ) -> DbResult<Vec<Document>> {
        debug!(
            collection = %collection,
            filters = filters.len(),
            "Querying collection"
        );

        let mut qb: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id, body FROM documents WHERE collection = ");
        qb.push_bind(collection);

        for filter in filters {
            match filter {
                FieldFilter::Eq { path, value } => {
                    qb.push(" AND json_extract(body, ");
                    qb.push_bind(format!("$.{path}"));
                    qb.push(") = ");
                    qb.push_bind(value.clone());
                }
                FieldFilter::ArrayContains { path, field, value } => {
                    qb.push(" AND EXISTS (SELECT 1 FROM json_each(json_extract(documents.body, ");
                    qb.push_bind(format!("$.{path}"));
                    qb.push(")) AS element WHERE json_extract(element.value, ");
                    qb.push_bind(format!("$.{field}"));
                    qb.push(") = ");
                    qb.push_bind(value.clone());
                    qb.push(")");
                }
            }
        }

        qb.push(" ORDER BY created_at, id");

        let rows: Vec<(String, String)> = qb.build_query_as().fetch_all(&self.pool).await?;

        rows.into_iter()
            .map(|(id, body)| parse_document(collection, id, &body))
            .collect()
    }

    /// Counts documents in a collection (for diagnostics and seeding).
    pub async fn count(&self, collection: &str) -> DbResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE collection = ?1")
                .bind(collection)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}

fn parse_document(collection: &str, id: String, body: &str) -> DbResult<Document> {
    let body: Value =
        serde_json::from_str(body).map_err(|e| DbError::serialization(collection, e))?;
    Ok(Document { id, body })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use serde_json::json;

    async fn store() -> (Database, DocumentStore) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let store = db.documents();
        (db, store)
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let (_db, store) = store().await;

        let id = store
            .insert("flavors", &json!({"name": "Mint"}))
            .await
            .unwrap();

        let doc = store.get("flavors", &id).await.unwrap().unwrap();
        assert_eq!(doc.id, id);
        assert_eq!(doc.body["name"], "Mint");

        // Same id in another collection does not exist.
        assert!(store.get("models", &id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_overwrite_is_full_replacement() {
        let (_db, store) = store().await;

        let id = store
            .insert("customers", &json!({"name": "Ana", "city": "Campinas"}))
            .await
            .unwrap();

        store
            .overwrite("customers", &id, &json!({"name": "Ana Paula"}))
            .await
            .unwrap();

        let doc = store.get("customers", &id).await.unwrap().unwrap();
        assert_eq!(doc.body["name"], "Ana Paula");
        assert!(doc.body.get("city").is_none(), "omitted field is gone");
    }

    #[tokio::test]
    async fn test_overwrite_missing_document_creates_it() {
        let (_db, store) = store().await;

        store
            .overwrite("sellers", "fixed-id", &json!({"name": "Bruno"}))
            .await
            .unwrap();

        let doc = store.get("sellers", "fixed-id").await.unwrap().unwrap();
        assert_eq!(doc.body["name"], "Bruno");
    }

    #[tokio::test]
    async fn test_delete_removes_and_is_noop_when_missing() {
        let (_db, store) = store().await;

        let id = store.insert("sellers", &json!({"name": "Bruno"})).await.unwrap();
        store.delete("sellers", &id).await.unwrap();
        assert!(store.get("sellers", &id).await.unwrap().is_none());

        // Second delete: no error.
        store.delete("sellers", &id).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_leaves_other_collections_untouched() {
        let (_db, store) = store().await;

        let seller = store.insert("sellers", &json!({"name": "Bruno"})).await.unwrap();
        let customer = store.insert("customers", &json!({"name": "Ana"})).await.unwrap();
        // Same id in two collections: only the named collection is affected.
        store
            .overwrite("flavors", &seller, &json!({"name": "Mint"}))
            .await
            .unwrap();

        store.delete("sellers", &seller).await.unwrap();

        assert!(store.get("sellers", &seller).await.unwrap().is_none());
        assert!(store.get("customers", &customer).await.unwrap().is_some());
        assert!(store.get("flavors", &seller).await.unwrap().is_some());
        assert_eq!(store.count("customers").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_returns_all_in_insertion_order() {
        let (_db, store) = store().await;

        let a = store.insert("flavors", &json!({"name": "Mint"})).await.unwrap();
        let b = store.insert("flavors", &json!({"name": "Grape"})).await.unwrap();

        let docs = store.list("flavors").await.unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id, a);
        assert_eq!(docs[1].id, b);
    }

    #[tokio::test]
    async fn test_eq_filter_on_nested_path() {
        let (_db, store) = store().await;

        store
            .insert("sales", &json!({"seller": {"id": "s-1"}, "price": 100}))
            .await
            .unwrap();
        store
            .insert("sales", &json!({"seller": {"id": "s-2"}, "price": 200}))
            .await
            .unwrap();

        let docs = store
            .query("sales", &[FieldFilter::eq("seller.id", "s-1")])
            .await
            .unwrap();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].body["price"], 100);
    }

    #[tokio::test]
    async fn test_array_contains_filter() {
        let (_db, store) = store().await;

        store
            .insert(
                "sales",
                &json!({"products": [{"id": "p-1"}, {"id": "p-2"}]}),
            )
            .await
            .unwrap();
        store
            .insert("sales", &json!({"products": [{"id": "p-3"}]}))
            .await
            .unwrap();

        let docs = store
            .query(
                "sales",
                &[FieldFilter::array_contains("products", "id", "p-2")],
            )
            .await
            .unwrap();
        assert_eq!(docs.len(), 1);

        let none = store
            .query(
                "sales",
                &[FieldFilter::array_contains("products", "id", "p-9")],
            )
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_filters_combine_with_and() {
        let (_db, store) = store().await;

        store
            .insert(
                "sales",
                &json!({"seller": {"id": "s-1"}, "customer": {"id": "c-1"}}),
            )
            .await
            .unwrap();
        store
            .insert(
                "sales",
                &json!({"seller": {"id": "s-1"}, "customer": {"id": "c-2"}}),
            )
            .await
            .unwrap();

        let docs = store
            .query(
                "sales",
                &[
                    FieldFilter::eq("seller.id", "s-1"),
                    FieldFilter::eq("customer.id", "c-2"),
                ],
            )
            .await
            .unwrap();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].body["customer"]["id"], "c-2");
    }

    #[tokio::test]
    async fn test_count() {
        let (_db, store) = store().await;

        assert_eq!(store.count("flavors").await.unwrap(), 0);
        store.insert("flavors", &json!({"name": "Mint"})).await.unwrap();
        assert_eq!(store.count("flavors").await.unwrap(), 1);
    }
}
