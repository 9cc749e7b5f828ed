//! # Repository Module
//!
//! Typed repositories over the document store.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  Repositories wrap the raw document store with typed entities.         │
//! │                                                                         │
//! │  Screen Operation                                                      │
//! │       │                                                                 │
//! │       │  db.customers().list()                                         │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  CustomerRepository                                                    │
//! │  ├── list(&self)                                                       │
//! │  ├── get(&self, id)                                                    │
//! │  ├── create(&self, customer)                                           │
//! │  ├── overwrite(&self, customer)                                        │
//! │  └── delete(&self, id)                                                 │
//! │       │                                                                 │
//! │       │  JSON document                                                  │
//! │       ▼                                                                 │
//! │  DocumentStore ──► SQLite `documents` table                            │
//! │                                                                         │
//! │  The id lives OUTSIDE the document body: it is stripped from the       │
//! │  entity on write and injected back on read, so a body never carries    │
//! │  a stale id.                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`customer::CustomerRepository`] - Customer CRUD
//! - [`seller::SellerRepository`] - Seller CRUD
//! - [`product::ProductRepository`] - Product CRUD and stock decrement
//! - [`sale::SaleRepository`] - Sale recording and filtered history
//! - [`lookup::LookupRepository`] - Flavors, manufacturers, models

pub mod customer;
pub mod lookup;
pub mod product;
pub mod sale;
pub mod seller;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::documents::Document;
use crate::error::{DbError, DbResult};

/// Serializes an entity into a document body, dropping its `id` field.
pub(crate) fn to_body<T: Serialize>(collection: &str, entity: &T) -> DbResult<Value> {
    let mut body =
        serde_json::to_value(entity).map_err(|e| DbError::serialization(collection, e))?;
    if let Some(map) = body.as_object_mut() {
        map.remove("id");
    }
    Ok(body)
}

/// Deserializes a document into an entity, injecting the store id.
pub(crate) fn from_document<T: DeserializeOwned>(
    collection: &str,
    doc: Document,
) -> DbResult<T> {
    let mut body = doc.body;
    if let Some(map) = body.as_object_mut() {
        map.insert("id".to_string(), Value::String(doc.id));
    }
    serde_json::from_value(body).map_err(|e| DbError::serialization(collection, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shopfront_core::Seller;

    #[test]
    fn test_to_body_strips_id() {
        let seller = Seller {
            id: "s-1".to_string(),
            name: "Bruno".to_string(),
            pix: "key".to_string(),
            bank: "Banco X".to_string(),
        };

        let body = to_body("sellers", &seller).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["name"], "Bruno");
    }

    #[test]
    fn test_from_document_injects_id() {
        let doc = Document {
            id: "s-1".to_string(),
            body: json!({"name": "Bruno", "pix": "key", "bank": "Banco X"}),
        };

        let seller: Seller = from_document("sellers", doc).unwrap();
        assert_eq!(seller.id, "s-1");
        assert_eq!(seller.bank, "Banco X");
    }
}
