//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - CRUD over the `products` collection
//! - Stock decrement used by sale recording
//!
//! ## Stock Decrement
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  How a Stock Decrement Works                            │
//! │                                                                         │
//! │  decrement_stock("p-1", 3)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  get product p-1            amount: 12                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  stock_after_sale(3)        amount: 9                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  overwrite product p-1      (full-document write with new amount)      │
//! │                                                                         │
//! │  The new amount may go NEGATIVE: overselling is recorded, not          │
//! │  rejected, and the caller decides whether to flag it.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::documents::DocumentStore;
use crate::error::{DbError, DbResult};
use crate::repository::{from_document, to_body};
use shopfront_core::Product;

const COLLECTION: &str = "products";

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
/// let all = repo.list().await?;
/// let remaining = repo.decrement_stock("p-1", 3).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    store: DocumentStore,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(store: DocumentStore) -> Self {
        ProductRepository { store }
    }

    /// Lists every product, oldest first.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let docs = self.store.list(COLLECTION).await?;
        docs.into_iter()
            .map(|doc| from_document(COLLECTION, doc))
            .collect()
    }

    /// Gets a product by id.
    pub async fn get(&self, id: &str) -> DbResult<Product> {
        let doc = self
            .store
            .get(COLLECTION, id)
            .await?
            .ok_or_else(|| DbError::not_found(COLLECTION, id))?;
        from_document(COLLECTION, doc)
    }

    /// Inserts a new product and returns the generated id.
    pub async fn create(&self, product: &Product) -> DbResult<String> {
        debug!(name = %product.name, "Creating product");
        let body = to_body(COLLECTION, product)?;
        self.store.insert(COLLECTION, &body).await
    }

    /// Fully replaces a product document, keyed by `product.id`.
    pub async fn overwrite(&self, product: &Product) -> DbResult<()> {
        debug!(id = %product.id, "Overwriting product");
        let body = to_body(COLLECTION, product)?;
        self.store.overwrite(COLLECTION, &product.id, &body).await
    }

    /// Deletes a product by id. Missing products are a no-op.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        self.store.delete(COLLECTION, id).await
    }

    /// Decrements a product's stock by `quantity` and returns the new
    /// amount. The amount may go negative; callers flag overselling.
    pub async fn decrement_stock(&self, id: &str, quantity: i64) -> DbResult<i64> {
        let mut product = self.get(id).await?;
        let remaining = product.stock_after_sale(quantity);
        product.amount = remaining;

        debug!(id = %id, quantity, remaining, "Decrementing stock");
        self.overwrite(&product).await?;

        Ok(remaining)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
