//! # Seller Repository
//!
//! Database operations for sellers (staff who record sales). Sellers carry
//! payout details (pix key, bank) that get snapshotted into sales.

use tracing::debug;

use crate::documents::DocumentStore;
use crate::error::{DbError, DbResult};
use crate::repository::{from_document, to_body};
use shopfront_core::Seller;

const COLLECTION: &str = "sellers";

/// Repository for seller database operations.
#[derive(Debug, Clone)]
pub struct SellerRepository {
    store: DocumentStore,
}

impl SellerRepository {
    /// Creates a new SellerRepository.
    pub fn new(store: DocumentStore) -> Self {
        SellerRepository { store }
    }

    /// Lists every seller, oldest first.
    pub async fn list(&self) -> DbResult<Vec<Seller>> {
        let docs = self.store.list(COLLECTION).await?;
        docs.into_iter()
            .map(|doc| from_document(COLLECTION, doc))
            .collect()
    }

    /// Gets a seller by id.
    pub async fn get(&self, id: &str) -> DbResult<Seller> {
        let doc = self
            .store
            .get(COLLECTION, id)
            .await?
            .ok_or_else(|| DbError::not_found(COLLECTION, id))?;
        from_document(COLLECTION, doc)
    }

    /// Inserts a new seller and returns the generated id.
    pub async fn create(&self, seller: &Seller) -> DbResult<String> {
        debug!(name = %seller.name, "Creating seller");
        let body = to_body(COLLECTION, seller)?;
        self.store.insert(COLLECTION, &body).await
    }

    /// Fully replaces a seller document, keyed by `seller.id`.
    pub async fn overwrite(&self, seller: &Seller) -> DbResult<()> {
        debug!(id = %seller.id, "Overwriting seller");
        let body = to_body(COLLECTION, seller)?;
        self.store.overwrite(COLLECTION, &seller.id, &body).await
    }

    /// Deletes a seller by id. Missing sellers are a no-op.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        self.store.delete(COLLECTION, id).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    fn sample_seller() -> Seller {
        Seller {
            id: String::new(),
            name: "Bruno".to_string(),
            pix: "bruno@pix.example".to_string(),
            bank: "Banco X".to_string(),
        }
    }

    #[tokio::test]
    async fn test_crud_cycle() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.sellers();

        let id = repo.create(&sample_seller()).await.unwrap();
        assert_eq!(repo.get(&id).await.unwrap().pix, "bruno@pix.example");

        let mut updated = sample_seller();
        updated.id = id.clone();
        updated.bank = "Banco Y".to_string();
        repo.overwrite(&updated).await.unwrap();
        assert_eq!(repo.get(&id).await.unwrap().bank, "Banco Y");

        repo.delete(&id).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }
}
