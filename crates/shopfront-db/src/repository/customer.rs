//! # Customer Repository
//!
//! Database operations for customers: full listing, full-document updates,
//! delete by id. Customers carry contact and address details plus optional
//! car fields used for deliveries.

use tracing::debug;

use crate::documents::DocumentStore;
use crate::error::{DbError, DbResult};
use crate::repository::{from_document, to_body};
use shopfront_core::Customer;

const COLLECTION: &str = "customers";

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    store: DocumentStore,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(store: DocumentStore) -> Self {
        CustomerRepository { store }
    }

    /// Lists every customer, oldest first.
    pub async fn list(&self) -> DbResult<Vec<Customer>> {
        let docs = self.store.list(COLLECTION).await?;
        docs.into_iter()
            .map(|doc| from_document(COLLECTION, doc))
            .collect()
    }

    /// Gets a customer by id.
    pub async fn get(&self, id: &str) -> DbResult<Customer> {
        let doc = self
            .store
            .get(COLLECTION, id)
            .await?
            .ok_or_else(|| DbError::not_found(COLLECTION, id))?;
        from_document(COLLECTION, doc)
    }

    /// Inserts a new customer and returns the generated id.
    pub async fn create(&self, customer: &Customer) -> DbResult<String> {
        debug!(name = %customer.name, "Creating customer");
        let body = to_body(COLLECTION, customer)?;
        self.store.insert(COLLECTION, &body).await
    }

    /// Fully replaces a customer document, keyed by `customer.id`.
    pub async fn overwrite(&self, customer: &Customer) -> DbResult<()> {
        debug!(id = %customer.id, "Overwriting customer");
        let body = to_body(COLLECTION, customer)?;
        self.store.overwrite(COLLECTION, &customer.id, &body).await
    }

    /// Deletes a customer by id. Missing customers are a no-op.
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

    fn sample_customer() -> Customer {
        Customer {
            id: String::new(),
            name: "Ana Paula".to_string(),
            phone: "19 99999-0000".to_string(),
            federal_unit: "SP".to_string(),
            city: "Campinas".to_string(),
            neighborhood: Some("Centro".to_string()),
            street: None,
            address_number: None,
            address_reference: None,
            car_model: Some("Onix".to_string()),
            car_identifier: None,
            document: None,
        }
    }

    #[tokio::test]
    async fn test_create_get_list() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.customers();

        let id = repo.create(&sample_customer()).await.unwrap();

        let fetched = repo.get(&id).await.unwrap();
        assert_eq!(fetched.id, id);
        assert_eq!(fetched.name, "Ana Paula");
        assert_eq!(fetched.car_model.as_deref(), Some("Onix"));

        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_overwrite_replaces_whole_document() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.customers();

        let id = repo.create(&sample_customer()).await.unwrap();

        let mut updated = sample_customer();
        updated.id = id.clone();
        updated.name = "Ana P. Souza".to_string();
        updated.neighborhood = None;
        repo.overwrite(&updated).await.unwrap();

        let fetched = repo.get(&id).await.unwrap();
        assert_eq!(fetched.name, "Ana P. Souza");
        assert!(fetched.neighborhood.is_none(), "omitted optional is gone");
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.customers();

        let err = repo.get("nope").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.customers();

        let id = repo.create(&sample_customer()).await.unwrap();
        repo.delete(&id).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }
}
