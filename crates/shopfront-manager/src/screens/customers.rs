//! # Customers Screen
//!
//! Operations behind the customer management screen: the full listing plus
//! create / update / delete, each returning the refreshed list so the UI
//! can swap its state in one step.

use tracing::info;

use shopfront_core::{Customer, CustomerDraft};
use shopfront_db::Database;

use crate::error::ApiError;

/// Screen operations for customers.
#[derive(Debug, Clone)]
pub struct CustomersScreen {
    db: Database,
}

impl CustomersScreen {
    /// Creates the screen over one database handle.
    pub fn new(db: Database) -> Self {
        CustomersScreen { db }
    }

    /// Lists every customer.
    pub async fn list(&self) -> Result<Vec<Customer>, ApiError> {
        Ok(self.db.customers().list().await?)
    }

    /// Validates the draft, stores the new customer, and returns the
    /// refreshed list.
    pub async fn create(&self, draft: CustomerDraft) -> Result<Vec<Customer>, ApiError> {
        let customer = draft.validate()?;
        let id = self.db.customers().create(&customer).await?;

        info!(id = %id, name = %customer.name, "Customer created");
        self.list().await
    }

    /// Validates the draft and fully replaces the customer with the given
    /// id, returning the refreshed list.
    pub async fn update(&self, id: &str, draft: CustomerDraft) -> Result<Vec<Customer>, ApiError> {
        let mut customer = draft.validate()?;
        customer.id = id.to_string();
        self.db.customers().overwrite(&customer).await?;

        info!(id = %id, "Customer updated");
        self.list().await
    }

    /// Deletes a customer and returns the refreshed list.
    pub async fn delete(&self, id: &str) -> Result<Vec<Customer>, ApiError> {
        self.db.customers().delete(id).await?;

        info!(id = %id, "Customer deleted");
        self.list().await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use shopfront_db::DbConfig;

    async fn screen() -> CustomersScreen {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        CustomersScreen::new(db)
    }

    fn draft(name: &str) -> CustomerDraft {
        CustomerDraft {
            name: name.to_string(),
            phone: "19 99999-0000".to_string(),
            federal_unit: "SP".to_string(),
            city: "Campinas".to_string(),
            ..CustomerDraft::default()
        }
    }

    #[tokio::test]
    async fn test_create_returns_refreshed_list() {
        let screen = screen().await;

        let list = screen.create(draft("Ana")).await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "Ana");
        assert!(!list[0].id.is_empty());

        let list = screen.create(draft("Diego")).await.unwrap();
        assert_eq!(list.len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_draft_is_rejected_with_fields() {
        let screen = screen().await;

        let err = screen.create(CustomerDraft::default()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.fields.len(), 4);
    }

    #[tokio::test]
    async fn test_update_replaces_document() {
        let screen = screen().await;

        let list = screen.create(draft("Ana")).await.unwrap();
        let id = list[0].id.clone();

        let mut changed = draft("Ana Paula");
        changed.neighborhood = Some("Centro".to_string());
        let list = screen.update(&id, changed).await.unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "Ana Paula");
        assert_eq!(list[0].neighborhood.as_deref(), Some("Centro"));
    }

    #[tokio::test]
    async fn test_delete_returns_remaining() {
        let screen = screen().await;

        let list = screen.create(draft("Ana")).await.unwrap();
        let id = list[0].id.clone();
        screen.create(draft("Diego")).await.unwrap();

        let list = screen.delete(&id).await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "Diego");
    }
}
