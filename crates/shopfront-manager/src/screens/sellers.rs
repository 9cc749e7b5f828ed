//! # Sellers Screen
//!
//! Operations behind the seller management screen. Same shape as the
//! customers screen: every mutation returns the refreshed list.

use tracing::info;

use shopfront_core::{Seller, SellerDraft};
use shopfront_db::Database;

use crate::error::ApiError;

/// Screen operations for sellers.
#[derive(Debug, Clone)]
pub struct SellersScreen {
    db: Database,
}

impl SellersScreen {
    /// Creates the screen over one database handle.
    pub fn new(db: Database) -> Self {
        SellersScreen { db }
    }

    /// Lists every seller.
    pub async fn list(&self) -> Result<Vec<Seller>, ApiError> {
        Ok(self.db.sellers().list().await?)
    }

    /// Validates the draft, stores the new seller, and returns the
    /// refreshed list.
    pub async fn create(&self, draft: SellerDraft) -> Result<Vec<Seller>, ApiError> {
        let seller = draft.validate()?;
        let id = self.db.sellers().create(&seller).await?;

        info!(id = %id, name = %seller.name, "Seller created");
        self.list().await
    }

    /// Validates the draft and fully replaces the seller with the given id,
    /// returning the refreshed list.
    pub async fn update(&self, id: &str, draft: SellerDraft) -> Result<Vec<Seller>, ApiError> {
        let mut seller = draft.validate()?;
        seller.id = id.to_string();
        self.db.sellers().overwrite(&seller).await?;

        info!(id = %id, "Seller updated");
        self.list().await
    }

    /// Deletes a seller and returns the refreshed list.
    pub async fn delete(&self, id: &str) -> Result<Vec<Seller>, ApiError> {
        self.db.sellers().delete(id).await?;

        info!(id = %id, "Seller deleted");
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

    async fn screen() -> SellersScreen {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        SellersScreen::new(db)
    }

    fn draft(name: &str) -> SellerDraft {
        SellerDraft {
            name: name.to_string(),
            pix: format!("{}@pix.example", name.to_lowercase()),
            bank: "Banco X".to_string(),
        }
    }

    #[tokio::test]
    async fn test_crud_cycle() {
        let screen = screen().await;

        let list = screen.create(draft("Bruno")).await.unwrap();
        assert_eq!(list.len(), 1);
        let id = list[0].id.clone();

        let list = screen.update(&id, draft("Carla")).await.unwrap();
        assert_eq!(list[0].name, "Carla");

        let list = screen.delete(&id).await.unwrap();
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn test_blank_fields_rejected() {
        let screen = screen().await;

        let err = screen.create(SellerDraft::default()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.fields.len(), 3);
    }
}
