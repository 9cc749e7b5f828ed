//! # Lookup Repository
//!
//! Database operations for the small option collections behind the product
//! form: flavors, manufacturers, and models. Models optionally carry the
//! manufacturer name they belong to, so the form can narrow the model list
//! once a manufacturer is picked.

use tracing::debug;

use crate::documents::{DocumentStore, FieldFilter};
use crate::error::DbResult;
use crate::repository::{from_document, to_body};
use shopfront_core::{LookupEntry, LookupKind};

/// Repository for lookup collections (flavors, manufacturers, models).
#[derive(Debug, Clone)]
pub struct LookupRepository {
    store: DocumentStore,
}

impl LookupRepository {
    /// Creates a new LookupRepository.
    pub fn new(store: DocumentStore) -> Self {
        LookupRepository { store }
    }

    /// Lists every entry of one kind, oldest first.
    pub async fn list(&self, kind: LookupKind) -> DbResult<Vec<LookupEntry>> {
        let collection = kind.collection();
        let docs = self.store.list(collection).await?;
        docs.into_iter()
            .map(|doc| from_document(collection, doc))
            .collect()
    }

    /// Lists models belonging to one manufacturer (by manufacturer name).
    pub async fn models_for(&self, manufacturer: &str) -> DbResult<Vec<LookupEntry>> {
        let collection = LookupKind::Model.collection();
        let docs = self
            .store
            .query(collection, &[FieldFilter::eq("manufacturer", manufacturer)])
            .await?;
        docs.into_iter()
            .map(|doc| from_document(collection, doc))
            .collect()
    }

    /// Finds an entry by exact name, if present.
    pub async fn find_by_name(
        &self,
        kind: LookupKind,
        name: &str,
    ) -> DbResult<Option<LookupEntry>> {
        let collection = kind.collection();
        let docs = self
            .store
            .query(collection, &[FieldFilter::eq("name", name)])
            .await?;
        docs.into_iter()
            .next()
            .map(|doc| from_document(collection, doc))
            .transpose()
    }

    /// Inserts a new entry and returns the generated id.
    pub async fn create(&self, kind: LookupKind, entry: &LookupEntry) -> DbResult<String> {
        let collection = kind.collection();
        debug!(collection = %collection, name = %entry.name, "Creating lookup entry");
        let body = to_body(collection, entry)?;
        self.store.insert(collection, &body).await
    }

    /// Deletes an entry by id. Missing entries are a no-op.
    pub async fn delete(&self, kind: LookupKind, id: &str) -> DbResult<()> {
        self.store.delete(kind.collection(), id).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    fn entry(name: &str, manufacturer: Option<&str>) -> LookupEntry {
        LookupEntry {
            id: String::new(),
            name: name.to_string(),
            manufacturer: manufacturer.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_kinds_are_isolated() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.lookups();

        repo.create(LookupKind::Flavor, &entry("Mint", None)).await.unwrap();
        repo.create(LookupKind::Manufacturer, &entry("Elf Bar", None))
            .await
            .unwrap();

        assert_eq!(repo.list(LookupKind::Flavor).await.unwrap().len(), 1);
        assert_eq!(repo.list(LookupKind::Manufacturer).await.unwrap().len(), 1);
        assert!(repo.list(LookupKind::Model).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_models_for_manufacturer() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.lookups();

        repo.create(LookupKind::Model, &entry("BC5000", Some("Elf Bar")))
            .await
            .unwrap();
        repo.create(LookupKind::Model, &entry("TE6000", Some("Elf Bar")))
            .await
            .unwrap();
        repo.create(LookupKind::Model, &entry("Classic", Some("Juul")))
            .await
            .unwrap();

        let models = repo.models_for("Elf Bar").await.unwrap();
        assert_eq!(models.len(), 2);
        assert!(models.iter().all(|m| m.manufacturer.as_deref() == Some("Elf Bar")));
    }

    #[tokio::test]
    async fn test_find_by_name() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.lookups();

        repo.create(LookupKind::Flavor, &entry("Mint", None)).await.unwrap();

        assert!(repo
            .find_by_name(LookupKind::Flavor, "Mint")
            .await
            .unwrap()
            .is_some());
        assert!(repo
            .find_by_name(LookupKind::Flavor, "Grape")
            .await
            .unwrap()
            .is_none());
    }
}
