//! # Products Screen
//!
//! Operations behind the product management screen.
//!
//! ## Saving a Product
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Product Save Pipeline                              │
//! │                                                                         │
//! │  ProductDraft (form payload)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. validate            field errors back to the form                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. resolve images      New files upload to product/<file-name>;       │
//! │       │                 already-stored paths pass through untouched    │
//! │       ▼                                                                 │
//! │  3. ensure lookups      unseen flavor / manufacturer / model names     │
//! │       │                 get created inline in their collections        │
//! │       ▼                                                                 │
//! │  4. write document      insert (create) or full overwrite (update)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  5. refreshed list back to the UI                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use shopfront_core::{
    Category, CategoryRef, ImageSource, LookupEntry, LookupKind, PodDetails, Product, ProductDraft,
};
use shopfront_db::{BlobStore, Database};

use crate::error::ApiError;

/// Screen operations for products.
#[derive(Debug, Clone)]
pub struct ProductsScreen {
    db: Database,
    blobs: BlobStore,
}

impl ProductsScreen {
    /// Creates the screen over one database handle and one blob store.
    pub fn new(db: Database, blobs: BlobStore) -> Self {
        ProductsScreen { db, blobs }
    }

    /// Lists every product.
    pub async fn list(&self) -> Result<Vec<Product>, ApiError> {
        Ok(self.db.products().list().await?)
    }

    /// Validates the draft, uploads new images, creates any unseen lookup
    /// options, stores the product, and returns the refreshed list.
    pub async fn create(&self, draft: ProductDraft) -> Result<Vec<Product>, ApiError> {
        draft.validate()?;

        let images = self.resolve_images(draft.images.clone()).await?;
        self.ensure_lookups(&draft).await?;

        let product = build_product(&draft, images, String::new());
        let id = self.db.products().create(&product).await?;

        info!(id = %id, name = %product.name, "Product created");
        self.list().await
    }

    /// Same pipeline as [`create`](Self::create), but fully replaces the
    /// product with the given id.
    pub async fn update(&self, id: &str, draft: ProductDraft) -> Result<Vec<Product>, ApiError> {
        draft.validate()?;

        let images = self.resolve_images(draft.images.clone()).await?;
        self.ensure_lookups(&draft).await?;

        let product = build_product(&draft, images, id.to_string());
        self.db.products().overwrite(&product).await?;

        info!(id = %id, "Product updated");
        self.list().await
    }

    /// Deletes a product and returns the refreshed list.
    pub async fn delete(&self, id: &str) -> Result<Vec<Product>, ApiError> {
        self.db.products().delete(id).await?;

        info!(id = %id, "Product deleted");
        self.list().await
    }

    /// Resolves a stored image path to a URL the UI can render.
    pub async fn image_url(&self, path: &str) -> Result<String, ApiError> {
        Ok(self.blobs.download_url(path).await?)
    }

    /// Lists the flavor options for the product form.
    pub async fn flavors(&self) -> Result<Vec<LookupEntry>, ApiError> {
        Ok(self.db.lookups().list(LookupKind::Flavor).await?)
    }

    /// Lists the manufacturer options for the product form.
    pub async fn manufacturers(&self) -> Result<Vec<LookupEntry>, ApiError> {
        Ok(self.db.lookups().list(LookupKind::Manufacturer).await?)
    }

    /// Lists the model options belonging to one manufacturer.
    pub async fn models_for(&self, manufacturer: &str) -> Result<Vec<LookupEntry>, ApiError> {
        Ok(self.db.lookups().models_for(manufacturer).await?)
    }

    /// Uploads new image files and passes stored paths through, preserving
    /// the order the form listed them in.
    async fn resolve_images(&self, sources: Vec<ImageSource>) -> Result<Vec<String>, ApiError> {
        let mut paths = Vec::with_capacity(sources.len());

        for source in sources {
            match source {
                ImageSource::New { file_name, bytes } => {
                    let path = format!("product/{file_name}");
                    self.blobs.upload(&path, &bytes).await?;
                    paths.push(path);
                }
                ImageSource::Stored(path) => paths.push(path),
            }
        }

        Ok(paths)
    }

    /// Creates lookup entries for any flavor / manufacturer / model name the
    /// form introduced, so the options appear in future forms.
    async fn ensure_lookups(&self, draft: &ProductDraft) -> Result<(), ApiError> {
        self.ensure_lookup(LookupKind::Flavor, &draft.flavor, None)
            .await?;
        self.ensure_lookup(LookupKind::Manufacturer, &draft.manufacturer, None)
            .await?;
        if !draft.model.trim().is_empty() {
            self.ensure_lookup(LookupKind::Model, &draft.model, Some(&draft.manufacturer))
                .await?;
        }
        Ok(())
    }

    async fn ensure_lookup(
        &self,
        kind: LookupKind,
        name: &str,
        manufacturer: Option<&str>,
    ) -> Result<(), ApiError> {
        let lookups = self.db.lookups();

        if lookups.find_by_name(kind, name).await?.is_none() {
            debug!(collection = %kind.collection(), name = %name, "Creating lookup option inline");
            lookups
                .create(
                    kind,
                    &LookupEntry {
                        id: String::new(),
                        name: name.to_string(),
                        manufacturer: manufacturer.map(str::to_string),
                    },
                )
                .await?;
        }

        Ok(())
    }
}

/// Builds the product entity from a validated draft and resolved images.
fn build_product(draft: &ProductDraft, images: Vec<String>, id: String) -> Product {
    Product {
        id,
        name: draft.name.clone(),
        amount: draft.amount,
        cost_price: draft.cost_price,
        final_price: draft.final_price,
        images,
        category: CategoryRef {
            id: "pod".to_string(),
            name: Category::Pod.to_string(),
        },
        pod: Some(PodDetails {
            flavor: draft.flavor.clone(),
            manufacturer: draft.manufacturer.clone(),
            model: draft.model.clone(),
            puffs: draft.puffs.clone(),
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use shopfront_core::Money;
    use shopfront_db::DbConfig;
    use uuid::Uuid;

    async fn screen() -> ProductsScreen {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let root = std::env::temp_dir().join(format!("shopfront-products-{}", Uuid::new_v4()));
        ProductsScreen::new(db, BlobStore::new(root))
    }

    fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            amount: 10,
            cost_price: Money::from_cents(3000),
            final_price: Money::from_cents(5000),
            images: vec![ImageSource::New {
                file_name: "front.png".to_string(),
                bytes: b"png".to_vec(),
            }],
            category: Category::Pod,
            manufacturer: "Elf Bar".to_string(),
            model: "BC5000".to_string(),
            puffs: "5000".to_string(),
            flavor: "Mint".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_uploads_images_and_stores_paths() {
        let screen = screen().await;

        let list = screen.create(draft("Elf Bar Mint")).await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].images, vec!["product/front.png".to_string()]);

        let url = screen.image_url("product/front.png").await.unwrap();
        assert!(url.starts_with("file://"));
    }

    #[tokio::test]
    async fn test_create_adds_unseen_lookup_options() {
        let screen = screen().await;

        let list = screen.create(draft("Elf Bar Mint")).await.unwrap();

        assert_eq!(screen.flavors().await.unwrap().len(), 1);
        let manufacturers = screen.manufacturers().await.unwrap();
        assert_eq!(manufacturers.len(), 1);
        assert!(!manufacturers[0].id.is_empty(), "lookup got a generated id");
        assert_eq!(
            list[0].pod.as_ref().unwrap().manufacturer,
            manufacturers[0].name
        );
        let models = screen.models_for("Elf Bar").await.unwrap();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].name, "BC5000");

        // Saving another product with the same options does not duplicate.
        screen.create(draft("Elf Bar Mint v2")).await.unwrap();
        assert_eq!(screen.flavors().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_keeps_stored_image_paths() {
        let screen = screen().await;

        let list = screen.create(draft("Elf Bar Mint")).await.unwrap();
        let id = list[0].id.clone();

        let mut changed = draft("Elf Bar Mint 2");
        changed.images = vec![
            ImageSource::Stored("product/front.png".to_string()),
            ImageSource::New {
                file_name: "side.png".to_string(),
                bytes: b"png2".to_vec(),
            },
        ];
        let list = screen.update(&id, changed).await.unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(
            list[0].images,
            vec![
                "product/front.png".to_string(),
                "product/side.png".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_invalid_draft_uploads_nothing() {
        let screen = screen().await;

        let mut bad = draft("Elf Bar Mint");
        bad.flavor = String::new();

        let err = screen.create(bad).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        // Validation failed before image resolution ran.
        let missing = screen.image_url("product/front.png").await.unwrap_err();
        assert_eq!(missing.code, ErrorCode::ImageError);
    }
}
