//! # Sale Repository
//!
//! Database operations for recorded sales.
//!
//! ## Filtered History
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Sale History Filters                                 │
//! │                                                                         │
//! │  SaleFilter { seller, customer, product }   (each optional, ANDed)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  seller   ──► equality on seller.id in the body                        │
//! │  customer ──► equality on customer.id in the body                      │
//! │  product  ──► array-contains on products[].id                          │
//! │       │          (the sale touched this product in ANY line)          │
//! │       ▼                                                                 │
//! │  Matching sales, oldest first                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::documents::{DocumentStore, FieldFilter};
use crate::error::{DbError, DbResult};
use crate::repository::{from_document, to_body};
use shopfront_core::Sale;

const COLLECTION: &str = "sales";

/// Optional criteria for the sale history query. Empty filter = all sales.
#[derive(Debug, Clone, Default)]
pub struct SaleFilter {
    /// Match sales recorded by this seller id.
    pub seller: Option<String>,
    /// Match sales made to this customer id.
    pub customer: Option<String>,
    /// Match sales whose line items include this product id.
    pub product: Option<String>,
}

impl SaleFilter {
    fn to_field_filters(&self) -> Vec<FieldFilter> {
        let mut filters = Vec::new();
        if let Some(seller) = &self.seller {
            filters.push(FieldFilter::eq("seller.id", seller.clone()));
        }
        if let Some(customer) = &self.customer {
            filters.push(FieldFilter::eq("customer.id", customer.clone()));
        }
        if let Some(product) = &self.product {
            filters.push(FieldFilter::array_contains("products", "id", product.clone()));
        }
        filters
    }
}

/// Repository for sale database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    store: DocumentStore,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(store: DocumentStore) -> Self {
        SaleRepository { store }
    }

    /// Lists every sale, oldest first.
    pub async fn list(&self) -> DbResult<Vec<Sale>> {
        self.query(&SaleFilter::default()).await
    }

    /// Lists sales matching the filter, oldest first.
    pub async fn query(&self, filter: &SaleFilter) -> DbResult<Vec<Sale>> {
        debug!(?filter, "Querying sales");
        let docs = self
            .store
            .query(COLLECTION, &filter.to_field_filters())
            .await?;
        docs.into_iter()
            .map(|doc| from_document(COLLECTION, doc))
            .collect()
    }

    /// Gets a sale by id.
    pub async fn get(&self, id: &str) -> DbResult<Sale> {
        let doc = self
            .store
            .get(COLLECTION, id)
            .await?
            .ok_or_else(|| DbError::not_found(COLLECTION, id))?;
        from_document(COLLECTION, doc)
    }

    /// Inserts a new sale and returns the generated id.
    pub async fn create(&self, sale: &Sale) -> DbResult<String> {
        debug!(price = %sale.price, lines = sale.products.len(), "Recording sale");
        let body = to_body(COLLECTION, sale)?;
        self.store.insert(COLLECTION, &body).await
    }

    /// Fully replaces a sale document, keyed by `sale.id`.
    pub async fn overwrite(&self, sale: &Sale) -> DbResult<()> {
        debug!(id = %sale.id, "Overwriting sale");
        let body = to_body(COLLECTION, sale)?;
        self.store.overwrite(COLLECTION, &sale.id, &body).await
    }

    /// Deletes a sale by id. Missing sales are a no-op.
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
    use shopfront_core::{CustomerRef, Money, SaleLine, SellerRef};

    fn sample_sale(seller: &str, customer: &str, product: &str) -> Sale {
        Sale {
            id: String::new(),
            price: Money::from_cents(10_000),
            profit: Money::from_cents(4_000),
            discount: Money::zero(),
            additional: Money::zero(),
            payment_method: "pix".to_string(),
            date: "2024-05-10".to_string(),
            products: vec![SaleLine {
                id: product.to_string(),
                name: "Elf Bar Mint".to_string(),
                amount: 2,
                final_price: Money::from_cents(5_000),
                cost_price: Money::from_cents(3_000),
            }],
            customer: CustomerRef {
                id: customer.to_string(),
                name: "Ana".to_string(),
            },
            seller: SellerRef {
                id: seller.to_string(),
                name: "Bruno".to_string(),
                pix: "key".to_string(),
                bank: "Banco X".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.sales();

        repo.create(&sample_sale("s-1", "c-1", "p-1")).await.unwrap();
        repo.create(&sample_sale("s-2", "c-1", "p-2")).await.unwrap();

        assert_eq!(repo.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_filter_by_seller_and_customer() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.sales();

        repo.create(&sample_sale("s-1", "c-1", "p-1")).await.unwrap();
        repo.create(&sample_sale("s-1", "c-2", "p-1")).await.unwrap();
        repo.create(&sample_sale("s-2", "c-1", "p-1")).await.unwrap();

        let by_seller = repo
            .query(&SaleFilter {
                seller: Some("s-1".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_seller.len(), 2);

        let narrowed = repo
            .query(&SaleFilter {
                seller: Some("s-1".to_string()),
                customer: Some("c-2".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0].customer.id, "c-2");
    }

    #[tokio::test]
    async fn test_filter_by_product_matches_any_line() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.sales();

        let mut multi = sample_sale("s-1", "c-1", "p-1");
        multi.products.push(SaleLine {
            id: "p-2".to_string(),
            name: "Juul Pod".to_string(),
            amount: 1,
            final_price: Money::from_cents(4_000),
            cost_price: Money::from_cents(2_500),
        });
        repo.create(&multi).await.unwrap();
        repo.create(&sample_sale("s-1", "c-1", "p-3")).await.unwrap();

        let hits = repo
            .query(&SaleFilter {
                product: Some("p-2".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].products.len(), 2);
    }

    #[tokio::test]
    async fn test_money_fields_round_trip_as_cents() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.sales();

        let id = repo.create(&sample_sale("s-1", "c-1", "p-1")).await.unwrap();
        let fetched = repo.get(&id).await.unwrap();

        assert_eq!(fetched.price, Money::from_cents(10_000));
        assert_eq!(fetched.profit, Money::from_cents(4_000));
    }
}
