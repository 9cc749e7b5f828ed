//! # Sales Screen
//!
//! Operations behind the sale recording screen and the sales history.
//!
//! ## Recording a Sale
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Sale Recording Flow                               │
//! │                                                                         │
//! │  SaleDraft (form payload)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. validate              field errors back to the form                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. snapshot lines        prices copied from the LIVE products, so    │
//! │       │                   later price edits never rewrite history     │
//! │       ▼                                                                 │
//! │  3. compute totals        price = Σ(amount × final) + extra − discount │
//! │       │                   profit = price − Σ(amount × cost)           │
//! │       ▼                                                                 │
//! │  4. dispatch writes       per-line stock decrements and the sale      │
//! │       │                   insert run CONCURRENTLY; a failed write is  │
//! │       │                   logged, not rolled back                     │
//! │       ▼                                                                 │
//! │  5. refreshed history back to the UI                                   │
//! │                                                                         │
//! │  Overselling is permitted: a decrement may take stock negative, and   │
//! │  the recording flags it with a warning instead of rejecting the sale. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tokio::task::JoinSet;
use tracing::{info, warn};

use shopfront_core::{compute_sale_totals, CoreError, Money, Sale, SaleDraft, SaleLine};
use shopfront_db::{Database, DbError, SaleFilter};

use crate::error::ApiError;

/// The sales history plus the revenue and profit totals the screen shows
/// above it. Totals cover exactly the filtered set.
#[derive(Debug, Clone)]
pub struct SalesOverview {
    pub sales: Vec<Sale>,
    pub revenue: Money,
    pub profit: Money,
}

/// Screen operations for sales.
#[derive(Debug, Clone)]
pub struct SalesScreen {
    db: Database,
}

impl SalesScreen {
    /// Creates the screen over one database handle.
    pub fn new(db: Database) -> Self {
        SalesScreen { db }
    }

    /// Lists sales matching the filter, with revenue and profit summed over
    /// the matching set.
    pub async fn list(&self, filter: &SaleFilter) -> Result<SalesOverview, ApiError> {
        let sales = self.db.sales().query(filter).await?;

        let revenue: Money = sales.iter().map(|s| s.price).sum();
        let profit: Money = sales.iter().map(|s| s.profit).sum();

        Ok(SalesOverview {
            sales,
            revenue,
            profit,
        })
    }

    /// Records a sale from the form draft and returns the history refreshed
    /// under the screen's active filter.
    ///
    /// Stock decrements and the sale insert are dispatched concurrently and
    /// awaited as a group. A failed write leaves the others in place; there
    /// is no transaction spanning them.
    pub async fn record(
        &self,
        draft: SaleDraft,
        filter: &SaleFilter,
    ) -> Result<SalesOverview, ApiError> {
        draft.validate()?;

        // Validation guarantees both are present.
        let customer = draft.customer.clone().ok_or_else(|| {
            ApiError::internal("validated draft lost its customer")
        })?;
        let seller = draft.seller.clone().ok_or_else(|| {
            ApiError::internal("validated draft lost its seller")
        })?;

        // Snapshot each line from the live product so the sale keeps the
        // prices in effect right now.
        let mut lines = Vec::with_capacity(draft.lines.len());
        for line in &draft.lines {
            let product = self
                .db
                .products()
                .get(&line.product_id)
                .await
                .map_err(|e| match e {
                    DbError::NotFound { .. } => {
                        ApiError::from(CoreError::ProductNotFound(line.product_id.clone()))
                    }
                    other => ApiError::from(other),
                })?;
            lines.push(SaleLine {
                id: product.id,
                name: product.name,
                amount: line.purchase_amount,
                final_price: product.final_price,
                cost_price: product.cost_price,
            });
        }

        let totals = compute_sale_totals(&lines, draft.discount, draft.additional);

        let sale = Sale {
            id: String::new(),
            price: totals.price,
            profit: totals.profit,
            discount: draft.discount,
            additional: draft.additional,
            payment_method: draft.payment_method,
            date: draft.date,
            products: lines.clone(),
            customer,
            seller,
        };

        let mut writes = JoinSet::new();

        for line in lines {
            let products = self.db.products();
            writes.spawn(async move {
                match products.decrement_stock(&line.id, line.amount).await {
                    Ok(remaining) if remaining < 0 => {
                        warn!(
                            product_id = %line.id,
                            remaining,
                            "Sale took product stock negative"
                        );
                    }
                    Ok(_) => {}
                    Err(e) => {
                        warn!(product_id = %line.id, error = %e, "Stock decrement failed");
                    }
                }
            });
        }

        let sales = self.db.sales();
        let price = sale.price;
        let line_count = sale.products.len();
        writes.spawn(async move {
            match sales.create(&sale).await {
                Ok(id) => {
                    info!(id = %id, price = %price, lines = line_count, "Sale recorded");
                }
                Err(e) => {
                    warn!(error = %e, "Sale insert failed");
                }
            }
        });

        while writes.join_next().await.is_some() {}

        self.list(filter).await
    }

    /// Fully replaces a recorded sale and returns the refreshed history.
    ///
    /// Editing a sale does NOT touch product stock; the decrements from the
    /// original recording stand.
    pub async fn update(&self, sale: &Sale) -> Result<SalesOverview, ApiError> {
        self.db.sales().overwrite(sale).await?;

        info!(id = %sale.id, "Sale updated");
        self.list(&SaleFilter::default()).await
    }

    /// Deletes a sale and returns the refreshed history. Stock is not
    /// restored.
    pub async fn delete(&self, id: &str) -> Result<SalesOverview, ApiError> {
        self.db.sales().delete(id).await?;

        info!(id = %id, "Sale deleted");
        self.list(&SaleFilter::default()).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
