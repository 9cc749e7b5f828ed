//! # shopfront-manager: Screen Operations for the Shop Manager
//!
//! The operations layer behind the management UI: customers, sellers,
//! products (with images and form lookups), and sale recording.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Shop Manager Layers                               │
//! │                                                                         │
//! │  UI (forms, tables)                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 shopfront-manager (THIS CRATE)                  │   │
//! │  │                                                                 │   │
//! │  │  CustomersScreen   SellersScreen   ProductsScreen   SalesScreen │   │
//! │  │       │                 │               │               │      │   │
//! │  │       └────────┬────────┴───────┬───────┴───────┬───────┘      │   │
//! │  │                ▼                ▼               ▼              │   │
//! │  │          validation        ApiError        tracing            │   │
//! │  │       (shopfront-core)    (error.rs)                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  shopfront-db (Database, BlobStore)                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shopfront_db::{BlobStore, Database, DbConfig, SaleFilter};
//! use shopfront_manager::{ProductsScreen, SalesScreen};
//!
//! let db = Database::new(DbConfig::new("shop.db")).await?;
//! let products = ProductsScreen::new(db.clone(), BlobStore::new("./blobs"));
//! let sales = SalesScreen::new(db);
//!
//! let overview = sales.record(draft, &SaleFilter::default()).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod screens;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ApiError, ErrorCode};
pub use screens::{CustomersScreen, ProductsScreen, SalesOverview, SalesScreen, SellersScreen};
