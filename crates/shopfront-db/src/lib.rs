//! # shopfront-db: Storage Layer for the Shop Manager
//!
//! This crate provides storage for the shop manager: a JSON document store
//! over SQLite (via sqlx) plus a filesystem blob store for product images.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Shop Manager Data Flow                            │
//! │                                                                         │
//! │  Screen operation (record_sale)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   shopfront-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  BlobStore   │  │   │
//! │  │   │   (pool.rs)   │    │ (sale.rs, …)  │    │  (blob.rs)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ SaleRepo      │    │ product/     │  │   │
//! │  │   │ + migrations  │    │ ProductRepo   │    │   *.png      │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │                                │                               │   │
//! │  │                        ┌───────▼────────┐                      │   │
//! │  │                        │ DocumentStore  │  (documents.rs)      │   │
//! │  │                        │ JSON bodies in │                      │   │
//! │  │                        │ one table      │                      │   │
//! │  │                        └────────────────┘                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite `documents` table + image files on disk                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`documents`] - The raw JSON document store
//! - [`blob`] - Filesystem blob store for product images
//! - [`error`] - Storage error types
//! - [`repository`] - Typed repositories (customer, product, sale, ...)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shopfront_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/shop.db")).await?;
//! let products = db.products().list().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod blob;
pub mod documents;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use blob::BlobStore;
pub use documents::{Document, DocumentStore, FieldFilter};
pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::customer::CustomerRepository;
pub use repository::lookup::LookupRepository;
pub use repository::product::ProductRepository;
pub use repository::sale::{SaleFilter, SaleRepository};
pub use repository::seller::SellerRepository;
