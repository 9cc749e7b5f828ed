//! # shopfront-core: Pure Business Logic for Shopfront
//!
//! This crate is the **heart** of Shopfront, a storefront-management backend
//! for a small pod-product retailer. It contains all business logic as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Shopfront Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              shopfront-manager (Screen Layer)                   │   │
//! │  │   customers ── sellers ── products ── sales recording           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopfront-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │ Customer  │  │   Money   │  │ SaleTotals│  │  drafts   │  │   │
//! │  │   │ Product…  │  │  (cents)  │  │  formulas │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 shopfront-db (Storage Layer)                    │   │
//! │  │        SQLite document collections, blob store, migrations     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Customer, Product, Seller, Sale, lookups)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Sale total and profit formulas
//! - [`validation`] - Form drafts with field-level validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, always
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are cents (i64), never floats
//! 4. **Explicit Errors**: all errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use pricing::{compute_sale_totals, SaleTotals};
pub use types::*;
pub use validation::{
    CustomerDraft, FieldError, FormErrors, ProductDraft, SaleDraft, SaleLineDraft, SellerDraft,
};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum product lines allowed in a single sale.
///
/// Prevents runaway forms and keeps transactions reviewable on the sales
/// screen. Can be made configurable later.
pub const MAX_SALE_LINES: usize = 100;

/// Maximum purchase quantity of a single product line.
///
/// Prevents accidental over-ordering (e.g. typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;
