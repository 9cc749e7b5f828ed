//! # Screens Module
//!
//! One type per management screen, each wrapping the storage handles with
//! the operations that screen performs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Screen Layer                                     │
//! │                                                                         │
//! │  CustomersScreen   list / create / update / delete                     │
//! │  SellersScreen     list / create / update / delete                     │
//! │  ProductsScreen    list / create / update / delete                     │
//! │                    + image upload, lookup options                      │
//! │  SalesScreen       filtered history + totals, record / update / delete │
//! │                                                                         │
//! │  Every mutation returns the refreshed listing, so the UI replaces     │
//! │  its state in one step instead of patching it.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod customers;
pub mod products;
pub mod sales;
pub mod sellers;

pub use customers::CustomersScreen;
pub use products::ProductsScreen;
pub use sales::{SalesOverview, SalesScreen};
pub use sellers::SellersScreen;
