//! # Domain Types
//!
//! Core domain types for the Shopfront catalog.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │     Product     │   │      Sale       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  name, phone    │   │  amount (stock) │   │  price, profit  │       │
//! │  │  address…       │   │  prices, images │   │  line snapshots │       │
//! │  │  vehicle…       │   │  category + pod │   │  customer/seller│       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Lookups: Flavor / Manufacturer / Model: small reference documents     │
//! │  created ad hoc from the product form to populate select options.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every entity's `id` is a UUID v4 string generated by the store on insert.
//! The id lives *outside* the document body; repositories attach it on read.
//! All document fields serialize as camelCase JSON.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Customer
// =============================================================================

/// A retail customer. Flat record, no relations enforced.
///
/// The optional blocks mirror the registration form: address details for
/// deliveries, vehicle details for curbside handoff, plus a free-form
/// document number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique identifier (UUID v4), attached by the store.
    #[serde(default)]
    pub id: String,

    pub name: String,
    pub phone: String,

    /// Two-letter federal unit (state) code.
    pub federal_unit: String,
    pub city: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_reference: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_identifier: Option<String>,

    /// National document number (CPF or similar), free-form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
}

// =============================================================================
// Seller
// =============================================================================

/// A seller who receives sale payouts. Flat record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    #[serde(default)]
    pub id: String,

    pub name: String,

    /// Pix key used for payouts.
    pub pix: String,
    pub bank: String,
}

// =============================================================================
// Product
// =============================================================================

/// Product category. Only "Pod" is implemented; the enum exists so the
/// product form can stay category-aware when new categories land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Pod,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Pod => write!(f, "Pod"),
        }
    }
}

/// Category reference embedded in a product document (name + lookup id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
}

/// Category-specific fields for Pod products.
///
/// Flattened into the product document so the stored shape keeps the flat
/// field layout the screens expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodDetails {
    pub flavor: String,
    pub manufacturer: String,
    pub model: String,
    /// Puff count as entered on the form (kept as text).
    pub puffs: String,
}

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub id: String,

    pub name: String,

    /// Current stock count. Decremented by sale recording; the system does
    /// not stop this from going negative.
    pub amount: i64,

    /// Acquisition cost per unit, in cents.
    pub cost_price: Money,

    /// Sale price per unit, in cents.
    pub final_price: Money,

    /// Stored blob paths for product images.
    pub images: Vec<String>,

    pub category: CategoryRef,

    /// Category-specific fields, flattened into the document. `None`
    /// serializes to nothing; missing fields read back as `None`.
    #[serde(flatten)]
    pub pod: Option<PodDetails>,
}

impl Product {
    /// Stock remaining after selling `quantity` units. May be negative;
    /// callers decide whether that is worth warning about.
    pub fn stock_after_sale(&self, quantity: i64) -> i64 {
        self.amount - quantity
    }
}

/// A product image as submitted on the form.
///
/// New local files are uploaded to the blob store on submit and replaced by
/// their stored path; already-stored paths pass through unchanged on update.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    /// A freshly picked local file, not yet uploaded.
    New { file_name: String, bytes: Vec<u8> },
    /// A blob path from a previous upload.
    Stored(String),
}

// =============================================================================
// Sale
// =============================================================================

/// One product entry within a sale: a point-in-time snapshot, not a live
/// reference. Prices and name are frozen at recording time so the sale
/// history survives later product edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleLine {
    /// Product id the line was built from.
    pub id: String,
    /// Product name at sale time (frozen).
    pub name: String,
    /// Purchased quantity.
    pub amount: i64,
    /// Unit sale price at sale time (frozen).
    pub final_price: Money,
    /// Unit cost at sale time (frozen).
    pub cost_price: Money,
}

impl SaleLine {
    /// Line revenue: quantity × unit sale price.
    #[inline]
    pub fn revenue(&self) -> Money {
        self.final_price.multiply_quantity(self.amount)
    }

    /// Line cost: quantity × unit cost.
    #[inline]
    pub fn cost(&self) -> Money {
        self.cost_price.multiply_quantity(self.amount)
    }
}

/// Customer reference embedded in a sale document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRef {
    pub id: String,
    pub name: String,
}

/// Seller reference embedded in a sale document. Carries payout details so
/// the sale record is self-contained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub pix: String,
    #[serde(default)]
    pub bank: String,
}

/// A recorded sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    #[serde(default)]
    pub id: String,

    /// Total charged: Σ(line revenue) + additional − discount.
    pub price: Money,

    /// price − Σ(line cost).
    pub profit: Money,

    pub discount: Money,
    pub additional: Money,

    /// Free-form payment method as typed on the form.
    pub payment_method: String,

    /// Sale date as typed on the form (free-form text).
    pub date: String,

    /// Line snapshots.
    pub products: Vec<SaleLine>,

    pub customer: CustomerRef,
    pub seller: SellerRef,
}

// =============================================================================
// Lookups
// =============================================================================

/// The kind of a lookup document (one collection per kind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupKind {
    Flavor,
    Manufacturer,
    Model,
}

impl LookupKind {
    /// Collection holding documents of this kind.
    pub const fn collection(self) -> &'static str {
        match self {
            LookupKind::Flavor => "flavors",
            LookupKind::Manufacturer => "manufacturers",
            LookupKind::Model => "models",
        }
    }
}

/// A small reference record created ad hoc from the product form to populate
/// a selectable option list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupEntry {
    #[serde(default)]
    pub id: String,

    pub name: String,

    /// Models belong to a manufacturer (matched by name, as the form does).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pod_product() -> Product {
        Product {
            id: "p-1".into(),
            name: "Elf Bar BC5000".into(),
            amount: 12,
            cost_price: Money::from_cents(3000),
            final_price: Money::from_cents(5000),
            images: vec!["product/elfbar.png".into()],
            category: CategoryRef {
                id: "cat-pod".into(),
                name: "Pod".into(),
            },
            pod: Some(PodDetails {
                flavor: "Watermelon Ice".into(),
                manufacturer: "Elf Bar".into(),
                model: "BC5000".into(),
                puffs: "5000".into(),
            }),
        }
    }

    #[test]
    fn test_product_document_shape_is_flat_camel_case() {
        let value = serde_json::to_value(pod_product()).unwrap();

        // Shared fields
        assert_eq!(value["costPrice"], 3000);
        assert_eq!(value["finalPrice"], 5000);
        assert_eq!(value["category"]["name"], "Pod");

        // Pod fields flatten to the top level of the document
        assert_eq!(value["flavor"], "Watermelon Ice");
        assert_eq!(value["manufacturer"], "Elf Bar");
        assert_eq!(value["puffs"], "5000");
        assert!(value.get("pod").is_none());
    }

    #[test]
    fn test_product_roundtrip() {
        let product = pod_product();
        let value = serde_json::to_value(&product).unwrap();
        let back: Product = serde_json::from_value(value).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn test_customer_omits_empty_optionals() {
        let customer = Customer {
            id: "c-1".into(),
            name: "Ana".into(),
            phone: "11 99999-0000".into(),
            federal_unit: "SP".into(),
            city: "São Paulo".into(),
            neighborhood: None,
            street: None,
            address_number: None,
            address_reference: None,
            car_model: None,
            car_identifier: None,
            document: None,
        };

        let value = serde_json::to_value(customer).unwrap();
        assert!(value.get("street").is_none());
        assert!(value.get("carModel").is_none());
        assert_eq!(value["federalUnit"], "SP");
    }

    #[test]
    fn test_sale_line_revenue_and_cost() {
        let line = SaleLine {
            id: "p-1".into(),
            name: "Elf Bar BC5000".into(),
            amount: 2,
            final_price: Money::from_cents(5000),
            cost_price: Money::from_cents(3000),
        };

        assert_eq!(line.revenue().cents(), 10000);
        assert_eq!(line.cost().cents(), 6000);
    }

    #[test]
    fn test_lookup_kind_collections() {
        assert_eq!(LookupKind::Flavor.collection(), "flavors");
        assert_eq!(LookupKind::Manufacturer.collection(), "manufacturers");
        assert_eq!(LookupKind::Model.collection(), "models");
    }

    #[test]
    fn test_stock_after_sale_can_go_negative() {
        let product = pod_product();
        assert_eq!(product.stock_after_sale(5), 7);
        assert_eq!(product.stock_after_sale(20), -8);
    }
}
