//! # Form Validation
//!
//! Field-level validation for the form drafts the screens submit.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: the form itself                                              │
//! │  ├── input widget constraints (min/max attributes)                     │
//! │  └── advisory only, nothing downstream trusts it                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── every draft collects ALL field errors before rejecting            │
//! │  └── errors carry the offending field name for inline display          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: storage                                                      │
//! │  └── documents are schemaless; no constraints live there               │
//! │                                                                         │
//! │  Note what is deliberately absent: stock sufficiency is NOT checked    │
//! │  anywhere. A sale line can exceed current stock and will be accepted.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::Serialize;

use crate::money::Money;
use crate::types::{
    Category, Customer, CustomerRef, ImageSource, Seller, SellerRef,
};
use crate::{MAX_LINE_QUANTITY, MAX_SALE_LINES};

// =============================================================================
// Field Errors
// =============================================================================

/// One validation failure, tied to the offending form field.
///
/// `field` uses the document's camelCase spelling so the screen can match
/// errors to inputs directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// A required field is missing or empty.
    pub fn required(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("{field} is required");
        FieldError { field, message }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All field errors for one form submission.
///
/// Drafts collect every failure instead of stopping at the first so the
/// screen can show messages next to each offending input at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormErrors(Vec<FieldError>);

impl std::error::Error for FormErrors {}

impl FormErrors {
    pub fn new() -> Self {
        FormErrors(Vec::new())
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    /// Turns the accumulated errors into a result.
    pub fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Default for FormErrors {
    fn default() -> Self {
        FormErrors::new()
    }
}

impl From<Vec<FieldError>> for FormErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        FormErrors(errors)
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{joined}")
    }
}

impl IntoIterator for FormErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// =============================================================================
// Scalar Validators
// =============================================================================

/// Checks a required text input, pushing a field error when blank.
fn check_required_text(errors: &mut FormErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::required(field));
    }
}

/// Checks a purchase quantity: positive and within the sanity cap.
fn check_quantity(errors: &mut FormErrors, field: &str, qty: i64) {
    if qty <= 0 {
        errors.push(FieldError::new(field, "quantity must be positive"));
    } else if qty > MAX_LINE_QUANTITY {
        errors.push(FieldError::new(
            field,
            format!("quantity cannot exceed {MAX_LINE_QUANTITY}"),
        ));
    }
}

/// Checks a price input: negative prices are always a typo.
fn check_price(errors: &mut FormErrors, field: &str, price: Money) {
    if price.is_negative() {
        errors.push(FieldError::new(field, "must not be negative"));
    }
}

// =============================================================================
// Customer Form
// =============================================================================

/// Customer form payload. Required: name, phone, federal unit, city.
#[derive(Debug, Clone, Default)]
pub struct CustomerDraft {
    pub name: String,
    pub phone: String,
    pub federal_unit: String,
    pub city: String,
    pub neighborhood: Option<String>,
    pub street: Option<String>,
    pub address_number: Option<String>,
    pub address_reference: Option<String>,
    pub car_model: Option<String>,
    pub car_identifier: Option<String>,
    pub document: Option<String>,
}

impl CustomerDraft {
    /// Validates the draft and builds the customer entity (id unset; the
    /// store assigns it on insert).
    pub fn validate(self) -> Result<Customer, FormErrors> {
        let mut errors = FormErrors::new();

        check_required_text(&mut errors, "name", &self.name);
        check_required_text(&mut errors, "phone", &self.phone);
        check_required_text(&mut errors, "federalUnit", &self.federal_unit);
        check_required_text(&mut errors, "city", &self.city);

        errors.into_result()?;

        Ok(Customer {
            id: String::new(),
            name: self.name,
            phone: self.phone,
            federal_unit: self.federal_unit,
            city: self.city,
            neighborhood: self.neighborhood,
            street: self.street,
            address_number: self.address_number,
            address_reference: self.address_reference,
            car_model: self.car_model,
            car_identifier: self.car_identifier,
            document: self.document,
        })
    }
}

// =============================================================================
// Seller Form
// =============================================================================

/// Seller form payload. All fields required.
#[derive(Debug, Clone, Default)]
pub struct SellerDraft {
    pub name: String,
    pub pix: String,
    pub bank: String,
}

impl SellerDraft {
    pub fn validate(self) -> Result<Seller, FormErrors> {
        let mut errors = FormErrors::new();

        check_required_text(&mut errors, "name", &self.name);
        check_required_text(&mut errors, "pix", &self.pix);
        check_required_text(&mut errors, "bank", &self.bank);

        errors.into_result()?;

        Ok(Seller {
            id: String::new(),
            name: self.name,
            pix: self.pix,
            bank: self.bank,
        })
    }
}

// =============================================================================
// Product Form
// =============================================================================

/// Product form payload: shared fields plus category-specific ones, selected
/// by the category value. Only Pod is implemented.
///
/// Images stay unresolved here (`ImageSource`); the screen layer uploads new
/// files and swaps in stored paths after validation passes.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub amount: i64,
    pub cost_price: Money,
    pub final_price: Money,
    pub images: Vec<ImageSource>,
    pub category: Category,

    // Pod-specific inputs (required while Pod is the only category).
    pub manufacturer: String,
    pub model: String,
    pub puffs: String,
    pub flavor: String,
}

impl ProductDraft {
    /// Validates the draft. Does NOT build the entity; image resolution and
    /// lookup creation happen in the screen layer first.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();

        check_required_text(&mut errors, "name", &self.name);

        if self.amount < 0 {
            errors.push(FieldError::new("amount", "must not be negative"));
        }
        check_price(&mut errors, "costPrice", self.cost_price);
        check_price(&mut errors, "finalPrice", self.final_price);

        if self.images.is_empty() {
            errors.push(FieldError::new("images", "add at least one product image"));
        }

        match self.category {
            Category::Pod => {
                check_required_text(&mut errors, "manufacturer", &self.manufacturer);
                check_required_text(&mut errors, "puffs", &self.puffs);
                check_required_text(&mut errors, "flavor", &self.flavor);
                // Model is selectable only after a manufacturer exists and
                // may legitimately stay blank.
            }
        }

        errors.into_result()
    }
}

// =============================================================================
// Sale Form
// =============================================================================

/// One product line as submitted: a product reference plus the purchased
/// quantity. Prices are snapshotted from the live product during recording.
#[derive(Debug, Clone)]
pub struct SaleLineDraft {
    pub product_id: String,
    pub purchase_amount: i64,
}

/// Sale form payload.
#[derive(Debug, Clone, Default)]
pub struct SaleDraft {
    pub customer: Option<CustomerRef>,
    pub seller: Option<SellerRef>,
    pub payment_method: String,
    pub date: String,
    pub discount: Money,
    pub additional: Money,
    pub lines: Vec<SaleLineDraft>,
}

impl SaleDraft {
    /// Validates required fields, collecting every failure.
    ///
    /// Deliberately absent: any stock-sufficiency check. Lines exceeding
    /// current stock pass validation; recording logs a warning instead.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();

        if self.customer.is_none() {
            errors.push(FieldError::new("customer", "select the customer"));
        }
        if self.seller.is_none() {
            errors.push(FieldError::new("seller", "select the seller"));
        }
        check_required_text(&mut errors, "paymentMethod", &self.payment_method);
        check_required_text(&mut errors, "date", &self.date);

        if self.lines.is_empty() {
            errors.push(FieldError::new("products", "select at least one product"));
        } else if self.lines.len() > MAX_SALE_LINES {
            errors.push(FieldError::new(
                "products",
                format!("a sale cannot have more than {MAX_SALE_LINES} lines"),
            ));
        }

        for (index, line) in self.lines.iter().enumerate() {
            let field = format!("products.{index}.purchaseAmount");
            check_quantity(&mut errors, &field, line.purchase_amount);
        }

        errors.into_result()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
