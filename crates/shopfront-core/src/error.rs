//! # Error Types
//!
//! Domain-specific error types for shopfront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopfront-core errors (this file)                                     │
//! │  ├── CoreError   - General domain errors                               │
//! │  └── FormErrors  - Field-level validation failures (validation module) │
//! │                                                                         │
//! │  shopfront-db errors (separate crate)                                  │
//! │  └── DbError     - Document / blob store failures                      │
//! │                                                                         │
//! │  shopfront-manager errors                                              │
//! │  └── ApiError    - What the screen layer surfaces                      │
//! │                                                                         │
//! │  Flow: FormErrors → CoreError → DbError → ApiError → caller            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in messages (entity, id, field)
//! 3. Errors are enum variants, never bare strings

use thiserror::Error;

use crate::validation::FormErrors;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A sale line references a product that cannot be found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Form validation failed (wraps the field-level errors).
    #[error("Validation failed: {0}")]
    Validation(#[from] FormErrors),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldError;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("p-42".to_string());
        assert_eq!(err.to_string(), "Product not found: p-42");
    }

    #[test]
    fn test_form_errors_convert_to_core_error() {
        let errors = FormErrors::from(vec![FieldError::required("paymentMethod")]);
        let core: CoreError = errors.into();
        assert!(matches!(core, CoreError::Validation(_)));
    }
}
