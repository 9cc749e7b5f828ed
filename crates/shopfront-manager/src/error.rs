//! # API Error Type
//!
//! Unified error type for screen operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Error Flow in the Shop Manager                      │
//! │                                                                         │
//! │  UI                           Screen Layer                              │
//! │  ──                           ────────────                              │
//! │                                                                         │
//! │  record_sale(draft)                                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Screen Operation                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Form invalid? ──── FormErrors ("customer: select …") ──┐       │  │
//! │  │         │                                                │       │  │
//! │  │         ▼                                                ▼       │  │
//! │  │  Storage error? ─── DbError::QueryFailed ─────────── ApiError ──►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  The UI receives a machine-readable `code` plus a display `message`,   │
//! │  and for validation failures the per-field errors as well.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use shopfront_core::{CoreError, FieldError, FormErrors};
use shopfront_db::DbError;

/// Error returned from screen operations.
///
/// ## Serialization
/// This is what the UI receives when an operation fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "customer: select the customer",
///   "fields": [{"field": "customer", "message": "select the customer"}]
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Per-field validation errors, present for VALIDATION_ERROR only.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

/// Error codes for screen responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Storage operation failed
    DatabaseError,

    /// Image upload or resolution failed
    ImageError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts form validation failures to API errors, keeping the per-field
/// breakdown for inline display.
impl From<FormErrors> for ApiError {
    fn from(errors: FormErrors) -> Self {
        let message = errors.to_string();
        ApiError {
            code: ErrorCode::ValidationError,
            message,
            fields: errors.into_iter().collect(),
        }
    }
}

/// Converts storage errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { collection, id } => ApiError::not_found(&collection, &id),
            DbError::Serialization { collection, source } => {
                tracing::error!(collection = %collection, error = %source, "Document serialization failed");
                ApiError::new(ErrorCode::DatabaseError, "Stored document is malformed")
            }
            DbError::ConnectionFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::BlobNotFound { path } => {
                ApiError::new(ErrorCode::ImageError, format!("Image not found: {path}"))
            }
            DbError::BlobIo { path, source } => {
                tracing::error!(path = %path, error = %source, "Blob store I/O failed");
                ApiError::new(ErrorCode::ImageError, "Image storage failed")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal storage error: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_errors_keep_field_breakdown() {
        let errors = FormErrors::from(vec![
            FieldError::required("date"),
            FieldError::new("customer", "select the customer"),
        ]);

        let api: ApiError = errors.into();
        assert_eq!(api.code, ErrorCode::ValidationError);
        assert_eq!(api.fields.len(), 2);
        assert_eq!(api.fields[0].field, "date");
    }

    #[test]
    fn test_db_not_found_maps_to_not_found() {
        let api: ApiError = DbError::not_found("products", "p-1").into();
        assert_eq!(api.code, ErrorCode::NotFound);
        assert_eq!(api.message, "products not found: p-1");
    }

    #[test]
    fn test_core_product_not_found_maps_to_not_found() {
        let api: ApiError = CoreError::ProductNotFound("p-1".to_string()).into();
        assert_eq!(api.code, ErrorCode::NotFound);
        assert_eq!(api.message, "Product not found: p-1");
    }

    #[test]
    fn test_serializes_with_code_and_message() {
        let api = ApiError::validation("name: name is required");
        let json = serde_json::to_value(&api).unwrap();

        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "name: name is required");
    }
}
