//! # Error Types
//!
//! Domain-specific error types for stockpile-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  stockpile-core errors (this file)                                  │
//! │  ├── CoreError        - general domain errors                       │
//! │  └── ValidationError  - input validation failures                   │
//! │                                                                     │
//! │  stockpile-db errors (separate crate)                               │
//! │  └── DbError          - database operation failures                 │
//! │                                                                     │
//! │  API errors (apps/api)                                              │
//! │  └── ApiError         - what HTTP clients see (serialized)          │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → DbError → ApiError → client    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Inventory item cannot be found.
    #[error("Inventory item not found: {0}")]
    ItemNotFound(String),

    /// Supplier cannot be found.
    #[error("Supplier not found: {0}")]
    SupplierNotFound(String),

    /// Unrecognized report period (must be daily, weekly or monthly).
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// Unrecognized item category.
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Unrecognized stock status filter.
    #[error("Invalid stock status: {0}")]
    InvalidStockStatus(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements; they are
/// raised before any business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. malformed email or SKU).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g. duplicate SKU).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidPeriod("yearly".to_string());
        assert_eq!(err.to_string(), "Invalid period: yearly");

        let err = CoreError::ItemNotFound("abc-123".to_string());
        assert_eq!(err.to_string(), "Inventory item not found: abc-123");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "sku".to_string(),
        };
        assert_eq!(err.to_string(), "sku is required");

        let err = ValidationError::Duplicate {
            field: "sku".to_string(),
            value: "A1".to_string(),
        };
        assert_eq!(err.to_string(), "sku 'A1' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
