//! # Error Types
//!
//! Domain-specific error types for trado-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  trado-core errors (this file)                                         │
//! │  ├── CoreError        - Domain failures (lookup, lifecycle)            │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → API layer → user-facing dialog    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, field name, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::types::{ProductId, UnitType};

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These represent business rule violations or failed lookups. The silent
/// fallback-to-zero the legacy pages used for unknown products is gone on
/// purpose: callers now have to decide on a policy (error, default, or
/// prompt) when a lookup misses.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the supplied price list.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The product exists but has no price configured for the requested unit.
    ///
    /// ## When This Occurs
    /// - A line asks for the second (box) unit of a product that only has a
    ///   base-unit price configured
    #[error("Product {product_id} has no {unit_type} unit price")]
    MissingUnitPrice {
        product_id: ProductId,
        unit_type: UnitType,
    },

    /// A document lifecycle move that the state machine forbids.
    ///
    /// ## When This Occurs
    /// - Converting a quote that was never accepted
    /// - Processing a return that was never approved
    #[error("Cannot transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level input validation errors.
///
/// These occur when user input doesn't meet requirements. They are produced
/// by [`crate::validation`] so the UI can surface them next to the offending
/// field before anything is submitted to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: &'static str },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },
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

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound(ProductId::new(42));
        assert_eq!(err.to_string(), "Product not found: 42");

        let err = CoreError::MissingUnitPrice {
            product_id: ProductId::new(7),
            unit_type: UnitType::Second,
        };
        assert_eq!(err.to_string(), "Product 7 has no second unit price");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive { field: "quantity" };
        assert_eq!(err.to_string(), "quantity must be positive");

        let err = ValidationError::OutOfRange {
            field: "discount",
            min: 0,
            max: 10_000,
        };
        assert_eq!(err.to_string(), "discount must be between 0 and 10000");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive { field: "quantity" };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
