//! # Validation Module
//!
//! Input validation for line items before they reach the pricing engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form UI                                                      │
//! │  ├── Basic format checks (empty, non-numeric)                          │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (before compute / before POST)                   │
//! │  ├── validate_line_item → every violation, field by field              │
//! │  └── the engine itself never clamps or raises                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend                                                      │
//! │  └── authoritative re-validation on save                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`validate_line_item`] returns ALL violations, not just the first, so the
//! form can mark every offending field at once.

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{LineItem, Percent, Quantity};
use crate::{MAX_DOCUMENT_LINES, MAX_LINE_QUANTITY_MILLI, MAX_PERCENT_BPS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed `MAX_LINE_QUANTITY_MILLI`
pub fn validate_quantity(quantity: Quantity) -> ValidationResult<()> {
    if !quantity.is_positive() {
        return Err(ValidationError::MustBePositive { field: "quantity" });
    }

    if quantity.milli() > MAX_LINE_QUANTITY_MILLI {
        return Err(ValidationError::OutOfRange {
            field: "quantity",
            min: 1,
            max: MAX_LINE_QUANTITY_MILLI,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: free items exist)
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative { field: "unit price" });
    }

    Ok(())
}

/// Validates a percentage discount.
///
/// ## Rules
/// - Must be between 0% and 100% (0–10000 bps)
pub fn validate_discount(discount: Percent) -> ValidationResult<()> {
    if discount.bps() > MAX_PERCENT_BPS {
        return Err(ValidationError::OutOfRange {
            field: "discount",
            min: 0,
            max: MAX_PERCENT_BPS as i64,
        });
    }

    Ok(())
}

/// Validates a flat discount amount.
pub fn validate_discount_amount(amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "discount amount",
        });
    }

    Ok(())
}

/// Validates a per-line tax amount.
pub fn validate_tax_amount(amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustBeNonNegative { field: "tax amount" });
    }

    Ok(())
}

/// Validates a document's line count.
///
/// ## Rules
/// - Must not exceed `MAX_DOCUMENT_LINES`
pub fn validate_line_count(lines: usize) -> ValidationResult<()> {
    if lines > MAX_DOCUMENT_LINES {
        return Err(ValidationError::OutOfRange {
            field: "line items",
            min: 0,
            max: MAX_DOCUMENT_LINES as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Violation Collectors
// =============================================================================

/// Checks every field of a line item and returns ALL violations.
///
/// An empty vector means the line is safe to feed to
/// [`compute_line_total`](crate::pricing::compute_line_total).
///
/// ## Example
/// ```rust
/// use trado_core::money::Money;
/// use trado_core::types::{LineItem, ProductId, Quantity};
/// use trado_core::validation::validate_line_item;
///
/// let bad = LineItem::new(
///     ProductId::new(1),
///     Quantity::zero(),              // not positive
///     Money::from_mils(-100),        // negative price
/// );
/// assert_eq!(validate_line_item(&bad).len(), 2);
/// ```
pub fn validate_line_item(item: &LineItem) -> Vec<ValidationError> {
    let mut violations = Vec::new();

    if let Err(e) = validate_quantity(item.quantity) {
        violations.push(e);
    }
    if let Err(e) = validate_unit_price(item.unit_price) {
        violations.push(e);
    }
    if let Err(e) = validate_discount(item.discount) {
        violations.push(e);
    }
    if let Err(e) = validate_discount_amount(item.discount_amount) {
        violations.push(e);
    }
    if let Err(e) = validate_tax_amount(item.tax_amount) {
        violations.push(e);
    }

    violations
}

/// Validates a whole document: the line count plus every line.
pub fn validate_document(items: &[LineItem]) -> Vec<ValidationError> {
    let mut violations = Vec::new();

    if let Err(e) = validate_line_count(items.len()) {
        violations.push(e);
    }
    for item in items {
        violations.extend(validate_line_item(item));
    }

    violations
}

// =============================================================================
// Unit Tests
// =============================================================================
