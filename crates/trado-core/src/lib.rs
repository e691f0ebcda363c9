//! # trado-core: Pure Business Logic for Trado
//!
//! This crate is the **heart** of Trado's pricing. Every page of the
//! business-management suite that shows a monetary figure (quotes, sales
//! orders, production orders, raw-material purchases, returns) computes it
//! through this crate.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Trado Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Web Frontend                                │   │
//! │  │   Quote UI ──► Order UI ──► Purchase UI ──► Print Preview      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ REST (JSON)                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ trado-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │  ┌──────────┐ ┌──────────┐ ┌──────────────┐ ┌──────────────┐  │   │
//! │  │  │  money   │ │ pricing  │ │special_price │ │  validation  │  │   │
//! │  │  │  Money   │ │ totals   │ │  overrides   │ │    rules     │  │   │
//! │  │  │ Percent  │ │ engine   │ │  resolution  │ │    checks    │  │   │
//! │  │  └──────────┘ └──────────┘ └──────────────┘ └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │                   persistence / print rendering                        │
//! │                   (external collaborators, not here)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, document-kind lines, totals)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - The line-total and aggregate-totals engine
//! - [`special_price`] - Customer price-override resolution
//! - [`status`] - Payment-status derivation and document lifecycles
//! - [`validation`] - Field-level input validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in mils (i64), three decimals
//! 4. **Derived, Never Stored**: totals and payment status are recomputed
//!    from their inputs, so persisted copies can never drift
//!
//! ## Example Usage
//!
//! ```rust
//! use trado_core::money::Money;
//! use trado_core::pricing::compute_aggregate;
//! use trado_core::status::{derive_payment_status, PaymentStatus};
//! use trado_core::types::{DocumentAdjustments, LineItem, Percent, ProductId, Quantity};
//!
//! let lines = [
//!     LineItem::new(ProductId::new(1), Quantity::from_units(2), Money::from_mils(10_000)),
//!     LineItem::new(ProductId::new(2), Quantity::from_units(1), Money::from_mils(5_000))
//!         .with_discount(Percent::from_bps(5_000)),
//! ];
//!
//! let totals = compute_aggregate(&lines, &DocumentAdjustments::none());
//! assert_eq!(totals.grand_total.mils(), 22_500); // $22.500
//!
//! let status = derive_payment_status(totals.grand_total, Money::zero());
//! assert_eq!(status, PaymentStatus::Unpaid);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod special_price;
pub mod status;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use trado_core::Money` instead of
// `use trado_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{compute_aggregate, compute_line_total};
pub use special_price::{
    price_differs, resolve_unit_price, ProductPrices, ResolvedPrice, SpecialPrice,
    SpecialPriceBook,
};
pub use status::{derive_payment_status, PaymentStatus, QuoteStatus, ReturnStatus};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum line items allowed on a single document.
///
/// ## Business Reason
/// The largest documents observed in production are multi-thousand-line
/// purchase orders; 10,000 is comfortably above that while keeping the
/// client-side recompute instant.
pub const MAX_DOCUMENT_LINES: usize = 10_000;

/// Maximum quantity of a single line, in milli-units (999,999.999 units).
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 100000 instead of 100).
pub const MAX_LINE_QUANTITY_MILLI: i64 = 999_999_999;

/// Maximum percentage value in basis points (100%).
pub const MAX_PERCENT_BPS: u32 = 10_000;
