//! # Domain Types
//!
//! Core domain types shared by every document kind in Trado.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │   OrderTotals   │   │    Percent      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  product_id     │   │  subtotal       │   │  bps (u32)      │       │
//! │  │  quantity       │   │  discount_total │   │  825 = 8.25%    │       │
//! │  │  unit_price     │   │  tax_total      │   └─────────────────┘       │
//! │  │  discount…      │   │  grand_total    │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │           ▲                                                             │
//! │           │ to_line_item()                                              │
//! │  ┌────────┴────────┬──────────────────┐                                │
//! │  │   QuoteLine     │    OrderLine     │    PurchaseLine                │
//! │  │  (% discount)   │  (% + snapshot)  │  (flat discount + line tax)    │
//! │  └─────────────────┴──────────────────┴────────────────────────────────│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## One Core, Many Document Kinds
//! Quotes, sales orders, production orders, and raw-material purchases each
//! attach a slightly different subset of pricing fields. Rather than one
//! dynamically-shaped record, each document kind has its own line type that
//! converts into the shared [`LineItem`] before any arithmetic happens.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Identifiers
// =============================================================================

/// Opaque integer key for a product or raw material.
///
/// The REST backend hands out plain integer ids; the newtype keeps them from
/// being mixed up with customer ids at compile time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct ProductId(i64);

impl ProductId {
    /// Wraps a raw backend id.
    #[inline]
    pub const fn new(id: i64) -> Self {
        ProductId(id)
    }

    /// Returns the raw id.
    #[inline]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque integer key for a customer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct CustomerId(i64);

impl CustomerId {
    /// Wraps a raw backend id.
    #[inline]
    pub const fn new(id: i64) -> Self {
        CustomerId(id)
    }

    /// Returns the raw id.
    #[inline]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Percent
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 5000 bps = 50% (a half-price discount)
///
/// Discount percentages are business input in the range 0–100%, i.e.
/// 0–10000 bps. The range is enforced by validation, not by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Percent(u32);

impl Percent {
    /// Creates a percentage from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Percent(bps)
    }

    /// Creates a percentage from a display value (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        Percent((pct * 100.0).round() as u32)
    }

    /// Returns the value in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the value as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero percent.
    #[inline]
    pub const fn zero() -> Self {
        Percent(0)
    }

    /// Checks if the percentage is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Percent {
    fn default() -> Self {
        Percent::zero()
    }
}

// =============================================================================
// Quantity
// =============================================================================

/// A quantity in milli-units (thousandths).
///
/// Raw-material lines are fractional ("2.500 kg of steel"), so quantities
/// use the same fixed-point discipline as [`Money`]: integers only,
/// three decimal places.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Quantity(i64);

impl Quantity {
    /// Creates a quantity from milli-units.
    ///
    /// ## Example
    /// ```rust
    /// use trado_core::types::Quantity;
    ///
    /// let q = Quantity::from_milli(2_500); // 2.5 units
    /// assert_eq!(q.milli(), 2_500);
    /// ```
    #[inline]
    pub const fn from_milli(milli: i64) -> Self {
        Quantity(milli)
    }

    /// Creates a quantity from whole units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Quantity(units * 1000)
    }

    /// Returns the quantity in milli-units.
    #[inline]
    pub const fn milli(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion.
    #[inline]
    pub const fn units_part(&self) -> i64 {
        self.0 / 1000
    }

    /// Returns the fractional portion in milli-units (always 0-999).
    #[inline]
    pub const fn milli_part(&self) -> i64 {
        (self.0 % 1000).abs()
    }

    /// Zero quantity.
    #[inline]
    pub const fn zero() -> Self {
        Quantity(0)
    }

    /// Checks if the quantity is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the quantity is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::zero()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:03}", sign, self.units_part().abs(), self.milli_part())
    }
}

// =============================================================================
// Unit Type
// =============================================================================

/// Which of a product's two configured prices applies to a line.
///
/// Products carry a base-unit price (piece, kg) and optionally a second-unit
/// price (box, carton). The cashier picks the unit when adding the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    /// The base selling unit (piece, kg, litre).
    Base,
    /// The optional second unit (box, carton).
    Second,
}

impl UnitType {
    /// Stable string form, used in error messages.
    pub const fn as_str(&self) -> &'static str {
        match self {
            UnitType::Base => "base",
            UnitType::Second => "second",
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One row of a transaction: a quantity of a single product at a price.
///
/// This is the shared pricing core. All four document kinds reduce to it
/// before any total is computed, so there is exactly one line-total formula
/// in the system:
///
/// ```text
/// line_total = quantity × unit_price × (1 − discount%) − discount_amount + tax_amount
/// ```
///
/// The engine does not validate; run
/// [`validate_line_item`](crate::validation::validate_line_item) first.
/// Negative discounts or quantities are a caller error, not auto-clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product or raw material being priced.
    pub product_id: ProductId,

    /// Units on this line (milli-units, may be fractional).
    pub quantity: Quantity,

    /// Price per unit at the time the line was created (frozen).
    pub unit_price: Money,

    /// Percentage discount on this line (quotes/orders).
    pub discount: Percent,

    /// Flat currency discount on this line (purchases).
    pub discount_amount: Money,

    /// Per-line tax amount (purchases).
    pub tax_amount: Money,
}

impl LineItem {
    /// Creates a line with no discounts and no tax.
    pub const fn new(product_id: ProductId, quantity: Quantity, unit_price: Money) -> Self {
        LineItem {
            product_id,
            quantity,
            unit_price,
            discount: Percent::zero(),
            discount_amount: Money::zero(),
            tax_amount: Money::zero(),
        }
    }

    /// Sets the percentage discount.
    pub const fn with_discount(mut self, discount: Percent) -> Self {
        self.discount = discount;
        self
    }

    /// Sets the flat currency discount.
    pub const fn with_discount_amount(mut self, amount: Money) -> Self {
        self.discount_amount = amount;
        self
    }

    /// Sets the per-line tax amount.
    pub const fn with_tax(mut self, tax: Money) -> Self {
        self.tax_amount = tax;
        self
    }

    /// The pre-discount, pre-tax extension: quantity × unit price.
    #[inline]
    pub fn gross(&self) -> Money {
        self.unit_price.extend(self.quantity)
    }
}

// =============================================================================
// Document-Kind Lines
// =============================================================================

/// A quote or production-order line: percentage discount only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    pub product_id: ProductId,
    pub quantity: Quantity,
    pub unit_price: Money,
    pub discount: Percent,
}

impl QuoteLine {
    /// Reduces to the shared pricing core.
    pub fn to_line_item(&self) -> LineItem {
        LineItem::new(self.product_id, self.quantity, self.unit_price)
            .with_discount(self.discount)
    }
}

/// A sales/task order line.
///
/// Carries a frozen product-name snapshot so the printed receipt shows what
/// the customer was actually sold, even if the product is renamed later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: ProductId,
    /// Product name at the time the line was added (frozen).
    pub name: String,
    pub quantity: Quantity,
    pub unit_price: Money,
    pub discount: Percent,
}

impl OrderLine {
    /// Reduces to the shared pricing core.
    pub fn to_line_item(&self) -> LineItem {
        LineItem::new(self.product_id, self.quantity, self.unit_price)
            .with_discount(self.discount)
    }
}

/// A raw-material purchase line: flat discount and per-line tax, no percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseLine {
    pub product_id: ProductId,
    pub quantity: Quantity,
    pub unit_price: Money,
    pub discount_amount: Money,
    pub tax_amount: Money,
}

impl PurchaseLine {
    /// Reduces to the shared pricing core.
    pub fn to_line_item(&self) -> LineItem {
        LineItem::new(self.product_id, self.quantity, self.unit_price)
            .with_discount_amount(self.discount_amount)
            .with_tax(self.tax_amount)
    }
}

// =============================================================================
// Document-Level Adjustments
// =============================================================================

/// Header-level adjustments applied once to a whole document.
///
/// These are flat amounts, not percentages: a header discount is a flat
/// subtraction and never compounds with per-line percentage discounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAdjustments {
    /// Discount applied once at the document level.
    pub discount: Money,

    /// Tax applied once at the document level.
    pub tax: Money,

    /// Extra charges (shipping, handling) added to the grand total.
    pub extra_charges: Money,
}

impl DocumentAdjustments {
    /// No adjustments at all.
    pub const fn none() -> Self {
        DocumentAdjustments {
            discount: Money::zero(),
            tax: Money::zero(),
            extra_charges: Money::zero(),
        }
    }
}

// =============================================================================
// Order Totals
// =============================================================================

/// Aggregated totals for a document.
///
/// ## Invariant
/// `grand_total = subtotal − discount_total + tax_total + extra_charges`.
/// Totals are always recomputed from the current line items; this crate never
/// caches a grand total independently of its inputs. Whether the caller
/// persists the computed figures is its own concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    /// Sum of quantity × unit price across lines (pre-discount, pre-tax).
    pub subtotal: Money,

    /// Per-line discounts plus the document-level discount.
    pub discount_total: Money,

    /// Per-line taxes plus the document-level tax.
    pub tax_total: Money,

    /// What the customer owes.
    pub grand_total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
