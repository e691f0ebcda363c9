//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Our currency is displayed to THREE decimals ($12.345), and a single   │
//! │  purchase order can carry thousands of lines. Accumulating f64         │
//! │  round-off across those sums would drift past the third decimal.      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Mils (thousandths of the major unit)            │
//! │    $12.345 = 12345 mils. Sums are exact, always.                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use trado_core::money::Money;
//!
//! // Create from mils (preferred)
//! let price = Money::from_mils(12_345); // $12.345
//!
//! // Arithmetic operations
//! let doubled = price * 2;                       // $24.690
//! let total = price + Money::from_mils(5_000);   // $17.345
//!
//! // NEVER do this:
//! // let bad = Money::from_float(12.345); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::{Percent, Quantity};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in mils (thousandths of the major unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds, discounts
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Three decimals**: The business prices to the mil (e.g., `$12.345`)
///
/// ## Where Money Flows
/// ```text
/// Product default / special price ──► LineItem.unit_price ──► line total
///                                                                  │
///            OrderTotals.subtotal ◄── aggregation ◄────────────────┘
///                     │
///                     └──► grand total ──► payment status derivation
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from mils (thousandths of the major unit).
    ///
    /// ## Example
    /// ```rust
    /// use trado_core::money::Money;
    ///
    /// let price = Money::from_mils(12_345); // Represents $12.345
    /// assert_eq!(price.mils(), 12_345);
    /// ```
    #[inline]
    pub const fn from_mils(mils: i64) -> Self {
        Money(mils)
    }

    /// Creates a Money value from major and minor units (dollars and mils).
    ///
    /// ## Example
    /// ```rust
    /// use trado_core::money::Money;
    ///
    /// let price = Money::from_major_minor(12, 345); // $12.345
    /// assert_eq!(price.mils(), 12_345);
    ///
    /// let refund = Money::from_major_minor(-5, 500); // -$5.500
    /// assert_eq!(refund.mils(), -5_500);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 500)` = -$5.500, not -$4.500
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 1000 - minor)
        } else {
            Money(major * 1000 + minor)
        }
    }

    /// Returns the value in mils (smallest tracked unit).
    #[inline]
    pub const fn mils(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major_part(&self) -> i64 {
        self.0 / 1000
    }

    /// Returns the minor unit portion in mils (always 0-999).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 1000).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Extends a unit price by a (possibly fractional) quantity.
    ///
    /// Quantities are tracked in milli-units so raw-material lines like
    /// "2.500 kg" stay exact. The product is computed in i128 to prevent
    /// overflow, then rounded half-up back to mils.
    ///
    /// ## Example
    /// ```rust
    /// use trado_core::money::Money;
    /// use trado_core::types::Quantity;
    ///
    /// let unit_price = Money::from_mils(10_000);      // $10.000
    /// let gross = unit_price.extend(Quantity::from_milli(2_500)); // × 2.5
    /// assert_eq!(gross.mils(), 25_000);               // $25.000
    /// ```
    pub fn extend(&self, quantity: Quantity) -> Money {
        // price_mils × qty_milli / 1000, rounded half-up (+500)
        let gross = (self.0 as i128 * quantity.milli() as i128 + 500) / 1000;
        Money::from_mils(gross as i64)
    }

    /// Returns the given percentage of this amount, rounded half-up.
    ///
    /// ## Example
    /// ```rust
    /// use trado_core::money::Money;
    /// use trado_core::types::Percent;
    ///
    /// let gross = Money::from_mils(5_000);        // $5.000
    /// let discount = gross.percent_of(Percent::from_bps(5_000)); // 50%
    /// assert_eq!(discount.mils(), 2_500);         // $2.500
    /// ```
    ///
    /// ## Implementation
    /// Integer math: `(amount × bps + 5000) / 10000`. The +5000 provides
    /// rounding (5000/10000 = 0.5). i128 prevents overflow on large amounts.
    pub fn percent_of(&self, rate: Percent) -> Money {
        let amount = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_mils(amount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Use frontend formatting for actual UI display
/// to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:03}",
            sign,
            self.major_part().abs(),
            self.minor_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for whole-unit quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mils() {
        let money = Money::from_mils(12_345);
        assert_eq!(money.mils(), 12_345);
        assert_eq!(money.major_part(), 12);
        assert_eq!(money.minor_part(), 345);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(12, 345);
        assert_eq!(money.mils(), 12_345);

        let negative = Money::from_major_minor(-5, 500);
        assert_eq!(negative.mils(), -5_500);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_mils(12_345)), "$12.345");
        assert_eq!(format!("{}", Money::from_mils(5_000)), "$5.000");
        assert_eq!(format!("{}", Money::from_mils(-5_500)), "-$5.500");
        assert_eq!(format!("{}", Money::from_mils(0)), "$0.000");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_mils(10_000);
        let b = Money::from_mils(5_000);

        assert_eq!((a + b).mils(), 15_000);
        assert_eq!((a - b).mils(), 5_000);
        let result: Money = a * 3;
        assert_eq!(result.mils(), 30_000);
    }

    #[test]
    fn test_extend_whole_quantity() {
        let unit_price = Money::from_mils(2_990); // $2.990
        let gross = unit_price.extend(Quantity::from_units(3));
        assert_eq!(gross.mils(), 8_970); // $8.970
    }

    #[test]
    fn test_extend_fractional_quantity() {
        // 2.5 kg at $10.000/kg = $25.000
        let unit_price = Money::from_mils(10_000);
        let gross = unit_price.extend(Quantity::from_milli(2_500));
        assert_eq!(gross.mils(), 25_000);
    }

    #[test]
    fn test_extend_rounds_half_up() {
        // 0.5 × $1.001 = 500.5 mils → rounds up to 501
        let price = Money::from_mils(1_001);
        let gross = price.extend(Quantity::from_milli(500));
        assert_eq!(gross.mils(), 501);
    }

    #[test]
    fn test_percent_of() {
        let gross = Money::from_mils(100_000); // $100.000
        let discount = gross.percent_of(Percent::from_bps(1_000)); // 10%
        assert_eq!(discount.mils(), 10_000); // $10.000
    }

    #[test]
    fn test_percent_of_with_rounding() {
        // $10.001 at 8.25% = 825.0825 mils → 825
        let amount = Money::from_mils(10_001);
        let share = amount.percent_of(Percent::from_bps(825));
        assert_eq!(share.mils(), 825);

        // $10.000 at 8.25% = 825 mils exactly
        let amount = Money::from_mils(10_000);
        assert_eq!(amount.percent_of(Percent::from_bps(825)).mils(), 825);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_mils(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
        assert!(!positive.is_negative());

        let negative = Money::from_mils(-100);
        assert!(!negative.is_zero());
        assert!(!negative.is_positive());
        assert!(negative.is_negative());
    }

    /// Critical test: document the precision behavior of a three-way split.
    #[test]
    fn test_division_precision_loss_documented() {
        let ten = Money::from_mils(10_000);
        let one_third = Money::from_mils(10_000 / 3); // 3333 mils
        let reconstructed: Money = one_third * 3; // 9999 mils

        // One mil is intentionally lost; callers who split amounts must
        // distribute the remainder explicitly.
        assert_eq!(reconstructed.mils(), 9_999);
        assert_eq!((ten - reconstructed).mils(), 1);
    }
}
