//! # Pricing Engine
//!
//! The one place line totals and document totals are computed.
//!
//! ## Order of Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Totals Calculation Pipeline                           │
//! │                                                                         │
//! │  For each line:                                                         │
//! │    gross     = quantity × unit_price                                   │
//! │    line total= gross − gross × discount% − discount_amount + tax       │
//! │                                                                         │
//! │  For the document:                                                      │
//! │    subtotal       = Σ gross                                            │
//! │    discount_total = Σ line discounts + header discount                 │
//! │    tax_total      = Σ line taxes     + header tax                      │
//! │    grand_total    = subtotal − discount_total + tax_total              │
//! │                     + extra charges                                    │
//! │                                                                         │
//! │  Per-line and header adjustments are ADDITIVE, never compounding:      │
//! │  the header discount is a flat subtraction applied exactly once, so    │
//! │  round-off is not accumulated across two percentage passes.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Purity
//! No validation, no clamping, no I/O. Callers validate first (see
//! [`crate::validation`]); a discount larger than the gross legitimately
//! produces a negative figure here so the caller can surface it as an error.

use crate::money::Money;
use crate::types::{DocumentAdjustments, LineItem, OrderTotals};

/// Computes the total for a single line.
///
/// `quantity × unit_price × (1 − discount%) − discount_amount + tax_amount`
///
/// ## Example
/// ```rust
/// use trado_core::pricing::compute_line_total;
/// use trado_core::types::{LineItem, Percent, ProductId, Quantity};
/// use trado_core::money::Money;
///
/// // 1 × $5.000 at 50% off = $2.500
/// let line = LineItem::new(
///     ProductId::new(1),
///     Quantity::from_units(1),
///     Money::from_mils(5_000),
/// )
/// .with_discount(Percent::from_bps(5_000));
///
/// assert_eq!(compute_line_total(&line).mils(), 2_500);
/// ```
pub fn compute_line_total(item: &LineItem) -> Money {
    let gross = item.gross();
    gross - gross.percent_of(item.discount) - item.discount_amount + item.tax_amount
}

/// Aggregates a document's lines and header adjustments into [`OrderTotals`].
///
/// Per-line discounts and taxes are summed first; the header discount, tax,
/// and extra charges are then applied exactly once. The subtotal is the
/// pre-discount, pre-tax extension sum, which is what the document header
/// displays above the deduction rows.
///
/// ## Example
/// ```rust
/// use trado_core::pricing::compute_aggregate;
/// use trado_core::types::{DocumentAdjustments, LineItem, ProductId, Quantity};
/// use trado_core::money::Money;
///
/// let lines = [LineItem::new(
///     ProductId::new(1),
///     Quantity::from_units(2),
///     Money::from_mils(10_000),
/// )];
/// let totals = compute_aggregate(&lines, &DocumentAdjustments::none());
/// assert_eq!(totals.subtotal.mils(), 20_000);
/// assert_eq!(totals.grand_total.mils(), 20_000);
/// ```
pub fn compute_aggregate(items: &[LineItem], adjustments: &DocumentAdjustments) -> OrderTotals {
    let mut subtotal = Money::zero();
    let mut discount_total = Money::zero();
    let mut tax_total = Money::zero();

    for item in items {
        let gross = item.gross();
        subtotal += gross;
        discount_total += gross.percent_of(item.discount) + item.discount_amount;
        tax_total += item.tax_amount;
    }

    discount_total += adjustments.discount;
    tax_total += adjustments.tax;

    OrderTotals {
        subtotal,
        discount_total,
        tax_total,
        grand_total: subtotal - discount_total + tax_total + adjustments.extra_charges,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Percent, ProductId, Quantity};

    fn line(qty_units: i64, price_mils: i64) -> LineItem {
        LineItem::new(
            ProductId::new(1),
            Quantity::from_units(qty_units),
            Money::from_mils(price_mils),
        )
    }

    // ==================== Line Total Tests ====================

    #[test]
    fn test_line_total_no_adjustments_is_exact_extension() {
        // qty × price exactly, when discount and tax are zero
        assert_eq!(compute_line_total(&line(2, 10_000)).mils(), 20_000);
        assert_eq!(compute_line_total(&line(7, 1_234)).mils(), 8_638);
    }

    #[test]
    fn test_line_total_with_percent_discount() {
        // 1 × $5.000 at 50% = $2.500
        let item = line(1, 5_000).with_discount(Percent::from_bps(5_000));
        assert_eq!(compute_line_total(&item).mils(), 2_500);
    }

    #[test]
    fn test_line_total_with_flat_discount_and_tax() {
        // 3 × $2.000 − $0.500 + $1.000 = $6.500 (purchase-style line)
        let item = line(3, 2_000)
            .with_discount_amount(Money::from_mils(500))
            .with_tax(Money::from_mils(1_000));
        assert_eq!(compute_line_total(&item).mils(), 6_500);
    }

    #[test]
    fn test_line_total_fractional_quantity() {
        // 2.5 kg × $4.000/kg at 10% = $10.000 − $1.000 = $9.000
        let item = LineItem::new(
            ProductId::new(9),
            Quantity::from_milli(2_500),
            Money::from_mils(4_000),
        )
        .with_discount(Percent::from_bps(1_000));
        assert_eq!(compute_line_total(&item).mils(), 9_000);
    }

    #[test]
    fn test_line_total_monotonic_in_inputs() {
        let base = line(2, 10_000).with_discount(Percent::from_bps(1_000));

        // more quantity never lowers the total
        let more_qty = LineItem { quantity: Quantity::from_units(3), ..base };
        assert!(compute_line_total(&more_qty) >= compute_line_total(&base));

        // higher price never lowers the total
        let pricier = LineItem { unit_price: Money::from_mils(12_000), ..base };
        assert!(compute_line_total(&pricier) >= compute_line_total(&base));

        // a deeper discount never raises the total
        let deeper = base.with_discount(Percent::from_bps(2_000));
        assert!(compute_line_total(&deeper) <= compute_line_total(&base));
    }

    #[test]
    fn test_line_total_overdiscount_goes_negative() {
        // Not clamped: validation is the caller's job, and a negative figure
        // is how the UI learns the discount exceeds the line value.
        let item = line(1, 1_000).with_discount_amount(Money::from_mils(1_500));
        assert_eq!(compute_line_total(&item).mils(), -500);
    }

    // ==================== Aggregate Tests ====================

    #[test]
    fn test_aggregate_empty_is_all_zero() {
        let totals = compute_aggregate(&[], &DocumentAdjustments::none());
        assert_eq!(totals, OrderTotals::default());
    }

    #[test]
    fn test_aggregate_reference_scenario() {
        // Three lines: 2×$10, 1×$5 at 50%, 3×$2 with $1 line tax.
        // Line totals: $20.000, $2.500, $7.000.
        // Subtotal (pre-discount, pre-tax) = $31.000,
        // discounts $2.500, taxes $1.000, grand total $29.500.
        let items = [
            line(2, 10_000),
            line(1, 5_000).with_discount(Percent::from_bps(5_000)),
            line(3, 2_000).with_tax(Money::from_mils(1_000)),
        ];
        let totals = compute_aggregate(&items, &DocumentAdjustments::none());

        assert_eq!(totals.subtotal.mils(), 31_000);
        assert_eq!(totals.discount_total.mils(), 2_500);
        assert_eq!(totals.tax_total.mils(), 1_000);
        assert_eq!(totals.grand_total.mils(), 29_500);
    }

    #[test]
    fn test_aggregate_header_adjustments_applied_once() {
        // $100 of lines, header: −$5 discount, +$2 tax, +$3 shipping
        let items = [line(10, 10_000)];
        let adjustments = DocumentAdjustments {
            discount: Money::from_mils(5_000),
            tax: Money::from_mils(2_000),
            extra_charges: Money::from_mils(3_000),
        };
        let totals = compute_aggregate(&items, &adjustments);

        assert_eq!(totals.subtotal.mils(), 100_000);
        assert_eq!(totals.discount_total.mils(), 5_000);
        assert_eq!(totals.tax_total.mils(), 2_000);
        assert_eq!(totals.grand_total.mils(), 100_000);
    }

    #[test]
    fn test_aggregate_header_and_line_discounts_are_additive() {
        // 10% line discount on $100 plus $10 header discount = $20 off,
        // not 10% of the already-discounted figure.
        let items = [line(10, 10_000).with_discount(Percent::from_bps(1_000))];
        let adjustments = DocumentAdjustments {
            discount: Money::from_mils(10_000),
            ..DocumentAdjustments::none()
        };
        let totals = compute_aggregate(&items, &adjustments);

        assert_eq!(totals.discount_total.mils(), 20_000);
        assert_eq!(totals.grand_total.mils(), 80_000);
    }

    #[test]
    fn test_aggregate_additive_under_concatenation() {
        // Summing the subtotal/discount/tax fields of two aggregations must
        // equal aggregating the concatenated list. (Grand totals differ in
        // general because header adjustments are supplied once.)
        let a = [
            line(2, 10_000),
            line(1, 5_000).with_discount(Percent::from_bps(5_000)),
        ];
        let b = [line(3, 2_000).with_tax(Money::from_mils(1_000))];
        let all: Vec<LineItem> = a.iter().chain(b.iter()).copied().collect();

        let none = DocumentAdjustments::none();
        let ta = compute_aggregate(&a, &none);
        let tb = compute_aggregate(&b, &none);
        let tall = compute_aggregate(&all, &none);

        assert_eq!(ta.subtotal + tb.subtotal, tall.subtotal);
        assert_eq!(ta.discount_total + tb.discount_total, tall.discount_total);
        assert_eq!(ta.tax_total + tb.tax_total, tall.tax_total);
    }

    #[test]
    fn test_aggregate_grand_total_matches_line_total_sum() {
        // With no header adjustments, the grand total is the plain sum of
        // per-line totals.
        let items = [
            line(2, 10_000),
            line(1, 5_000).with_discount(Percent::from_bps(5_000)),
            line(3, 2_000).with_tax(Money::from_mils(1_000)),
        ];
        let summed: Money = items
            .iter()
            .fold(Money::zero(), |acc, i| acc + compute_line_total(i));
        let totals = compute_aggregate(&items, &DocumentAdjustments::none());
        assert_eq!(totals.grand_total, summed);
    }

    #[test]
    fn test_aggregate_many_lines_stays_exact() {
        // 10,000 identical lines: integer mils cannot drift.
        let items = vec![line(1, 1_234).with_discount(Percent::from_bps(825)); 10_000];
        let totals = compute_aggregate(&items, &DocumentAdjustments::none());

        assert_eq!(totals.subtotal.mils(), 12_340_000);
        // Per-line discount: (1234 × 825 + 5000) / 10000 = 102 mils
        assert_eq!(totals.discount_total.mils(), 102 * 10_000);
    }
}
