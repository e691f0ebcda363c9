//! # Status Derivations & Document Lifecycles
//!
//! One shared payment-status formula and the forward-only lifecycles that
//! gate when totals may still change.
//!
//! ## Lifecycles
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Document Lifecycles                                 │
//! │                                                                         │
//! │  Quote:    Draft ──► Sent ──► Accepted ──► Converted                   │
//! │                                                                         │
//! │  Return:   Pending ──► Approved ──► Processed                          │
//! │                                                                         │
//! │  Payment:  derived, never stored independently:                        │
//! │            paid   if paid_amount ≥ grand_total                         │
//! │            unpaid if paid_amount ≤ 0                                   │
//! │            partial otherwise                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The legacy pages each derived payment status inline with slightly
//! different thresholds. [`derive_payment_status`] is the single formula they
//! all share now; recompute it whenever the grand total or paid amount
//! changes and never persist it on its own.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Payment Status
// =============================================================================

/// Derived classification of how much of a document has been paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Nothing has been paid.
    Unpaid,
    /// Something, but less than the grand total, has been paid.
    Partial,
    /// The grand total is covered.
    Paid,
}

impl PaymentStatus {
    /// Stable string form, used in error messages and logs.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::Partial => "partial",
            PaymentStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derives the payment status from a grand total and the amount paid so far.
///
/// Pure function of its two inputs; a zero-total document is trivially
/// `Paid` (nothing is owed).
///
/// ## Example
/// ```rust
/// use trado_core::money::Money;
/// use trado_core::status::{derive_payment_status, PaymentStatus};
///
/// let total = Money::from_mils(100_000);
/// assert_eq!(derive_payment_status(total, Money::zero()), PaymentStatus::Unpaid);
/// assert_eq!(
///     derive_payment_status(total, Money::from_mils(50_000)),
///     PaymentStatus::Partial
/// );
/// assert_eq!(derive_payment_status(total, total), PaymentStatus::Paid);
/// ```
pub fn derive_payment_status(grand_total: Money, paid_amount: Money) -> PaymentStatus {
    if paid_amount >= grand_total {
        PaymentStatus::Paid
    } else if paid_amount <= Money::zero() {
        PaymentStatus::Unpaid
    } else {
        PaymentStatus::Partial
    }
}

// =============================================================================
// Quote Status
// =============================================================================

/// Lifecycle of a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    /// Quote is being edited; lines and totals may still change.
    Draft,
    /// Quote has been sent to the customer.
    Sent,
    /// Customer accepted the quote.
    Accepted,
    /// Quote was converted into a sales order.
    Converted,
}

impl Default for QuoteStatus {
    fn default() -> Self {
        QuoteStatus::Draft
    }
}

impl QuoteStatus {
    /// Stable string form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            QuoteStatus::Draft => "draft",
            QuoteStatus::Sent => "sent",
            QuoteStatus::Accepted => "accepted",
            QuoteStatus::Converted => "converted",
        }
    }

    /// Whether the chain allows moving from `self` to `to`.
    ///
    /// Strictly forward, one step at a time; skipping a state is forbidden.
    pub const fn can_transition(&self, to: QuoteStatus) -> bool {
        matches!(
            (self, to),
            (QuoteStatus::Draft, QuoteStatus::Sent)
                | (QuoteStatus::Sent, QuoteStatus::Accepted)
                | (QuoteStatus::Accepted, QuoteStatus::Converted)
        )
    }

    /// Performs the transition, or reports why it is illegal.
    pub fn transition(&self, to: QuoteStatus) -> CoreResult<QuoteStatus> {
        if self.can_transition(to) {
            Ok(to)
        } else {
            Err(CoreError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: to.as_str().to_string(),
            })
        }
    }

    /// Totals may only be recomputed and saved while the quote is a draft.
    pub const fn is_editable(&self) -> bool {
        matches!(self, QuoteStatus::Draft)
    }
}

impl fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Return Status
// =============================================================================

/// Lifecycle of a sales return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ReturnStatus {
    /// Return is awaiting review; lines may still change.
    Pending,
    /// Return was approved.
    Approved,
    /// Stock and refund have been processed.
    Processed,
}

impl Default for ReturnStatus {
    fn default() -> Self {
        ReturnStatus::Pending
    }
}

impl ReturnStatus {
    /// Stable string form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ReturnStatus::Pending => "pending",
            ReturnStatus::Approved => "approved",
            ReturnStatus::Processed => "processed",
        }
    }

    /// Whether the chain allows moving from `self` to `to`.
    pub const fn can_transition(&self, to: ReturnStatus) -> bool {
        matches!(
            (self, to),
            (ReturnStatus::Pending, ReturnStatus::Approved)
                | (ReturnStatus::Approved, ReturnStatus::Processed)
        )
    }

    /// Performs the transition, or reports why it is illegal.
    pub fn transition(&self, to: ReturnStatus) -> CoreResult<ReturnStatus> {
        if self.can_transition(to) {
            Ok(to)
        } else {
            Err(CoreError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: to.as_str().to_string(),
            })
        }
    }

    /// Totals may only be recomputed and saved while the return is pending.
    pub const fn is_editable(&self) -> bool {
        matches!(self, ReturnStatus::Pending)
    }
}

impl fmt::Display for ReturnStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_status_thresholds() {
        let total = Money::from_mils(100_000);

        assert_eq!(
            derive_payment_status(total, Money::zero()),
            PaymentStatus::Unpaid
        );
        assert_eq!(
            derive_payment_status(total, Money::from_mils(50_000)),
            PaymentStatus::Partial
        );
        assert_eq!(derive_payment_status(total, total), PaymentStatus::Paid);
        assert_eq!(
            derive_payment_status(total, Money::from_mils(150_000)),
            PaymentStatus::Paid
        );
    }

    #[test]
    fn test_payment_status_zero_total_is_paid() {
        // A zero-total document is trivially fully paid.
        assert_eq!(
            derive_payment_status(Money::zero(), Money::zero()),
            PaymentStatus::Paid
        );
    }

    #[test]
    fn test_payment_status_negative_paid_is_unpaid() {
        let total = Money::from_mils(100_000);
        assert_eq!(
            derive_payment_status(total, Money::from_mils(-500)),
            PaymentStatus::Unpaid
        );
    }

    #[test]
    fn test_quote_lifecycle_forward_chain() {
        let status = QuoteStatus::default();
        assert_eq!(status, QuoteStatus::Draft);
        assert!(status.is_editable());

        let status = status.transition(QuoteStatus::Sent).unwrap();
        let status = status.transition(QuoteStatus::Accepted).unwrap();
        let status = status.transition(QuoteStatus::Converted).unwrap();
        assert!(!status.is_editable());
    }

    #[test]
    fn test_quote_lifecycle_rejects_skips_and_reversals() {
        assert!(QuoteStatus::Draft.transition(QuoteStatus::Accepted).is_err());
        assert!(QuoteStatus::Sent.transition(QuoteStatus::Draft).is_err());
        assert!(QuoteStatus::Converted
            .transition(QuoteStatus::Converted)
            .is_err());

        let err = QuoteStatus::Draft
            .transition(QuoteStatus::Converted)
            .unwrap_err();
        assert_eq!(err.to_string(), "Cannot transition from draft to converted");
    }

    #[test]
    fn test_return_lifecycle() {
        let status = ReturnStatus::default();
        assert!(status.is_editable());

        let status = status.transition(ReturnStatus::Approved).unwrap();
        assert!(!status.is_editable());
        let status = status.transition(ReturnStatus::Processed).unwrap();
        assert_eq!(status, ReturnStatus::Processed);

        assert!(ReturnStatus::Pending
            .transition(ReturnStatus::Processed)
            .is_err());
    }

    #[test]
    fn test_status_serde_is_snake_case() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Partial).unwrap(),
            "\"partial\""
        );
        assert_eq!(
            serde_json::to_string(&QuoteStatus::Draft).unwrap(),
            "\"draft\""
        );
    }
}
