//! Payment settlement: paid-to-date and remaining balance of one invoice.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use backoffice_core::{PaymentId, ValueObject, format_amount};

/// How a payment was made. `Refund` records carry negative amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Card,
    Upi,
    BankTransfer,
    Refund,
}

/// One entry of an invoice's payment history (`/payments/invoice/{id}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PaymentId>,
    /// Signed: refunds and adjustments are negative.
    pub amount: Decimal,
    #[serde(rename = "payment_method")]
    pub method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl PaymentRecord {
    pub fn new(amount: Decimal, method: PaymentMethod) -> Self {
        Self {
            id: None,
            amount,
            method,
            paid_at: None,
            note: None,
        }
    }

    pub fn is_refund(&self) -> bool {
        self.method == PaymentMethod::Refund || self.amount < Decimal::ZERO
    }

    /// Magnitude only; the payment table shows refunds by method, not by sign.
    pub fn display_amount(&self) -> String {
        format_amount(self.amount.abs())
    }
}

/// Where an invoice stands against its payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Balance {
    Outstanding,
    Settled,
    Overpaid,
}

/// Paid-to-date and remaining balance. `remaining` is never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementView {
    pub total_paid: Decimal,
    pub remaining: Decimal,
}

impl ValueObject for SettlementView {}

impl SettlementView {
    pub fn balance(&self) -> Balance {
        if self.remaining > Decimal::ZERO {
            Balance::Outstanding
        } else if self.remaining.is_zero() {
            Balance::Settled
        } else {
            Balance::Overpaid
        }
    }

    pub fn display(&self) -> SettlementDisplay {
        SettlementDisplay {
            total_paid: format_amount(self.total_paid),
            remaining: format_amount(self.remaining),
        }
    }
}

/// [`SettlementView`] rendered with fixed two-decimal formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettlementDisplay {
    pub total_paid: String,
    pub remaining: String,
}

/// Settle `payments` against an invoice `total`.
///
/// `total_paid` is the signed sum of all amounts, so refunds reduce it.
/// `remaining` may go negative (overpaid) or above `total` (net refunds).
pub fn compute_settlement(total: Decimal, payments: &[PaymentRecord]) -> SettlementView {
    let total_paid: Decimal = payments.iter().map(|p| p.amount).sum();
    SettlementView {
        total_paid,
        remaining: total - total_paid,
    }
}
