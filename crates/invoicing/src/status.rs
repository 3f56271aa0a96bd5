use serde::{Deserialize, Serialize};

/// Invoice status lifecycle as reported by the backend.
///
/// ```text
/// UNPAID ──pay──> PARTIALLY_PAID ──pay──> PAID ──refund──> REFUNDED
///   │                                      ^
///   ├──────────────────pay─────────────────┘
///   └──cancel──> CANCELLED
/// ```
///
/// Transitions happen server-side; these rules decide which actions are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    Unpaid,
    PartiallyPaid,
    Paid,
    Cancelled,
    Refunded,
}

impl InvoiceStatus {
    /// Invariant: only unpaid or partially paid invoices take payments.
    pub fn accepts_payment(self) -> bool {
        matches!(self, InvoiceStatus::Unpaid | InvoiceStatus::PartiallyPaid)
    }

    pub fn is_refundable(self) -> bool {
        matches!(self, InvoiceStatus::Paid)
    }

    /// Once money has been received an invoice can no longer be cancelled.
    pub fn is_cancellable(self) -> bool {
        matches!(self, InvoiceStatus::Unpaid)
    }

    pub fn is_outstanding(self) -> bool {
        self.accepts_payment()
    }

    pub fn counts_as_revenue(self) -> bool {
        matches!(self, InvoiceStatus::Paid)
    }
}
