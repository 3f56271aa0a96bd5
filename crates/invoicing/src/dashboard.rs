//! Dashboard metrics derived from the invoice listing.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use backoffice_core::InvoiceId;

use crate::status::InvoiceStatus;

/// The fields of an `/invoices` listing row the dashboard needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceSummary {
    pub id: InvoiceId,
    pub total: Decimal,
    pub status: InvoiceStatus,
    pub created_at: DateTime<Utc>,
}

/// Headline numbers for the overview page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_invoices: usize,
    pub total_orders: usize,
    pub total_customers: usize,
    /// Sum of totals over paid invoices.
    pub revenue: Decimal,
    /// `revenue / paid`, zero when nothing is paid. Unrounded.
    pub avg_invoice_value: Decimal,
    pub paid: usize,
    /// Unpaid and partially paid.
    pub unpaid: usize,
    pub refunded: usize,
}

impl DashboardStats {
    pub fn from_invoices(
        invoices: &[InvoiceSummary],
        total_orders: usize,
        total_customers: usize,
    ) -> Self {
        let mut paid = 0usize;
        let mut unpaid = 0usize;
        let mut refunded = 0usize;
        let mut revenue = Decimal::ZERO;

        for invoice in invoices {
            if invoice.status.counts_as_revenue() {
                paid += 1;
                revenue += invoice.total;
            } else if invoice.status.is_outstanding() {
                unpaid += 1;
            } else if invoice.status == InvoiceStatus::Refunded {
                refunded += 1;
            }
        }

        let avg_invoice_value = if paid > 0 {
            revenue / Decimal::from(paid)
        } else {
            Decimal::ZERO
        };

        Self {
            total_invoices: invoices.len(),
            total_orders,
            total_customers,
            revenue,
            avg_invoice_value,
            paid,
            unpaid,
            refunded,
        }
    }
}

/// Paid revenue per calendar day (UTC), ordered by date.
pub fn revenue_by_day(invoices: &[InvoiceSummary]) -> BTreeMap<NaiveDate, Decimal> {
    let mut by_day = BTreeMap::new();
    for invoice in invoices.iter().filter(|i| i.status.counts_as_revenue()) {
        *by_day
            .entry(invoice.created_at.date_naive())
            .or_insert(Decimal::ZERO) += invoice.total;
    }
    by_day
}
