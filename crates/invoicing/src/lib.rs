//! Invoicing domain module.
//!
//! Invoice totals, payment settlement and the invoice rules around them,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).
//! Inputs arrive already materialized from the backend's `/orders`,
//! `/invoices` and `/payments` resources.

pub mod calculator;
pub mod config;
pub mod dashboard;
pub mod discount;
pub mod line_item;
pub mod request;
pub mod settlement;
pub mod status;

pub use calculator::{
    DEFAULT_TAX_RATE, InvoiceCalculator, InvoiceTotals, TotalsDisplay, compute_totals,
};
pub use config::{ConfigError, InvoicingConfig};
pub use dashboard::{DashboardStats, InvoiceSummary, revenue_by_day};
pub use discount::{DiscountKind, DiscountSpec};
pub use line_item::LineItem;
pub use request::{
    CancelInvoiceRequest, CreateInvoiceRequest, CreateOrderRequest, PaymentRequest, RefundRequest,
};
pub use settlement::{
    Balance, PaymentMethod, PaymentRecord, SettlementDisplay, SettlementView, compute_settlement,
};
pub use status::InvoiceStatus;
