//! Outbound requests the dashboard sends to the backend.
//!
//! Each builder checks the business rules that apply before the call is made;
//! transport is the caller's job. Amounts serialize as JSON numbers.

use rust_decimal::Decimal;
use serde::Serialize;

use backoffice_core::{CustomerId, DomainError, DomainResult, InvoiceId, OrderId};

use crate::discount::{DiscountKind, DiscountSpec};
use crate::line_item::LineItem;
use crate::settlement::PaymentMethod;
use crate::status::InvoiceStatus;

/// `POST /orders`: place an order for a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateOrderRequest {
    pub customer_id: CustomerId,
    pub items: Vec<LineItem>,
}

impl CreateOrderRequest {
    pub const PATH: &'static str = "/orders";

    /// Orders are stricter than invoice lines: every line needs a product
    /// name and a price above zero.
    pub fn new(customer_id: CustomerId, items: Vec<LineItem>) -> DomainResult<Self> {
        if items.is_empty() {
            return Err(DomainError::validation("order needs at least one item"));
        }
        for item in &items {
            item.validate()?;
            if item.product_name.trim().is_empty() {
                return Err(DomainError::validation("product name must not be blank"));
            }
            if item.unit_price <= Decimal::ZERO {
                return Err(DomainError::validation(format!(
                    "line item '{}' unit_price must be positive, got {}",
                    item.product_name, item.unit_price
                )));
            }
        }

        Ok(Self { customer_id, items })
    }

    /// Sum of the line totals, as shown in the order list.
    pub fn total(&self) -> DomainResult<Decimal> {
        self.items
            .iter()
            .try_fold(Decimal::ZERO, |acc, item| {
                acc.checked_add(item.checked_line_total()?)
            })
            .ok_or_else(|| DomainError::validation("order total overflows decimal range"))
    }
}

/// `POST /invoices/orders/{order_id}`: issue an invoice for an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateInvoiceRequest {
    #[serde(skip_serializing)]
    pub order_id: OrderId,
    /// `null` when no discount applies.
    pub discount_type: Option<DiscountKind>,
    #[serde(with = "rust_decimal::serde::float")]
    pub discount_value: Decimal,
}

impl CreateInvoiceRequest {
    /// A `None` discount is sent as `discount_type: null, discount_value: 0`.
    pub fn new(order_id: OrderId, discount: DiscountSpec) -> Self {
        Self {
            order_id,
            discount_type: discount.kind(),
            discount_value: discount.value(),
        }
    }

    pub fn discount(&self) -> DiscountSpec {
        DiscountSpec::from_parts(self.discount_type, self.discount_value)
    }

    pub fn path(&self) -> String {
        format!("/invoices/orders/{}", self.order_id)
    }
}

/// `POST /payments`: record a payment against an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentRequest {
    pub invoice_id: InvoiceId,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
}

impl PaymentRequest {
    pub const PATH: &'static str = "/payments";

    /// Amounts above the remaining balance are accepted; overpayment stays
    /// visible in the settlement instead of being blocked here.
    pub fn new(
        invoice_id: InvoiceId,
        status: InvoiceStatus,
        amount: Decimal,
        payment_method: PaymentMethod,
    ) -> DomainResult<Self> {
        if !status.accepts_payment() {
            return Err(DomainError::invariant(format!(
                "invoice {invoice_id} does not accept payments in status {status:?}"
            )));
        }
        if amount <= Decimal::ZERO {
            return Err(DomainError::validation(format!(
                "payment amount must be positive, got {amount}"
            )));
        }
        if payment_method == PaymentMethod::Refund {
            return Err(DomainError::validation(
                "refunds are issued through a refund request, not as payments",
            ));
        }

        Ok(Self {
            invoice_id,
            amount,
            payment_method,
        })
    }
}

/// `POST /invoices/{invoice_id}/cancel`: void an invoice nobody has paid yet.
///
/// The request has no body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelInvoiceRequest {
    pub invoice_id: InvoiceId,
}

impl CancelInvoiceRequest {
    pub fn new(invoice_id: InvoiceId, status: InvoiceStatus) -> DomainResult<Self> {
        if !status.is_cancellable() {
            return Err(DomainError::invariant(format!(
                "invoice {invoice_id} cannot be cancelled in status {status:?}"
            )));
        }
        Ok(Self { invoice_id })
    }

    pub fn path(&self) -> String {
        format!("/invoices/{}/cancel", self.invoice_id)
    }
}

/// `POST /refunds/invoice/{invoice_id}`: refund a paid invoice in full.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefundRequest {
    #[serde(skip_serializing)]
    pub invoice_id: InvoiceId,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub reason: Option<String>,
}

impl RefundRequest {
    /// The amount is locked to the invoice total; a blank reason is sent as `null`.
    pub fn full(
        invoice_id: InvoiceId,
        status: InvoiceStatus,
        invoice_total: Decimal,
        reason: &str,
    ) -> DomainResult<Self> {
        if !status.is_refundable() {
            return Err(DomainError::invariant(format!(
                "invoice {invoice_id} cannot be refunded in status {status:?}"
            )));
        }

        let reason = reason.trim();
        Ok(Self {
            invoice_id,
            amount: invoice_total,
            reason: (!reason.is_empty()).then(|| reason.to_string()),
        })
    }

    pub fn path(&self) -> String {
        format!("/refunds/invoice/{}", self.invoice_id)
    }
}
