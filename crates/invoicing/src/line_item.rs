use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use backoffice_core::{DomainError, DomainResult, ValueObject};

/// Largest quantity accepted on a single line.
pub const MAX_QUANTITY: i64 = 1_000_000;
/// Largest unit price accepted on a single line (1,000,000,000.00).
pub const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Order line as returned by `/orders/{id}`: product label, quantity, unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Display label only; never used in arithmetic.
    #[serde(default)]
    pub product_name: String,
    pub quantity: i64,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub unit_price: Decimal,
}

impl ValueObject for LineItem {}

impl LineItem {
    pub fn new(product_name: impl Into<String>, quantity: i64, unit_price: Decimal) -> Self {
        Self {
            product_name: product_name.into(),
            quantity,
            unit_price,
        }
    }

    /// `quantity * unit_price`, unrounded and unchecked.
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }

    /// `quantity * unit_price`, or `None` when the product overflows.
    pub fn checked_line_total(&self) -> Option<Decimal> {
        Decimal::from(self.quantity).checked_mul(self.unit_price)
    }

    /// Quantity in `1..=MAX_QUANTITY`, unit price in `0..=MAX_UNIT_PRICE`.
    pub fn validate(&self) -> DomainResult<()> {
        if self.quantity <= 0 {
            return Err(DomainError::validation(format!(
                "line item '{}' quantity must be positive, got {}",
                self.product_name, self.quantity
            )));
        }
        if self.quantity > MAX_QUANTITY {
            return Err(DomainError::validation(format!(
                "line item '{}' quantity exceeds maximum allowed ({}), got {}",
                self.product_name, MAX_QUANTITY, self.quantity
            )));
        }
        if self.unit_price < Decimal::ZERO {
            return Err(DomainError::validation(format!(
                "line item '{}' unit_price must not be negative, got {}",
                self.product_name, self.unit_price
            )));
        }
        if self.unit_price > MAX_UNIT_PRICE {
            return Err(DomainError::validation(format!(
                "line item '{}' unit_price exceeds maximum allowed ({}), got {}",
                self.product_name, MAX_UNIT_PRICE, self.unit_price
            )));
        }
        Ok(())
    }
}
