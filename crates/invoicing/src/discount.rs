use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use backoffice_core::{DomainError, DomainResult, ValueObject, round2};

/// Discount type tag as the backend spells it (`"FLAT"`, `"PERCENT"`).
///
/// "No discount" is not a kind: it travels as `discount_type: null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountKind {
    Flat,
    Percent,
}

/// Discount applied to an invoice subtotal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiscountSpec {
    #[default]
    None,
    /// Fixed amount off the subtotal.
    Flat(Decimal),
    /// Percentage of the subtotal, nominally 0..=100.
    Percent(Decimal),
}

impl ValueObject for DiscountSpec {}

impl DiscountSpec {
    /// Rebuild a spec from its wire parts. A missing kind means no discount,
    /// whatever the value says.
    pub fn from_parts(kind: Option<DiscountKind>, value: Decimal) -> Self {
        match kind {
            None => Self::None,
            Some(DiscountKind::Flat) => Self::Flat(value),
            Some(DiscountKind::Percent) => Self::Percent(value),
        }
    }

    pub fn kind(&self) -> Option<DiscountKind> {
        match self {
            Self::None => None,
            Self::Flat(_) => Some(DiscountKind::Flat),
            Self::Percent(_) => Some(DiscountKind::Percent),
        }
    }

    /// The entered value (amount or rate); zero for `None`.
    pub fn value(&self) -> Decimal {
        match self {
            Self::None => Decimal::ZERO,
            Self::Flat(amount) => *amount,
            Self::Percent(rate) => *rate,
        }
    }

    /// Discount derived from the subtotal before clamping.
    ///
    /// Percent discounts are rounded to the hundredths place; flat amounts are
    /// taken as entered.
    pub fn raw_amount(&self, subtotal: Decimal) -> Decimal {
        match self {
            Self::None => Decimal::ZERO,
            Self::Flat(amount) => *amount,
            Self::Percent(rate) => round2(subtotal * *rate / Decimal::ONE_HUNDRED),
        }
    }

    /// [`raw_amount`](Self::raw_amount), or `None` when the percent product overflows.
    pub fn checked_raw_amount(&self, subtotal: Decimal) -> Option<Decimal> {
        match self {
            Self::Percent(rate) => subtotal
                .checked_mul(*rate)?
                .checked_div(Decimal::ONE_HUNDRED)
                .map(round2),
            _ => Some(self.raw_amount(subtotal)),
        }
    }

    /// Discount actually applied: [`raw_amount`](Self::raw_amount) clamped to the subtotal.
    pub fn amount_for(&self, subtotal: Decimal) -> Decimal {
        clamp_to(self.raw_amount(subtotal), subtotal)
    }

    /// Overflow-checked [`amount_for`](Self::amount_for).
    pub fn checked_amount_for(&self, subtotal: Decimal) -> Option<Decimal> {
        self.checked_raw_amount(subtotal)
            .map(|amount| clamp_to(amount, subtotal))
    }

    /// Flat amounts must be non-negative; percent rates must lie in 0..=100.
    pub fn validate(&self) -> DomainResult<()> {
        match self {
            Self::None => Ok(()),
            Self::Flat(amount) if *amount < Decimal::ZERO => Err(DomainError::validation(
                format!("flat discount must not be negative, got {amount}"),
            )),
            Self::Percent(rate) if *rate < Decimal::ZERO || *rate > Decimal::ONE_HUNDRED => {
                Err(DomainError::validation(format!(
                    "percent discount must be between 0 and 100, got {rate}"
                )))
            }
            _ => Ok(()),
        }
    }
}

fn clamp_to(amount: Decimal, subtotal: Decimal) -> Decimal {
    if amount > subtotal { subtotal } else { amount }
}
