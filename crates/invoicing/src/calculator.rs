//! Invoice totals: subtotal, tax, discount and payable total.
//!
//! Order of operations:
//! 1. `subtotal = Σ quantity × unit_price` (exact, not rounded)
//! 2. `tax = round2(subtotal × tax_rate)`
//! 3. `discount = DiscountSpec::raw_amount(subtotal)` (percent rounded)
//! 4. discount clamped to the subtotal
//! 5. `total = round2(subtotal + tax − discount)`

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use backoffice_core::{DomainError, DomainResult, ValueObject, format_amount, round2};

use crate::config::InvoicingConfig;
use crate::discount::DiscountSpec;
use crate::line_item::LineItem;

/// Tax rate applied to every invoice (18%).
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// Derived invoice amounts. Recomputed from inputs, never stored on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub discount_amount: Decimal,
    pub total: Decimal,
}

impl ValueObject for InvoiceTotals {}

impl InvoiceTotals {
    pub fn zero() -> Self {
        Self {
            subtotal: Decimal::ZERO,
            tax: Decimal::ZERO,
            discount_amount: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }

    /// Two-decimal strings for the presentation layer.
    pub fn display(&self) -> TotalsDisplay {
        TotalsDisplay {
            subtotal: format_amount(self.subtotal),
            tax: format_amount(self.tax),
            discount_amount: format_amount(self.discount_amount),
            total: format_amount(self.total),
        }
    }
}

/// [`InvoiceTotals`] rendered with fixed two-decimal formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalsDisplay {
    pub subtotal: String,
    pub tax: String,
    pub discount_amount: String,
    pub total: String,
}

/// Compute invoice totals for `items` under `discount` at `tax_rate`.
///
/// Pure and infallible: inputs are not validated, so negative quantities,
/// negative prices or out-of-range rates flow through the arithmetic as-is.
/// Use [`InvoiceCalculator::compute_checked`] to reject them first.
pub fn compute_totals(
    items: &[LineItem],
    discount: &DiscountSpec,
    tax_rate: Decimal,
) -> InvoiceTotals {
    let subtotal: Decimal = items.iter().map(LineItem::line_total).sum();
    let tax = round2(subtotal * tax_rate);
    let discount_amount = discount.amount_for(subtotal);
    let total = round2(subtotal + tax - discount_amount);

    InvoiceTotals {
        subtotal,
        tax,
        discount_amount,
        total,
    }
}

/// Totals calculator bound to a tax rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvoiceCalculator {
    tax_rate: Decimal,
}

impl Default for InvoiceCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_TAX_RATE)
    }
}

impl InvoiceCalculator {
    pub fn new(tax_rate: Decimal) -> Self {
        Self { tax_rate }
    }

    pub fn from_config(config: &InvoicingConfig) -> Self {
        Self::new(config.tax_rate)
    }

    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    /// See [`compute_totals`].
    pub fn compute(&self, items: &[LineItem], discount: &DiscountSpec) -> InvoiceTotals {
        compute_totals(items, discount, self.tax_rate)
    }

    /// Validate every line item and the discount, then compute.
    ///
    /// For valid input the result is identical to [`compute`](Self::compute).
    pub fn compute_checked(
        &self,
        items: &[LineItem],
        discount: &DiscountSpec,
    ) -> DomainResult<InvoiceTotals> {
        let validated = items
            .iter()
            .try_for_each(LineItem::validate)
            .and_then(|()| discount.validate());

        if let Err(err) = validated {
            tracing::debug!(error = %err, items = items.len(), "rejected invoice inputs");
            return Err(err);
        }

        checked_totals(items, discount, self.tax_rate).ok_or_else(|| {
            let err = DomainError::validation("invoice amounts overflow decimal range");
            tracing::debug!(error = %err, items = items.len(), "rejected invoice inputs");
            err
        })
    }
}

/// [`compute_totals`] with every step overflow-checked.
fn checked_totals(
    items: &[LineItem],
    discount: &DiscountSpec,
    tax_rate: Decimal,
) -> Option<InvoiceTotals> {
    let subtotal = items.iter().try_fold(Decimal::ZERO, |acc, item| {
        acc.checked_add(item.checked_line_total()?)
    })?;
    let tax = round2(subtotal.checked_mul(tax_rate)?);
    let discount_amount = discount.checked_amount_for(subtotal)?;
    let total = round2(subtotal.checked_add(tax)?.checked_sub(discount_amount)?);

    Some(InvoiceTotals {
        subtotal,
        tax,
        discount_amount,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_item::{MAX_QUANTITY, MAX_UNIT_PRICE};
    use proptest::prelude::*;

    fn dec(units: i64, scale: u32) -> Decimal {
        Decimal::new(units, scale)
    }

    fn item(quantity: i64, unit_price: Decimal) -> LineItem {
        LineItem::new("Item", quantity, unit_price)
    }

    #[test]
    fn no_discount() {
        let totals = InvoiceCalculator::default()
            .compute(&[item(2, dec(5000, 2))], &DiscountSpec::None);

        assert_eq!(totals.subtotal, dec(100, 0));
        assert_eq!(totals.tax, dec(18, 0));
        assert_eq!(totals.discount_amount, Decimal::ZERO);
        assert_eq!(totals.total, dec(118, 0));
    }

    #[test]
    fn flat_discount() {
        let totals = InvoiceCalculator::default()
            .compute(&[item(1, dec(10000, 2))], &DiscountSpec::Flat(dec(30, 0)));

        assert_eq!(totals.subtotal, dec(100, 0));
        assert_eq!(totals.tax, dec(18, 0));
        assert_eq!(totals.discount_amount, dec(30, 0));
        assert_eq!(totals.total, dec(88, 0));
    }

    #[test]
    fn percent_over_hundred_is_clamped_to_subtotal() {
        let totals = InvoiceCalculator::default()
            .compute(&[item(1, dec(10000, 2))], &DiscountSpec::Percent(dec(150, 0)));

        assert_eq!(totals.discount_amount, dec(100, 0));
        assert_eq!(totals.total, dec(18, 0));
    }

    #[test]
    fn empty_items_are_all_zero() {
        let calc = InvoiceCalculator::default();
        for discount in [
            DiscountSpec::None,
            DiscountSpec::Flat(dec(25, 0)),
            DiscountSpec::Percent(dec(10, 0)),
        ] {
            assert_eq!(calc.compute(&[], &discount), InvoiceTotals::zero());
        }
    }

    #[test]
    fn subtotal_is_not_rounded_before_use() {
        // subtotal 10.005, tax round2(1.8009) = 1.80, total round2(11.805) = 11.81
        let calc = InvoiceCalculator::default();
        let totals = calc.compute(&[item(1, dec(10005, 3))], &DiscountSpec::None);

        assert_eq!(totals.subtotal, dec(10005, 3));
        assert_eq!(totals.tax, dec(180, 2));
        assert_eq!(totals.total, dec(1181, 2));
        assert_eq!(totals.display().subtotal, "10.01");
    }

    #[test]
    fn tax_rounds_half_away_from_zero() {
        // 0.25 * 0.18 = 0.045 -> 0.05
        let calc = InvoiceCalculator::default();
        let totals = calc.compute(&[item(1, dec(25, 2))], &DiscountSpec::None);
        assert_eq!(totals.tax, dec(5, 2));
    }

    #[test]
    fn invalid_inputs_propagate_without_checks() {
        let calc = InvoiceCalculator::default();
        let totals = calc.compute(&[item(-1, dec(100, 0))], &DiscountSpec::None);

        assert_eq!(totals.subtotal, dec(-100, 0));
        assert_eq!(totals.tax, dec(-18, 0));
        // zero discount exceeds a negative subtotal, so the clamp pulls it down
        assert_eq!(totals.discount_amount, dec(-100, 0));
        assert_eq!(totals.total, dec(-18, 0));
    }

    #[test]
    fn checked_rejects_bad_items_and_discounts() {
        let calc = InvoiceCalculator::default();

        let err = calc
            .compute_checked(&[item(0, dec(1, 0))], &DiscountSpec::None)
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = calc
            .compute_checked(&[item(1, dec(1, 0))], &DiscountSpec::Percent(dec(150, 0)))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn checked_rejects_lines_that_would_overflow() {
        let calc = InvoiceCalculator::default();

        let err = calc
            .compute_checked(
                &[LineItem::new("Bulk", i64::MAX, dec(100_000_000_000, 0))],
                &DiscountSpec::None,
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let two_max = [item(1, Decimal::MAX), item(1, Decimal::MAX)];
        let err = calc.compute_checked(&two_max, &DiscountSpec::None).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn checked_reports_arithmetic_overflow_as_validation() {
        let calc = InvoiceCalculator::new(Decimal::MAX);
        let items = [item(MAX_QUANTITY, MAX_UNIT_PRICE)];

        let err = calc.compute_checked(&items, &DiscountSpec::None).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("overflow") => {}
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn checked_handles_largest_valid_lines() {
        let calc = InvoiceCalculator::default();
        let items = vec![item(MAX_QUANTITY, MAX_UNIT_PRICE); 50];

        let totals = calc
            .compute_checked(&items, &DiscountSpec::Percent(Decimal::ONE_HUNDRED))
            .unwrap();
        assert_eq!(totals, calc.compute(&items, &DiscountSpec::Percent(Decimal::ONE_HUNDRED)));
        assert_eq!(totals.total, totals.tax);
    }

    #[test]
    fn custom_tax_rate() {
        let calc = InvoiceCalculator::new(dec(5, 2));
        let totals = calc.compute(&[item(1, dec(200, 0))], &DiscountSpec::None);
        assert_eq!(totals.tax, dec(10, 0));
        assert_eq!(totals.total, dec(210, 0));
    }

    fn items_strategy() -> impl Strategy<Value = Vec<LineItem>> {
        prop::collection::vec(
            (1i64..1_000, 0i64..10_000_000).prop_map(|(qty, cents)| item(qty, dec(cents, 2))),
            0..20,
        )
    }

    fn discount_strategy() -> impl Strategy<Value = DiscountSpec> {
        prop_oneof![
            Just(DiscountSpec::None),
            (0i64..100_000_000).prop_map(|cents| DiscountSpec::Flat(dec(cents, 2))),
            (0i64..30_000).prop_map(|bps| DiscountSpec::Percent(dec(bps, 2))),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the subtotal is the exact sum of line totals.
        #[test]
        fn subtotal_is_exact_sum(items in items_strategy(), discount in discount_strategy()) {
            let totals = compute_totals(&items, &discount, DEFAULT_TAX_RATE);
            let expected: Decimal = items
                .iter()
                .map(|i| Decimal::from(i.quantity) * i.unit_price)
                .sum();
            prop_assert_eq!(totals.subtotal, expected);
            prop_assert_eq!(totals.tax, round2(expected * DEFAULT_TAX_RATE));
        }

        /// Property: the discount never exceeds the subtotal and the total follows
        /// the formula, staying non-negative.
        #[test]
        fn clamped_discount_keeps_total_non_negative(
            items in items_strategy(),
            discount in discount_strategy(),
        ) {
            let totals = compute_totals(&items, &discount, DEFAULT_TAX_RATE);
            let raw = discount.raw_amount(totals.subtotal);

            if raw > totals.subtotal {
                prop_assert_eq!(totals.discount_amount, totals.subtotal);
            } else {
                prop_assert_eq!(totals.discount_amount, raw);
            }
            prop_assert_eq!(
                totals.total,
                round2(totals.subtotal + totals.tax - totals.discount_amount)
            );
            prop_assert!(totals.total >= Decimal::ZERO);
        }

        /// Property: identical inputs give identical outputs, checked or not.
        #[test]
        fn computation_is_deterministic(items in items_strategy(), discount in discount_strategy()) {
            let calc = InvoiceCalculator::default();
            let first = calc.compute(&items, &discount);
            let second = calc.compute(&items, &discount);
            prop_assert_eq!(first, second);

            if discount.validate().is_ok() {
                prop_assert_eq!(calc.compute_checked(&items, &discount), Ok(first));
            }
        }
    }
}
