//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Line items, discount specs, computed totals and settlement views have no
/// identity of their own: two with the same values are the same thing, and
/// they are rebuilt from their inputs rather than mutated.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct SettlementView {
///     total_paid: Decimal,
///     remaining: Decimal,
/// }
///
/// impl ValueObject for SettlementView {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
