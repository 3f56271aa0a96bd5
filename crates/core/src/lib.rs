//! `backoffice-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, identifiers and money helpers shared by the domain modules.

pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::{CustomerId, InvoiceId, OrderId, PaymentId};
pub use money::{MONEY_SCALE, format_amount, round2};
pub use value_object::ValueObject;
