//! Invoicing configuration (environment-driven).

use core::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculator::DEFAULT_TAX_RATE;

/// Environment variable holding the tax rate as a fraction (e.g. `0.18`).
pub const TAX_RATE_ENV: &str = "BACKOFFICE_TAX_RATE";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not valid unicode")]
    NotUnicode { var: &'static str },

    #[error("{var}={value:?} is not a decimal number")]
    InvalidDecimal { var: &'static str, value: String },

    #[error("{var}={value} must be a fraction between 0 and 1")]
    OutOfRange { var: &'static str, value: Decimal },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvoicingConfig {
    /// Fraction of the subtotal charged as tax.
    pub tax_rate: Decimal,
}

impl Default for InvoicingConfig {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

impl InvoicingConfig {
    /// Load from the process environment, falling back to defaults on bad values.
    pub fn from_env() -> Self {
        Self::try_from_env().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "invalid invoicing config; using defaults");
            Self::default()
        })
    }

    /// Load from the process environment. Unset variables take their defaults.
    pub fn try_from_env() -> Result<Self, ConfigError> {
        match std::env::var(TAX_RATE_ENV) {
            Ok(raw) => Self::try_from_lookup(|_| Some(raw.clone())),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(std::env::VarError::NotUnicode(_)) => {
                Err(ConfigError::NotUnicode { var: TAX_RATE_ENV })
            }
        }
    }

    /// Load through an arbitrary key lookup (env, file, test map).
    pub fn try_from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let tax_rate = match lookup(TAX_RATE_ENV) {
            Some(raw) => parse_tax_rate(&raw)?,
            None => DEFAULT_TAX_RATE,
        };
        Ok(Self { tax_rate })
    }
}

fn parse_tax_rate(raw: &str) -> Result<Decimal, ConfigError> {
    let value = Decimal::from_str(raw.trim()).map_err(|_| ConfigError::InvalidDecimal {
        var: TAX_RATE_ENV,
        value: raw.to_string(),
    })?;
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(ConfigError::OutOfRange {
            var: TAX_RATE_ENV,
            value,
        });
    }
    Ok(value)
}
