//! Validation of the raw revenue and cost fields.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. both fields present ([`ValidationError::MissingField`])
//! 2. both fields numeric ([`ValidationError::NotANumber`])
//! 3. revenue above zero ([`ValidationError::RevenueNotPositive`])
//! 4. cost not below zero ([`ValidationError::CostNegative`])
//! 5. margin and COGS share representable ([`ValidationError::NotANumber`])
//!
//! A cost above revenue is accepted with a
//! [`ValidationWarning::CostExceedsRevenue`] warning.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::gross_margin::{gross_profit, gross_profit_margin};
use crate::{RawInput, ValidatedInput};

/// Blocking validation failures. The caller re-prompts; nothing is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    /// Revenue or cost of goods sold was left empty.
    #[error("revenue and cost of goods sold are both required")]
    MissingField,

    /// A field could not be read as a finite number.
    #[error("revenue and cost must be numeric values")]
    NotANumber,

    /// Revenue was zero or negative.
    #[error("revenue must be greater than zero")]
    RevenueNotPositive,

    /// Cost of goods sold was negative.
    #[error("cost of goods sold cannot be negative")]
    CostNegative,
}

/// Non-blocking findings. The input is still accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationWarning {
    /// Cost is above revenue, so the margin will be negative.
    CostExceedsRevenue,
}

/// Which form field a check refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputField {
    Revenue,
    Cost,
}

impl fmt::Display for InputField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Revenue => f.write_str("revenue"),
            Self::Cost => f.write_str("cost of goods sold"),
        }
    }
}

/// A successfully validated input together with any warning raised on the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validated {
    pub input: ValidatedInput,
    pub warning: Option<ValidationWarning>,
}

/// Validates the raw form fields.
///
/// # Errors
///
/// Returns the first [`ValidationError`] in check order. See the module
/// documentation for the order.
pub fn validate(raw: &RawInput) -> Result<Validated, ValidationError> {
    let revenue_text = require(InputField::Revenue, &raw.revenue_text)?;
    let cost_text = require(InputField::Cost, &raw.cost_text)?;

    let revenue = parse_amount(InputField::Revenue, revenue_text)?;
    let cost = parse_amount(InputField::Cost, cost_text)?;

    if revenue <= Decimal::ZERO {
        debug!(%revenue, "revenue is not positive");
        return Err(ValidationError::RevenueNotPositive);
    }

    if cost < Decimal::ZERO {
        debug!(%cost, "cost is negative");
        return Err(ValidationError::CostNegative);
    }

    let Some(margin) = representable_margin(revenue, cost) else {
        debug!(%revenue, %cost, "margin outside the representable range");
        return Err(ValidationError::NotANumber);
    };

    let warning = if cost > revenue {
        warn!(%revenue, %cost, "cost exceeds revenue");
        Some(ValidationWarning::CostExceedsRevenue)
    } else {
        None
    };

    Ok(Validated {
        input: ValidatedInput::new(revenue, cost, margin),
        warning,
    })
}

/// The margin, provided both it and the COGS share `100 - margin` fit in a
/// [`Decimal`].
fn representable_margin(
    revenue: Decimal,
    cost: Decimal,
) -> Option<Decimal> {
    let margin = gross_profit_margin(revenue, gross_profit(revenue, cost))?;
    Decimal::ONE_HUNDRED.checked_sub(margin)?;
    Some(margin)
}

fn require(
    field: InputField,
    text: &str,
) -> Result<&str, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        debug!(%field, "field is empty");
        return Err(ValidationError::MissingField);
    }
    Ok(trimmed)
}

/// Normalizes input for decimal parsing: removes commas (thousands separator).
fn normalize_amount(s: &str) -> String {
    s.replace(',', "")
}

/// Parses a field as a decimal amount.
///
/// Accepts plain notation with optional `,` grouping (`1,00,000.50`) and
/// scientific notation (`1.5e5`).
fn parse_amount(
    field: InputField,
    text: &str,
) -> Result<Decimal, ValidationError> {
    let normalized = normalize_amount(text);
    let parsed = if normalized.contains(['e', 'E']) {
        Decimal::from_scientific(&normalized)
    } else {
        normalized.parse::<Decimal>()
    };

    parsed.map_err(|e| {
        debug!(%field, input = %text, "not a number: {}", e);
        ValidationError::NotANumber
    })
}
