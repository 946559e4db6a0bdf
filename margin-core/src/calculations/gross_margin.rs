//! Gross profit and gross profit margin.
//!
//! | Quantity            | Formula                              |
//! |---------------------|--------------------------------------|
//! | Gross profit        | Revenue - Cost of goods sold         |
//! | Gross profit margin | Gross profit / Revenue × 100         |
//! | Tier                | [`MarginTier::from_margin`] (margin) |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use margin_core::{MarginTier, RawInput, compute, validate};
//!
//! let validated = validate(&RawInput::new("100000", "60000")).unwrap();
//! let result = compute(&validated.input);
//!
//! assert_eq!(result.gross_profit(), dec!(40000));
//! assert_eq!(result.gross_profit_margin(), dec!(40));
//! assert_eq!(result.tier(), MarginTier::Good);
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::{CalculationResult, MarginTier, ValidatedInput};

/// Computes gross profit, margin and tier for a validated input pair.
///
/// The values are not rounded. Calling this twice with the same input gives
/// identical results.
pub fn compute(input: &ValidatedInput) -> CalculationResult {
    let revenue = input.revenue();
    let cost = input.cost();

    let gross_profit = gross_profit(revenue, cost);
    let gross_profit_margin = input.gross_profit_margin();
    let tier = MarginTier::from_margin(gross_profit_margin);

    debug!(
        %revenue,
        %cost,
        %gross_profit,
        %gross_profit_margin,
        tier = tier.as_str(),
        "computed gross margin"
    );

    CalculationResult::new(revenue, cost, gross_profit, gross_profit_margin, tier)
}

/// Revenue minus cost of goods sold.
pub(crate) fn gross_profit(
    revenue: Decimal,
    cost: Decimal,
) -> Decimal {
    revenue - cost
}

/// Gross profit as a percentage of revenue.
///
/// Returns `None` when revenue is zero or the percentage overflows the
/// decimal range.
pub(crate) fn gross_profit_margin(
    revenue: Decimal,
    gross_profit: Decimal,
) -> Option<Decimal> {
    gross_profit
        .checked_div(revenue)?
        .checked_mul(Decimal::ONE_HUNDRED)
}
