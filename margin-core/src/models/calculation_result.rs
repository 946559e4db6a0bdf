use rust_decimal::Decimal;
use serde::Serialize;

use crate::MarginTier;

/// Output of the metric engine for one calculation request.
///
/// Values are kept at full precision; rounding for display happens only in
/// [`crate::format`], [`crate::presentation`] and [`crate::report`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    revenue: Decimal,
    cost: Decimal,
    gross_profit: Decimal,
    gross_profit_margin: Decimal,
    tier: MarginTier,
}

impl CalculationResult {
    pub(crate) fn new(
        revenue: Decimal,
        cost: Decimal,
        gross_profit: Decimal,
        gross_profit_margin: Decimal,
        tier: MarginTier,
    ) -> Self {
        Self {
            revenue,
            cost,
            gross_profit,
            gross_profit_margin,
            tier,
        }
    }

    pub fn revenue(&self) -> Decimal {
        self.revenue
    }

    /// Cost of goods sold.
    pub fn cost(&self) -> Decimal {
        self.cost
    }

    pub fn gross_profit(&self) -> Decimal {
        self.gross_profit
    }

    /// Gross profit as a percentage of revenue. Negative when cost exceeds revenue.
    pub fn gross_profit_margin(&self) -> Decimal {
        self.gross_profit_margin
    }

    pub fn tier(&self) -> MarginTier {
        self.tier
    }
}
