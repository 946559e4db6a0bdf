use rust_decimal::Decimal;
use serde::Serialize;

/// A revenue/cost pair that passed validation.
///
/// Revenue is strictly positive and cost is non-negative. The margin is
/// worked out once during validation, where it is checked to fit in a
/// [`Decimal`] together with its complement `100 - margin`. The only way to
/// obtain one is through [`crate::validate`], so everything downstream can
/// use these values without checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidatedInput {
    revenue: Decimal,
    cost: Decimal,
    gross_profit_margin: Decimal,
}

impl ValidatedInput {
    pub(crate) fn new(
        revenue: Decimal,
        cost: Decimal,
        gross_profit_margin: Decimal,
    ) -> Self {
        Self {
            revenue,
            cost,
            gross_profit_margin,
        }
    }

    pub fn revenue(&self) -> Decimal {
        self.revenue
    }

    pub fn cost(&self) -> Decimal {
        self.cost
    }

    /// Unrounded margin in percent.
    pub fn gross_profit_margin(&self) -> Decimal {
        self.gross_profit_margin
    }
}
