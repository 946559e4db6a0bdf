use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const BELOW_AVERAGE_FLOOR: Decimal = Decimal::ZERO;
const AVERAGE_FLOOR: Decimal = Decimal::from_parts(15, 0, 0, false, 0);
const GOOD_FLOOR: Decimal = Decimal::from_parts(30, 0, 0, false, 0);
const EXCELLENT_FLOOR: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Performance bucket for a gross profit margin, ordered worst to best.
///
/// Drives the on-screen indicator text and color. The exported report uses
/// its own, coarser recommendation table (see [`crate::report`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MarginTier {
    Loss,
    BelowAverage,
    Average,
    Good,
    Excellent,
}

impl MarginTier {
    pub const ALL: [MarginTier; 5] = [
        Self::Loss,
        Self::BelowAverage,
        Self::Average,
        Self::Good,
        Self::Excellent,
    ];

    /// Classifies a margin percentage.
    ///
    /// Intervals are half-open on the right, so a margin sitting exactly on a
    /// boundary belongs to the higher tier (0 is `BelowAverage`, 50 is
    /// `Excellent`).
    pub fn from_margin(margin: Decimal) -> Self {
        if margin < BELOW_AVERAGE_FLOOR {
            Self::Loss
        } else if margin < AVERAGE_FLOOR {
            Self::BelowAverage
        } else if margin < GOOD_FLOOR {
            Self::Average
        } else if margin < EXCELLENT_FLOOR {
            Self::Good
        } else {
            Self::Excellent
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loss => "loss",
            Self::BelowAverage => "below_average",
            Self::Average => "average",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "loss" => Some(Self::Loss),
            "below_average" => Some(Self::BelowAverage),
            "average" => Some(Self::Average),
            "good" => Some(Self::Good),
            "excellent" => Some(Self::Excellent),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Loss => "Loss",
            Self::BelowAverage => "Below average",
            Self::Average => "Average",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }

    /// Message shown under the margin gauge.
    pub fn indicator_message(&self) -> &'static str {
        match self {
            Self::Loss => "Your business is operating at a loss.",
            Self::BelowAverage => {
                "Below average margin. Consider strategies to improve profitability."
            }
            Self::Average => "Average margin. Your business is doing reasonably well.",
            Self::Good => "Good margin. Your business is performing above average.",
            Self::Excellent => "Excellent margin! Your business is highly profitable.",
        }
    }

    /// Hex color of the indicator message.
    pub fn indicator_color(&self) -> &'static str {
        match self {
            Self::Loss => "#ef4444",
            Self::BelowAverage => "#ca8a04",
            Self::Average => "#2563eb",
            Self::Good => "#16a34a",
            Self::Excellent => "#245e4f",
        }
    }
}

impl std::fmt::Display for MarginTier {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // from_margin tests
    // =========================================================================

    #[test]
    fn from_margin_negative_is_loss() {
        assert_eq!(MarginTier::from_margin(dec!(-0.01)), MarginTier::Loss);
        assert_eq!(MarginTier::from_margin(dec!(-50)), MarginTier::Loss);
    }

    #[test]
    fn from_margin_zero_is_below_average() {
        assert_eq!(MarginTier::from_margin(dec!(0)), MarginTier::BelowAverage);
    }

    #[test]
    fn from_margin_fifteen_is_average() {
        assert_eq!(MarginTier::from_margin(dec!(14.99)), MarginTier::BelowAverage);
        assert_eq!(MarginTier::from_margin(dec!(15)), MarginTier::Average);
    }

    #[test]
    fn from_margin_thirty_is_good() {
        assert_eq!(MarginTier::from_margin(dec!(29.999999)), MarginTier::Average);
        assert_eq!(MarginTier::from_margin(dec!(30.00)), MarginTier::Good);
    }

    #[test]
    fn from_margin_fifty_is_excellent() {
        assert_eq!(MarginTier::from_margin(dec!(49.99)), MarginTier::Good);
        assert_eq!(MarginTier::from_margin(dec!(50)), MarginTier::Excellent);
        assert_eq!(MarginTier::from_margin(dec!(100)), MarginTier::Excellent);
    }

    #[test]
    fn tiers_are_ordered_worst_to_best() {
        let mut sorted = MarginTier::ALL;
        sorted.sort();

        assert_eq!(sorted, MarginTier::ALL);
        assert!(MarginTier::Loss < MarginTier::Excellent);
    }

    // =========================================================================
    // as_str / parse tests
    // =========================================================================

    #[test]
    fn parse_accepts_every_as_str_value() {
        for tier in MarginTier::ALL {
            assert_eq!(MarginTier::parse(tier.as_str()), Some(tier));
        }
    }

    #[test]
    fn parse_rejects_unknown_code() {
        assert_eq!(MarginTier::parse("great"), None);
    }

    #[test]
    fn indicator_messages_are_distinct() {
        let mut messages: Vec<_> = MarginTier::ALL
            .iter()
            .map(|t| t.indicator_message())
            .collect();
        messages.sort();
        messages.dedup();

        assert_eq!(messages.len(), MarginTier::ALL.len());
    }

    #[test]
    fn indicator_colors_are_distinct() {
        let mut colors: Vec<_> = MarginTier::ALL.iter().map(|t| t.indicator_color()).collect();
        colors.sort();
        colors.dedup();

        assert_eq!(colors.len(), MarginTier::ALL.len());
    }
}
