//! Narrative text for the exported report.
//!
//! The analysis sentence follows the five-way [`MarginTier`], while the
//! recommendation list uses a separate, coarser three-way split
//! ([`RecommendationBucket`]). The two tables are kept apart on purpose: a
//! margin of 20% reads as "average" in the analysis but gets the same advice
//! as 29%.
//!
//! # Example
//!
//! ```
//! use margin_core::{RawInput, compute, validate};
//! use margin_core::report::{RecommendationBucket, compose};
//!
//! let validated = validate(&RawInput::new("100000", "60000")).unwrap();
//! let narrative = compose(&compute(&validated.input));
//!
//! assert!(narrative.summary_line.starts_with("Your gross profit of ₹40,000 represents 40.00%"));
//! assert_eq!(narrative.bucket, RecommendationBucket::Strong);
//! assert_eq!(narrative.recommendations.len(), 4);
//! ```

use rust_decimal::Decimal;
use serde::Serialize;

use crate::format::{format_currency, format_percentage};
use crate::{CalculationResult, MarginTier};

const MODERATE_FLOOR: Decimal = Decimal::from_parts(15, 0, 0, false, 0);
const STRONG_FLOOR: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

const IMPROVE_RECOMMENDATIONS: &[&str] = &[
    "Review your pricing strategy to ensure you're capturing the full value of your products/services",
    "Analyze and reduce your cost of goods sold where possible",
    "Consider focusing more on high-margin products or services",
    "Negotiate better terms with suppliers",
];

const OPTIMIZE_RECOMMENDATIONS: &[&str] = &[
    "Look for opportunities to further optimize your costs",
    "Evaluate your product/service mix to emphasize higher-margin offerings",
    "Consider modest price increases if your market will bear it",
];

const SUSTAIN_RECOMMENDATIONS: &[&str] = &[
    "Maintain your current operational efficiencies",
    "Consider expanding your high-margin product/service lines",
    "Reinvest profits into growth opportunities",
    "Monitor competitors to maintain your competitive advantage",
];

const CONTEXT_PARAGRAPH: &str = "The gross profit margin is a key indicator of your business's \
financial health, measuring the efficiency of your core operations. It represents the percentage \
of each rupee of revenue that is left after accounting for the direct costs of producing your \
goods or services.";

/// Margin bucket used to pick the recommendation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RecommendationBucket {
    /// Margin below 15%.
    NeedsImprovement,
    /// Margin from 15% up to 30%.
    Moderate,
    /// Margin of 30% or more.
    Strong,
}

impl RecommendationBucket {
    pub fn from_margin(margin: Decimal) -> Self {
        if margin < MODERATE_FLOOR {
            Self::NeedsImprovement
        } else if margin < STRONG_FLOOR {
            Self::Moderate
        } else {
            Self::Strong
        }
    }

    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            Self::NeedsImprovement => IMPROVE_RECOMMENDATIONS,
            Self::Moderate => OPTIMIZE_RECOMMENDATIONS,
            Self::Strong => SUSTAIN_RECOMMENDATIONS,
        }
    }
}

/// Text blocks of the exported report for one result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportNarrative {
    pub summary_line: String,
    pub bucket: RecommendationBucket,
    pub recommendations: &'static [&'static str],
}

/// Builds the analysis sentence and recommendation list for a result.
pub fn compose(result: &CalculationResult) -> ReportNarrative {
    let summary_line = format!(
        "Your gross profit of {} represents {} of your total revenue. {}",
        format_currency(result.gross_profit()),
        format_percentage(result.gross_profit_margin()),
        tier_sentence(result.tier()),
    );
    let bucket = RecommendationBucket::from_margin(result.gross_profit_margin());

    ReportNarrative {
        summary_line,
        bucket,
        recommendations: bucket.recommendations(),
    }
}

/// Fixed paragraph printed after the analysis sentence.
pub fn context_paragraph() -> &'static str {
    CONTEXT_PARAGRAPH
}

fn tier_sentence(tier: MarginTier) -> &'static str {
    match tier {
        MarginTier::Loss => "Your business is currently operating at a loss for this period.",
        MarginTier::BelowAverage => {
            "This is below the average margin. Consider strategies to reduce costs or increase prices."
        }
        MarginTier::Average => "This is an average margin. Your business is doing reasonably well.",
        MarginTier::Good => {
            "This is a good margin. Your business is performing above average in terms of profitability."
        }
        MarginTier::Excellent => "This is an excellent margin! Your business is highly profitable.",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{RawInput, compute, validate};

    fn narrative_for(
        revenue: &str,
        cost: &str,
    ) -> ReportNarrative {
        let validated = validate(&RawInput::new(revenue, cost)).expect("test input should validate");
        compose(&compute(&validated.input))
    }

    // =========================================================================
    // RecommendationBucket tests
    // =========================================================================

    #[test]
    fn bucket_boundaries() {
        assert_eq!(
            RecommendationBucket::from_margin(dec!(-20)),
            RecommendationBucket::NeedsImprovement
        );
        assert_eq!(
            RecommendationBucket::from_margin(dec!(14.99)),
            RecommendationBucket::NeedsImprovement
        );
        assert_eq!(
            RecommendationBucket::from_margin(dec!(15)),
            RecommendationBucket::Moderate
        );
        assert_eq!(
            RecommendationBucket::from_margin(dec!(29.99)),
            RecommendationBucket::Moderate
        );
        assert_eq!(
            RecommendationBucket::from_margin(dec!(30)),
            RecommendationBucket::Strong
        );
        assert_eq!(
            RecommendationBucket::from_margin(dec!(95)),
            RecommendationBucket::Strong
        );
    }

    #[test]
    fn bucket_lists_have_expected_lengths() {
        assert_eq!(RecommendationBucket::NeedsImprovement.recommendations().len(), 4);
        assert_eq!(RecommendationBucket::Moderate.recommendations().len(), 3);
        assert_eq!(RecommendationBucket::Strong.recommendations().len(), 4);
    }

    // =========================================================================
    // compose tests
    // =========================================================================

    #[test]
    fn compose_good_margin() {
        let narrative = narrative_for("100000", "60000");

        assert_eq!(
            narrative.summary_line,
            "Your gross profit of ₹40,000 represents 40.00% of your total revenue. \
             This is a good margin. Your business is performing above average in terms of profitability."
        );
        assert_eq!(narrative.bucket, RecommendationBucket::Strong);
        assert_eq!(
            narrative.recommendations[0],
            "Maintain your current operational efficiencies"
        );
    }

    #[test]
    fn compose_loss_keeps_negative_values() {
        let narrative = narrative_for("100", "150");

        assert_eq!(
            narrative.summary_line,
            "Your gross profit of -₹50 represents -50.00% of your total revenue. \
             Your business is currently operating at a loss for this period."
        );
        assert_eq!(narrative.bucket, RecommendationBucket::NeedsImprovement);
    }

    #[test]
    fn loss_and_below_average_share_recommendations() {
        let loss = narrative_for("100", "120");
        let below_average = narrative_for("100", "90");

        assert_ne!(loss.summary_line, below_average.summary_line);
        assert_eq!(loss.recommendations, below_average.recommendations);
    }

    #[test]
    fn good_and_excellent_share_recommendations() {
        let good = narrative_for("100", "65");
        let excellent = narrative_for("100", "20");

        assert!(good.summary_line.contains("This is a good margin."));
        assert!(excellent.summary_line.contains("This is an excellent margin!"));
        assert_eq!(good.recommendations, excellent.recommendations);
    }

    #[test]
    fn average_margin_gets_optimize_list() {
        let narrative = narrative_for("100", "80");

        assert!(narrative.summary_line.ends_with(
            "This is an average margin. Your business is doing reasonably well."
        ));
        assert_eq!(narrative.bucket, RecommendationBucket::Moderate);
        assert_eq!(narrative.recommendations.len(), 3);
    }

    #[test]
    fn every_tier_has_its_own_sentence() {
        let mut sentences: Vec<_> = MarginTier::ALL.iter().map(|t| tier_sentence(*t)).collect();
        sentences.sort();
        sentences.dedup();

        assert_eq!(sentences.len(), MarginTier::ALL.len());
    }
}
