//! Data shapes for the display surfaces.
//!
//! Chart and summary views read these instead of [`CalculationResult`]
//! directly. Nothing here re-derives a number: bars, slices and gauge values
//! all come straight from the result, and rounding to two decimals happens
//! only on the donut percentages.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculations::common::round_half_up;
use crate::format::{format_currency, format_percentage};
use crate::{CalculationResult, MarginTier};

/// Margin at or above which the gauge label fits inside the filled part.
const GAUGE_LABEL_INSIDE_FROM: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// Identity of a chart series. Colors are fixed per key so every chart uses
/// the same color for the same quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SeriesKey {
    Revenue,
    Cogs,
    GrossProfit,
}

impl SeriesKey {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Revenue => "Revenue",
            Self::Cogs => "COGS",
            Self::GrossProfit => "Gross Profit",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Revenue => "#245e4f",
            Self::Cogs => "#e9c46a",
            Self::GrossProfit => "#7ac9a7",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarPoint {
    pub key: SeriesKey,
    pub label: &'static str,
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DonutSlice {
    pub key: SeriesKey,
    pub label: &'static str,
    pub value: Decimal,
    /// Share of revenue, rounded to two decimals.
    pub percentage_of_revenue: Decimal,
}

/// Everything the chart views need for one result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    /// Revenue, COGS, Gross Profit, always in that order.
    pub bars: Vec<BarPoint>,
    /// COGS and Gross Profit.
    pub donut: Vec<DonutSlice>,
    /// Margin clamped to `0..=100` for drawing the gauge fill.
    pub gauge_fill_percent: Decimal,
    /// Whether the gauge label is drawn inside the fill.
    pub gauge_label_inside: bool,
    /// Unclamped margin text for the gauge label.
    pub margin_label: String,
    pub tier: MarginTier,
}

/// Formatted values for the results panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryPanel {
    pub gross_profit: String,
    pub gross_profit_margin: String,
    pub tier: MarginTier,
    pub indicator_message: &'static str,
    pub indicator_color: &'static str,
}

/// One line of the summary table in the exported report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub label: &'static str,
    pub value: String,
    pub emphasized: bool,
}

/// Maps a result into bar, donut and gauge data.
pub fn to_series(result: &CalculationResult) -> ChartSeries {
    let margin = result.gross_profit_margin();

    let bars = [
        (SeriesKey::Revenue, result.revenue()),
        (SeriesKey::Cogs, result.cost()),
        (SeriesKey::GrossProfit, result.gross_profit()),
    ]
    .into_iter()
    .map(|(key, value)| BarPoint {
        key,
        label: key.label(),
        value,
    })
    .collect();

    let donut = [
        // Validation guarantees the complement fits.
        (SeriesKey::Cogs, result.cost(), Decimal::ONE_HUNDRED - margin),
        (SeriesKey::GrossProfit, result.gross_profit(), margin),
    ]
    .into_iter()
    .map(|(key, value, share)| DonutSlice {
        key,
        label: key.label(),
        value,
        percentage_of_revenue: round_half_up(share),
    })
    .collect();

    ChartSeries {
        bars,
        donut,
        gauge_fill_percent: margin.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED),
        gauge_label_inside: margin >= GAUGE_LABEL_INSIDE_FROM,
        margin_label: format_percentage(margin),
        tier: result.tier(),
    }
}

/// Maps a result into the formatted results panel.
pub fn summary_panel(result: &CalculationResult) -> SummaryPanel {
    let tier = result.tier();

    SummaryPanel {
        gross_profit: format_currency(result.gross_profit()),
        gross_profit_margin: format_percentage(result.gross_profit_margin()),
        tier,
        indicator_message: tier.indicator_message(),
        indicator_color: tier.indicator_color(),
    }
}

/// Rows of the report's summary table.
pub fn report_rows(result: &CalculationResult) -> Vec<ReportRow> {
    vec![
        ReportRow {
            label: "Total Revenue",
            value: format_currency(result.revenue()),
            emphasized: false,
        },
        ReportRow {
            label: "Cost of Goods Sold (COGS)",
            value: format_currency(result.cost()),
            emphasized: false,
        },
        ReportRow {
            label: "Gross Profit",
            value: format_currency(result.gross_profit()),
            emphasized: true,
        },
        ReportRow {
            label: "Gross Profit Margin",
            value: format_percentage(result.gross_profit_margin()),
            emphasized: true,
        },
    ]
}
