use std::fmt::Write as _;

use margin_core::format::{format_axis_tick, format_currency, format_percentage};
use margin_core::presentation::ChartSeries;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Default width of bars and the gauge track, in characters.
pub const CHART_WIDTH: usize = 40;

const FILLED: char = '█';
const EMPTY: char = '░';
const LABEL_WIDTH: usize = 12;

/// Number of cells out of `width` for `part` of `whole`. Negative parts
/// draw nothing.
fn cells(
    part: Decimal,
    whole: Decimal,
    width: usize,
) -> usize {
    if whole <= Decimal::ZERO || part <= Decimal::ZERO {
        return 0;
    }
    (part / whole * Decimal::from(width))
        .round()
        .to_usize()
        .unwrap_or(0)
        .min(width)
}

/// Horizontal bar chart of revenue, COGS and gross profit.
pub fn render_bars(
    series: &ChartSeries,
    width: usize,
) -> String {
    let max = series
        .bars
        .iter()
        .map(|b| b.value)
        .max()
        .unwrap_or(Decimal::ZERO);

    let mut out = String::new();
    let _ = writeln!(out, "Financial Breakdown");
    for bar in &series.bars {
        let filled = cells(bar.value, max, width);
        let _ = writeln!(
            out,
            "  {:<LABEL_WIDTH$} {}{} {}",
            bar.label,
            FILLED.to_string().repeat(filled),
            " ".repeat(width - filled),
            format_currency(bar.value)
        );
    }
    let axis_end = format_axis_tick(max.max(Decimal::ZERO));
    let _ = writeln!(
        out,
        "  {:<LABEL_WIDTH$} 0{:>pad$}",
        "",
        axis_end,
        pad = width.saturating_sub(1)
    );
    out
}

/// Legend of the donut chart: each slice with its share of revenue.
pub fn render_donut(series: &ChartSeries) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Profit Margin Analysis");
    for slice in &series.donut {
        let _ = writeln!(
            out,
            "  {}: {} ({})",
            slice.label,
            format_percentage(slice.percentage_of_revenue),
            format_currency(slice.value)
        );
    }
    out
}

/// The margin gauge with its scale and tier message.
///
/// The fill is clamped to the track; the label always shows the real margin.
pub fn render_gauge(
    series: &ChartSeries,
    width: usize,
) -> String {
    let filled = cells(series.gauge_fill_percent, Decimal::ONE_HUNDRED, width);
    let mut track: Vec<char> = std::iter::repeat_n(FILLED, filled)
        .chain(std::iter::repeat_n(EMPTY, width - filled))
        .collect();

    let label: Vec<char> = series.margin_label.chars().collect();
    if series.gauge_label_inside && label.len() + 1 <= filled {
        track[1..=label.len()].copy_from_slice(&label);
    } else if label.len() + 1 <= width {
        let start = width - label.len() - 1;
        track[start..start + label.len()].copy_from_slice(&label);
    }

    let mut out = String::new();
    let _ = writeln!(out, "Gross Profit Margin Indicator");
    let _ = writeln!(out, "  [{}]", track.into_iter().collect::<String>());
    let _ = writeln!(out, "  {}", gauge_scale(width));
    let _ = writeln!(out, "  {}", series.tier.indicator_message());
    out
}

fn gauge_scale(width: usize) -> String {
    const MARKS: [&str; 5] = ["0%", "25%", "50%", "75%", "100%"];

    let mut line = vec![' '; width + 2];
    for (i, mark) in MARKS.iter().enumerate() {
        let center = 1 + width * i / 4;
        let start = center
            .saturating_sub(mark.len() / 2)
            .min(line.len().saturating_sub(mark.len()));
        for (offset, ch) in mark.chars().enumerate() {
            if let Some(slot) = line.get_mut(start + offset) {
                *slot = ch;
            }
        }
    }
    line.into_iter().collect::<String>().trim_end().to_string()
}
