use std::fmt::Write as _;

use margin_core::RawInput;
use margin_core::presentation::SummaryPanel;

/// Current form fields, shown exactly as typed.
pub fn render_fields(raw: &RawInput) -> String {
    format!(
        "Revenue (₹):            {}\nCost of Goods Sold (₹): {}\n",
        raw.revenue_text, raw.cost_text
    )
}

/// The results panel: gross profit, margin and the tier message.
pub fn render_summary(panel: &SummaryPanel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Results");
    let _ = writeln!(out, "  Gross Profit:        {}", panel.gross_profit);
    let _ = writeln!(out, "  Gross Profit Margin: {}", panel.gross_profit_margin);
    let _ = writeln!(out, "  {}", panel.indicator_message);
    out
}

#[cfg(test)]
mod tests {
    use margin_core::presentation::summary_panel;
    use margin_core::{compute, validate};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn render_fields_shows_raw_text() {
        let text = render_fields(&RawInput::new("1,00,000", "abc"));

        assert_eq!(
            text,
            "Revenue (₹):            1,00,000\nCost of Goods Sold (₹): abc\n"
        );
    }

    #[test]
    fn render_summary_default_sample() {
        let validated = validate(&RawInput::default()).unwrap();
        let text = render_summary(&summary_panel(&compute(&validated.input)));

        assert_eq!(
            text,
            "Results\n\
             \x20 Gross Profit:        ₹40,000\n\
             \x20 Gross Profit Margin: 40.00%\n\
             \x20 Good margin. Your business is performing above average.\n"
        );
    }
}
