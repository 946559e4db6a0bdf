//! Display formatting for amounts and percentages.
//!
//! Amounts are shown in Indian Rupees with en-IN digit grouping and no
//! fraction digits. Percentages always carry two decimals.

use rust_decimal::Decimal;

use crate::calculations::common::{round_dp_half_up, round_half_up};

pub const CURRENCY_SYMBOL: &str = "₹";

const THOUSAND: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);
const MILLION: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Formats an amount as whole rupees, e.g. `₹1,00,000` or `-₹40,000`.
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_dp_half_up(value, 0);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().trunc().normalize().to_string();

    format!("{sign}{CURRENCY_SYMBOL}{}", group_indian(&digits))
}

/// Formats a percentage with two decimals, e.g. `40.00%` or `-50.00%`.
pub fn format_percentage(value: Decimal) -> String {
    format!("{:.2}%", round_half_up(value))
}

/// Short label for a chart axis tick: `1.5M`, `40K`, or the plain value.
pub fn format_axis_tick(value: Decimal) -> String {
    if value >= MILLION {
        format!("{:.1}M", round_dp_half_up(value / MILLION, 1))
    } else if value >= THOUSAND {
        format!("{:.0}K", round_dp_half_up(value / THOUSAND, 0))
    } else {
        value.normalize().to_string()
    }
}

/// Inserts en-IN separators into a run of ASCII digits: the last three
/// digits form one group, everything before is grouped in twos.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::with_capacity(head.len() / 2 + 1);
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
