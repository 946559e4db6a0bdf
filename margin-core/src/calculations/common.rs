//! Common utility functions for margin calculations.
//!
//! This module provides the rounding helpers shared by the formatter, the
//! presentation adapter and the report composer. The metric engine itself
//! never rounds.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to `dp` decimal places using half-up rounding.
///
/// Values exactly halfway are rounded away from zero, matching how amounts
/// are rounded for display.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use margin_core::calculations::common::round_dp_half_up;
///
/// assert_eq!(round_dp_half_up(dec!(39999.5), 0), dec!(40000));
/// assert_eq!(round_dp_half_up(dec!(-0.125), 2), dec!(-0.13));
/// ```
pub fn round_dp_half_up(
    value: Decimal,
    dp: u32,
) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use margin_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(33.3333)), dec!(33.33));
/// assert_eq!(round_half_up(dec!(66.665)), dec!(66.67));
/// assert_eq!(round_half_up(dec!(-12.345)), dec!(-12.35)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    round_dp_half_up(value, 2)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(40.004));

        assert_eq!(result, dec!(40.00));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(40.005));

        assert_eq!(result, dec!(40.01));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-50.005));

        assert_eq!(result, dec!(-50.01)); // Away from zero
    }

    #[test]
    fn round_half_up_handles_repeating_fraction() {
        let result = round_half_up(dec!(100) / dec!(3));

        assert_eq!(result, dec!(33.33));
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        let result = round_half_up(dec!(60.00));

        assert_eq!(result, dec!(60.00));
    }

    // =========================================================================
    // round_dp_half_up tests
    // =========================================================================

    #[test]
    fn round_dp_half_up_to_whole_units() {
        assert_eq!(round_dp_half_up(dec!(1234.49), 0), dec!(1234));
        assert_eq!(round_dp_half_up(dec!(1234.5), 0), dec!(1235));
        assert_eq!(round_dp_half_up(dec!(-1234.5), 0), dec!(-1235));
    }

    #[test]
    fn round_dp_half_up_to_one_place() {
        assert_eq!(round_dp_half_up(dec!(1.25), 1), dec!(1.3));
    }
}
