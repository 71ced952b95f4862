use rust_decimal::{Decimal, RoundingStrategy};

/// Round a monetary value to 2 decimal places, half away from zero.
///
/// Applied at every point a value is emitted or accumulated, so downstream
/// sums never drift below cent precision.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Step a 1-based (year, month) pair forward by `offset` months.
pub fn add_months(year: i32, month: u32, offset: u32) -> (i32, u32) {
    let index = i64::from(year) * 12 + i64::from(month) - 1 + i64::from(offset);
    (
        index.div_euclid(12) as i32,
        (index.rem_euclid(12) + 1) as u32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round2_half_up() {
        assert_eq!(round2(dec!(1.005)), dec!(1.01));
        assert_eq!(round2(dec!(1.004)), dec!(1.00));
        assert_eq!(round2(dec!(2.675)), dec!(2.68));
        assert_eq!(round2(dec!(100)), dec!(100));
    }

    #[test]
    fn test_round2_truncates_long_fractions() {
        assert_eq!(round2(dec!(33.333333)), dec!(33.33));
        assert_eq!(round2(dec!(66.666666)), dec!(66.67));
    }

    #[test]
    fn test_add_months_same_year() {
        assert_eq!(add_months(2024, 1, 0), (2024, 1));
        assert_eq!(add_months(2024, 1, 11), (2024, 12));
    }

    #[test]
    fn test_add_months_crosses_years() {
        assert_eq!(add_months(2024, 11, 3), (2025, 2));
        assert_eq!(add_months(2024, 1, 36), (2027, 1));
        assert_eq!(add_months(2024, 12, 1), (2025, 1));
    }
}
