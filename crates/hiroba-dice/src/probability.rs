//! Zorome probabilities and their display formats.
//!
//! The first die fixes the face and every further die must match it with
//! probability 1/6, so `n` dice form a zorome with probability `6^-(n-1)`.

/// Probability that `dice_count` dice all show the same face.
///
/// Returns 0 for a non-positive count.
pub fn calculate_zorome_probability(dice_count: i32) -> f64 {
    if dice_count <= 0 {
        return 0.0;
    }
    1.0 / 6f64.powi(dice_count - 1)
}

/// Render a probability as a percentage.
///
/// Uses two decimal places from 1% upward and four below, so very small
/// probabilities stay visibly non-zero. Ties round up.
pub fn format_probability(probability: f64) -> String {
    let percent = probability * 100.0;
    let digits = if probability >= 0.01 { 2 } else { 4 };
    format!("{}%", fixed_half_up(percent, digits))
}

/// `value` with `digits` decimals, rounding exact ties away from zero.
///
/// `format!("{:.2}")` rounds ties to even, which would show 1.125 as 1.12.
fn fixed_half_up(value: f64, digits: usize) -> String {
    let scale = 10f64.powi(digits as i32);
    let rounded = (value * scale + 0.5).floor() / scale;
    format!("{rounded:.digits$}")
}

/// Render the zorome probability for `dice_count` dice as `1/<6^(n-1)>`.
///
/// Counts of 0 and 1 both render as `1/1`. Denominators too large for
/// `u128` fall back to exponent notation.
pub fn format_probability_as_fraction(dice_count: u32) -> String {
    let exponent = dice_count.saturating_sub(1);
    match 6u128.checked_pow(exponent) {
        Some(denominator) => format!("1/{denominator}"),
        None => format!("1/6^{exponent}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn probability_non_positive_is_zero() {
        assert_eq!(calculate_zorome_probability(0), 0.0);
        assert_eq!(calculate_zorome_probability(-3), 0.0);
    }

    #[test]
    fn probability_small_counts() {
        assert_eq!(calculate_zorome_probability(1), 1.0);
        assert!((calculate_zorome_probability(2) - 1.0 / 6.0).abs() < 1e-12);
        assert!((calculate_zorome_probability(3) - 1.0 / 36.0).abs() < 1e-12);
    }

    #[test]
    fn format_rounds_ties_up() {
        assert_eq!(format_probability(0.01125), "1.13%");
    }

    #[test]
    fn format_two_decimals_above_one_percent() {
        assert_eq!(format_probability(0.5), "50.00%");
        assert_eq!(format_probability(0.01), "1.00%");
    }

    #[test]
    fn format_four_decimals_below_one_percent() {
        assert_eq!(format_probability(0.005), "0.5000%");
        assert_eq!(format_probability(1.0 / 1296.0), "0.0772%");
    }

    #[test]
    fn fraction_format() {
        assert_eq!(format_probability_as_fraction(1), "1/1");
        assert_eq!(format_probability_as_fraction(2), "1/6");
        assert_eq!(format_probability_as_fraction(5), "1/1296");
        assert_eq!(format_probability_as_fraction(10), "1/10077696");
    }

    #[test]
    fn fraction_format_huge_count() {
        assert_eq!(format_probability_as_fraction(200), "1/6^199");
    }

    proptest! {
        #[test]
        fn probability_matches_formula(n in 1i32..=30) {
            let expected = 6f64.powi(-(n - 1));
            let actual = calculate_zorome_probability(n);
            prop_assert!((actual - expected).abs() <= expected * 1e-12);
        }
    }
}
