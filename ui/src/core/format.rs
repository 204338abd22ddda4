//! Formatting helpers for presenting precomputed analytics.
//!
//! Whole numbers round half toward positive infinity (`2.5 -> 3`, `-2.5 -> -2`).
//! Fixed-decimal output rounds half away from zero on the scaled value
//! (`0.125 -> 0.13`, `-0.125 -> -0.13`).

/// Shown wherever a source value is absent.
pub const PLACEHOLDER: &str = "—";

/// Round half toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Fixed-point string with `places` decimals.
pub fn format_fixed(value: f64, places: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let factor = 10f64.powi(places as i32);
    let mut rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        // normalise -0.0
        rounded = 0.0;
    }
    format!("{rounded:.places$}")
}

/// `67.4 -> "67%"`; `None -> "—"`.
pub fn format_whole_percent(value: Option<f64>) -> String {
    whole(value).map(|v| format!("{v}%")).unwrap_or_else(placeholder)
}

/// `2.0 -> "2 posts"`.
pub fn format_posts(value: Option<f64>) -> String {
    whole(value)
        .map(|v| format!("{v} posts"))
        .unwrap_or_else(placeholder)
}

/// One decimal, used for engagement indices.
pub fn format_tenths(value: Option<f64>) -> String {
    value
        .filter(|v| v.is_finite())
        .map(|v| format_fixed(v, 1))
        .unwrap_or_else(placeholder)
}

/// Ratio in `0..=1` rendered as a percentage with `places` decimals (`0.804 -> "80.4%"`).
pub fn format_ratio_percent(ratio: f64, places: usize) -> String {
    if !ratio.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("{}%", format_fixed(ratio * 100.0, places))
}

/// Integer count with thousands separators (`10000 -> "10,000"`).
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parse a formatted number back, `0.0` when it does not parse.
pub fn parse_or_zero(display: &str) -> f64 {
    display
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn whole(value: Option<f64>) -> Option<i64> {
    value
        .filter(|v| v.is_finite())
        .map(|v| round_half_up(v) as i64)
}

fn placeholder() -> String {
    PLACEHOLDER.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_rounds_half_up() {
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(0.6449, 2), "0.64");
        assert_eq!(format_fixed(0.0, 2), "0.00");
        assert_eq!(format_fixed(-0.0001, 2), "0.00");
        assert_eq!(format_fixed(0.2206, 3), "0.221");
    }

    #[test]
    fn fixed_rounds_negative_halves_away_from_zero() {
        assert_eq!(format_fixed(-0.125, 2), "-0.13");
        assert_eq!(format_fixed(-0.5, 0), "-1");
        assert_eq!(format_fixed(-0.0123, 3), "-0.012");
    }

    #[test]
    fn whole_numbers_round_toward_positive_infinity() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
    }

    #[test]
    fn whole_percent_and_posts() {
        assert_eq!(format_whole_percent(Some(67.0)), "67%");
        assert_eq!(format_whole_percent(Some(88.5)), "89%");
        assert_eq!(format_whole_percent(None), PLACEHOLDER);
        assert_eq!(format_posts(Some(2.0)), "2 posts");
        assert_eq!(format_posts(Some(f64::NAN)), PLACEHOLDER);
    }

    #[test]
    fn tenths_keeps_trailing_zero() {
        assert_eq!(format_tenths(Some(44.0)), "44.0");
        assert_eq!(format_tenths(Some(57.8)), "57.8");
        assert_eq!(format_tenths(None), PLACEHOLDER);
    }

    #[test]
    fn ratio_and_count() {
        assert_eq!(format_ratio_percent(0.804, 1), "80.4%");
        assert_eq!(format_ratio_percent(0.196, 1), "19.6%");
        assert_eq!(format_count(10_000), "10,000");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn parse_or_zero_defaults() {
        assert_eq!(parse_or_zero("0.64"), 0.64);
        assert_eq!(parse_or_zero("—"), 0.0);
        assert_eq!(parse_or_zero(""), 0.0);
    }
}
