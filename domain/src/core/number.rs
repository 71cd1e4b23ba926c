//! Numeric helpers for the domain layer.

/// Round to the nearest integer, with halves going towards positive infinity.
///
/// `f64::round` rounds halves away from zero, which differs for negative
/// values (`-2.5` becomes `-3.0`). Assessment figures round `-2.5` to `-2.0`.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Replace NaN and infinities with zero.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Format a number for display: thousands separators and at most three
/// fractional digits, trailing zeros dropped (`1234.5` becomes `1,234.5`).
pub fn format_number(value: f64) -> String {
    let value = finite_or_zero(value);
    let rounded = (value * 1000.0).round() / 1000.0;
    let negative = rounded < 0.0;

    let fixed = format!("{:.3}", rounded.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.4), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(0.0), 0.0);
    }

    #[test]
    fn test_finite_or_zero() {
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(12.5), 12.5);
    }

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(16000.0), "16,000");
        assert_eq!(format_number(1234567.0), "1,234,567");
    }

    #[test]
    fn test_format_number_fractions() {
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(0.12345), "0.123");
        assert_eq!(format_number(-2500.25), "-2,500.25");
        assert_eq!(format_number(f64::NAN), "0");
    }
}
