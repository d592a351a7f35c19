//! Number formatting for the stats report.

///
/// Group the digits of a rendered number in thousands with commas, leaving
/// any fractional part unchanged. Strings whose integer part is not plain
/// digits (`NaN`, `inf`) pass through untouched.
///
pub fn group_thousands(value: &str) -> String {
    let (integer, fraction) = match value.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (value, None),
    };

    if integer.is_empty() || !integer.bytes().all(|b| b.is_ascii_digit()) {
        return value.to_string();
    }

    let mut grouped = String::with_capacity(value.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// An integer count, thousands-grouped.
pub fn fmt_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// A real number to exactly one decimal place, thousands-grouped. `NaN`
/// renders as the literal `NaN`.
pub fn fmt_real(value: f64) -> String {
    group_thousands(&format!("{:.1}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("0", "0")]
    #[case("999", "999")]
    #[case("1000", "1,000")]
    #[case("1234567", "1,234,567")]
    #[case("1234567.8", "1,234,567.8")]
    #[case("12.75", "12.75")]
    #[case("NaN", "NaN")]
    fn test_group_thousands(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(group_thousands(input), expected);
    }

    #[rstest]
    fn test_fmt_count() {
        assert_eq!(fmt_count(1234567), "1,234,567");
    }

    #[rstest]
    fn test_fmt_real_one_decimal() {
        assert_eq!(fmt_real(1234.0), "1,234.0");
        assert_eq!(fmt_real(1234.56), "1,234.6");
    }

    #[rstest]
    fn test_fmt_real_nan_passes_through() {
        assert_eq!(fmt_real(f64::NAN), "NaN");
    }
}
