//! Coercion of raw year labels and value cells.

use std::sync::LazyLock;

use regex::Regex;

/// A strict decimal optionally followed by a lowercase footnote flag (`81.1 e`, `79.3 bep`).
static VALUE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?)\s*(?:[a-z]+)?$").expect("value pattern is valid")
});

/// Parses a year label such as `2020`, `2020 ` or `Y2020`.
///
/// An alphabetic prefix is stripped; the rest must be ASCII digits.
pub fn parse_year(label: &str) -> Option<i32> {
    let digits = label.trim().trim_start_matches(|ch: char| ch.is_ascii_alphabetic());
    if digits.is_empty() || !digits.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Parses a value cell, stripping a footnote flag.
///
/// Returns `None` for the missing marker `:` (flagged or not), comma decimals,
/// embedded spaces, negatives and any other text.
pub fn parse_value(cell: &str) -> Option<f64> {
    let captures = VALUE_PATTERN.captures(cell.trim())?;
    let value: f64 = captures.get(1)?.as_str().parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2020"), Some(2020));
        assert_eq!(parse_year(" 2020 "), Some(2020));
        assert_eq!(parse_year("Y2020"), Some(2020));
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("Y"), None);
        assert_eq!(parse_year("2019M01"), None);
        assert_eq!(parse_year("unit,sex,age,geo\\time"), None);
    }

    #[test]
    fn test_parse_value_strips_footnotes() {
        assert_eq!(parse_value("81.1 e"), Some(81.1));
        assert_eq!(parse_value("79.3 bep"), Some(79.3));
        assert_eq!(parse_value(" 78.4 "), Some(78.4));
        assert_eq!(parse_value("78"), Some(78.0));
        assert_eq!(parse_value("81.1e"), Some(81.1));
    }

    #[test]
    fn test_parse_value_rejects_missing_and_malformed() {
        for cell in [":", ": ", ": c", "78,6", "84 , 3", "N/A", "", "-1.0", "e 81.1", "81.1 E"] {
            assert_eq!(parse_value(cell), None, "{cell:?} should be rejected");
        }
    }

    proptest! {
        #[test]
        fn flagged_values_parse_to_their_number(tenths in 0u32..1500, flag in "[a-z]{0,3}") {
            let number = format!("{}.{}", tenths / 10, tenths % 10);
            let cell = format!("{number} {flag}");
            let expected: f64 = number.parse().unwrap();
            prop_assert_eq!(parse_value(&cell), Some(expected));
        }

        #[test]
        fn cells_with_missing_marker_never_parse(
            prefix in "[0-9. ]{0,4}",
            suffix in "[a-z ]{0,3}"
        ) {
            let cell = format!("{prefix}:{suffix}");
            prop_assert_eq!(parse_value(&cell), None);
        }

        #[test]
        fn parsed_values_are_finite_and_non_negative(cell in "\\PC{0,12}") {
            if let Some(value) = parse_value(&cell) {
                prop_assert!(value.is_finite());
                prop_assert!(value >= 0.0);
            }
        }
    }
}
