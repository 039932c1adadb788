//! # Numeric Input Parsing
//!
//! Form fields arrive as raw text. Numeric fields are parsed permissively:
//! anything that is not a usable number becomes `0` instead of being
//! rejected, and the field stays editable.
//!
//! ```rust
//! use egy_core::input::{parse_count, parse_decimal};
//!
//! assert_eq!(parse_decimal("2.5"), 2.5);
//! assert_eq!(parse_decimal("abc"), 0.0);
//! assert_eq!(parse_count("12.9"), 12);
//! ```

/// Parse any finite decimal. Unparseable, `NaN` and infinite input yield `0.0`.
pub fn parse_decimal(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        // Collapse -0.0 so it serializes as 0.0
        Ok(value) if value.is_finite() && value != 0.0 => value,
        _ => 0.0,
    }
}

/// Parse a decimal that must be `>= 0`. Negative input yields `0.0`.
pub fn parse_non_negative_decimal(raw: &str) -> f64 {
    let value = parse_decimal(raw);
    if value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parse a non-negative integer count.
///
/// Fractional input is truncated toward zero, matching a number field that
/// accepts `12.9` as `12`.
pub fn parse_count(raw: &str) -> u64 {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<u64>() {
        return value;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value.trunc() as u64,
        _ => 0,
    }
}

/// Normalize an optional integer identifier.
///
/// Returns the trimmed digits, or an empty string when the input is not a
/// non-negative integer.
pub fn normalize_id(raw: &str) -> String {
    let trimmed = raw.trim();
    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        trimmed.to_string()
    } else {
        String::new()
    }
}

/// Format a number for an input field without a trailing `.0`
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("2.1"), 2.1);
        assert_eq!(parse_decimal("  -500.25 "), -500.25);
        assert_eq!(parse_decimal("1e3"), 1000.0);
        assert_eq!(parse_decimal(""), 0.0);
        assert_eq!(parse_decimal("twelve"), 0.0);
        assert_eq!(parse_decimal("NaN"), 0.0);
        assert_eq!(parse_decimal("inf"), 0.0);
    }

    #[test]
    fn test_negative_zero_is_collapsed() {
        let value = parse_decimal("-0");
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
    }

    #[test]
    fn test_parse_non_negative_decimal() {
        assert_eq!(parse_non_negative_decimal("19.99"), 19.99);
        assert_eq!(parse_non_negative_decimal("-3"), 0.0);
        assert_eq!(parse_non_negative_decimal("x"), 0.0);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("1500"), 1500);
        assert_eq!(parse_count("12.9"), 12);
        assert_eq!(parse_count("-4"), 0);
        assert_eq!(parse_count("lots"), 0);
        assert_eq!(parse_count(""), 0);
    }

    #[test]
    fn test_normalize_id() {
        assert_eq!(normalize_id(" 42 "), "42");
        assert_eq!(normalize_id("4a"), "");
        assert_eq!(normalize_id("-1"), "");
        assert_eq!(normalize_id(""), "");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(500.0), "500");
        assert_eq!(format_number(0.03), "0.03");
    }

    proptest! {
        #[test]
        fn prop_unparseable_decimal_is_exactly_zero(raw in "[a-zA-Z ,;#]*") {
            let value = parse_decimal(&raw);
            prop_assert_eq!(value, 0.0);
            prop_assert_eq!(parse_non_negative_decimal(&raw), 0.0);
            prop_assert_eq!(parse_count(&raw), 0);
        }

        #[test]
        fn prop_decimal_is_always_finite(raw in "\\PC*") {
            prop_assert!(parse_decimal(&raw).is_finite());
            prop_assert!(parse_non_negative_decimal(&raw) >= 0.0);
        }
    }
}
