//! Bound-field sanitizing and parsing.

/// Normalizes a bound string for parsing.
///
/// Accepts both `.` and `,` as the decimal separator and drops every
/// character outside `[0-9.\-eE]`.
#[must_use]
pub fn sanitize(text: &str) -> String {
    text.replace(',', ".")
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | 'e' | 'E'))
        .collect()
}

/// Parses a sanitized bound, or `None` if it is not a number.
#[must_use]
pub fn parse_bound(text: &str) -> Option<f64> {
    sanitize(text).parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn accepts_comma_decimals() {
        assert_eq!(sanitize("0,5"), "0.5");
        assert_relative_eq!(parse_bound("0,5").expect("number"), 0.5);
    }

    #[test]
    fn strips_foreign_characters() {
        assert_eq!(sanitize(" 1.5x "), "1.5");
        assert_eq!(sanitize("-2e3 m"), "-2e3");
        assert_relative_eq!(parse_bound("-2e3 m").expect("number"), -2000.0);
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(parse_bound("abc"), None);
        assert_eq!(parse_bound(""), None);
        assert_eq!(parse_bound("1.2.3"), None);
    }
}
