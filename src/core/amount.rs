//! Free-text amount normalization.
//!
//! Filings write amounts with currency symbols, thousands separators,
//! non-breaking spaces and accounting-style negatives (`(1,234.56)`).

/// Normalize an optional raw amount. `None` in, `None` out.
pub fn normalize_amount(raw: Option<&str>) -> Option<f64> {
    parse_amount(raw?)
}

/// Parse a free-text amount into a finite `f64`.
///
/// Steps, in order:
/// 1. trim surrounding whitespace
/// 2. drop non-breaking spaces (U+00A0) and commas
/// 3. turn `(` into `-` and drop `)`
/// 4. drop every character other than ASCII digits, `.` and `-`
/// 5. parse what is left; an empty or malformed numeral yields `None`
///
/// ```
/// use grants990::core::parse_amount;
///
/// assert_eq!(parse_amount("$1,000.00"), Some(1000.0));
/// assert_eq!(parse_amount("(500)"), Some(-500.0));
/// assert_eq!(parse_amount("USD"), None);
/// ```
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter_map(|c| match c {
            '\u{a0}' | ',' | ')' => None,
            '(' => Some('-'),
            c if c.is_ascii_digit() || c == '.' || c == '-' => Some(c),
            _ => None,
        })
        .collect();

    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
