//! Numeric normalization utilities.

/// Parses a string as a finite f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a currency amount, ignoring `$` signs and thousands separators.
pub fn parse_amount(value: &str) -> Option<f64> {
    let cleaned: String = value.chars().filter(|ch| !matches!(ch, '$' | ',')).collect();
    parse_f64(&cleaned)
}
