//! Null-safe numeric parsing for screener fields
//!
//! Screener exports mix plain numbers, thousands separators and percent
//! signs. Anything that does not parse to a finite number is "absent"
//! (`None`), never zero and never an error.

/// Parse a plain number, ignoring thousands separators and surrounding whitespace.
pub fn parse_number(value: &str) -> Option<f64> {
    parse_cleaned(&value.replace(',', ""))
}

/// Parse a number that may carry a `%` sign.
pub fn parse_percent(value: &str) -> Option<f64> {
    parse_cleaned(&value.replace(['%', ','], ""))
}

/// Optional-input variants used when a field may be missing from the row
pub fn parse_number_opt(value: Option<&str>) -> Option<f64> {
    value.and_then(parse_number)
}

pub fn parse_percent_opt(value: Option<&str>) -> Option<f64> {
    value.and_then(parse_percent)
}

fn parse_cleaned(cleaned: &str) -> Option<f64> {
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
