//! Lenient conversions of the numeric fields in comma-separated lines.
//!
//! Maps written by different editors disagree on whether times and lengths are integers, so an
//! integer field also accepts a decimal number and truncates it.

/// Parses an integer field, truncating a decimal one. `None` if the field is missing, not a
/// number, or out of range.
pub(crate) fn int(field: Option<&str>) -> Option<i32> {
    let field = field?.trim();
    if let Ok(value) = field.parse::<i32>() {
        return Some(value);
    }
    let value = field.parse::<f64>().ok()?.trunc();
    (value.is_finite() && (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&value))
        .then_some(value as i32)
}

/// Parses a float field. `NaN` if the field is missing or not a number.
pub(crate) fn float(field: Option<&str>) -> f64 {
    field
        .and_then(|field| field.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Parses an unsigned integer field made only of ASCII digits.
pub(crate) fn digits(field: Option<&str>) -> Option<i32> {
    let field = field?;
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
