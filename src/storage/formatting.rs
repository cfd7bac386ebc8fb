use crate::error::{CommonsError, Result};
use crate::models::SIZE_UNITS;

/// Formats a byte size into a human-readable string with appropriate units.
///
/// Uses binary units (1024) and picks the largest unit not exceeding the
/// value, rounded to two decimal places. Zero and negative sizes are shown
/// as `0 B`.
///
/// # Examples
/// ```
/// use commons::storage::formatting::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(512), "512.00 B");
/// assert_eq!(format_size(1536), "1.50 KB");
/// assert_eq!(format_size(1048576), "1.00 MB");
/// ```
pub fn format_size(bytes: i64) -> String {
    for unit in &SIZE_UNITS {
        if bytes >= unit.size {
            let value = bytes as f64 / unit.size as f64;
            let rounded = (value * 100.0).round() / 100.0;
            return format!("{rounded:.2} {}", unit.label);
        }
    }

    "0 B".to_string()
}

/// Parses a size such as `"10 KB"` or `"2.5tb"` into bytes.
///
/// The number ends at the first letter; the rest is the unit, matched
/// case-insensitively against `B`, `KB`, `MB`, `GB`, `TB` and `PB`.
/// Fractional byte counts are truncated.
pub fn parse_size(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CommonsError::EmptySize);
    }

    let Some(split_at) = trimmed
        .char_indices()
        .find(|(_, c)| c.is_alphabetic())
        .map(|(index, _)| index)
    else {
        return Err(CommonsError::InvalidSizeFormat(trimmed.to_string()));
    };

    let (number, unit) = trimmed.split_at(split_at);
    let (number, unit) = (number.trim(), unit.trim());
    if number.is_empty() || unit.is_empty() {
        return Err(CommonsError::InvalidSizeFormat(trimmed.to_string()));
    }

    let unit = unit.to_uppercase();
    let value: f64 = number.parse()?;

    SIZE_UNITS
        .iter()
        .find(|u| u.label == unit)
        .map(|u| (value * u.size as f64) as i64)
        .ok_or(CommonsError::InvalidSizeUnit(unit))
}
