//! File classification and size matching.

use crate::error::{CommonsError, Result};
use crate::models::{FileType, OperatorType, ToleranceResults};
use std::path::Path;

/// The suffix of the final path component starting at its last dot,
/// lowercased. Empty when the name has no dot.
fn extension_of(path: &Path) -> String {
    let Some(name) = path.file_name() else {
        return String::new();
    };
    let name = name.to_string_lossy();
    match name.rfind('.') {
        Some(index) => name[index..].to_lowercase(),
        None => String::new(),
    }
}

/// Checks whether the extension of `path` belongs to `file_type`.
pub fn is_extension_valid(file_type: FileType, path: impl AsRef<Path>) -> bool {
    match file_type.extensions() {
        None => true,
        Some(extensions) => {
            let extension = extension_of(path.as_ref());
            extensions.contains(&extension.as_str())
        }
    }
}

/// Computes the window around `wanted_file_size` given a tolerance in KB.
///
/// The lower bound never drops below zero.
pub fn calculate_tolerances(wanted_file_size: i64, tolerance_kb: f64) -> Result<ToleranceResults> {
    if wanted_file_size < 0 {
        return Err(CommonsError::NegativeWantedSize);
    }
    if tolerance_kb < 0.0 {
        return Err(CommonsError::NegativeTolerance);
    }

    let tolerance_size = (tolerance_kb * 1024.0) as i64;
    let upper_bound_size = wanted_file_size.saturating_add(tolerance_size);
    let lower_bound_size = (wanted_file_size - tolerance_size).max(0);

    Ok(ToleranceResults {
        tolerance_size,
        upper_bound_size,
        lower_bound_size,
    })
}

/// Decides whether `file_size` satisfies `operator` against `wanted_file_size`.
///
/// Only [`OperatorType::EqualTo`] uses the tolerance window; the ordering
/// operators compare against the wanted size directly. Invalid tolerance
/// input is reported before the operator is looked at.
pub fn operator_size_matches(
    operator: OperatorType,
    wanted_file_size: i64,
    tolerance_kb: f64,
    file_size: i64,
) -> Result<bool> {
    let bounds = calculate_tolerances(wanted_file_size, tolerance_kb)?;

    let matched = match operator {
        OperatorType::EqualTo => {
            file_size >= bounds.lower_bound_size && file_size <= bounds.upper_bound_size
        }
        OperatorType::LessThan => file_size < wanted_file_size,
        OperatorType::LessThanEqualTo => file_size <= wanted_file_size,
        OperatorType::GreaterThan => file_size > wanted_file_size,
        OperatorType::GreaterThanEqualTo => file_size >= wanted_file_size,
    };

    Ok(matched)
}
