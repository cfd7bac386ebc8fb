//! Small string helpers shared across the crate.

use crate::error::{CommonsError, Result};

/// Case-insensitive equality using Unicode lowercasing.
pub fn eq_fold(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.to_lowercase() == b.to_lowercase()
}

pub fn to_lower(s: &str) -> String {
    s.to_lowercase()
}

pub fn to_upper(s: &str) -> String {
    s.to_uppercase()
}

/// What [`contains`] looks for.
#[derive(Debug, Clone, Copy)]
pub enum Needle<'a> {
    One(&'a str),
    Any(&'a [&'a str]),
}

impl<'a> From<&'a str> for Needle<'a> {
    fn from(value: &'a str) -> Self {
        Needle::One(value)
    }
}

impl<'a> From<&'a [&'a str]> for Needle<'a> {
    fn from(value: &'a [&'a str]) -> Self {
        Needle::Any(value)
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for Needle<'a> {
    fn from(value: &'a [&'a str; N]) -> Self {
        Needle::Any(value.as_slice())
    }
}

/// Checks whether `s` contains a substring, or any of a list of substrings.
///
/// Empty entries of a list are skipped; an empty single substring is an
/// error, as is an empty `s`.
pub fn contains<'a>(s: &str, needle: impl Into<Needle<'a>>) -> Result<bool> {
    if s.is_empty() {
        return Err(CommonsError::EmptyString);
    }

    match needle.into() {
        Needle::One(sub) => {
            if sub.is_empty() {
                return Err(CommonsError::EmptySubstring);
            }
            Ok(s.contains(sub))
        }
        Needle::Any(subs) => Ok(subs.iter().any(|sub| !sub.is_empty() && s.contains(sub))),
    }
}

/// Picks the singular form for counts of zero or one, the plural otherwise.
pub fn pluralize<'a>(count: i64, singular: &'a str, plural: &'a str) -> Result<&'a str> {
    if count < 0 {
        return Err(CommonsError::NegativeCount);
    }
    if singular.is_empty() || plural.is_empty() {
        return Err(CommonsError::EmptyWordForms);
    }
    if count <= 1 {
        Ok(singular)
    } else {
        Ok(plural)
    }
}

pub fn get_version<'a>(version: &'a str, fallback: &'a str) -> &'a str {
    if version.is_empty() { fallback } else { version }
}
