//! Input splitting: numeric expression and unit token extraction.

use once_cell::sync::Lazy;
use regex::Regex;

/// Longest leading run of digits, dots, and slashes.
static NUMERIC_PART: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9./]+").expect("Failed to compile numeric pattern"));

/// First alphabetic run anywhere in the input.
static UNIT_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z]+").expect("Failed to compile unit pattern"));

/// Split a raw input string into its numeric part and unit token.
///
/// A missing numeric part defaults to "1"; a missing unit token defaults to
/// the empty string. No validation happens here; the evaluator and the table
/// lookup judge the pieces downstream.
pub fn split_input(input: &str) -> (String, String) {
    let numeric = NUMERIC_PART
        .find(input)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "1".to_string());
    let unit = UNIT_TOKEN
        .find(input)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    (numeric, unit)
}
