//! One-shot conversion pipeline.
//!
//! Stages run in a fixed order: split, evaluate, validate, convert. The
//! evaluator and the unit lookup both judge the split output, so an input
//! failing both is reported as the combined outcome rather than whichever
//! stage happened to run first. Everything here is synchronous computation
//! over the shared table.

use tracing::debug;

use crate::models::ParsedQuantity;
use crate::registry::UnitTable;

use super::converter::{self, Conversion};
use super::error::{ConversionError, ConversionResult};
use super::evaluator;
use super::parser;

/// Convert a raw input string against the given table.
///
/// `target` selects an explicit conversion partner; `None` uses the source
/// unit's default.
pub fn convert_input(
    table: &UnitTable,
    input: &str,
    target: Option<&str>,
) -> ConversionResult<Conversion> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::EmptyInput);
    }

    let (expression, token) = parser::split_input(trimmed);
    let magnitude = evaluator::evaluate(&expression);
    let source = table.get(&token);

    let (magnitude, source) = match (magnitude, source) {
        (Ok(magnitude), Some(source)) => (magnitude, source),
        (Err(_), None) => {
            debug!(input = trimmed, "rejected input: bad number and unknown unit");
            return Err(ConversionError::InvalidNumberAndUnit { expression, token });
        }
        (Err(err), Some(_)) => {
            debug!(input = trimmed, error = %err, "rejected input: bad number");
            return Err(err);
        }
        (Ok(_), None) => {
            debug!(input = trimmed, "rejected input: unknown unit");
            return Err(ConversionError::UnknownUnit { token });
        }
    };

    let quantity = ParsedQuantity::new(magnitude, token);
    converter::convert(table, quantity.value(), source, target)
}
