//! Ratio application and rounding.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::UnitDescriptor;
use crate::registry::UnitTable;

use super::error::{ConversionError, ConversionResult};

/// Completed conversion between two table units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    /// Evaluated source magnitude, unrounded
    pub source_value: f64,
    /// Canonical source symbol
    pub source_unit: String,
    /// Converted value, rounded to five decimal places
    pub target_value: f64,
    /// Canonical target symbol
    pub target_unit: String,
}

/// Apply a ratio from the source descriptor to a value.
///
/// With no explicit target the descriptor's default partner is used. An
/// explicit target must appear among the descriptor's own ratios; a symbol
/// reachable only as some unit's default is not implied. The resolved target
/// must also name a unit present in the table, since the catalog keeps a few
/// partners (square measures, for one) that have no entries of their own.
pub fn convert(
    table: &UnitTable,
    value: f64,
    source: &UnitDescriptor,
    target: Option<&str>,
) -> ConversionResult<Conversion> {
    let (target_key, ratio) = match target {
        Some(requested) => {
            let key = requested.trim().to_lowercase();
            let ratio =
                source
                    .ratios
                    .get(&key)
                    .copied()
                    .ok_or_else(|| ConversionError::NoConversionPath {
                        from: source.symbol.clone(),
                        to: Some(requested.to_string()),
                    })?;
            (key, ratio)
        }
        None => {
            let default = source.default_target.as_ref().ok_or_else(|| {
                ConversionError::NoConversionPath {
                    from: source.symbol.clone(),
                    to: None,
                }
            })?;
            (default.unit.clone(), default.ratio)
        }
    };

    let resolved = table
        .get(&target_key)
        .ok_or_else(|| ConversionError::NoConversionPath {
            from: source.symbol.clone(),
            to: Some(target_key.clone()),
        })?;

    Ok(Conversion {
        source_value: value,
        source_unit: source.symbol.clone(),
        target_value: round_to_five(value * ratio),
        target_unit: resolved.symbol.clone(),
    })
}

/// Round to five decimal places, half away from zero.
///
/// Non-finite values collapse to zero instead of propagating.
pub fn round_to_five(value: f64) -> f64 {
    let scaled = value * 100_000.0;
    if !scaled.is_finite() {
        warn!(value, "non-finite conversion product, clamping to zero");
        return 0.0;
    }
    scaled.round() / 100_000.0
}
