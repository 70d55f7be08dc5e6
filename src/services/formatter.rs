use crate::registry::UnitTable;

use super::converter::Conversion;

/// Full plural name for a unit token, as used in result sentences.
pub fn spell_out<'a>(table: &'a UnitTable, token: &str) -> Option<&'a str> {
    table.get(token).map(|unit| unit.plural.as_str())
}

/// Render the human-readable result sentence.
///
/// The source value prints unrounded, the target value as converted. A
/// symbol with no table entry falls back to itself, so the function is total.
pub fn result_sentence(table: &UnitTable, conversion: &Conversion) -> String {
    let source_name = spell_out(table, &conversion.source_unit).unwrap_or(&conversion.source_unit);
    let target_name = spell_out(table, &conversion.target_unit).unwrap_or(&conversion.target_unit);
    format!(
        "{} {} converts to {} {}",
        conversion.source_value, source_name, conversion.target_value, target_name
    )
}
