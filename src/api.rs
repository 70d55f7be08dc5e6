//! Public API surface for the unit conversion library.
//!
//! This file consolidates the types and entry points most callers need:
//! catalog construction, table lookup and the conversion pipeline.

pub use crate::models::{ConversionTarget, Magnitude, ParsedQuantity, UnitDescriptor, UnitUsage};
pub use crate::registry::{Profile, TableError, TableResult, UnitTable};
pub use crate::services::{
    convert_input, result_sentence, Conversion, ConversionError, ConversionResult,
};
