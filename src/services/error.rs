//! Error types for the conversion pipeline.

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Error type for conversion operations.
///
/// Every pipeline stage reports failure through this one enum; nothing in
/// request handling panics or uses sentinel values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// Input was empty or whitespace.
    #[error("empty input")]
    EmptyInput,

    /// The numeric expression could not be evaluated.
    #[error("invalid number: {expression}")]
    InvalidNumber { expression: String },

    /// The unit token names no unit in the table.
    #[error("invalid unit: {token}")]
    UnknownUnit { token: String },

    /// Both the numeric expression and the unit token are invalid.
    #[error("invalid number and unit")]
    InvalidNumberAndUnit { expression: String, token: String },

    /// The source unit has no usable ratio to the requested target.
    #[error("no conversion path from {from}")]
    NoConversionPath {
        from: String,
        /// Requested target, absent when the default partner was missing
        to: Option<String>,
    },
}
