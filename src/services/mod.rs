//! Conversion pipeline: the service layer between the HTTP boundary and the
//! unit table.
//!
//! Each stage is a small pure function; [`pipeline::convert_input`] runs them
//! in order for one request.

pub mod converter;

pub mod error;

pub mod evaluator;

pub mod formatter;

pub mod parser;

pub mod pipeline;

pub use converter::{convert, round_to_five, Conversion};
pub use error::{ConversionError, ConversionResult};
pub use evaluator::evaluate;
pub use formatter::{result_sentence, spell_out};
pub use parser::split_input;
pub use pipeline::convert_input;
