//! Unit table construction and lookup.
//!
//! The registry owns the catalog data and the validated, immutable
//! [`UnitTable`] built from it. A table is constructed once at startup from
//! the configured [`Profile`] and passed by shared reference to the
//! conversion pipeline; nothing in this module mutates after construction.

pub mod catalog;
pub mod table;

pub use catalog::{catalog_for, compat_catalog, full_catalog, Profile};
pub use table::{TableError, TableResult, UnitTable};
