//! Validated unit table with case-insensitive lookup.

use std::collections::BTreeMap;

use crate::models::UnitDescriptor;

use super::catalog::{catalog_for, Profile};

/// Symbol length bounds enforced at construction.
const SYMBOL_LEN_MIN: usize = 1;
const SYMBOL_LEN_MAX: usize = 5;

/// Result type for table construction
pub type TableResult<T> = Result<T, TableError>;

/// Error type for table construction
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    /// Two descriptors fold to the same lookup key.
    #[error("duplicate unit symbol: {symbol}")]
    DuplicateSymbol { symbol: String },

    /// A ratio is zero, negative, or non-finite.
    #[error("unit {unit} has invalid ratio {ratio} to {target}")]
    InvalidRatio {
        unit: String,
        target: String,
        ratio: f64,
    },

    /// A default target names a unit absent from the table.
    #[error("unit {unit} default target {target} is not in the table")]
    DanglingDefault { unit: String, target: String },

    /// A symbol falls outside the accepted length bounds.
    #[error("unit symbol {symbol} length must be {min}..={max} characters")]
    SymbolLength {
        symbol: String,
        min: usize,
        max: usize,
    },
}

/// Immutable unit table, keyed by lower-cased symbol.
///
/// Built once at startup and shared read-only; request handling never
/// mutates it.
#[derive(Debug, Clone)]
pub struct UnitTable {
    units: BTreeMap<String, UnitDescriptor>,
    profile: Profile,
}

impl UnitTable {
    /// Build a table from descriptors, enforcing the catalog invariants:
    /// unique case-folded symbols, symbol length bounds, positive finite
    /// ratios, and resolvable default targets. Non-default ratio targets may
    /// point outside the table; they fail at conversion time instead.
    pub fn from_descriptors(
        profile: Profile,
        descriptors: Vec<UnitDescriptor>,
    ) -> TableResult<Self> {
        let mut units = BTreeMap::new();

        for descriptor in descriptors {
            let symbol_len = descriptor.symbol.chars().count();
            if !(SYMBOL_LEN_MIN..=SYMBOL_LEN_MAX).contains(&symbol_len) {
                return Err(TableError::SymbolLength {
                    symbol: descriptor.symbol,
                    min: SYMBOL_LEN_MIN,
                    max: SYMBOL_LEN_MAX,
                });
            }

            if let Some(target) = &descriptor.default_target {
                check_ratio(&descriptor.symbol, &target.unit, target.ratio)?;
            }
            for (target, ratio) in &descriptor.ratios {
                check_ratio(&descriptor.symbol, target, *ratio)?;
            }

            let key = descriptor.key();
            if units.insert(key, descriptor.clone()).is_some() {
                return Err(TableError::DuplicateSymbol {
                    symbol: descriptor.symbol,
                });
            }
        }

        // Defaults may reference units that appear later, so resolve them
        // only once every descriptor is in place.
        for descriptor in units.values() {
            if let Some(target) = &descriptor.default_target {
                if !units.contains_key(&target.unit) {
                    return Err(TableError::DanglingDefault {
                        unit: descriptor.symbol.clone(),
                        target: target.unit.clone(),
                    });
                }
            }
        }

        Ok(Self { units, profile })
    }

    /// Build a table from one of the built-in catalogs.
    pub fn with_profile(profile: Profile) -> TableResult<Self> {
        Self::from_descriptors(profile, catalog_for(profile))
    }

    /// Case-insensitive lookup by symbol or raw token.
    pub fn get(&self, token: &str) -> Option<&UnitDescriptor> {
        self.units.get(&token.to_lowercase())
    }

    /// Descriptors in key order.
    pub fn iter(&self) -> impl Iterator<Item = &UnitDescriptor> {
        self.units.values()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The catalog profile this table was built from.
    pub fn profile(&self) -> Profile {
        self.profile
    }
}

fn check_ratio(unit: &str, target: &str, ratio: f64) -> TableResult<()> {
    if ratio > 0.0 && ratio.is_finite() {
        Ok(())
    } else {
        Err(TableError::InvalidRatio {
            unit: unit.to_string(),
            target: target.to_string(),
            ratio,
        })
    }
}
