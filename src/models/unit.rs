use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Conversion partner reference: lower-cased table key plus ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionTarget {
    /// Lower-cased lookup key of the target unit
    pub unit: String,
    /// Multiplicative factor from source magnitude to target magnitude
    pub ratio: f64,
}

impl ConversionTarget {
    pub fn new(unit: impl Into<String>, ratio: f64) -> Self {
        Self {
            unit: unit.into().to_lowercase(),
            ratio,
        }
    }
}

/// Where and how a unit is customarily used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitUsage {
    pub countries: Vec<String>,
    pub description: String,
}

/// A single measurement unit: canonical symbol, descriptive names, and the
/// conversion partners it can reach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDescriptor {
    /// Canonical case-preserved symbol (e.g. "kg", "L")
    pub symbol: String,
    /// Singular full name
    pub name: String,
    /// Plural full name, used in result sentences
    pub plural: String,
    /// Partner used when no explicit target is requested
    pub default_target: Option<ConversionTarget>,
    /// Explicit conversion partners, keyed by lower-cased target
    pub ratios: BTreeMap<String, f64>,
    /// Usage metadata served by the catalog endpoint
    pub usage: UnitUsage,
}

impl UnitDescriptor {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        plural: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            plural: plural.into(),
            default_target: None,
            ratios: BTreeMap::new(),
            usage: UnitUsage::default(),
        }
    }

    /// Set the default conversion partner.
    pub fn with_default(mut self, unit: impl Into<String>, ratio: f64) -> Self {
        self.default_target = Some(ConversionTarget::new(unit, ratio));
        self
    }

    /// Add an explicit conversion partner.
    pub fn with_ratio(mut self, unit: impl Into<String>, ratio: f64) -> Self {
        self.ratios.insert(unit.into().to_lowercase(), ratio);
        self
    }

    /// Set the usage metadata.
    pub fn with_usage(mut self, countries: &[&str], description: impl Into<String>) -> Self {
        self.usage = UnitUsage {
            countries: countries.iter().map(|c| c.to_string()).collect(),
            description: description.into(),
        };
        self
    }

    /// Lower-cased lookup key for this unit.
    pub fn key(&self) -> String {
        self.symbol.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::UnitDescriptor;

    #[test]
    fn test_builder_chain() {
        let unit = UnitDescriptor::new("kg", "kilogram", "kilograms")
            .with_default("lbs", 2.204624)
            .with_ratio("g", 1000.0)
            .with_usage(&["worldwide"], "Base mass unit.");

        assert_eq!(unit.symbol, "kg");
        assert_eq!(unit.plural, "kilograms");
        let default = unit.default_target.as_ref().unwrap();
        assert_eq!(default.unit, "lbs");
        assert_eq!(default.ratio, 2.204624);
        assert_eq!(unit.ratios.get("g"), Some(&1000.0));
        assert_eq!(unit.usage.countries, vec!["worldwide"]);
    }

    #[test]
    fn test_targets_are_lower_cased() {
        let unit = UnitDescriptor::new("pt", "pint", "pints")
            .with_default("L", 0.473176)
            .with_ratio("mL", 473.176);

        assert_eq!(unit.default_target.as_ref().unwrap().unit, "l");
        assert_eq!(unit.ratios.get("ml"), Some(&473.176));
        assert!(unit.ratios.get("mL").is_none());
    }

    #[test]
    fn test_key_folds_case() {
        let unit = UnitDescriptor::new("mL", "milliliter", "milliliters");
        assert_eq!(unit.key(), "ml");
    }
}
