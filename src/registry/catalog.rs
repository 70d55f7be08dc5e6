//! Built-in unit catalogs.
//!
//! Two catalogs ship with the service: the complete table and a reduced
//! compatibility subset matching the historical public API surface. The
//! active one is selected by configuration at startup.

use std::fmt;
use std::str::FromStr;

use crate::models::UnitDescriptor;

/// Built-in catalog selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Reduced six-unit table, the historical API surface
    Compat,
    /// Complete catalog
    Full,
}

impl FromStr for Profile {
    type Err = String;

    /// Parse a profile name ("compat", "full").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compat" | "reduced" => Ok(Self::Compat),
            "full" => Ok(Self::Full),
            _ => Err(format!("Unknown unit profile: {}", s)),
        }
    }
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Compat => "compat",
            Profile::Full => "full",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symbols retained by the compat profile.
const COMPAT_SYMBOLS: [&str; 6] = ["gal", "l", "mi", "km", "lbs", "kg"];

/// Descriptors for the requested profile.
pub fn catalog_for(profile: Profile) -> Vec<UnitDescriptor> {
    match profile {
        Profile::Compat => compat_catalog(),
        Profile::Full => full_catalog(),
    }
}

/// The reduced compatibility catalog.
///
/// Filtering the full catalog keeps each descriptor's explicit ratios even
/// when their targets fall outside the subset; requesting such a target
/// fails at conversion time, never at construction.
pub fn compat_catalog() -> Vec<UnitDescriptor> {
    full_catalog()
        .into_iter()
        .filter(|unit| COMPAT_SYMBOLS.contains(&unit.key().as_str()))
        .collect()
}

/// The complete built-in catalog.
pub fn full_catalog() -> Vec<UnitDescriptor> {
    vec![
        UnitDescriptor::new("mi", "mile", "miles")
            .with_default("km", 1.60934)
            .with_ratio("m", 1609.344)
            .with_ratio("ft", 5280.0)
            .with_usage(&["USA"], "Used primarily in the United States."),
        UnitDescriptor::new("km", "kilometer", "kilometers")
            .with_default("mi", 0.621373)
            .with_ratio("m", 1000.0)
            .with_ratio("ft", 3280.84)
            .with_usage(&["all except USA"], "Used worldwide except in the USA."),
        UnitDescriptor::new("in", "inch", "inches")
            .with_default("cm", 2.54)
            .with_ratio("mm", 25.4)
            .with_ratio("ft", 0.0833333)
            .with_usage(&["USA", "UK"], "Commonly used in the USA and UK."),
        UnitDescriptor::new("mm", "millimeter", "millimeters")
            .with_default("cm", 0.1)
            .with_ratio("m", 0.001)
            .with_ratio("in", 0.0393701)
            .with_usage(
                &["worldwide"],
                "Used worldwide in scientific and engineering contexts.",
            ),
        UnitDescriptor::new("cm", "centimeter", "centimeters")
            .with_default("in", 0.393701)
            .with_ratio("m", 0.01)
            .with_ratio("mm", 10.0)
            .with_usage(
                &["worldwide"],
                "Used worldwide in everyday measurements and scientific contexts.",
            ),
        UnitDescriptor::new("m", "meter", "meters")
            .with_default("ft", 3.28084)
            .with_ratio("cm", 100.0)
            .with_ratio("yd", 1.09361)
            .with_usage(
                &["worldwide"],
                "Used worldwide in scientific and engineering contexts.",
            ),
        // Survey link: no conversion partners, kept for catalog completeness.
        UnitDescriptor::new("li", "link", "links")
            .with_usage(&["USA"], "Used in surveying in the USA."),
        UnitDescriptor::new("ft", "foot", "feet")
            .with_default("m", 0.3048)
            .with_ratio("cm", 30.48)
            .with_ratio("in", 12.0)
            .with_usage(&["USA", "UK"], "Commonly used in the USA and UK."),
        UnitDescriptor::new("yd", "yard", "yards")
            .with_default("m", 0.9144)
            .with_ratio("ft", 3.0)
            .with_ratio("in", 36.0)
            .with_usage(&["USA", "UK"], "Commonly used in the USA and UK."),
        UnitDescriptor::new("oz", "ounce", "ounces")
            .with_default("g", 28.3495)
            .with_ratio("kg", 0.0283495)
            .with_ratio("lbs", 0.0625)
            .with_usage(&["USA", "UK"], "Commonly used in the USA and UK."),
        UnitDescriptor::new("lbs", "pound", "pounds")
            .with_default("kg", 0.453592)
            .with_ratio("g", 453.592)
            .with_ratio("oz", 16.0)
            .with_usage(&["USA", "UK"], "Commonly used in the USA and UK."),
        UnitDescriptor::new("pt", "pint", "pints")
            .with_default("l", 0.473176)
            .with_ratio("ml", 473.176)
            .with_ratio("qt", 0.5)
            .with_usage(&["USA", "UK"], "Commonly used in the USA and UK."),
        UnitDescriptor::new("qt", "quart", "quarts")
            .with_default("l", 0.946353)
            .with_ratio("pt", 2.0)
            .with_ratio("gal", 0.25)
            .with_usage(&["USA", "UK"], "Commonly used in the USA and UK."),
        UnitDescriptor::new("gal", "gallon", "gallons")
            .with_default("l", 3.78541)
            .with_ratio("ml", 3785.41)
            .with_ratio("qt", 4.0)
            .with_usage(&["USA", "UK"], "Commonly used in the USA and UK."),
        UnitDescriptor::new("g", "gram", "grams")
            .with_default("oz", 0.035274)
            .with_ratio("kg", 0.001)
            .with_ratio("lbs", 0.00220462)
            .with_usage(
                &["worldwide"],
                "Used worldwide in scientific and engineering contexts.",
            ),
        UnitDescriptor::new("kg", "kilogram", "kilograms")
            .with_default("lbs", 2.204624)
            .with_ratio("g", 1000.0)
            .with_ratio("oz", 35.274)
            .with_usage(
                &["worldwide"],
                "Used worldwide in scientific and engineering contexts.",
            ),
        UnitDescriptor::new("mg", "milligram", "milligrams")
            .with_default("g", 0.001)
            .with_ratio("kg", 0.000001)
            .with_ratio("oz", 0.000035274)
            .with_usage(
                &["worldwide"],
                "Used worldwide in scientific and medical contexts.",
            ),
        // The milliliter's imperial partner is the gallon; fluid ounces are
        // not in the catalog.
        UnitDescriptor::new("mL", "milliliter", "milliliters")
            .with_default("gal", 0.000264172)
            .with_ratio("l", 0.001)
            .with_ratio("gal", 0.000264172)
            .with_usage(
                &["worldwide"],
                "Used worldwide in scientific and engineering contexts.",
            ),
        UnitDescriptor::new("L", "liter", "liters")
            .with_default("gal", 0.264172)
            .with_ratio("ml", 1000.0)
            .with_ratio("pt", 2.11338)
            .with_usage(
                &["worldwide"],
                "Used worldwide in scientific and engineering contexts.",
            ),
        UnitDescriptor::new("ton", "ton", "tons")
            .with_default("kg", 907.185)
            .with_ratio("lbs", 2000.0)
            .with_ratio("tonne", 1.01605)
            .with_usage(
                &["worldwide"],
                "Used worldwide in industrial and commercial contexts.",
            ),
        UnitDescriptor::new("tonne", "tonne", "tonnes")
            .with_default("kg", 1000.0)
            .with_ratio("lbs", 2204.62)
            .with_ratio("ton", 0.984207)
            .with_usage(
                &["worldwide"],
                "Used worldwide in scientific and industrial contexts.",
            ),
        // Square-measure partners (m2, km2) have no catalog entries of their
        // own; requesting them reports no conversion path.
        UnitDescriptor::new("ha", "hectare", "hectares")
            .with_default("acre", 2.47105)
            .with_ratio("m2", 10000.0)
            .with_ratio("km2", 0.01)
            .with_usage(
                &["worldwide"],
                "Used worldwide in land measurement and agriculture.",
            ),
        UnitDescriptor::new("acre", "acre", "acres")
            .with_default("ha", 0.404686)
            .with_ratio("m2", 4046.86)
            .with_ratio("km2", 0.00404686)
            .with_usage(
                &["USA", "UK"],
                "Commonly used in the USA and UK for land measurement.",
            ),
    ]
}
