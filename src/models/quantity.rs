use serde::{Deserialize, Serialize};

/// Numeric magnitude extracted from an input string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Magnitude {
    /// A plain decimal number.
    Single(f64),
    /// A numerator/denominator pair from a fractional expression.
    Fraction(f64, f64),
}

impl Magnitude {
    /// Resolved floating-point value.
    pub fn value(&self) -> f64 {
        match self {
            Magnitude::Single(value) => *value,
            Magnitude::Fraction(numerator, denominator) => numerator / denominator,
        }
    }
}

/// Quantity extracted from one request input, before unit validation.
/// Constructed per request, immutable, discarded after use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuantity {
    pub magnitude: Magnitude,
    /// Raw unit token as it appeared in the input
    pub unit_token: String,
}

impl ParsedQuantity {
    pub fn new(magnitude: Magnitude, unit_token: impl Into<String>) -> Self {
        Self {
            magnitude,
            unit_token: unit_token.into(),
        }
    }

    /// Resolved magnitude value.
    pub fn value(&self) -> f64 {
        self.magnitude.value()
    }
}

#[cfg(test)]
mod tests {
    use super::{Magnitude, ParsedQuantity};

    #[test]
    fn test_single_value() {
        assert_eq!(Magnitude::Single(32.2).value(), 32.2);
    }

    #[test]
    fn test_fraction_value() {
        let magnitude = Magnitude::Fraction(32.0, 3.0);
        assert!((magnitude.value() - 32.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_quantity_keeps_raw_token() {
        let quantity = ParsedQuantity::new(Magnitude::Single(1.0), "KG");
        assert_eq!(quantity.unit_token, "KG");
        assert_eq!(quantity.value(), 1.0);
    }

    #[test]
    fn test_magnitude_equality() {
        assert_eq!(Magnitude::Single(5.0), Magnitude::Single(5.0));
        assert_ne!(
            Magnitude::Single(5.0),
            Magnitude::Fraction(5.0, 1.0),
        );
    }
}
