//! Numeric expression evaluation.

use crate::models::Magnitude;

use super::error::{ConversionError, ConversionResult};

/// Evaluate a numeric expression: a plain number or a single division.
///
/// More than one division is rejected outright; expressions stay simple.
/// A zero divisor and any non-finite result are rejected as well.
pub fn evaluate(expression: &str) -> ConversionResult<Magnitude> {
    let invalid = || ConversionError::InvalidNumber {
        expression: expression.to_string(),
    };

    let segments: Vec<&str> = expression.split('/').collect();
    let magnitude = match segments.as_slice() {
        [single] => Magnitude::Single(single.parse::<f64>().map_err(|_| invalid())?),
        [numerator, denominator] => {
            let numerator = numerator.parse::<f64>().map_err(|_| invalid())?;
            let denominator = denominator.parse::<f64>().map_err(|_| invalid())?;
            if denominator == 0.0 {
                return Err(invalid());
            }
            Magnitude::Fraction(numerator, denominator)
        }
        _ => return Err(invalid()),
    };

    if !magnitude.value().is_finite() {
        return Err(invalid());
    }
    Ok(magnitude)
}

#[cfg(test)]
mod tests {
    use super::evaluate;
    use crate::models::Magnitude;

    #[test]
    fn test_whole_number() {
        assert_eq!(evaluate("32").unwrap(), Magnitude::Single(32.0));
    }

    #[test]
    fn test_decimal_number() {
        assert_eq!(evaluate("32.2").unwrap(), Magnitude::Single(32.2));
    }

    #[test]
    fn test_fraction() {
        let magnitude = evaluate("32/3").unwrap();
        assert_eq!(magnitude, Magnitude::Fraction(32.0, 3.0));
        assert!((magnitude.value() - 10.666666666666666).abs() < 1e-12);
    }

    #[test]
    fn test_fraction_with_decimal() {
        let magnitude = evaluate("9/3.3").unwrap();
        assert!((magnitude.value() - 2.7272727272727272).abs() < 1e-12);
    }

    #[test]
    fn test_double_fraction_rejected() {
        assert!(evaluate("32/3/3").is_err());
        assert!(evaluate("3/7.2/4").is_err());
    }

    #[test]
    fn test_zero_divisor_rejected() {
        assert!(evaluate("5/0").is_err());
        assert!(evaluate("5/0.0").is_err());
    }

    #[test]
    fn test_unparseable_segments_rejected() {
        assert!(evaluate("").is_err());
        assert!(evaluate("3..5").is_err());
        assert!(evaluate("5/").is_err());
        assert!(evaluate("/5").is_err());
        assert!(evaluate(".").is_err());
    }

    #[test]
    fn test_overflowing_literal_rejected() {
        let huge = "9".repeat(400);
        assert!(evaluate(&huge).is_err());
    }

    #[test]
    fn test_leading_dot_parses() {
        assert_eq!(evaluate(".5").unwrap(), Magnitude::Single(0.5));
    }
}
