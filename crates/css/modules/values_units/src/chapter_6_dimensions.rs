//! CSS Values & Units Level 3 — §4.4 Dimensions
//! Spec: <https://www.w3.org/TR/css-values-3/#dimensions>

use crate::chapter_4_numbers::{parse_mantissa, split_mantissa};
use crate::{Unit, Value, ValueError};
use core::fmt;
use core::str::FromStr;
use log::trace;

/// A number paired with a unit, e.g. `2.5em`, `50%` or a bare `3`.
///
/// `number` is `NaN` when the numeric part could not be parsed, and also
/// for CSS-wide keywords, which are never interpreted numerically.
#[derive(Clone, Debug, PartialEq)]
pub struct Dimension {
    value: Value,
    number: f64,
    unit: Unit,
}

impl Dimension {
    /// Parse a dimension from a raw value string.
    ///
    /// # Errors
    /// Returns `ValueError::EmptyValue` for an empty string and
    /// `ValueError::UnsupportedUnit` when the suffix is not a known unit.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValueError> {
        Self::from_value(Value::new(raw)?)
    }

    /// Parse a dimension from an already wrapped value.
    ///
    /// # Errors
    /// Returns `ValueError::UnsupportedUnit` when the suffix is not a known unit.
    pub fn from_value(value: Value) -> Result<Self, ValueError> {
        if value.is_css_wide_keyword() {
            return Ok(Self {
                value,
                number: f64::NAN,
                unit: Unit::None,
            });
        }
        let (mantissa, suffix) = split_mantissa(value.trimmed());
        let unit = Unit::classify(suffix).map_err(|_| ValueError::UnsupportedUnit {
            unit: suffix.to_owned(),
            raw: value.raw().to_owned(),
        })?;
        let number = parse_mantissa(mantissa);
        trace!("[DIMENSION] `{}` -> {number} {unit:?}", value.raw());
        Ok(Self {
            value,
            number,
            unit,
        })
    }

    pub fn number(&self) -> f64 {
        self.number
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Whether the numeric part failed to parse (or was never parsed).
    pub fn is_nan(&self) -> bool {
        self.number.is_nan()
    }

    pub fn is_css_wide_keyword(&self) -> bool {
        self.value.is_css_wide_keyword()
    }

    /// The wrapped source value.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl FromStr for Dimension {
    type Err = ValueError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::new(raw)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(keyword) = self.value.css_wide_keyword() {
            return write!(formatter, "{keyword}");
        }
        write!(formatter, "{}{}", self.number, self.unit)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "a failed unwrap is a failed test")]
mod tests {
    use super::*;

    #[test]
    fn em_dimension() {
        let dimension = Dimension::new("2.5em").unwrap();
        assert!((dimension.number() - 2.5).abs() < f64::EPSILON);
        assert_eq!(dimension.unit(), Unit::Em);
        assert_eq!(dimension.to_string(), "2.5em");
    }

    #[test]
    fn unitless_and_signed_numbers() {
        let dimension = Dimension::new("-7").unwrap();
        assert!((dimension.number() + 7.0).abs() < f64::EPSILON);
        assert_eq!(dimension.unit(), Unit::None);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let dimension = Dimension::new(" 12px ").unwrap();
        assert_eq!(dimension.unit(), Unit::Pixels);
        assert_eq!(dimension.value().raw(), " 12px ");
    }

    #[test]
    fn bad_mantissa_keeps_unit_and_is_nan() {
        let dimension = Dimension::new("1.2.3px").unwrap();
        assert!(dimension.is_nan());
        assert_eq!(dimension.unit(), Unit::Pixels);

        let bare = Dimension::new("deg").unwrap();
        assert!(bare.is_nan());
        assert_eq!(bare.unit(), Unit::Degrees);
    }

    #[test]
    fn unsupported_unit_reports_raw_value() {
        let error = Dimension::new("12furlongs").unwrap_err();
        assert_eq!(
            error,
            ValueError::UnsupportedUnit {
                unit: "furlongs".to_owned(),
                raw: "12furlongs".to_owned(),
            }
        );
    }

    #[test]
    fn exponent_without_digits_is_a_unit() {
        assert_eq!(
            Dimension::new("+e5").unwrap_err(),
            ValueError::UnsupportedUnit {
                unit: "e5".to_owned(),
                raw: "+e5".to_owned(),
            }
        );
        assert!(matches!(
            Dimension::new(".e5"),
            Err(ValueError::UnsupportedUnit { unit, .. }) if unit == "e5"
        ));
        let scientific = Dimension::new("1e2px").unwrap();
        assert!((scientific.number() - 100.0).abs() < f64::EPSILON);
        assert_eq!(scientific.unit(), Unit::Pixels);
    }

    #[test]
    fn wide_keyword_skips_parsing() {
        let dimension = Dimension::new("inherit").unwrap();
        assert!(dimension.is_css_wide_keyword());
        assert!(dimension.is_nan());
        assert_eq!(dimension.unit(), Unit::None);
        assert_eq!(dimension.to_string(), "inherit");
    }
}
