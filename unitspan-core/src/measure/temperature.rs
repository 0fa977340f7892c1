//! Temperature measure
//!
//! Base unit: degrees Celsius. Fahrenheit and Kelvin are linear
//! re-expressions; none of the three carries domain bounds, since the scale
//! itself has no calibrated span here.

use core::fmt;

use crate::converter::Converter;
use crate::errors::ConvertResult;
use crate::measure::{format_measure, Measure};

/// Temperature units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureUnit {
    /// Degrees Celsius (base unit)
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
    /// Kelvin
    Kelvin,
}

impl TemperatureUnit {
    /// Display label of the unit.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
            Self::Kelvin => "K",
        }
    }
}

/// Unit registry for temperatures.
fn unit_converter(unit: TemperatureUnit) -> Converter {
    match unit {
        TemperatureUnit::Celsius => Converter::linear_unchecked(1.0, 0.0),
        TemperatureUnit::Fahrenheit => Converter::linear_unchecked(1.8, 32.0),
        TemperatureUnit::Kelvin => Converter::linear_unchecked(1.0, 273.15),
    }
}

/// A temperature reading, normalized to Celsius.
#[derive(Debug, Clone, Copy)]
pub struct Temperature {
    value: f64,
    unit: TemperatureUnit,
    base_value: f64,
}

impl Temperature {
    /// Build a temperature from a value and its unit.
    pub fn new(value: f64, unit: TemperatureUnit) -> ConvertResult<Self> {
        let base_value = unit_converter(unit).to_base(value)?;
        Ok(Self {
            value,
            unit,
            base_value,
        })
    }
}

impl Measure for Temperature {
    type Unit = TemperatureUnit;

    fn value(&self) -> f64 {
        self.value
    }

    fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    fn base_value(&self) -> f64 {
        self.base_value
    }

    fn base_unit(&self) -> TemperatureUnit {
        TemperatureUnit::Celsius
    }

    fn converter(&self, unit: TemperatureUnit) -> Converter {
        unit_converter(unit)
    }

    fn with_value(&self, value: f64, unit: TemperatureUnit) -> ConvertResult<Self> {
        Self::new(value, unit)
    }
}

/// Equality is defined on the normalized base value.
impl PartialEq for Temperature {
    fn eq(&self, other: &Self) -> bool {
        self.base_value == other.base_value
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_measure(f, self.value, self.unit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celsius_is_identity() {
        let t = Temperature::new(21.5, TemperatureUnit::Celsius).unwrap();
        assert_eq!(t.value(), 21.5);
        assert_eq!(t.base_value(), 21.5);
    }

    #[test]
    fn fahrenheit_normalizes_to_celsius() {
        let t = Temperature::new(212.0, TemperatureUnit::Fahrenheit).unwrap();
        assert!((t.base_value() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn kelvin_offset() {
        let t = Temperature::new(273.15, TemperatureUnit::Kelvin).unwrap();
        assert!(t.base_value().abs() < 1e-9);
    }

    #[test]
    fn equality_crosses_units() {
        let c = Temperature::new(10.0, TemperatureUnit::Celsius).unwrap();
        let k = Temperature::new(283.15, TemperatureUnit::Kelvin).unwrap();
        assert_eq!(c, k);
    }

    #[test]
    fn display_keeps_decimal_point() {
        let t = Temperature::new(20.0, TemperatureUnit::Celsius).unwrap();
        assert_eq!(format!("{}", t), "20.0 C");
    }
}
