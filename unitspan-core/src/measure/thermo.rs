//! Resistance-thermometer measure
//!
//! A temperature expressed either on the usual scales (C, F, K) or as the
//! raw resistance of a named RTD element. Base unit: degrees Celsius.
//!
//! The RTD units carry their element's calibrated span as hard bounds, so a
//! temperature that is perfectly valid as a reading may refuse to express
//! itself through a narrower element - a 500 °C measure converts to a Pt100
//! resistance but not to a Cu100 one, because copper elements are only
//! calibrated to 200 °C.

use core::fmt;

use crate::constants::rtd::{CU100, NI100, P100, P50, PT100, PT50};
use crate::converter::Converter;
use crate::errors::ConvertResult;
use crate::measure::{format_measure, Measure};

/// Units a resistance thermometer reading can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThermoResistorUnit {
    /// Degrees Celsius (base unit)
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
    /// Kelvin
    Kelvin,
    /// Resistance of a 100П element (Ω, alpha = 0.00391)
    P100Ohm,
    /// Resistance of a 50П element (Ω, alpha = 0.00391)
    P50Ohm,
    /// Resistance of a Pt100 element (Ω, alpha = 0.00385)
    Pt100Ohm,
    /// Resistance of a Pt50 element (Ω, alpha = 0.00385)
    Pt50Ohm,
    /// Resistance of a Ni100 element (Ω)
    Ni100Ohm,
    /// Resistance of a Cu100 element (Ω)
    Cu100Ohm,
}

impl ThermoResistorUnit {
    /// Display label of the unit.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
            Self::Kelvin => "K",
            Self::P100Ohm
            | Self::P50Ohm
            | Self::Pt100Ohm
            | Self::Pt50Ohm
            | Self::Ni100Ohm
            | Self::Cu100Ohm => "Ohm",
        }
    }
}

/// Unit registry for resistance thermometers.
fn unit_converter(unit: ThermoResistorUnit) -> Converter {
    match unit {
        ThermoResistorUnit::Celsius => Converter::scaling_unchecked(1.0),
        ThermoResistorUnit::Fahrenheit => Converter::linear_unchecked(1.8, 32.0),
        ThermoResistorUnit::Kelvin => Converter::linear_unchecked(1.0, 273.15),
        ThermoResistorUnit::P100Ohm => Converter::platinum(P100),
        ThermoResistorUnit::P50Ohm => Converter::platinum(P50),
        ThermoResistorUnit::Pt100Ohm => Converter::platinum(PT100),
        ThermoResistorUnit::Pt50Ohm => Converter::platinum(PT50),
        ThermoResistorUnit::Ni100Ohm => Converter::nickel(NI100),
        ThermoResistorUnit::Cu100Ohm => Converter::copper(CU100),
    }
}

/// A resistance-thermometer reading, normalized to Celsius.
#[derive(Debug, Clone, Copy)]
pub struct ThermoResistor {
    value: f64,
    unit: ThermoResistorUnit,
    base_value: f64,
}

impl ThermoResistor {
    /// Build a reading from a value and its unit.
    ///
    /// An RTD unit validates the resistance against the element's calibrated
    /// span before inverting the Callendar-Van Dusen curve.
    pub fn new(value: f64, unit: ThermoResistorUnit) -> ConvertResult<Self> {
        let base_value = unit_converter(unit).to_base(value)?;
        Ok(Self {
            value,
            unit,
            base_value,
        })
    }
}

impl Measure for ThermoResistor {
    type Unit = ThermoResistorUnit;

    fn value(&self) -> f64 {
        self.value
    }

    fn unit(&self) -> ThermoResistorUnit {
        self.unit
    }

    fn base_value(&self) -> f64 {
        self.base_value
    }

    fn base_unit(&self) -> ThermoResistorUnit {
        ThermoResistorUnit::Celsius
    }

    fn converter(&self, unit: ThermoResistorUnit) -> Converter {
        unit_converter(unit)
    }

    fn with_value(&self, value: f64, unit: ThermoResistorUnit) -> ConvertResult<Self> {
        Self::new(value, unit)
    }
}

/// Equality is defined on the normalized base value.
impl PartialEq for ThermoResistor {
    fn eq(&self, other: &Self) -> bool {
        self.base_value == other.base_value
    }
}

impl fmt::Display for ThermoResistor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_measure(f, self.value, self.unit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConvertError;

    #[test]
    fn ice_point_resistance() {
        let reading = ThermoResistor::new(0.0, ThermoResistorUnit::Celsius).unwrap();
        let ohms = reading.convert_to(ThermoResistorUnit::Pt100Ohm).unwrap();
        assert!((ohms.value() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn resistance_reading_normalizes() {
        let reading = ThermoResistor::new(138.51, ThermoResistorUnit::Pt100Ohm).unwrap();
        assert!((reading.base_value() - 100.0).abs() < 0.015);
    }

    #[test]
    fn narrower_element_rejects_wide_reading() {
        // 500 °C is a fine platinum reading but outside copper's calibration
        let reading = ThermoResistor::new(500.0, ThermoResistorUnit::Celsius).unwrap();
        assert!(reading.convert_to(ThermoResistorUnit::Pt100Ohm).is_ok());
        assert!(matches!(
            reading.convert_to(ThermoResistorUnit::Cu100Ohm),
            Err(ConvertError::AboveRange { .. })
        ));
    }

    #[test]
    fn fahrenheit_path_matches_temperature_scale() {
        let reading = ThermoResistor::new(50.0, ThermoResistorUnit::Celsius).unwrap();
        let f = reading.convert_to(ThermoResistorUnit::Fahrenheit).unwrap();
        assert!((f.value() - 122.0).abs() < 1e-9);
    }
}
