//! Pressure measure
//!
//! Base unit: pascal. Every other unit is a pure multiplicative scaling of
//! the base value; the coefficients are the `Pa -> unit` factors.

use core::fmt;

use crate::converter::Converter;
use crate::errors::ConvertResult;
use crate::measure::{format_measure, Measure};

/// Pressure units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PressureUnit {
    /// Pascal (base unit)
    Pascal,
    /// Kilopascal
    Kilopascal,
    /// Megapascal
    Megapascal,
    /// Kilogram-force per square centimetre
    KgfPerCm2,
    /// Kilogram-force per square metre
    KgfPerM2,
    /// Bar
    Bar,
    /// Millimetre of mercury
    MmHg,
    /// Millimetre of water column
    MmH2O,
    /// Metre of water column
    MH2O,
    /// Physical atmosphere
    Atmosphere,
}

impl PressureUnit {
    /// Display label of the unit.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Pascal => "Pa",
            Self::Kilopascal => "kPa",
            Self::Megapascal => "MPa",
            Self::KgfPerCm2 => "kgs/cm2",
            Self::KgfPerM2 => "kgs/m2",
            Self::Bar => "bar",
            Self::MmHg => "mm.hg",
            Self::MmH2O => "mm.H2O",
            Self::MH2O => "m.H2O",
            Self::Atmosphere => "atm",
        }
    }
}

/// Unit registry for pressures. Coefficients are `1 Pa` expressed in the unit.
fn unit_converter(unit: PressureUnit) -> Converter {
    match unit {
        PressureUnit::Pascal => Converter::scaling_unchecked(1.0),
        PressureUnit::Kilopascal => Converter::scaling_unchecked(0.001),
        PressureUnit::Megapascal => Converter::scaling_unchecked(1e-6),
        PressureUnit::KgfPerCm2 => Converter::scaling_unchecked(0.0000102),
        PressureUnit::KgfPerM2 => Converter::scaling_unchecked(0.10197162),
        PressureUnit::Bar => Converter::scaling_unchecked(1e-5),
        PressureUnit::MmHg => Converter::scaling_unchecked(0.0075006158),
        PressureUnit::MmH2O => Converter::scaling_unchecked(0.10197162),
        PressureUnit::MH2O => Converter::scaling_unchecked(0.00010197162),
        PressureUnit::Atmosphere => Converter::scaling_unchecked(0.0000098692327),
    }
}

/// A pressure reading, normalized to pascals.
#[derive(Debug, Clone, Copy)]
pub struct Pressure {
    value: f64,
    unit: PressureUnit,
    base_value: f64,
}

impl Pressure {
    /// Build a pressure from a value and its unit.
    pub fn new(value: f64, unit: PressureUnit) -> ConvertResult<Self> {
        let base_value = unit_converter(unit).to_base(value)?;
        Ok(Self {
            value,
            unit,
            base_value,
        })
    }
}

impl Measure for Pressure {
    type Unit = PressureUnit;

    fn value(&self) -> f64 {
        self.value
    }

    fn unit(&self) -> PressureUnit {
        self.unit
    }

    fn base_value(&self) -> f64 {
        self.base_value
    }

    fn base_unit(&self) -> PressureUnit {
        PressureUnit::Pascal
    }

    fn converter(&self, unit: PressureUnit) -> Converter {
        unit_converter(unit)
    }

    fn with_value(&self, value: f64, unit: PressureUnit) -> ConvertResult<Self> {
        Self::new(value, unit)
    }
}

/// Equality is defined on the normalized base value.
impl PartialEq for Pressure {
    fn eq(&self, other: &Self) -> bool {
        self.base_value == other.base_value
    }
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_measure(f, self.value, self.unit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_atmosphere() {
        let p = Pressure::new(101_325.0, PressureUnit::Pascal).unwrap();
        let atm = p.convert_to(PressureUnit::Atmosphere).unwrap();
        assert!((atm.value() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn kilopascal_scaling() {
        let p = Pressure::new(1.0, PressureUnit::Kilopascal).unwrap();
        assert!((p.base_value() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn bar_to_pascal() {
        let p = Pressure::new(1.0, PressureUnit::Bar).unwrap();
        assert!((p.base_value() - 100_000.0).abs() < 1e-6);
    }
}
