//! Mass-flow measure
//!
//! Base unit: kilograms per hour. All other units scale the base value by a
//! time or mass ratio.

use core::fmt;

use crate::converter::Converter;
use crate::errors::ConvertResult;
use crate::measure::{format_measure, Measure};

/// Mass-flow units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MassFlowUnit {
    /// Kilograms per hour (base unit)
    KgPerHour,
    /// Tonnes per hour
    TonnePerHour,
    /// Kilograms per day
    KgPerDay,
    /// Kilograms per second
    KgPerSecond,
    /// Tonnes per second
    TonnePerSecond,
}

impl MassFlowUnit {
    /// Display label of the unit.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::KgPerHour => "kg/h",
            Self::TonnePerHour => "t/h",
            Self::KgPerDay => "kg/d",
            Self::KgPerSecond => "kg/s",
            Self::TonnePerSecond => "t/s",
        }
    }
}

/// Unit registry for mass flows.
fn unit_converter(unit: MassFlowUnit) -> Converter {
    match unit {
        MassFlowUnit::KgPerHour => Converter::scaling_unchecked(1.0),
        MassFlowUnit::TonnePerHour => Converter::scaling_unchecked(0.001),
        MassFlowUnit::KgPerDay => Converter::scaling_unchecked(24.0),
        MassFlowUnit::KgPerSecond => Converter::scaling_unchecked(1.0 / 3600.0),
        MassFlowUnit::TonnePerSecond => Converter::scaling_unchecked(0.001 / 3600.0),
    }
}

/// A mass-flow reading, normalized to kg/h.
#[derive(Debug, Clone, Copy)]
pub struct MassFlow {
    value: f64,
    unit: MassFlowUnit,
    base_value: f64,
}

impl MassFlow {
    /// Build a mass flow from a value and its unit.
    pub fn new(value: f64, unit: MassFlowUnit) -> ConvertResult<Self> {
        let base_value = unit_converter(unit).to_base(value)?;
        Ok(Self {
            value,
            unit,
            base_value,
        })
    }
}

impl Measure for MassFlow {
    type Unit = MassFlowUnit;

    fn value(&self) -> f64 {
        self.value
    }

    fn unit(&self) -> MassFlowUnit {
        self.unit
    }

    fn base_value(&self) -> f64 {
        self.base_value
    }

    fn base_unit(&self) -> MassFlowUnit {
        MassFlowUnit::KgPerHour
    }

    fn converter(&self, unit: MassFlowUnit) -> Converter {
        unit_converter(unit)
    }

    fn with_value(&self, value: f64, unit: MassFlowUnit) -> ConvertResult<Self> {
        Self::new(value, unit)
    }
}

/// Equality is defined on the normalized base value.
impl PartialEq for MassFlow {
    fn eq(&self, other: &Self) -> bool {
        self.base_value == other.base_value
    }
}

impl fmt::Display for MassFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_measure(f, self.value, self.unit.symbol())
    }
}
