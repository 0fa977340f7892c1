//! Scaled analog-signal measure
//!
//! Models a process transmitter: the signal lives on a 0-100 % span (the
//! base unit) and can be expressed as a 4-20 mA or 0-20 mA current loop, a
//! 1-5 V voltage, or in the engineering units of the physical quantity the
//! transmitter is ranged for.
//!
//! The engineering-unit converter is the one registry entry that is not
//! fixed per quantity: it is built per instance from the caller's scale
//! endpoints (`0 % <-> scale_low`, `100 % <-> scale_high`) together with a
//! free-text unit label. Every derived instance - `convert_to`, arithmetic -
//! carries the endpoints and label forward, and each instance owns its
//! private converter; nothing is shared or mutated.

use core::fmt;

use crate::converter::Converter;
use crate::errors::{ConvertError, ConvertResult};
use crate::measure::{format_measure, Measure};

/// Inline storage for the engineering-unit label.
///
/// Labels longer than the capacity are truncated; process-unit symbols are
/// short ("kPa", "m3/h"), so 16 bytes is generous.
pub type UnitLabel = heapless::String<16>;

/// Analog signal units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnalogUnit {
    /// Percent of span (base unit)
    Percent,
    /// 4-20 mA current loop
    Current4To20,
    /// 0-20 mA current loop
    Current0To20,
    /// 1-5 V voltage signal
    Voltage1To5,
    /// Engineering units of the ranged quantity (per-instance scale)
    Engineering,
}

impl AnalogUnit {
    /// Display label of the unit.
    ///
    /// [`AnalogUnit::Engineering`] has no fixed label; the measure's own
    /// free-text label is substituted at display time.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Percent => "%",
            Self::Current4To20 | Self::Current0To20 => "mA",
            Self::Voltage1To5 => "V",
            Self::Engineering => "EU",
        }
    }
}

/// An analog transmitter signal, normalized to percent of span.
#[derive(Debug, Clone)]
pub struct AnalogSensor {
    value: f64,
    unit: AnalogUnit,
    base_value: f64,
    scale_low: f64,
    scale_high: f64,
    label: UnitLabel,
}

impl AnalogSensor {
    /// Build a signal reading.
    ///
    /// `scale_low`/`scale_high` are the engineering values at 0 % and 100 %
    /// of span; `label` names the engineering unit ("kPa", "t/h"). A
    /// degenerate span (`scale_low == scale_high`) would make the
    /// engineering converter non-invertible and is rejected with
    /// [`ConvertError::ZeroCoefficient`].
    pub fn new(
        value: f64,
        unit: AnalogUnit,
        scale_low: f64,
        scale_high: f64,
        label: &str,
    ) -> ConvertResult<Self> {
        let span = scale_high - scale_low;
        if !span.is_finite() {
            return Err(ConvertError::InvalidValue);
        }
        if span == 0.0 {
            return Err(ConvertError::ZeroCoefficient);
        }
        let mut stored = UnitLabel::new();
        for ch in label.chars() {
            if stored.push(ch).is_err() {
                break;
            }
        }
        let mut sensor = Self {
            value,
            unit,
            base_value: 0.0,
            scale_low,
            scale_high,
            label: stored,
        };
        sensor.base_value = sensor.converter(unit).to_base(value)?;
        Ok(sensor)
    }

    /// Engineering value at 0 % of span.
    pub fn scale_low(&self) -> f64 {
        self.scale_low
    }

    /// Engineering value at 100 % of span.
    pub fn scale_high(&self) -> f64 {
        self.scale_high
    }

    /// Free-text engineering-unit label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Measure for AnalogSensor {
    type Unit = AnalogUnit;

    fn value(&self) -> f64 {
        self.value
    }

    fn unit(&self) -> AnalogUnit {
        self.unit
    }

    fn base_value(&self) -> f64 {
        self.base_value
    }

    fn base_unit(&self) -> AnalogUnit {
        AnalogUnit::Percent
    }

    /// Unit registry. The engineering entry interpolates across this
    /// instance's declared range; construction guaranteed a non-zero span.
    fn converter(&self, unit: AnalogUnit) -> Converter {
        match unit {
            AnalogUnit::Percent => Converter::scaling_unchecked(1.0),
            AnalogUnit::Current4To20 => Converter::linear_unchecked(0.16, 4.0),
            AnalogUnit::Current0To20 => Converter::linear_unchecked(0.2, 0.0),
            AnalogUnit::Voltage1To5 => Converter::linear_unchecked(0.04, 1.0),
            AnalogUnit::Engineering => Converter::linear_unchecked(
                (self.scale_high - self.scale_low) / 100.0,
                self.scale_low,
            ),
        }
    }

    fn with_value(&self, value: f64, unit: AnalogUnit) -> ConvertResult<Self> {
        Self::new(value, unit, self.scale_low, self.scale_high, &self.label)
    }
}

/// Equality is defined on the normalized base value.
impl PartialEq for AnalogSensor {
    fn eq(&self, other: &Self) -> bool {
        self.base_value == other.base_value
    }
}

impl fmt::Display for AnalogSensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.unit {
            AnalogUnit::Engineering => self.label(),
            other => other.symbol(),
        };
        format_measure(f, self.value, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_loop_midpoint() {
        let signal = AnalogSensor::new(12.0, AnalogUnit::Current4To20, 0.0, 100.0, "kPa").unwrap();
        assert!((signal.base_value() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn engineering_scale_interpolates() {
        let signal = AnalogSensor::new(50.0, AnalogUnit::Percent, 50.0, 250.0, "kPa").unwrap();
        let eu = signal.convert_to(AnalogUnit::Engineering).unwrap();
        assert!((eu.value() - 150.0).abs() < 1e-9);
        // Scale parameters survive the derivation
        assert_eq!(eu.scale_low(), 50.0);
        assert_eq!(eu.scale_high(), 250.0);
        assert_eq!(eu.label(), "kPa");
    }

    #[test]
    fn engineering_display_uses_free_text_label() {
        let signal = AnalogSensor::new(12.0, AnalogUnit::Current4To20, 0.0, 100.0, "kPa").unwrap();
        let eu = signal.convert_to(AnalogUnit::Engineering).unwrap();
        assert_eq!(format!("{}", eu), "50.0 kPa");
    }

    #[test]
    fn degenerate_span_rejected() {
        let result = AnalogSensor::new(0.0, AnalogUnit::Percent, 40.0, 40.0, "kPa");
        assert_eq!(result.unwrap_err(), ConvertError::ZeroCoefficient);
    }

    #[test]
    fn long_label_truncates() {
        let signal = AnalogSensor::new(
            0.0,
            AnalogUnit::Percent,
            0.0,
            100.0,
            "a-label-well-beyond-capacity",
        )
        .unwrap();
        assert_eq!(signal.label().len(), 16);
    }
}
