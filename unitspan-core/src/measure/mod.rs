//! Physical Measures
//!
//! ## Overview
//!
//! A measure couples a numeric value with one unit of a closed, quantity-
//! specific unit set, and normalizes it to the quantity's single base unit at
//! construction time. All later operations work on the base value and
//! re-project through the target unit's converter:
//!
//! ```text
//! Temperature(123.5, Celsius)
//!     base_value = 123.5 (°C is the base unit)
//! .convert_to(Fahrenheit)
//!     -> Temperature(254.3, Fahrenheit), same base_value
//! ```
//!
//! One concrete type exists per physical quantity. Because each quantity is
//! its own type, arithmetic between different quantities is a compile error
//! rather than a runtime fault - adding a pressure to a temperature simply
//! cannot be written.
//!
//! ## Immutability
//!
//! Measures are never mutated: `convert_to` and the arithmetic helpers
//! return new instances, and the base value set at construction is carried
//! unchanged through every derivation. This makes concurrent use from
//! multiple threads safe by construction - there is no shared state to
//! protect.
//!
//! ## Unit Registries
//!
//! Each quantity owns a match-based table from its unit tag to a
//! [`Converter`]. The tag enums carry no behavior themselves; the table is a
//! separate function, and for the analog-sensor quantity it is built per
//! instance from caller-supplied scale endpoints.
//!
//! ## Validity
//!
//! Construction and conversion enforce each converter's declared domain. The
//! domains are per unit, not per quantity: a temperature that a thermocouple
//! table accepts may be rejected when re-expressed through a copper RTD's
//! narrower calibrated span. That asymmetry is intentional - it reflects the
//! physical sensor's range, not a defect.

use core::fmt;

use crate::converter::Converter;
use crate::errors::ConvertResult;

mod analog;
mod flow;
mod pressure;
mod temperature;
mod thermo;

pub use analog::{AnalogSensor, AnalogUnit};
pub use flow::{MassFlow, MassFlowUnit};
pub use pressure::{Pressure, PressureUnit};
pub use temperature::{Temperature, TemperatureUnit};
pub use thermo::{ThermoResistor, ThermoResistorUnit};

/// Common behavior of all physical measures.
///
/// Implementors supply the stored fields, the unit registry and a
/// same-shape constructor; conversion and arithmetic are provided on top of
/// those and never bypass construction-time validation.
pub trait Measure: Sized {
    /// Closed unit set of this quantity.
    type Unit: Copy + PartialEq;

    /// Value as expressed in [`Measure::unit`].
    fn value(&self) -> f64;

    /// Unit this measure is currently expressed in.
    fn unit(&self) -> Self::Unit;

    /// Value normalized to the quantity's base unit.
    fn base_value(&self) -> f64;

    /// The quantity's canonical base unit.
    fn base_unit(&self) -> Self::Unit;

    /// Unit registry: the converter owning the mapping `unit <-> base`.
    fn converter(&self, unit: Self::Unit) -> Converter;

    /// Construct a new measure of the same shape, re-running normalization.
    ///
    /// Carries per-instance parameters (the analog sensor's scale endpoints
    /// and label) into the new instance.
    fn with_value(&self, value: f64, unit: Self::Unit) -> ConvertResult<Self>;

    /// Re-express this measure in another supported unit.
    ///
    /// Fails when the base value falls outside the target unit's declared
    /// span.
    fn convert_to(&self, unit: Self::Unit) -> ConvertResult<Self> {
        let converted = self.converter(unit).from_base(self.base_value())?;
        self.with_value(converted, unit)
    }

    /// Sum of two same-quantity measures.
    ///
    /// Computed on base values, then re-expressed in the left operand's
    /// unit: `10 °C + 283.15 K` displays as `20.0 C`.
    fn try_add(&self, other: &Self) -> ConvertResult<Self> {
        self.combine(other.base_value())
    }

    /// Difference of two same-quantity measures, left operand's unit.
    fn try_sub(&self, other: &Self) -> ConvertResult<Self> {
        self.combine(-other.base_value())
    }

    /// Rebuild from a base-value delta and re-project into our unit.
    #[doc(hidden)]
    fn combine(&self, base_delta: f64) -> ConvertResult<Self> {
        let base_value = self.base_value() + base_delta;
        self.with_value(base_value, self.base_unit())?
            .convert_to(self.unit())
    }
}

/// Shared `Display` body: `"{value} {label}"`.
///
/// Formats the value with `{:?}`, which keeps a trailing `.0` on integral
/// readings - instrument displays show `50.0 kPa`, not `50 kPa`.
pub(crate) fn format_measure(
    f: &mut fmt::Formatter<'_>,
    value: f64,
    label: &str,
) -> fmt::Result {
    write!(f, "{:?} {}", value, label)
}
