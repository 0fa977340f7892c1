//! Conversion engine for unitspan
//!
//! Converts physical measurements between engineering units by routing every
//! conversion through a canonical base unit per quantity. Designed for
//! instrumentation software on edge devices with limited resources.
//!
//! Key constraints:
//! - `no_std` capable, no heap allocation
//! - Pure value objects, safe to share across threads
//! - Out-of-range readings are rejected, never clamped
//!
//! ```
//! use unitspan_core::{Measure, Temperature, TemperatureUnit};
//!
//! # fn main() -> unitspan_core::ConvertResult<()> {
//! let reading = Temperature::new(123.5, TemperatureUnit::Celsius)?;
//! let fahrenheit = reading.convert_to(TemperatureUnit::Fahrenheit)?;
//! assert!((fahrenheit.value() - 254.3).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod converter;
pub mod errors;
pub mod measure;
pub mod rtd;

// Public API
pub use converter::Converter;
pub use errors::{ConvertError, ConvertResult};
pub use measure::{
    AnalogSensor, AnalogUnit, MassFlow, MassFlowUnit, Measure, Pressure, PressureUnit,
    Temperature, TemperatureUnit, ThermoResistor, ThermoResistorUnit,
};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
