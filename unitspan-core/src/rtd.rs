//! Callendar-Van Dusen Resistance-Temperature Curves
//!
//! ## Physics Background
//!
//! A resistance temperature detector (RTD) is a wire element whose resistance
//! grows with temperature. The Callendar-Van Dusen model describes platinum
//! elements with a piecewise polynomial around 0 °C:
//!
//! ```text
//! R(t) = R0 * (1 + A*t + B*t² + C*(t - 100)*t³)    t <= 0 °C
//! R(t) = R0 * (1 + A*t + B*t²)                      t >  0 °C
//!
//! Where:
//! - R0 = nominal resistance at 0 °C (100 Ω for a Pt100)
//! - A, B, C = calibration coefficients of the wire alloy
//! ```
//!
//! Copper and nickel elements use the same scheme with their own polynomials;
//! nickel puts the breakpoint at 100 °C instead of 0 °C.
//!
//! ## The Inverse Problem
//!
//! Reading a sensor means going the other way: resistance -> temperature.
//! Above the breakpoint the C term vanishes and the quadratic formula gives an
//! exact inverse:
//!
//! ```text
//! t(R) = (sqrt(A² - 4B*(1 - R/R0)) - A) / 2B
//! ```
//!
//! Below the breakpoint the quartic has no closed-form inverse. Industry
//! practice (and the calibration standards) supply a fitted power series in
//! the normalized resistance deviation instead:
//!
//! ```text
//! t(R) = Σ Dᵢ * (R/R0 - 1)^(i+1)
//! ```
//!
//! The two directions therefore have asymmetric accuracy: the forward
//! polynomial is exact to the standard, the fitted inverse is good to a few
//! hundredths of a degree over the calibrated span. All terms of the series
//! are always evaluated; the coefficient tuples are short enough that early
//! termination would buy nothing.
//!
//! ## Discriminant Faults
//!
//! The quadratic inverse takes a square root. For resistances far outside the
//! calibrated span the discriminant goes negative; this module raises
//! [`ConvertError::NegativeDiscriminant`] instead of letting a NaN escape.
//! Converters built through [`crate::Converter`] reject such resistances at
//! the span check first, so the fault is only reachable through these raw
//! functions or deliberately unbounded curves.

use crate::errors::{ConvertError, ConvertResult};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{}};
}

/// Calibration constants for one RTD sensor family.
///
/// These are data, not logic: each named sensor model (Pt100, Ni100, ...)
/// supplies its own set from the calibration standard. See
/// [`crate::constants::rtd`] for the shipped tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RtdCoefficients {
    /// Nominal resistance at 0 °C (Ω)
    pub r0: f64,
    /// Linear forward coefficient (1/°C)
    pub a: f64,
    /// Quadratic forward coefficient (1/°C²)
    pub b: f64,
    /// Quartic (platinum/copper) or cubic (nickel) forward coefficient
    pub c: f64,
    /// Fitted inverse-series coefficients, ascending power order
    pub d: &'static [f64],
}

/// Evaluate the fitted inverse series `Σ dᵢ * x^(i+1)`.
fn deviation_series(d: &[f64], x: f64) -> f64 {
    let mut t = 0.0;
    let mut power = 1.0;
    for &coeff in d {
        power *= x;
        t += coeff * power;
    }
    t
}

/// Exact quadratic-formula inverse for the branch where the C term vanishes.
fn quadratic_inverse(co: &RtdCoefficients, resistance: f64) -> ConvertResult<f64> {
    let ratio = resistance / co.r0;
    let discriminant = co.a * co.a - 4.0 * co.b * (1.0 - ratio);
    if discriminant < 0.0 {
        log_warn!(
            "RTD inverse: resistance {} pushes discriminant negative ({})",
            resistance,
            discriminant
        );
        return Err(ConvertError::NegativeDiscriminant { resistance });
    }
    Ok((libm::sqrt(discriminant) - co.a) / (2.0 * co.b))
}

/// Platinum forward polynomial: temperature (°C) -> resistance (Ω).
pub fn platinum_resistance(co: &RtdCoefficients, t: f64) -> f64 {
    if t <= 0.0 {
        co.r0 * (1.0 + co.a * t + co.b * t * t + co.c * (t - 100.0) * t * t * t)
    } else {
        co.r0 * (1.0 + co.a * t + co.b * t * t)
    }
}

/// Platinum inverse: resistance (Ω) -> temperature (°C).
///
/// Exact quadratic above 0 °C (`R >= R0`), fitted series below.
pub fn platinum_temperature(co: &RtdCoefficients, resistance: f64) -> ConvertResult<f64> {
    if resistance / co.r0 >= 1.0 {
        quadratic_inverse(co, resistance)
    } else {
        Ok(deviation_series(co.d, resistance / co.r0 - 1.0))
    }
}

/// Copper forward polynomial: temperature (°C) -> resistance (Ω).
pub fn copper_resistance(co: &RtdCoefficients, t: f64) -> f64 {
    if t <= 0.0 {
        co.r0 * (1.0 + co.a * t + co.b * t * (t + 6.7) + co.c * t * t * t)
    } else {
        co.r0 * (1.0 + co.a * t)
    }
}

/// Copper inverse: resistance (Ω) -> temperature (°C).
///
/// The positive branch is linear in the resistance ratio, so the inverse is
/// plain algebra; the negative branch uses the fitted series.
pub fn copper_temperature(co: &RtdCoefficients, resistance: f64) -> f64 {
    let ratio = resistance / co.r0;
    if ratio >= 1.0 {
        (ratio - 1.0) / co.a
    } else {
        deviation_series(co.d, ratio - 1.0)
    }
}

/// Resistance ratio `R(100 °C) / R0` of a nickel element.
///
/// Nickel's piecewise breakpoint sits at 100 °C, so the inverse branches on
/// this ratio rather than on 1.0. Computed from the coefficients instead of
/// hardcoding the Ni100 value (1.6172), so scaled elements stay correct.
pub fn nickel_breakpoint_ratio(co: &RtdCoefficients) -> f64 {
    1.0 + co.a * 100.0 + co.b * 10_000.0
}

/// Nickel forward polynomial: temperature (°C) -> resistance (Ω).
pub fn nickel_resistance(co: &RtdCoefficients, t: f64) -> f64 {
    if t <= 100.0 {
        co.r0 * (1.0 + co.a * t + co.b * t * t)
    } else {
        co.r0 * (1.0 + co.a * t + co.b * t * t + co.c * (t - 100.0) * t * t)
    }
}

/// Nickel inverse: resistance (Ω) -> temperature (°C).
///
/// Exact quadratic up to the 100 °C breakpoint, fitted series above it with
/// the series anchored at 100 °C.
pub fn nickel_temperature(co: &RtdCoefficients, resistance: f64) -> ConvertResult<f64> {
    let breakpoint = nickel_breakpoint_ratio(co);
    let ratio = resistance / co.r0;
    if ratio <= breakpoint {
        quadratic_inverse(co, resistance)
    } else {
        Ok(100.0 + deviation_series(co.d, ratio - breakpoint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::rtd::{CU100, NI100, PT100};

    #[test]
    fn platinum_nominal_point() {
        assert_eq!(platinum_resistance(&PT100, 0.0), 100.0);
        assert!((platinum_temperature(&PT100, 100.0).unwrap()).abs() < 1e-9);
    }

    #[test]
    fn platinum_negative_branch_uses_series() {
        // Published Pt100 value at -200 °C
        let r = platinum_resistance(&PT100, -200.0);
        assert!((r - 18.52).abs() < 0.01);
        let t = platinum_temperature(&PT100, r).unwrap();
        assert!((t - -200.0).abs() < 0.015);
    }

    #[test]
    fn nickel_breakpoint_is_continuous() {
        let at_100 = nickel_resistance(&NI100, 100.0);
        assert!((at_100 / NI100.r0 - nickel_breakpoint_ratio(&NI100)).abs() < 1e-12);
        // Just above the breakpoint the C term engages without a jump
        let just_above = nickel_resistance(&NI100, 100.001);
        assert!((just_above - at_100).abs() < 0.01);
    }

    #[test]
    fn copper_positive_branch_is_linear() {
        let r = copper_resistance(&CU100, 50.0);
        assert_eq!(r, 100.0 * (1.0 + CU100.a * 50.0));
        assert!((copper_temperature(&CU100, r) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn negative_discriminant_is_reported() {
        // Far outside any calibrated span: ratio 8 flips the discriminant sign
        let result = platinum_temperature(&PT100, 800.0);
        assert_eq!(
            result,
            Err(ConvertError::NegativeDiscriminant { resistance: 800.0 })
        );
    }
}
