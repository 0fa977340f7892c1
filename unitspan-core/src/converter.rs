//! Bidirectional Unit Converters
//!
//! ## Overview
//!
//! A [`Converter`] is a stateless value object mapping between a quantity's
//! canonical base representation and one concrete engineering unit:
//!
//! ```text
//! base value --- from_base --> unit value
//! base value <-- to_base ---- unit value
//! ```
//!
//! Three closed forms exist, held as a tagged variant rather than a trait
//! hierarchy - the set is closed, no open extensibility is needed:
//!
//! - **Linear**: `from_base(v) = v*coeff + offset`
//! - **Scaling**: linear with `offset = 0` (pure multiplication)
//! - **Resistance curve**: the piecewise Callendar-Van Dusen polynomials from
//!   [`crate::rtd`], one variant per wire alloy
//!
//! ## Domain Bounds
//!
//! A converter may carry a span in base-unit space. The corresponding
//! converted-space span is derived once at construction by pushing the base
//! bounds through the raw forward transform, so both directions validate
//! against limits expressed in their own input space. An unset bound leaves
//! that side unchecked.
//!
//! Limit comparisons happen at rounded precision (2 decimal digits by
//! default) so that a value sitting exactly on a published bound survives the
//! floating-point noise of a prior conversion. Out-of-span values are
//! rejected, never clamped.
//!
//! ## Round-Trip Invariant
//!
//! For any `x` inside the declared base span,
//! `to_base(from_base(x)) ≈ x` within floating tolerance. Outside the span
//! the converter refuses to answer, because the RTD inverse series are only
//! fitted over the calibrated range.

use crate::errors::{ConvertError, ConvertResult};
use crate::rtd::{self, RtdCoefficients};

/// Decimal digits used for limit comparisons when none are given explicitly.
pub const DEFAULT_LIMIT_PRECISION: i32 = 2;

/// Round to a fixed number of decimal digits.
fn round_to(value: f64, digits: i32) -> f64 {
    let factor = libm::pow(10.0, digits as f64);
    libm::round(value * factor) / factor
}

/// One-sided-optional interval in a single value space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Span {
    low: Option<f64>,
    hi: Option<f64>,
}

impl Span {
    /// Validate a value against the interval at rounded precision.
    fn check(&self, value: f64, digits: i32) -> ConvertResult<()> {
        if !value.is_finite() {
            return Err(ConvertError::InvalidValue);
        }
        if let Some(low) = self.low {
            if round_to(value, digits) < round_to(low, digits) {
                return Err(ConvertError::BelowRange { value, min: low });
            }
        }
        if let Some(hi) = self.hi {
            if round_to(value, digits) > round_to(hi, digits) {
                return Err(ConvertError::AboveRange { value, max: hi });
            }
        }
        Ok(())
    }
}

/// The closed set of transform shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Curve {
    /// `from_base(v) = v*coeff + offset`
    Linear { coeff: f64, offset: f64 },
    /// Platinum Callendar-Van Dusen curve
    Platinum(RtdCoefficients),
    /// Copper resistance curve
    Copper(RtdCoefficients),
    /// Nickel resistance curve (breakpoint at 100 °C)
    Nickel(RtdCoefficients),
}

/// Stateless bidirectional transform between base and converted space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Converter {
    curve: Curve,
    base: Span,
    converted: Span,
}

impl Converter {
    /// Linear converter: `from_base(v) = v*coeff + offset`.
    ///
    /// Fails with [`ConvertError::ZeroCoefficient`] when `coeff` is zero,
    /// since the inverse divides by it, and with
    /// [`ConvertError::InvalidValue`] when either parameter is NaN or
    /// infinite.
    pub fn linear(coeff: f64, offset: f64) -> ConvertResult<Self> {
        if !coeff.is_finite() || !offset.is_finite() {
            return Err(ConvertError::InvalidValue);
        }
        if coeff == 0.0 {
            return Err(ConvertError::ZeroCoefficient);
        }
        Ok(Self::linear_unchecked(coeff, offset))
    }

    /// Multiplicative converter: linear with zero offset.
    pub fn scaling(coeff: f64) -> ConvertResult<Self> {
        Self::linear(coeff, 0.0)
    }

    /// Linear converter from coefficients known to be non-zero.
    ///
    /// Used by the in-crate unit registries, whose coefficients are literals.
    pub(crate) const fn linear_unchecked(coeff: f64, offset: f64) -> Self {
        Self {
            curve: Curve::Linear { coeff, offset },
            base: Span { low: None, hi: None },
            converted: Span { low: None, hi: None },
        }
    }

    /// Multiplicative converter from a coefficient known to be non-zero.
    pub(crate) const fn scaling_unchecked(coeff: f64) -> Self {
        Self::linear_unchecked(coeff, 0.0)
    }

    /// Platinum resistance curve with the platinum calibration span attached.
    pub fn platinum(coefficients: RtdCoefficients) -> Self {
        Self::rtd_curve(Curve::Platinum(coefficients)).with_bounds(
            crate::constants::rtd::PLATINUM_MIN_C,
            crate::constants::rtd::PLATINUM_MAX_C,
        )
    }

    /// Copper resistance curve with the copper calibration span attached.
    pub fn copper(coefficients: RtdCoefficients) -> Self {
        Self::rtd_curve(Curve::Copper(coefficients)).with_bounds(
            crate::constants::rtd::COPPER_MIN_C,
            crate::constants::rtd::COPPER_MAX_C,
        )
    }

    /// Nickel resistance curve with the nickel calibration span attached.
    pub fn nickel(coefficients: RtdCoefficients) -> Self {
        Self::rtd_curve(Curve::Nickel(coefficients)).with_bounds(
            crate::constants::rtd::NICKEL_MIN_C,
            crate::constants::rtd::NICKEL_MAX_C,
        )
    }

    fn rtd_curve(curve: Curve) -> Self {
        Self {
            curve,
            base: Span::default(),
            converted: Span::default(),
        }
    }

    /// Attach a base-space domain.
    ///
    /// The converted-space span is derived immediately by pushing both bounds
    /// through the raw forward transform. A decreasing transform (negative
    /// linear coefficient) reverses the interval, so the derived span is
    /// normalized to `low <= hi`.
    pub fn with_bounds(mut self, base_low: f64, base_hi: f64) -> Self {
        self.base = Span {
            low: Some(base_low),
            hi: Some(base_hi),
        };
        let mut lo = self.raw_from_base(base_low);
        let mut hi = self.raw_from_base(base_hi);
        if lo > hi {
            core::mem::swap(&mut lo, &mut hi);
        }
        self.converted = Span {
            low: Some(lo),
            hi: Some(hi),
        };
        self
    }

    /// Lower bound of the base-space domain, if declared.
    pub fn base_low(&self) -> Option<f64> {
        self.base.low
    }

    /// Upper bound of the base-space domain, if declared.
    pub fn base_hi(&self) -> Option<f64> {
        self.base.hi
    }

    /// Lower bound of the converted-space domain, if declared.
    pub fn converted_low(&self) -> Option<f64> {
        self.converted.low
    }

    /// Upper bound of the converted-space domain, if declared.
    pub fn converted_hi(&self) -> Option<f64> {
        self.converted.hi
    }

    /// Base-unit value -> this-unit value, limits checked at default precision.
    pub fn from_base(&self, value: f64) -> ConvertResult<f64> {
        self.from_base_with_precision(value, DEFAULT_LIMIT_PRECISION)
    }

    /// Base-unit value -> this-unit value with explicit limit precision.
    pub fn from_base_with_precision(&self, value: f64, digits: i32) -> ConvertResult<f64> {
        self.base.check(value, digits)?;
        Ok(self.raw_from_base(value))
    }

    /// This-unit value -> base-unit value, limits checked at default precision.
    pub fn to_base(&self, value: f64) -> ConvertResult<f64> {
        self.to_base_with_precision(value, DEFAULT_LIMIT_PRECISION)
    }

    /// This-unit value -> base-unit value with explicit limit precision.
    pub fn to_base_with_precision(&self, value: f64, digits: i32) -> ConvertResult<f64> {
        self.converted.check(value, digits)?;
        self.raw_to_base(value)
    }

    /// Forward transform without limit checks. Total for every curve shape.
    fn raw_from_base(&self, value: f64) -> f64 {
        match &self.curve {
            Curve::Linear { coeff, offset } => value * coeff + offset,
            Curve::Platinum(co) => rtd::platinum_resistance(co, value),
            Curve::Copper(co) => rtd::copper_resistance(co, value),
            Curve::Nickel(co) => rtd::nickel_resistance(co, value),
        }
    }

    /// Inverse transform without limit checks.
    ///
    /// Fallible: the RTD quadratic inverses can hit a negative discriminant
    /// for resistances outside any physical span.
    fn raw_to_base(&self, value: f64) -> ConvertResult<f64> {
        match &self.curve {
            Curve::Linear { coeff, offset } => Ok((value - offset) / coeff),
            Curve::Platinum(co) => rtd::platinum_temperature(co, value),
            Curve::Copper(co) => Ok(rtd::copper_temperature(co, value)),
            Curve::Nickel(co) => rtd::nickel_temperature(co, value),
        }
    }
}
