//! RTD Calibration Tables
//!
//! Coefficient sets for the shipped resistance-temperature sensor models.
//! Each set feeds the Callendar-Van Dusen polynomials in [`crate::rtd`];
//! nothing here is derivable, it is calibration data transcribed from the
//! standards.
//!
//! Two platinum alloys are covered:
//! - alpha = 0.00391 (GOST 6651 "П" elements, P100/P50)
//! - alpha = 0.00385 (IEC 60751 elements, Pt100/Pt50)
//!
//! The inverse-series D tuples are the fitted approximations published
//! alongside the forward coefficients; they are only valid over the span
//! constants below, which is why converters attach those spans as hard
//! domain bounds.

use crate::rtd::RtdCoefficients;

// ===== CALIBRATED SPANS (°C) =====

/// Lower calibration limit for platinum elements (°C).
///
/// Source: IEC 60751 / GOST 6651 table range
pub const PLATINUM_MIN_C: f64 = -200.0;

/// Upper calibration limit for platinum elements (°C).
///
/// Source: IEC 60751 / GOST 6651 table range
pub const PLATINUM_MAX_C: f64 = 850.0;

/// Lower calibration limit for copper elements (°C).
pub const COPPER_MIN_C: f64 = -180.0;

/// Upper calibration limit for copper elements (°C).
pub const COPPER_MAX_C: f64 = 200.0;

/// Lower calibration limit for nickel elements (°C).
pub const NICKEL_MIN_C: f64 = -60.0;

/// Upper calibration limit for nickel elements (°C).
pub const NICKEL_MAX_C: f64 = 180.0;

// ===== PLATINUM, alpha = 0.00391 =====

/// 100П element (GOST 6651, alpha = 0.00391), R0 = 100 Ω.
pub const P100: RtdCoefficients = RtdCoefficients {
    r0: 100.0,
    a: 3.9690e-3,
    b: -5.841e-7,
    c: -4.330e-12,
    d: &[251.903, 8.80035, -2.91506, 1.67611],
};

/// 50П element (GOST 6651, alpha = 0.00391), R0 = 50 Ω.
pub const P50: RtdCoefficients = RtdCoefficients { r0: 50.0, ..P100 };

// ===== PLATINUM, alpha = 0.00385 =====

/// Pt100 element (IEC 60751, alpha = 0.00385), R0 = 100 Ω.
pub const PT100: RtdCoefficients = RtdCoefficients {
    r0: 100.0,
    a: 3.9083e-3,
    b: -5.775e-7,
    c: -4.183e-12,
    d: &[255.819, 9.14550, -2.92363, 1.79090],
};

/// Pt50 element (IEC 60751, alpha = 0.00385), R0 = 50 Ω.
pub const PT50: RtdCoefficients = RtdCoefficients { r0: 50.0, ..PT100 };

// ===== NICKEL =====

/// Ni100 element (GOST 6651), R0 = 100 Ω.
///
/// This is the coefficient set consistent with the published reference
/// table (69.45 Ω at -60 °C, 161.72 Ω at 100 °C, 223.21 Ω at 180 °C).
pub const NI100: RtdCoefficients = RtdCoefficients {
    r0: 100.0,
    a: 5.4963e-3,
    b: 6.7556e-6,
    c: 9.2004e-9,
    d: &[144.096, -25.502, 4.4876],
};

// ===== COPPER =====

/// Cu100 element (GOST 6651, alpha = 0.00428), R0 = 100 Ω.
pub const CU100: RtdCoefficients = RtdCoefficients {
    r0: 100.0,
    a: 4.28e-3,
    b: -6.2032e-7,
    c: 8.5154e-10,
    d: &[233.87, 7.9370, -2.0062, -0.3953],
};
