//! Converter-level tests against published RTD reference tables
//!
//! The fixed points below are transcribed from the GOST 6651 / IEC 60751
//! resistance tables. Forward accuracy (temperature -> resistance) is held
//! to 0.01 Ω; the fitted inverse is held to 0.015 °C for platinum and
//! 0.01 °C for copper and nickel.

use proptest::prelude::*;

use unitspan_core::constants::rtd::{CU100, NI100, P100, PT100};
use unitspan_core::{ConvertError, Converter};

const PT100_POINTS: &[(f64, f64)] = &[
    (-200.0, 18.52),
    (-100.0, 60.26),
    (0.0, 100.0),
    (50.0, 119.4),
    (100.0, 138.51),
    (150.0, 157.33),
    (200.0, 175.86),
    (500.0, 280.98),
    (850.0, 390.48),
];

const P100_POINTS: &[(f64, f64)] = &[
    (-200.0, 17.24),
    (-100.0, 59.64),
    (0.0, 100.0),
    (50.0, 119.7),
    (100.0, 139.11),
    (150.0, 158.22),
    (200.0, 177.04),
    (500.0, 283.85),
    (850.0, 395.16),
];

const CU100_POINTS: &[(f64, f64)] = &[
    (-180.0, 20.53),
    (-100.0, 56.54),
    (0.0, 100.0),
    (50.0, 121.4),
    (100.0, 142.8),
    (150.0, 164.2),
    (200.0, 185.6),
];

const NI100_POINTS: &[(f64, f64)] = &[
    (-60.0, 69.45),
    (0.0, 100.0),
    (50.0, 129.17),
    (100.0, 161.72),
    (150.0, 198.68),
    (180.0, 223.21),
];

/// Every bounded converter rejects one unit past each bound, both directions.
fn check_converter_bounds(converter: &Converter) {
    let base_low = converter.base_low().unwrap();
    let base_hi = converter.base_hi().unwrap();
    assert!(converter.from_base(base_low - 1.0).is_err());
    assert!(converter.from_base(base_hi + 1.0).is_err());
    // Values exactly at the bounds succeed
    assert!(converter.from_base(base_low).is_ok());
    assert!(converter.from_base(base_hi).is_ok());

    let converted_low = converter.converted_low().unwrap();
    let converted_hi = converter.converted_hi().unwrap();
    assert!(converter.to_base(converted_low - 1.0).is_err());
    assert!(converter.to_base(converted_hi + 1.0).is_err());
    assert!(converter.to_base(converted_low).is_ok());
    assert!(converter.to_base(converted_hi).is_ok());
}

fn check_reference_points(
    converter: &Converter,
    points: &[(f64, f64)],
    forward_tol: f64,
    inverse_tol: f64,
) {
    for &(temperature, resistance) in points {
        let r = converter.from_base(temperature).unwrap();
        assert!(
            (r - resistance).abs() < forward_tol,
            "forward {temperature} C: got {r}, table says {resistance}"
        );
        let t = converter.to_base(resistance).unwrap();
        assert!(
            (t - temperature).abs() < inverse_tol,
            "inverse {resistance} Ohm: got {t}, table says {temperature}"
        );
    }
}

#[test]
fn linear_converter() {
    let converter = Converter::linear(1.0, 2.0).unwrap().with_bounds(0.0, 5.0);
    check_converter_bounds(&converter);
    assert_eq!(converter.from_base(2.0), Ok(4.0));
    assert_eq!(converter.to_base(4.0), Ok(2.0));
}

#[test]
fn scaling_converter() {
    let converter = Converter::scaling(42.0).unwrap().with_bounds(0.0, 50.0);
    check_converter_bounds(&converter);
    assert_eq!(converter.from_base(2.0), Ok(84.0));
    assert_eq!(converter.to_base(84.0), Ok(2.0));
}

#[test]
fn explicit_precision_tightens_limit_comparison() {
    let converter = Converter::scaling(2.0).unwrap().with_bounds(0.0, 10.0);

    // 10.0004 rounds onto the bound at 2 digits but past it at 4
    let noisy = 10.0004;
    assert!(converter.from_base(noisy).is_ok());
    assert!(matches!(
        converter.from_base_with_precision(noisy, 4),
        Err(ConvertError::AboveRange { .. })
    ));

    // Same contract on the converted side (bound 20.0)
    let noisy = 20.0004;
    assert!(converter.to_base(noisy).is_ok());
    assert!(matches!(
        converter.to_base_with_precision(noisy, 4),
        Err(ConvertError::AboveRange { .. })
    ));

    // In-span values convert identically at any precision
    assert_eq!(converter.from_base_with_precision(3.0, 4), Ok(6.0));
    assert_eq!(converter.to_base_with_precision(6.0, 4), Ok(3.0));
}

#[test]
fn zero_coefficient_always_rejected() {
    for offset in [0.0, -4.0, 32.0, 273.15] {
        assert_eq!(
            Converter::linear(0.0, offset),
            Err(ConvertError::ZeroCoefficient)
        );
    }
    assert_eq!(Converter::scaling(0.0), Err(ConvertError::ZeroCoefficient));
}

#[test]
fn pt100_reference_table() {
    let converter = Converter::platinum(PT100);
    check_converter_bounds(&converter);
    check_reference_points(&converter, PT100_POINTS, 0.01, 0.015);
}

#[test]
fn p100_reference_table() {
    let converter = Converter::platinum(P100);
    check_converter_bounds(&converter);
    check_reference_points(&converter, P100_POINTS, 0.01, 0.015);
}

#[test]
fn cu100_reference_table() {
    let converter = Converter::copper(CU100);
    check_converter_bounds(&converter);
    check_reference_points(&converter, CU100_POINTS, 0.01, 0.01);
}

#[test]
fn ni100_reference_table() {
    let converter = Converter::nickel(NI100);
    check_converter_bounds(&converter);
    check_reference_points(&converter, NI100_POINTS, 0.01, 0.01);
}

proptest! {
    /// Round-trip invariant for the algebraic converters.
    #[test]
    fn linear_round_trip(
        coeff in prop::sample::select(vec![-250.0, -1.8, -0.16, 0.04, 0.2, 1.0, 1.8, 42.0, 1000.0]),
        offset in -1000.0..1000.0f64,
        value in -1.0e6..1.0e6f64,
    ) {
        let converter = Converter::linear(coeff, offset).unwrap();
        let there = converter.from_base(value).unwrap();
        let back = converter.to_base(there).unwrap();
        prop_assert!((back - value).abs() <= 1e-6 * value.abs().max(1.0));
    }

    /// Round-trip invariant for the platinum curve over its calibrated span.
    ///
    /// The exact quadratic inverse covers t >= 0; below zero the fitted
    /// series carries the published fit tolerance, hence the looser bound.
    #[test]
    fn platinum_round_trip(value in -200.0..850.0f64) {
        let converter = Converter::platinum(PT100);
        let resistance = converter.from_base(value).unwrap();
        let back = converter.to_base(resistance).unwrap();
        prop_assert!((back - value).abs() < 0.05);
    }

    /// Out-of-span values are rejected on the forward path, never clamped.
    #[test]
    fn platinum_rejects_outside_span(value in 851.0..10_000.0f64) {
        let converter = Converter::platinum(PT100);
        prop_assert!(
            matches!(converter.from_base(value), Err(ConvertError::AboveRange { .. })),
            "value {} was not rejected",
            value
        );
    }
}
