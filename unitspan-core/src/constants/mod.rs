//! Constants for unitspan
//!
//! Centralized, documented calibration data used by the conversion engine.
//! These values are configuration, not logic: the algorithms in
//! [`crate::rtd`] and [`crate::converter`] take them as plain inputs, and a
//! deployment with differently calibrated elements can substitute its own.
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. When adding new constants, reference the calibration standard or
//!    datasheet they come from
//! 3. Use descriptive names that include units

/// RTD calibration tables (Callendar-Van Dusen coefficient sets and spans).
pub mod rtd;

// Re-export commonly used constants for convenience
pub use rtd::{CU100, NI100, P100, P50, PT100, PT50};
