//! Error Types for Unit Conversion Failures
//!
//! ## Design Philosophy
//!
//! The error system follows the same rules as the rest of the crate:
//!
//! 1. **Small Size**: Each variant is kept minimal since errors are returned
//!    from hot conversion paths and may be stored by callers.
//!
//! 2. **No Heap Allocation**: All error data is inline - no String. This keeps
//!    the type usable from `no_std` builds.
//!
//! 3. **Copy Semantics**: Errors implement Copy for efficient return from
//!    functions without move semantics complications.
//!
//! 4. **Actionable Information**: Range violations carry the offending value
//!    and the limit that rejected it, so the caller can retry with a corrected
//!    input without further queries.
//!
//! ## Error Categories
//!
//! ### Construction failures
//! - `ZeroCoefficient`: a linear or multiplicative converter was built with a
//!   zero slope, which has no inverse. Fatal and raised immediately.
//!
//! ### Domain violations
//! - `BelowRange` / `AboveRange`: the value falls outside the converter's
//!   declared span. Checked at rounded precision, never silently clamped.
//! - `InvalidValue`: NaN or infinity - no physical reading is ever non-finite.
//!
//! ### Math domain faults
//! - `NegativeDiscriminant`: the quadratic-formula inverse of a resistance
//!   curve was asked for a resistance whose discriminant goes negative due to
//!   coefficient imprecision. Raised explicitly instead of propagating a NaN.
//!
//! All errors are local and terminal for the failing operation. No conversion
//! has side effects, so a failed call leaves no partial state behind.

use thiserror_no_std::Error;

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Conversion errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConvertError {
    /// Linear or multiplicative converter built with a zero slope
    #[error("Conversion coefficient must be non-zero")]
    ZeroCoefficient,

    /// Value below the converter's declared span
    #[error("Value {value} must be >= {min}")]
    BelowRange {
        /// The value that failed validation
        value: f64,
        /// Lower limit of the declared span
        min: f64,
    },

    /// Value above the converter's declared span
    #[error("Value {value} must be <= {max}")]
    AboveRange {
        /// The value that failed validation
        value: f64,
        /// Upper limit of the declared span
        max: f64,
    },

    /// Resistance pushes the quadratic-inverse discriminant negative
    #[error("Resistance {resistance} has no real temperature solution")]
    NegativeDiscriminant {
        /// The resistance that produced the fault
        resistance: f64,
    },

    /// Value makes no physical sense (NaN, infinity)
    #[error("Invalid value: not a valid number")]
    InvalidValue,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConvertError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ZeroCoefficient =>
                defmt::write!(fmt, "Coefficient must be non-zero"),
            Self::BelowRange { value, min } =>
                defmt::write!(fmt, "Value {} must be >= {}", value, min),
            Self::AboveRange { value, max } =>
                defmt::write!(fmt, "Value {} must be <= {}", value, max),
            Self::NegativeDiscriminant { resistance } =>
                defmt::write!(fmt, "Resistance {} has no real solution", resistance),
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
        }
    }
}
