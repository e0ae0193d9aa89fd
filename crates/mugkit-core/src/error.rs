//! Error handling for MugKit
//!
//! The conversion pipeline recovers from malformed path data locally (bad
//! tokens and segments are dropped, siblings survive), so only two
//! conditions ever reach the caller as errors: projection parameters that
//! would make the angle/height math undefined, and a document with nothing
//! drawable in it.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Conversion error type
///
/// Represents errors surfaced by the artwork-to-toolpath conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// A projection parameter would make the angle or height computation
    /// undefined (division by zero).
    #[error("invalid projection parameter {name}: {value} mm (must be strictly positive)")]
    InvalidParameter {
        /// The parameter name.
        name: &'static str,
        /// The rejected value in millimeters.
        value: f64,
    },

    /// The document yielded no usable paths after parsing and flattening.
    ///
    /// Callers should treat this as "nothing to convert" rather than a
    /// failure of the host process.
    #[error("nothing to convert: document contains no drawable paths")]
    EmptyDocument,
}

/// Result type using ConversionError
pub type Result<T> = std::result::Result<T, ConversionError>;
