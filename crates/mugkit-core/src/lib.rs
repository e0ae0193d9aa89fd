//! # MugKit Core
//!
//! Core types for MugKit: the vector document model, geometry types for the
//! planar → cylindrical pipeline, conversion parameters, and the error
//! taxonomy. The pipeline itself lives in `mugkit-camtools`; this crate is
//! deliberately free of parsing and I/O.

pub mod document;
pub mod error;
pub mod geometry;
pub mod params;

pub use document::{CanvasSize, VectorDocument, VectorPath};
pub use error::{ConversionError, Result};
pub use geometry::{MotionCommand, PlanarPoint, SurfacePoint};
pub use params::{
    ConversionParams, ProjectionParams, DEFAULT_CIRCUMFERENCE_MM, DEFAULT_HEIGHT_MM,
    DEFAULT_RADIUS_MM,
};
