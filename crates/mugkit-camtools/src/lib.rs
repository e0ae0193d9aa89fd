//! # MugKit CAM Tools
//!
//! Converts 2D vector artwork into motion instructions that trace it onto
//! the curved surface of a mug, for a cylindrical-coordinate plotter.
//!
//! ## Pipeline
//!
//! - **SVG Extraction**: normalize drawable SVG elements into path-data strings
//! - **Path Parser**: tokenize the path mini-language into typed segments
//! - **Curve Flattener**: fixed-step subdivision of lines and Bézier curves
//! - **Transform Resolver**: single-function matrix/translate/scale declarations
//! - **Cylindrical Projector**: planar millimeters to (angle, height) on the mug
//! - **Toolpath Synthesizer**: travel/draw command stream with extrusion metering
//! - **G-code Writer**: textual program for the device's rotation/height axes
//!
//! Data flows strictly forward; every stage produces a new owned sequence.
//! The entry point is [`convert`].

pub mod flatten;
pub mod gcode;
pub mod path_parser;
pub mod pipeline;
pub mod projection;
pub mod svg;
pub mod toolpath;
pub mod transform;

// Re-export commonly used items
pub use flatten::{flatten_path, FLATTEN_STEPS};
pub use gcode::{GcodeParams, GcodeWriter};
pub use path_parser::{parse_path_data, PathSegment};
pub use pipeline::convert;
pub use projection::{CylindricalProjector, SourceBounds};
pub use svg::extract_document;
pub use toolpath::synthesize;
pub use transform::{parse_transform, Transform};
