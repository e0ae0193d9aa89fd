//! # MugKit
//!
//! Convert vector artwork into motion instructions for printing on the
//! curved surface of a mug.
//!
//! ## Architecture
//!
//! MugKit is organized as a workspace:
//!
//! 1. **mugkit-core** - Document model, geometry types, parameters, errors
//! 2. **mugkit-camtools** - The conversion pipeline and G-code writer
//! 3. **mugkit** - Command-line host that reads an SVG file and writes G-code
//!
//! The geometry core performs no I/O; reading the input file and writing
//! the program text happen here, and delivering the program to a device is
//! left to whatever transport the machine uses.

pub use mugkit_camtools::{
    convert, extract_document, parse_path_data, synthesize, CylindricalProjector, GcodeParams,
    GcodeWriter, PathSegment, SourceBounds, Transform, FLATTEN_STEPS,
};
pub use mugkit_core::{
    CanvasSize, ConversionError, ConversionParams, MotionCommand, PlanarPoint, ProjectionParams,
    SurfacePoint, VectorDocument, VectorPath,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging on stderr with `RUST_LOG` environment
/// variable support, so diagnostics never mix with G-code on stdout.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
