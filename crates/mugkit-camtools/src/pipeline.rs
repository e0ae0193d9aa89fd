//! The conversion pipeline.
//!
//! Wires the stages together: parse each path string, flatten to planar
//! points, apply the path's transform, pick the projection bounds, project
//! onto the cylinder, and synthesize the motion command stream. Each stage
//! consumes its input and produces a new owned sequence; the whole run is
//! pure, so identical inputs always produce identical commands.

use mugkit_core::{
    ConversionError, ConversionParams, MotionCommand, PlanarPoint, SurfacePoint, VectorDocument,
};
use tracing::{debug, warn};

use crate::flatten::flatten_path;
use crate::path_parser::parse_path_data;
use crate::projection::{CylindricalProjector, SourceBounds};
use crate::toolpath::synthesize;
use crate::transform::parse_transform;

/// Converts a vector document into motion commands for the cylinder.
///
/// Malformed path data degrades locally: bad tokens and segments are
/// dropped without affecting sibling paths. Only two conditions are fatal
/// to the request: projection parameters that would divide by zero, and a
/// document with nothing drawable in it.
pub fn convert(
    document: &VectorDocument,
    params: &ConversionParams,
) -> Result<Vec<MotionCommand>, ConversionError> {
    params.validate()?;

    // Parse, flatten, and transform every path up front; the projection
    // bounds may need to scan all of them.
    let mut planar_paths: Vec<Vec<PlanarPoint>> = Vec::new();
    for (index, path) in document.paths.iter().enumerate() {
        let segments = parse_path_data(&path.data);
        if segments.is_empty() {
            debug!(path = index, "path produced no segments, dropping");
            continue;
        }

        let transform = parse_transform(path.transform.as_deref());
        let points: Vec<PlanarPoint> = flatten_path(&segments)
            .into_iter()
            .map(|p| transform.apply(p))
            .collect();

        if points.is_empty() {
            debug!(path = index, "path flattened to no points, dropping");
            continue;
        }
        planar_paths.push(points);
    }

    if planar_paths.is_empty() {
        warn!("document contains no drawable paths");
        return Err(ConversionError::EmptyDocument);
    }

    // Declared canvas is the default frame; scanning the artwork's own
    // bounding box is the fallback when the markup carried no size.
    let bounds = match document.canvas {
        Some(canvas) => SourceBounds::from_canvas(canvas),
        None => SourceBounds::from_points(planar_paths.iter().flatten()),
    };
    debug!(
        paths = planar_paths.len(),
        ?bounds,
        "projecting onto cylinder"
    );

    let projector = CylindricalProjector::new(params.projection, bounds);
    let surface_paths: Vec<Vec<SurfacePoint>> = planar_paths
        .iter()
        .map(|points| points.iter().map(|&p| projector.project(p)).collect())
        .collect();

    Ok(synthesize(&surface_paths, params.extrusion_rate))
}
