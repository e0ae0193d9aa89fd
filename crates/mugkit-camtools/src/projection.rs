//! Cylindrical projection.
//!
//! Maps transformed planar points onto the mug surface. The horizontal axis
//! is inverted so artwork reads correctly when wrapped around the outside
//! of the cylinder, and the vertical axis is flipped because source Y grows
//! downward while cylinder height grows upward.

use std::f64::consts::TAU;

use mugkit_core::{CanvasSize, PlanarPoint, ProjectionParams, SurfacePoint};
use nalgebra::Point3;

/// Bounds of the source artwork the projection normalizes against.
///
/// Preferred source is the document's declared canvas; when the markup
/// carries no usable size, bounds are scanned from the transformed points
/// of every path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl SourceBounds {
    /// Bounds from a declared canvas: origin at (0, 0).
    pub fn from_canvas(canvas: CanvasSize) -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            width: canvas.width,
            height: canvas.height,
        }
    }

    /// Bounds scanned from every point of every path.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a PlanarPoint>) -> Self {
        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;
        let mut any = false;

        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
            any = true;
        }

        if !any {
            return Self {
                min_x: 0.0,
                min_y: 0.0,
                width: 0.0,
                height: 0.0,
            };
        }

        Self {
            min_x,
            min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }
}

/// Projects planar artwork points onto a cylinder of fixed radius.
#[derive(Debug, Clone, Copy)]
pub struct CylindricalProjector {
    params: ProjectionParams,
    bounds: SourceBounds,
}

impl CylindricalProjector {
    /// Creates a projector. `params` must already be validated; see
    /// [`ProjectionParams::validate`].
    pub fn new(params: ProjectionParams, bounds: SourceBounds) -> Self {
        Self { params, bounds }
    }

    /// Maps one planar point to the cylinder surface.
    ///
    /// The angle is intentionally not wrapped to [0, 2π): points outside
    /// the nominal circumference project past the seam.
    pub fn project(&self, p: PlanarPoint) -> SurfacePoint {
        // Invert X so the artwork reads left-to-right on the mug, flip Y
        // because source Y grows downward.
        let x_mm = (self.bounds.width - (p.x - self.bounds.min_x)) + self.params.x_offset_mm;
        let y_mm = (self.bounds.height - (p.y - self.bounds.min_y)) + self.params.y_offset_mm;

        let angle = x_mm / self.params.circumference_mm * TAU;
        // Centered about the cylinder's vertical midpoint.
        let height = y_mm - self.params.height_mm / 2.0;

        let radius = self.params.radius_mm;
        SurfacePoint {
            angle,
            height,
            cartesian: Point3::new(radius * angle.cos(), height, radius * angle.sin()),
        }
    }
}
