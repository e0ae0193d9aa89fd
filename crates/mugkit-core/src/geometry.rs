//! Geometry types shared across the conversion pipeline.
//!
//! Points flow through three coordinate spaces: planar artwork millimeters,
//! cylinder surface coordinates (angle + height), and the Cartesian trace
//! of the surface used for chord lengths and preview geometry.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// A 2D point in artwork space, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    /// Creates a new planar point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point on the cylinder surface.
///
/// `angle` is not normalized to [0, 2π); values outside the nominal range
/// project past the seam, which callers may rely on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    /// Rotation around the cylinder axis, in radians.
    pub angle: f64,
    /// Height along the cylinder axis, in mm, centered on the vertical midpoint.
    pub height: f64,
    /// The same point in Cartesian space (x, y, z), y up.
    pub cartesian: Point3<f64>,
}

impl SurfacePoint {
    /// Straight-line distance to another surface point, through space
    /// rather than along the surface.
    pub fn chord_to(&self, other: &SurfacePoint) -> f64 {
        nalgebra::distance(&self.cartesian, &other.cartesian)
    }
}

/// A single motion instruction for the plotting device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionCommand {
    /// Reposition without drawing.
    Travel {
        /// Destination on the cylinder surface.
        target: SurfacePoint,
    },
    /// Draw while moving, depositing material.
    Draw {
        /// Destination on the cylinder surface.
        target: SurfacePoint,
        /// Material to extrude over this move, proportional to chord length.
        extrusion: f64,
    },
}

impl MotionCommand {
    /// The destination of this command.
    pub fn target(&self) -> &SurfacePoint {
        match self {
            MotionCommand::Travel { target } => target,
            MotionCommand::Draw { target, .. } => target,
        }
    }

    /// Whether this command deposits material.
    pub fn is_draw(&self) -> bool {
        matches!(self, MotionCommand::Draw { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_is_euclidean_distance() {
        let a = SurfacePoint {
            angle: 0.0,
            height: 0.0,
            cartesian: Point3::new(0.0, 0.0, 0.0),
        };
        let b = SurfacePoint {
            angle: 0.0,
            height: 4.0,
            cartesian: Point3::new(3.0, 4.0, 0.0),
        };
        assert!((a.chord_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_travel_carries_no_extrusion() {
        let target = SurfacePoint {
            angle: 1.0,
            height: 2.0,
            cartesian: Point3::new(1.0, 2.0, 3.0),
        };
        let travel = MotionCommand::Travel { target };
        assert!(!travel.is_draw());
        assert_eq!(travel.target().height, 2.0);
    }
}
