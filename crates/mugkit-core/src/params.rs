//! Conversion parameters.
//!
//! The target device maps its X axis to rotation around the mug (in mm of
//! circumference) and its Y axis to height up the mug. The defaults match
//! that machine: a 280 mm usable circumference and an 80 mm drawable
//! height.

use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, Result};

/// Default usable circumference of the mug surface, in mm.
pub const DEFAULT_CIRCUMFERENCE_MM: f64 = 280.0;

/// Default drawable height of the mug surface, in mm.
pub const DEFAULT_HEIGHT_MM: f64 = 80.0;

/// Default mug radius used for the Cartesian surface trace, in mm.
pub const DEFAULT_RADIUS_MM: f64 = 30.0;

/// Geometry of the cylinder surface the artwork is wrapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionParams {
    /// Usable circumference in mm. One full wrap of the artwork's width
    /// maps to this many millimeters of rotation.
    pub circumference_mm: f64,
    /// Drawable height in mm. Heights are centered on the cylinder's
    /// vertical midpoint.
    pub height_mm: f64,
    /// Horizontal offset applied after axis inversion, in mm.
    pub x_offset_mm: f64,
    /// Vertical offset applied after axis flip, in mm.
    pub y_offset_mm: f64,
    /// Cylinder radius for the Cartesian trace, in mm.
    pub radius_mm: f64,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            circumference_mm: DEFAULT_CIRCUMFERENCE_MM,
            height_mm: DEFAULT_HEIGHT_MM,
            x_offset_mm: 0.0,
            y_offset_mm: 0.0,
            radius_mm: DEFAULT_RADIUS_MM,
        }
    }
}

impl ProjectionParams {
    /// Rejects parameters that would make the projection undefined.
    ///
    /// A zero circumference or height would divide by zero in the
    /// angle/height mapping; negative values are equally meaningless.
    pub fn validate(&self) -> Result<()> {
        if !(self.circumference_mm > 0.0) {
            return Err(ConversionError::InvalidParameter {
                name: "circumference_mm",
                value: self.circumference_mm,
            });
        }
        if !(self.height_mm > 0.0) {
            return Err(ConversionError::InvalidParameter {
                name: "height_mm",
                value: self.height_mm,
            });
        }
        if !(self.radius_mm > 0.0) {
            return Err(ConversionError::InvalidParameter {
                name: "radius_mm",
                value: self.radius_mm,
            });
        }
        Ok(())
    }
}

/// Everything one conversion request needs besides the document itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionParams {
    /// Cylinder surface geometry.
    pub projection: ProjectionParams,
    /// Extrusion per millimeter of chord length on drawing moves.
    pub extrusion_rate: f64,
}

impl Default for ConversionParams {
    fn default() -> Self {
        Self {
            projection: ProjectionParams::default(),
            extrusion_rate: 1.0,
        }
    }
}

impl ConversionParams {
    /// Validates the projection geometry. The extrusion rate is
    /// intentionally unconstrained; zero disables deposition and negative
    /// values retract, both of which are legitimate device-side choices.
    pub fn validate(&self) -> Result<()> {
        self.projection.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ConversionParams::default().validate().is_ok());
    }

    #[test]
    fn test_zero_circumference_rejected() {
        let params = ProjectionParams {
            circumference_mm: 0.0,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ConversionError::InvalidParameter {
                name: "circumference_mm",
                value: 0.0,
            })
        );
    }

    #[test]
    fn test_negative_height_rejected() {
        let params = ProjectionParams {
            height_mm: -5.0,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_nan_circumference_rejected() {
        let params = ProjectionParams {
            circumference_mm: f64::NAN,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_params_deserialize_with_partial_json() {
        let params: ConversionParams =
            serde_json::from_str(r#"{"extrusion_rate": 0.5}"#).unwrap();
        assert_eq!(params.extrusion_rate, 0.5);
        assert_eq!(params.projection.circumference_mm, DEFAULT_CIRCUMFERENCE_MM);
    }
}
