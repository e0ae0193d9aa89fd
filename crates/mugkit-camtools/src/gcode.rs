//! G-code serialization.
//!
//! Renders a motion command stream as G-code text for a cylindrical
//! plotter whose X axis is rotation around the mug (in mm of circumference)
//! and whose Y axis is height. Extrusion is emitted as relative `E` words
//! (`M83`), one per drawing move. Transmission to a controller is the
//! host's job; this module only produces text.

use std::f64::consts::TAU;

use chrono::Utc;
use mugkit_core::{MotionCommand, ProjectionParams};
use serde::{Deserialize, Serialize};

/// Feed rates for the generated program.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GcodeParams {
    /// Feed rate for drawing moves (mm/min).
    pub draw_feed_rate: f64,
    /// Feed rate for travel moves (mm/min).
    pub travel_feed_rate: f64,
}

impl Default for GcodeParams {
    fn default() -> Self {
        Self {
            draw_feed_rate: 600.0,
            travel_feed_rate: 3000.0,
        }
    }
}

/// Writes motion commands as G-code text.
#[derive(Debug, Clone, Copy)]
pub struct GcodeWriter {
    params: GcodeParams,
}

impl GcodeWriter {
    /// Creates a writer with the given feed rates.
    pub fn new(params: GcodeParams) -> Self {
        Self { params }
    }

    /// Renders the full program.
    ///
    /// `projection` supplies the circumference used to unroll angles back
    /// into the device's rotation-axis millimeters.
    pub fn write(&self, commands: &[MotionCommand], projection: &ProjectionParams) -> String {
        let mut gcode = String::new();

        gcode.push_str("; Mug toolpath\n");
        gcode.push_str(&format!(
            "; Generated: {}\n",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ));
        gcode.push_str(&format!(
            "; Surface: {:.1} x {:.1} mm\n",
            projection.circumference_mm, projection.height_mm
        ));
        gcode.push_str(&format!("; Commands: {}\n", commands.len()));
        gcode.push_str(";\n");

        gcode.push_str("G21 ; Set units to millimeters\n");
        gcode.push_str("G90 ; Absolute positioning\n");
        gcode.push_str("M83 ; Relative extrusion\n");
        gcode.push('\n');

        for command in commands {
            match command {
                MotionCommand::Travel { target } => {
                    let (x, y) = self.device_coords(target.angle, target.height, projection);
                    gcode.push_str(&format!(
                        "G0 X{:.3} Y{:.3} F{:.0}\n",
                        x, y, self.params.travel_feed_rate
                    ));
                }
                MotionCommand::Draw { target, extrusion } => {
                    let (x, y) = self.device_coords(target.angle, target.height, projection);
                    gcode.push_str(&format!(
                        "G1 X{:.3} Y{:.3} E{:.5} F{:.0}\n",
                        x, y, extrusion, self.params.draw_feed_rate
                    ));
                }
            }
        }

        gcode.push_str("\n; End of toolpath\n");
        gcode
    }

    /// Unrolls a surface point into machine axes: X in mm of rotation
    /// around the mug, Y in mm of height above the surface midline.
    fn device_coords(&self, angle: f64, height: f64, projection: &ProjectionParams) -> (f64, f64) {
        (angle / TAU * projection.circumference_mm, height)
    }
}
