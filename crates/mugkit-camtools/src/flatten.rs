//! Curve flattening.
//!
//! Converts parsed path segments into polylines at a fixed subdivision
//! resolution. Relative commands are interpreted against the pen position
//! left by the previous segment, so this is an ordered fold over the
//! segment list, not a map: the pen state (current position plus the
//! subpath start for `Close`) threads through every step.

use mugkit_core::PlanarPoint;

use crate::path_parser::PathSegment;

/// Number of subdivision steps per drawing segment. Every line or curve
/// between two endpoints emits `FLATTEN_STEPS + 1` points, including both
/// endpoints.
pub const FLATTEN_STEPS: usize = 10;

/// Pen state threaded through the fold.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Pen {
    current: PlanarPoint,
    start: PlanarPoint,
}

impl Default for Pen {
    fn default() -> Self {
        let origin = PlanarPoint::new(0.0, 0.0);
        Self {
            current: origin,
            start: origin,
        }
    }
}

/// Flattens one path's segments into planar points.
///
/// Each call starts from a fresh pen at (0, 0); no state leaks between
/// paths or between conversion requests.
pub fn flatten_path(segments: &[PathSegment]) -> Vec<PlanarPoint> {
    let (points, _pen) = segments
        .iter()
        .fold((Vec::new(), Pen::default()), |(mut points, pen), segment| {
            let pen = flatten_segment(segment, pen, &mut points);
            (points, pen)
        });
    points
}

fn flatten_segment(segment: &PathSegment, pen: Pen, out: &mut Vec<PlanarPoint>) -> Pen {
    match *segment {
        PathSegment::MoveTo { absolute, x, y } => {
            let target = resolve(pen.current, absolute, x, y);
            out.push(target);
            Pen {
                current: target,
                start: target,
            }
        }
        PathSegment::LineTo { absolute, x, y } => {
            let target = resolve(pen.current, absolute, x, y);
            emit_line(out, pen.current, target);
            Pen {
                current: target,
                ..pen
            }
        }
        PathSegment::HorizontalTo { absolute, x } => {
            let nx = if absolute { x } else { pen.current.x + x };
            let target = PlanarPoint::new(nx, pen.current.y);
            emit_line(out, pen.current, target);
            Pen {
                current: target,
                ..pen
            }
        }
        PathSegment::VerticalTo { absolute, y } => {
            let ny = if absolute { y } else { pen.current.y + y };
            let target = PlanarPoint::new(pen.current.x, ny);
            emit_line(out, pen.current, target);
            Pen {
                current: target,
                ..pen
            }
        }
        PathSegment::CubicTo {
            absolute,
            x1,
            y1,
            x2,
            y2,
            x,
            y,
        } => {
            let c1 = resolve(pen.current, absolute, x1, y1);
            let c2 = resolve(pen.current, absolute, x2, y2);
            let target = resolve(pen.current, absolute, x, y);
            for step in 0..=FLATTEN_STEPS {
                let t = step as f64 / FLATTEN_STEPS as f64;
                out.push(cubic_at(pen.current, c1, c2, target, t));
            }
            Pen {
                current: target,
                ..pen
            }
        }
        PathSegment::QuadTo {
            absolute,
            x1,
            y1,
            x,
            y,
        } => {
            let c = resolve(pen.current, absolute, x1, y1);
            let target = resolve(pen.current, absolute, x, y);
            for step in 0..=FLATTEN_STEPS {
                let t = step as f64 / FLATTEN_STEPS as f64;
                out.push(quadratic_at(pen.current, c, target, t));
            }
            Pen {
                current: target,
                ..pen
            }
        }
        PathSegment::Close => {
            if pen.current != pen.start {
                emit_line(out, pen.current, pen.start);
            }
            Pen {
                current: pen.start,
                ..pen
            }
        }
    }
}

fn resolve(current: PlanarPoint, absolute: bool, x: f64, y: f64) -> PlanarPoint {
    if absolute {
        PlanarPoint::new(x, y)
    } else {
        PlanarPoint::new(current.x + x, current.y + y)
    }
}

fn emit_line(out: &mut Vec<PlanarPoint>, from: PlanarPoint, to: PlanarPoint) {
    for step in 0..=FLATTEN_STEPS {
        let t = step as f64 / FLATTEN_STEPS as f64;
        out.push(PlanarPoint::new(
            from.x + (to.x - from.x) * t,
            from.y + (to.y - from.y) * t,
        ));
    }
}

/// Cubic Bernstein evaluation.
fn cubic_at(
    p0: PlanarPoint,
    p1: PlanarPoint,
    p2: PlanarPoint,
    p3: PlanarPoint,
    t: f64,
) -> PlanarPoint {
    let mt = 1.0 - t;
    let x = mt * mt * mt * p0.x
        + 3.0 * mt * mt * t * p1.x
        + 3.0 * mt * t * t * p2.x
        + t * t * t * p3.x;
    let y = mt * mt * mt * p0.y
        + 3.0 * mt * mt * t * p1.y
        + 3.0 * mt * t * t * p2.y
        + t * t * t * p3.y;
    PlanarPoint::new(x, y)
}

/// Quadratic Bernstein evaluation.
fn quadratic_at(p0: PlanarPoint, p1: PlanarPoint, p2: PlanarPoint, t: f64) -> PlanarPoint {
    let mt = 1.0 - t;
    let x = mt * mt * p0.x + 2.0 * mt * t * p1.x + t * t * p2.x;
    let y = mt * mt * p0.y + 2.0 * mt * t * p1.y + t * t * p2.y;
    PlanarPoint::new(x, y)
}
