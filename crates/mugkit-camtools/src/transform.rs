//! Affine transform resolution.
//!
//! Parses SVG `transform` declarations into a single affine transform and
//! applies it to flattened points. Only one function per declaration is
//! honored: `matrix(...)` wins over `translate(...)`, which wins over
//! `scale(...)`. Anything else resolves to the identity.

use mugkit_core::PlanarPoint;
use regex::Regex;
use tracing::debug;

/// One affine transform in its declared form.
///
/// All variants reduce to `x' = a·x + c·y + e`, `y' = b·x + d·y + f`; the
/// simpler forms are kept as their own variants so the parse stays
/// faithful to what the document said.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Identity,
    Matrix {
        a: f64,
        b: f64,
        c: f64,
        d: f64,
        e: f64,
        f: f64,
    },
    Translate {
        tx: f64,
        ty: f64,
    },
    Scale {
        sx: f64,
        sy: f64,
    },
}

impl Transform {
    /// Applies the transform to one point.
    pub fn apply(&self, p: PlanarPoint) -> PlanarPoint {
        match *self {
            Transform::Identity => p,
            Transform::Matrix { a, b, c, d, e, f } => {
                PlanarPoint::new(a * p.x + c * p.y + e, b * p.x + d * p.y + f)
            }
            Transform::Translate { tx, ty } => PlanarPoint::new(p.x + tx, p.y + ty),
            Transform::Scale { sx, sy } => PlanarPoint::new(p.x * sx, p.y * sy),
        }
    }
}

/// Resolves a transform declaration to a single transform.
///
/// Absent or unrecognized declarations resolve to [`Transform::Identity`].
pub fn parse_transform(declaration: Option<&str>) -> Transform {
    let Some(declaration) = declaration else {
        return Transform::Identity;
    };

    let re_matrix = Regex::new(r"matrix\(([^)]+)\)").expect("invalid matrix regex");
    if let Some(caps) = re_matrix.captures(declaration) {
        let values = parse_values(&caps[1]);
        if values.len() == 6 {
            return Transform::Matrix {
                a: values[0],
                b: values[1],
                c: values[2],
                d: values[3],
                e: values[4],
                f: values[5],
            };
        }
        debug!(
            declaration,
            count = values.len(),
            "matrix() needs 6 values, falling through"
        );
    }

    let re_translate = Regex::new(r"translate\(([^)]+)\)").expect("invalid translate regex");
    if let Some(caps) = re_translate.captures(declaration) {
        let values = parse_values(&caps[1]);
        let tx = values.first().copied().unwrap_or(0.0);
        let ty = values.get(1).copied().unwrap_or(0.0);
        return Transform::Translate { tx, ty };
    }

    let re_scale = Regex::new(r"scale\(([^)]+)\)").expect("invalid scale regex");
    if let Some(caps) = re_scale.captures(declaration) {
        let values = parse_values(&caps[1]);
        let sx = values.first().copied().unwrap_or(1.0);
        // A single value scales both axes.
        let sy = values.get(1).copied().unwrap_or(sx);
        return Transform::Scale { sx, sy };
    }

    if !declaration.trim().is_empty() {
        debug!(declaration, "unrecognized transform declaration, using identity");
    }
    Transform::Identity
}

fn parse_values(list: &str) -> Vec<f64> {
    list.split([' ', ',', '\t', '\n'])
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse::<f64>().ok())
        .collect()
}
