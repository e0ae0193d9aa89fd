//! SVG document extraction.
//!
//! Pulls a [`VectorDocument`] out of SVG markup text. This is deliberately
//! not a full XML parser: elements are located with regular expressions and
//! each drawable kind is normalized to an equivalent path-data string.
//! Fills, gradients, clipping, and text are ignored; only stroke geometry
//! survives.
//!
//! Supported elements: `<path>`, `<line>`, `<rect>`, `<circle>`,
//! `<polyline>`, `<polygon>`.

use anyhow::{bail, Result};
use mugkit_core::{CanvasSize, VectorDocument};
use regex::Regex;
use tracing::debug;

/// Control-point offset for approximating a circle quadrant with a cubic,
/// as a fraction of the radius.
const KAPPA: f64 = 0.552_284_749_830_793_6;

/// Extracts all drawable elements from SVG markup into a document.
///
/// The document is walked one element kind at a time, paths first, and
/// markup order is preserved within each kind. Returns an error only when
/// the text has no `<svg>` element at all; markup with no drawable content
/// yields an empty document.
pub fn extract_document(svg: &str) -> Result<VectorDocument> {
    if !svg.contains("<svg") {
        bail!("invalid SVG: missing <svg> element");
    }

    let mut document = VectorDocument::new();
    document.canvas = extract_canvas(svg);

    let re_path = Regex::new(r"<path\s+([^>]+)>").expect("invalid path regex");
    for cap in re_path.captures_iter(svg) {
        let attrs = &cap[1];
        if let Some(d) = extract_attr(attrs, "d") {
            document.push_path(d, extract_attr(attrs, "transform"));
        }
    }

    let re_line = Regex::new(r"<line\s+([^>]+)>").expect("invalid line regex");
    for cap in re_line.captures_iter(svg) {
        let attrs = &cap[1];
        let x1 = attr_f64(attrs, "x1").unwrap_or(0.0);
        let y1 = attr_f64(attrs, "y1").unwrap_or(0.0);
        let x2 = attr_f64(attrs, "x2").unwrap_or(0.0);
        let y2 = attr_f64(attrs, "y2").unwrap_or(0.0);
        document.push_path(
            format!("M {} {} L {} {}", x1, y1, x2, y2),
            extract_attr(attrs, "transform"),
        );
    }

    let re_rect = Regex::new(r"<rect\s+([^>]+)>").expect("invalid rect regex");
    for cap in re_rect.captures_iter(svg) {
        let attrs = &cap[1];
        let x = attr_f64(attrs, "x").unwrap_or(0.0);
        let y = attr_f64(attrs, "y").unwrap_or(0.0);
        let width = attr_f64(attrs, "width").unwrap_or(0.0);
        let height = attr_f64(attrs, "height").unwrap_or(0.0);
        if width <= 0.0 || height <= 0.0 {
            continue;
        }
        // Sharp corners; rounded-corner radii are ignored.
        document.push_path(
            format!(
                "M {} {} L {} {} L {} {} L {} {} Z",
                x,
                y,
                x + width,
                y,
                x + width,
                y + height,
                x,
                y + height
            ),
            extract_attr(attrs, "transform"),
        );
    }

    let re_circle = Regex::new(r"<circle\s+([^>]+)>").expect("invalid circle regex");
    for cap in re_circle.captures_iter(svg) {
        let attrs = &cap[1];
        let cx = attr_f64(attrs, "cx").unwrap_or(0.0);
        let cy = attr_f64(attrs, "cy").unwrap_or(0.0);
        let r = attr_f64(attrs, "r").unwrap_or(0.0);
        if r <= 0.0 {
            continue;
        }
        document.push_path(circle_to_path(cx, cy, r), extract_attr(attrs, "transform"));
    }

    let re_poly = Regex::new(r"<(polyline|polygon)\s+([^>]+)>").expect("invalid poly regex");
    for cap in re_poly.captures_iter(svg) {
        let closed = &cap[1] == "polygon";
        let attrs = &cap[2];
        let Some(points) = extract_attr(attrs, "points") else {
            continue;
        };
        if let Some(data) = points_to_path(&points, closed) {
            document.push_path(data, extract_attr(attrs, "transform"));
        }
    }

    debug!(
        paths = document.paths.len(),
        canvas = ?document.canvas,
        "extracted vector document"
    );
    Ok(document)
}

/// Declared canvas size: `viewBox` width/height when present, otherwise the
/// `width`/`height` attributes of the `<svg>` element.
fn extract_canvas(svg: &str) -> Option<CanvasSize> {
    let re_viewbox = Regex::new(r#"viewBox\s*=\s*["']([^"']+)["']"#).expect("invalid viewbox regex");
    if let Some(caps) = re_viewbox.captures(svg) {
        let parts: Vec<&str> = caps[1].split_whitespace().collect();
        if parts.len() >= 4 {
            if let (Ok(width), Ok(height)) = (parts[2].parse::<f64>(), parts[3].parse::<f64>()) {
                if width > 0.0 && height > 0.0 {
                    return Some(CanvasSize { width, height });
                }
            }
        }
    }

    let svg_start = svg.find("<svg")?;
    let svg_end = svg[svg_start..].find('>')?;
    let svg_tag = &svg[svg_start..svg_start + svg_end];
    let width = extract_attr(svg_tag, "width").and_then(|v| parse_dimension(&v))?;
    let height = extract_attr(svg_tag, "height").and_then(|v| parse_dimension(&v))?;
    if width > 0.0 && height > 0.0 {
        Some(CanvasSize { width, height })
    } else {
        None
    }
}

/// Parse a dimension attribute, tolerating a unit suffix (`280mm`, `80px`).
fn parse_dimension(value: &str) -> Option<f64> {
    value
        .trim()
        .trim_end_matches(char::is_alphabetic)
        .parse()
        .ok()
}

fn extract_attr(attrs: &str, name: &str) -> Option<String> {
    let re = Regex::new(&format!(
        r#"(?:^|\s){}\s*=\s*["']([^"']*)["']"#,
        regex::escape(name)
    ))
    .expect("invalid attribute regex");
    re.captures(attrs).map(|caps| caps[1].to_string())
}

fn attr_f64(attrs: &str, name: &str) -> Option<f64> {
    extract_attr(attrs, name).and_then(|v| v.trim().parse().ok())
}

/// Four cubic quadrants tracing a full circle, starting from the rightmost
/// point. Arc commands are not part of the supported path grammar, so
/// circles are emitted as cubics.
fn circle_to_path(cx: f64, cy: f64, r: f64) -> String {
    let k = KAPPA * r;
    format!(
        "M {} {} \
         C {} {} {} {} {} {} \
         C {} {} {} {} {} {} \
         C {} {} {} {} {} {} \
         C {} {} {} {} {} {} Z",
        cx + r, cy,
        cx + r, cy + k, cx + k, cy + r, cx, cy + r,
        cx - k, cy + r, cx - r, cy + k, cx - r, cy,
        cx - r, cy - k, cx - k, cy - r, cx, cy - r,
        cx + k, cy - r, cx + r, cy - k, cx + r, cy,
    )
}

fn points_to_path(points: &str, closed: bool) -> Option<String> {
    let values: Vec<f64> = points
        .split([' ', ',', '\t', '\n', '\r'])
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect();
    if values.len() < 2 {
        return None;
    }

    let mut data = String::new();
    for (index, pair) in values.chunks_exact(2).enumerate() {
        let command = if index == 0 { 'M' } else { 'L' };
        data.push_str(&format!("{} {} {} ", command, pair[0], pair[1]));
    }
    if closed {
        data.push('Z');
    }
    Some(data.trim_end().to_string())
}
