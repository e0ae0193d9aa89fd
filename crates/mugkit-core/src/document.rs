//! Vector document model.
//!
//! A [`VectorDocument`] is the pipeline's input: an ordered list of path-data
//! strings (one per drawing stroke) with their optional transform
//! declarations, plus the declared canvas size when the source markup
//! carried one. Extraction from SVG markup lives in the camtools crate;
//! this module only defines the shape of the data.

use serde::{Deserialize, Serialize};

/// One drawing stroke: path data plus an optional transform declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorPath {
    /// Path data in the SVG mini-language (`M 0 0 L 10 0 ...`).
    pub data: String,
    /// Raw transform declaration (`matrix(...)`, `translate(...)`,
    /// `scale(...)`), if the element carried one.
    pub transform: Option<String>,
}

/// Declared canvas dimensions of the source artwork, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

/// A collection of drawing strokes to trace onto the cylinder.
///
/// Paths are independent; there is no implied continuity between them.
/// Document order is preserved all the way to the motion command stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorDocument {
    /// Strokes in document order.
    pub paths: Vec<VectorPath>,
    /// Declared canvas size, when the source markup provided one. When
    /// absent, the projector falls back to the scanned bounding box.
    pub canvas: Option<CanvasSize>,
}

impl VectorDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stroke.
    pub fn push_path(&mut self, data: impl Into<String>, transform: Option<String>) {
        self.paths.push(VectorPath {
            data: data.into(),
            transform,
        });
    }

    /// True when the document has no strokes at all.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut doc = VectorDocument::new();
        doc.push_path("M 0 0 L 1 1", None);
        doc.push_path("M 2 2 L 3 3", Some("translate(5)".to_string()));
        assert_eq!(doc.paths.len(), 2);
        assert_eq!(doc.paths[0].data, "M 0 0 L 1 1");
        assert_eq!(doc.paths[1].transform.as_deref(), Some("translate(5)"));
    }

    #[test]
    fn test_document_serde_round_trip() {
        let mut doc = VectorDocument::new();
        doc.canvas = Some(CanvasSize {
            width: 280.0,
            height: 80.0,
        });
        doc.push_path("M 0 0 L 10 0", None);

        let json = serde_json::to_string(&doc).unwrap();
        let back: VectorDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
