//! The per-shape output record written to YOLO label files.

use std::fmt;

use super::quad::Quad;
use super::Normalized;

/// One shape ready to be written: a class index and four normalized corners.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedAnnotation {
    pub class_id: usize,
    pub quad: Quad<Normalized>,
}

impl NormalizedAnnotation {
    pub fn new(class_id: usize, quad: Quad<Normalized>) -> Self {
        Self { class_id, quad }
    }
}

/// Renders `class_id x1 y1 x2 y2 x3 y3 x4 y4` with 6 decimal places.
impl fmt::Display for NormalizedAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class_id)?;
        for corner in &self.quad.corners {
            write!(f, " {:.6} {:.6}", corner.x, corner.y)?;
        }
        Ok(())
    }
}

/// Label file content: one newline-terminated line per annotation.
pub fn render_label_lines(annotations: &[NormalizedAnnotation]) -> String {
    annotations.iter().map(|ann| format!("{ann}\n")).collect()
}
