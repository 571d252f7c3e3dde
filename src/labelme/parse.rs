//! Turns a LabelMe record into normalized four-corner annotations.

use std::path::Path;

use log::warn;

use super::{LabelmeRecord, LabelmeShape, ShapeType};
use crate::config::ClassMapping;
use crate::error::YolosetError;
use crate::geometry::{render_label_lines, Coord, NormalizedAnnotation, Pixel, Quad};

/// The exportable content of one LabelMe record.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedRecord {
    /// `imagePath` as written in the record, possibly relative.
    pub image_path: String,
    /// Surviving shapes, in source order.
    pub annotations: Vec<NormalizedAnnotation>,
    /// Shapes dropped because they did not reduce to four points.
    pub skipped_geometry: usize,
    /// Shapes dropped because their label is not a known class.
    pub skipped_unknown_label: usize,
}

impl ParsedRecord {
    /// Label file content: one newline-terminated line per annotation.
    pub fn label_text(&self) -> String {
        render_label_lines(&self.annotations)
    }
}

/// Convert one record's shapes into normalized annotations.
///
/// `source` is only used for error context and log lines.
///
/// Shapes with an unknown label are dropped silently. Shapes that do not
/// reduce to four points are dropped with a warning. A record without
/// `imagePath` fails as a whole, as does one whose image size is needed but
/// missing or not positive.
pub fn parse_record(
    record: &LabelmeRecord,
    classes: &ClassMapping,
    source: &Path,
) -> Result<ParsedRecord, YolosetError> {
    let image_path = match record.image_path.as_deref() {
        Some(image_path) if !image_path.is_empty() => image_path.to_string(),
        _ => {
            return Err(YolosetError::MissingRequiredField {
                path: source.to_path_buf(),
                field: "imagePath",
            })
        }
    };

    let mut parsed = ParsedRecord {
        image_path,
        annotations: Vec::with_capacity(record.shapes.len()),
        skipped_geometry: 0,
        skipped_unknown_label: 0,
    };

    for shape in &record.shapes {
        let Some(class_id) = shape.label.as_deref().and_then(|l| classes.class_id(l)) else {
            parsed.skipped_unknown_label += 1;
            continue;
        };

        let Some(quad) = shape_to_quad(shape) else {
            warn!(
                "{}: skipping '{}' shape with {} point(s); expected 4 after conversion",
                source.display(),
                shape.label.as_deref().unwrap_or_default(),
                shape.points.len()
            );
            parsed.skipped_geometry += 1;
            continue;
        };

        let (width, height) = image_size(record, source)?;
        parsed.annotations.push(NormalizedAnnotation::new(
            class_id,
            quad.to_normalized(width, height),
        ));
    }

    Ok(parsed)
}

/// Two points, or an explicit rectangle tag, mean a box given by opposite
/// corners. Point count takes precedence over the tag.
fn shape_to_quad(shape: &LabelmeShape) -> Option<Quad<Pixel>> {
    if shape.points.len() == 2 || shape.shape_type() == ShapeType::Rectangle {
        return match shape.points.as_slice() {
            [a, b, ..] => Some(Quad::from_rectangle_corners(
                Coord::from(*a),
                Coord::from(*b),
            )),
            _ => None,
        };
    }

    let points: Vec<Coord<Pixel>> = shape.points.iter().copied().map(Coord::from).collect();
    Quad::from_points(&points)
}

fn image_size(record: &LabelmeRecord, source: &Path) -> Result<(f64, f64), YolosetError> {
    let width = record
        .image_width
        .ok_or_else(|| YolosetError::MissingRequiredField {
            path: source.to_path_buf(),
            field: "imageWidth",
        })?;
    let height = record
        .image_height
        .ok_or_else(|| YolosetError::MissingRequiredField {
            path: source.to_path_buf(),
            field: "imageHeight",
        })?;

    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !valid(width) || !valid(height) {
        return Err(YolosetError::InvalidImageSize {
            path: source.to_path_buf(),
            width,
            height,
        });
    }

    Ok((width, height))
}
