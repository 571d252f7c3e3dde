//! LabelMe JSON reader.
//!
//! Each LabelMe file describes one image: its size, the path of the image
//! file, and the labeled shapes drawn on it. Only the fields needed for
//! export are modelled; everything else in the file (`version`, `flags`,
//! `imageData`, `group_id`, ...) is ignored.

mod parse;

pub use parse::{parse_record, ParsedRecord};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::YolosetError;

/// One LabelMe annotation file.
///
/// Fields are optional at this level so a malformed record is reported by
/// [`parse_record`] with the missing field named, rather than as an opaque
/// deserialization failure.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelmeRecord {
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub image_width: Option<f64>,
    #[serde(default)]
    pub image_height: Option<f64>,
    #[serde(default)]
    pub shapes: Vec<LabelmeShape>,
}

/// One labeled region within a record.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LabelmeShape {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub shape_type: Option<ShapeType>,
    /// `[x, y]` pairs in pixel space.
    #[serde(default)]
    pub points: Vec<(f64, f64)>,
}

impl LabelmeShape {
    /// The declared shape type; LabelMe omits it for polygons.
    pub fn shape_type(&self) -> ShapeType {
        self.shape_type.unwrap_or(ShapeType::Polygon)
    }
}

/// LabelMe `shape_type` tag.
///
/// Tags other than `rectangle` and `polygon` (circle, line, point, ...) are
/// handled like polygons and only survive if they carry exactly four points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Rectangle,
    Polygon,
    #[serde(other)]
    Other,
}

/// Read one LabelMe JSON file.
pub fn read_labelme_json(path: &Path) -> Result<LabelmeRecord, YolosetError> {
    let file = File::open(path).map_err(YolosetError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| YolosetError::LabelmeJsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a LabelMe record from a string.
pub fn from_labelme_str(json: &str) -> Result<LabelmeRecord, YolosetError> {
    serde_json::from_str(json).map_err(|source| YolosetError::LabelmeJsonParse {
        path: Path::new("<string>").to_path_buf(),
        source,
    })
}

/// Parse a LabelMe record from bytes.
pub fn from_labelme_slice(bytes: &[u8]) -> Result<LabelmeRecord, YolosetError> {
    serde_json::from_slice(bytes).map_err(|source| YolosetError::LabelmeJsonParse {
        path: Path::new("<bytes>").to_path_buf(),
        source,
    })
}

/// Fuzz-only entrypoint: deserialize and convert with the default classes.
#[cfg(feature = "fuzzing")]
pub fn fuzz_parse_record(bytes: &[u8]) -> Result<(), YolosetError> {
    let record = from_labelme_slice(bytes)?;
    let classes = crate::config::ClassMapping::default();
    parse_record(&record, &classes, Path::new("<fuzz>")).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_standard_labelme_fields_and_ignores_the_rest() {
        let record = from_labelme_str(
            r#"{
                "version": "5.2.1",
                "flags": {},
                "shapes": [
                    {
                        "label": "CSolder",
                        "points": [[10, 20], [30.5, 40]],
                        "group_id": null,
                        "description": "",
                        "shape_type": "rectangle",
                        "flags": {},
                        "mask": null
                    }
                ],
                "imagePath": "board_01.jpg",
                "imageData": null,
                "imageHeight": 480,
                "imageWidth": 640
            }"#,
        )
        .expect("parse record");

        assert_eq!(record.image_path.as_deref(), Some("board_01.jpg"));
        assert_eq!(record.image_width, Some(640.0));
        assert_eq!(record.image_height, Some(480.0));
        assert_eq!(record.shapes.len(), 1);
        assert_eq!(record.shapes[0].shape_type(), ShapeType::Rectangle);
        assert_eq!(record.shapes[0].points, vec![(10.0, 20.0), (30.5, 40.0)]);
    }

    #[test]
    fn missing_shape_type_defaults_to_polygon() {
        let record = from_labelme_str(
            r#"{"imagePath": "a.png", "shapes": [{"label": "CMounting", "points": []}]}"#,
        )
        .expect("parse record");
        assert_eq!(record.shapes[0].shape_type(), ShapeType::Polygon);
    }

    #[test]
    fn unfamiliar_shape_type_is_tagged_other() {
        let record = from_labelme_str(
            r#"{"imagePath": "a.png", "shapes": [{"label": "x", "shape_type": "circle", "points": [[1, 1], [2, 2]]}]}"#,
        )
        .expect("parse record");
        assert_eq!(record.shapes[0].shape_type(), ShapeType::Other);
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = from_labelme_slice(b"{ not json").unwrap_err();
        assert!(matches!(err, YolosetError::LabelmeJsonParse { .. }));
    }

    #[test]
    fn read_from_missing_file_is_io_error() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let err = read_labelme_json(&temp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, YolosetError::Io(_)));
    }
}
