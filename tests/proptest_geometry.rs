use std::path::Path;

use proptest::prelude::*;
use serde_json::json;
use yoloset::geometry::{Coord, Pixel, Quad};
use yoloset::labelme::{parse_record, LabelmeRecord};
use yoloset::ClassMapping;

mod proptest_helpers;

fn rectangle_record(size: (u32, u32), a: (f64, f64), b: (f64, f64)) -> LabelmeRecord {
    serde_json::from_value(json!({
        "imagePath": "img.jpg",
        "imageWidth": size.0,
        "imageHeight": size.1,
        "shapes": [{
            "label": "CSolder",
            "shape_type": "rectangle",
            "points": [[a.0, a.1], [b.0, b.1]]
        }]
    }))
    .expect("valid record")
}

proptest! {
    #![proptest_config(proptest_helpers::proptest_config())]

    #[test]
    fn rectangle_corners_use_only_extreme_values(
        x1 in -1e4f64..1e4, y1 in -1e4f64..1e4, x2 in -1e4f64..1e4, y2 in -1e4f64..1e4,
    ) {
        let quad = Quad::<Pixel>::from_rectangle_corners(Coord::new(x1, y1), Coord::new(x2, y2));
        let (xmin, xmax) = (x1.min(x2), x1.max(x2));
        let (ymin, ymax) = (y1.min(y2), y1.max(y2));

        for corner in &quad.corners {
            prop_assert!(corner.x == xmin || corner.x == xmax);
            prop_assert!(corner.y == ymin || corner.y == ymax);
        }

        if x1 != x2 && y1 != y2 {
            for i in 0..4 {
                for j in (i + 1)..4 {
                    prop_assert_ne!(quad.corners[i], quad.corners[j]);
                }
            }
        }
    }

    #[test]
    fn in_bounds_rectangles_normalize_into_unit_square(
        (size, a, b) in proptest_helpers::arb_rectangle_in_image()
    ) {
        let record = rectangle_record(size, a, b);
        let parsed = parse_record(&record, &ClassMapping::default(), Path::new("p.json"))
            .expect("parse");
        prop_assert_eq!(parsed.annotations.len(), 1);

        let line = parsed.annotations[0].to_string();
        prop_assert!(line.starts_with("1 "));
        let coords = proptest_helpers::line_coords(&line);
        prop_assert_eq!(coords.len(), 8);
        for value in coords {
            prop_assert!((0.0..=1.0).contains(&value), "{} out of range in {}", value, line);
        }
    }

    #[test]
    fn normalization_is_plain_division(
        (size, a, b) in proptest_helpers::arb_rectangle_in_image()
    ) {
        let quad = Quad::<Pixel>::from_rectangle_corners(Coord::from(a), Coord::from(b))
            .to_normalized(size.0 as f64, size.1 as f64);
        prop_assert_eq!(quad.corners[0].x, a.0.min(b.0) / size.0 as f64);
        prop_assert_eq!(quad.corners[2].y, a.1.max(b.1) / size.1 as f64);
    }

    #[test]
    fn unknown_labels_never_produce_lines(label in "[a-z]{1,12}") {
        let record: LabelmeRecord = serde_json::from_value(json!({
            "imagePath": "img.jpg",
            "imageWidth": 100,
            "imageHeight": 100,
            "shapes": [{"label": label, "shape_type": "rectangle", "points": [[1, 1], [2, 2]]}]
        }))
        .expect("valid record");

        let parsed = parse_record(&record, &ClassMapping::default(), Path::new("p.json"))
            .expect("parse");
        prop_assert!(parsed.annotations.is_empty());
        prop_assert_eq!(parsed.skipped_unknown_label, 1);
        prop_assert_eq!(parsed.label_text(), "");
    }
}
