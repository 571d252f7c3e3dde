#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};

pub fn rectangle(label: &str, a: (f64, f64), b: (f64, f64)) -> Value {
    json!({
        "label": label,
        "points": [[a.0, a.1], [b.0, b.1]],
        "group_id": null,
        "shape_type": "rectangle",
        "flags": {}
    })
}

pub fn polygon(label: &str, points: [(f64, f64); 4]) -> Value {
    let points: Vec<[f64; 2]> = points.iter().map(|&(x, y)| [x, y]).collect();
    json!({
        "label": label,
        "points": points,
        "group_id": null,
        "shape_type": "polygon",
        "flags": {}
    })
}

pub fn record(image_path: &str, width: u32, height: u32, shapes: Vec<Value>) -> Value {
    json!({
        "version": "5.4.1",
        "flags": {},
        "shapes": shapes,
        "imagePath": image_path,
        "imageData": null,
        "imageHeight": height,
        "imageWidth": width
    })
}

pub fn write_record(dir: &Path, stem: &str, record: &Value) -> PathBuf {
    fs::create_dir_all(dir).expect("create record dir");
    let path = dir.join(format!("{stem}.json"));
    fs::write(&path, serde_json::to_string_pretty(record).expect("serialize record"))
        .expect("write record");
    path
}

pub fn write_image(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, b"\xFF\xD8\xFF\xE0 fake jpeg").expect("write image");
}

/// File names in a directory, sorted.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|entry| {
            entry
                .expect("dir entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

/// Ten records with images: eight rectangle-only, two polygon-only.
pub fn write_board_dataset(input: &Path) {
    for i in 0..8 {
        let stem = format!("board_{i:02}");
        let image = format!("{stem}.jpg");
        let shapes = vec![
            rectangle("CMounting", (10.0, 20.0), (110.0, 220.0)),
            rectangle("CSolder", (300.0, 40.0), (250.0, 10.0)),
        ];
        write_record(input, &stem, &record(&image, 640, 480, shapes));
        write_image(&input.join(&image));
    }
    for i in 8..10 {
        let stem = format!("board_{i:02}");
        let image = format!("{stem}.jpg");
        let shapes = vec![polygon(
            "CSolder",
            [(320.0, 0.0), (640.0, 240.0), (320.0, 480.0), (0.0, 240.0)],
        )];
        write_record(input, &stem, &record(&image, 640, 480, shapes));
        write_image(&input.join(&image));
    }
}
