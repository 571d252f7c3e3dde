#![allow(dead_code)]

use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Image dimensions in pixels.
pub fn arb_image_size() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=8192, 1u32..=8192)
}

/// A point inside an image of the given size, edges included.
pub fn arb_point_within(width: u32, height: u32) -> impl Strategy<Value = (f64, f64)> {
    (0.0..=width as f64, 0.0..=height as f64)
}

/// Two corners of a rectangle inside an image, plus the image size.
pub fn arb_rectangle_in_image() -> impl Strategy<Value = ((u32, u32), (f64, f64), (f64, f64))> {
    arb_image_size().prop_flat_map(|(w, h)| {
        (
            Just((w, h)),
            arb_point_within(w, h),
            arb_point_within(w, h),
        )
    })
}

/// Parse the 8 coordinates of a label line.
pub fn line_coords(line: &str) -> Vec<f64> {
    line.split(' ')
        .skip(1)
        .map(|tok| tok.parse::<f64>().expect("coordinate parses"))
        .collect()
}
