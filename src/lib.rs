//! yoloset: LabelMe annotations to a YOLO oriented-box dataset.
//!
//! Reads a directory of LabelMe JSON files, converts every rectangle and
//! four-point polygon into a normalized 4-corner label line, splits the
//! records into train/val/test with a seeded shuffle, and writes the result
//! as an Ultralytics-style directory tree with a `data.yaml` manifest.
//!
//! # Modules
//!
//! - [`labelme`]: LabelMe schema and record parsing
//! - [`geometry`]: pixel/normalized coordinates and 4-corner polygons
//! - [`split`]: deterministic train/val/test split
//! - [`layout`]: output directory tree, label files, image copies
//! - [`manifest`]: `data.yaml` generation
//! - [`conversion`]: the end-to-end run and its report
//! - [`config`]: conversion settings
//! - [`error`]: error types for yoloset operations

pub mod config;
pub mod conversion;
pub mod error;
pub mod geometry;
pub mod labelme;
pub mod layout;
pub mod manifest;
pub mod split;

use std::path::PathBuf;

use clap::Parser;
use log::warn;

pub use config::{ClassMapping, ConvertConfig};
pub use conversion::{convert_dataset, ConversionReport};
pub use error::YolosetError;

/// The yoloset CLI application.
///
/// Class names, split ratios and the shuffle seed are fixed; see
/// [`ConvertConfig::default`].
#[derive(Parser)]
#[command(name = "yoloset")]
#[command(version, about)]
struct Cli {
    /// Directory containing the LabelMe JSON files and their images.
    #[arg(long = "input_dir", default_value = ".")]
    input_dir: PathBuf,

    /// Directory the YOLO dataset is written to.
    #[arg(long = "output_dir", default_value = config::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
}

/// Run the yoloset CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), YolosetError> {
    let cli = Cli::parse();
    let config = ConvertConfig::new(cli.input_dir, cli.output_dir);

    match convert_dataset(&config) {
        Ok(report) => {
            print!("{}", report);
            Ok(())
        }
        Err(YolosetError::NoInputFound { path }) => {
            // Nothing to convert is not a failure.
            warn!("No LabelMe JSON files found in {}", path.display());
            Ok(())
        }
        Err(err) => Err(err),
    }
}
