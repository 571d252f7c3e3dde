use std::path::PathBuf;
use thiserror::Error;

/// The main error type for yoloset operations.
#[derive(Debug, Error)]
pub enum YolosetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse LabelMe JSON from {path}: {source}")]
    LabelmeJsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("LabelMe record {path} is missing required field '{field}'")]
    MissingRequiredField { path: PathBuf, field: &'static str },

    #[error("LabelMe record {path} has invalid image size {width}x{height}")]
    InvalidImageSize {
        path: PathBuf,
        width: f64,
        height: f64,
    },

    #[error("No LabelMe JSON files found in {path}")]
    NoInputFound { path: PathBuf },

    #[error("Failed to read input directory {path}: {message}")]
    InputDirRead { path: PathBuf, message: String },

    #[error("Failed to write dataset manifest to {path}: {source}")]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to copy image {from} to {to}: {source}")]
    ImageCopy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image {path} is already at its dataset location; not copied onto itself")]
    SameImageFile { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}
