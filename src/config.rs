//! Conversion settings.
//!
//! Everything that shapes the output dataset is carried by [`ConvertConfig`]
//! and handed to [`convert_dataset`](crate::conversion::convert_dataset)
//! explicitly.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::YolosetError;
use crate::split::SplitRatios;

/// Class names exported by default, in class-index order.
pub const DEFAULT_CLASSES: [&str; 2] = ["CMounting", "CSolder"];

/// Seed used for the train/val/test shuffle.
pub const DEFAULT_SEED: u64 = 42;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "./yolo_dataset";

/// Ordered list of class names; a name's position is its class id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassMapping {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl ClassMapping {
    /// Builds a mapping, rejecting empty or duplicate names.
    pub fn new<I, S>(names: I) -> Result<Self, YolosetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(names.len());

        for (class_id, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(YolosetError::InvalidConfig {
                    message: format!("class name at index {} is empty", class_id),
                });
            }
            if index.insert(name.clone(), class_id).is_some() {
                return Err(YolosetError::InvalidConfig {
                    message: format!("class name '{}' is listed more than once", name),
                });
            }
        }

        Ok(Self { names, index })
    }

    /// Returns the class id for `label`, if it is a known class.
    pub fn class_id(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ClassMapping {
    fn default() -> Self {
        let names: Vec<String> = DEFAULT_CLASSES.iter().map(|s| s.to_string()).collect();
        let index = names
            .iter()
            .enumerate()
            .map(|(class_id, name)| (name.clone(), class_id))
            .collect();
        Self { names, index }
    }
}

/// Options for one conversion run.
#[derive(Clone, Debug)]
pub struct ConvertConfig {
    /// Directory scanned (non-recursively) for LabelMe `*.json` files.
    pub input_root: PathBuf,
    /// Root of the generated dataset.
    pub output_root: PathBuf,
    pub classes: ClassMapping,
    pub ratios: SplitRatios,
    pub seed: u64,
}

impl ConvertConfig {
    /// Default settings reading from `input_root` and writing to `output_root`.
    pub fn new(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
            ..Default::default()
        }
    }

    /// Checks settings that can not be caught by the type system.
    pub fn validate(&self) -> Result<(), YolosetError> {
        if self.classes.is_empty() {
            return Err(YolosetError::InvalidConfig {
                message: "at least one class name is required".to_string(),
            });
        }
        self.ratios.validate()
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_root: PathBuf::from("."),
            output_root: PathBuf::from(DEFAULT_OUTPUT_DIR),
            classes: ClassMapping::default(),
            ratios: SplitRatios::default(),
            seed: DEFAULT_SEED,
        }
    }
}
