//! `data.yaml` manifest for YOLO training tools.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use crate::config::ClassMapping;
use crate::error::YolosetError;
use crate::layout::OutputLayout;
use crate::split::Subset;

/// File name of the manifest under the output root.
pub const MANIFEST_FILE: &str = "data.yaml";

/// Dataset descriptor consumed by the training entry point.
///
/// Field order is the serialized key order: `train`, `val`, `test`, `nc`,
/// `names`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Manifest {
    pub train: PathBuf,
    pub val: PathBuf,
    pub test: PathBuf,
    pub nc: usize,
    pub names: Vec<String>,
}

impl Manifest {
    /// Describe `layout` with absolute image directories.
    pub fn for_layout(
        layout: &OutputLayout,
        classes: &ClassMapping,
    ) -> Result<Self, YolosetError> {
        let absolute = |subset: Subset| std::path::absolute(layout.images_dir(subset));

        Ok(Self {
            train: absolute(Subset::Train).map_err(YolosetError::Io)?,
            val: absolute(Subset::Val).map_err(YolosetError::Io)?,
            test: absolute(Subset::Test).map_err(YolosetError::Io)?,
            nc: classes.len(),
            names: classes.names().to_vec(),
        })
    }

    pub fn to_yaml_string(&self, path: &Path) -> Result<String, YolosetError> {
        serde_yaml::to_string(self).map_err(|source| YolosetError::ManifestWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Write `data.yaml` under the layout root and return its path.
pub fn write_manifest(
    layout: &OutputLayout,
    classes: &ClassMapping,
) -> Result<PathBuf, YolosetError> {
    let path = layout.root().join(MANIFEST_FILE);
    let manifest = Manifest::for_layout(layout, classes)?;
    let yaml = manifest.to_yaml_string(&path)?;

    fs::write(&path, yaml).map_err(YolosetError::Io)?;
    info!("Dataset manifest written to {}", path.display());

    Ok(path)
}
