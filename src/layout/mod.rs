//! Output directory tree for the generated dataset.
//!
//! ```text
//! output_root/
//!   train/{images,labels}/
//!   val/{images,labels}/
//!   test/{images,labels}/
//!   data.yaml
//! ```
//!
//! Directories are created up front and reused if they already exist; nothing
//! in the tree is ever deleted.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::YolosetError;
use crate::geometry::{render_label_lines, NormalizedAnnotation};
use crate::split::Subset;

const IMAGES_DIR: &str = "images";
const LABELS_DIR: &str = "labels";
const LABEL_EXTENSION: &str = "txt";

/// Paths of a created output tree.
#[derive(Clone, Debug)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    /// Create `<subset>/images` and `<subset>/labels` for every subset.
    pub fn create(root: &Path) -> Result<Self, YolosetError> {
        let layout = Self {
            root: root.to_path_buf(),
        };

        for subset in Subset::ALL {
            fs::create_dir_all(layout.images_dir(subset)).map_err(YolosetError::Io)?;
            fs::create_dir_all(layout.labels_dir(subset)).map_err(YolosetError::Io)?;
        }

        Ok(layout)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn subset_dir(&self, subset: Subset) -> PathBuf {
        self.root.join(subset.as_str())
    }

    pub fn images_dir(&self, subset: Subset) -> PathBuf {
        self.subset_dir(subset).join(IMAGES_DIR)
    }

    pub fn labels_dir(&self, subset: Subset) -> PathBuf {
        self.subset_dir(subset).join(LABELS_DIR)
    }

    /// Write `labels/<record_stem>.txt`, one line per annotation.
    ///
    /// An existing file with the same name is overwritten. Zero annotations
    /// produce an empty file.
    pub fn write_label_file(
        &self,
        subset: Subset,
        record_stem: &str,
        annotations: &[NormalizedAnnotation],
    ) -> Result<PathBuf, YolosetError> {
        let label_path = self
            .labels_dir(subset)
            .join(format!("{record_stem}.{LABEL_EXTENSION}"));

        fs::write(&label_path, render_label_lines(annotations)).map_err(YolosetError::Io)?;

        Ok(label_path)
    }

    /// Where an image referenced as `image_path` is stored in `subset`.
    ///
    /// Always below `images/`: an absolute path keeps only its file name and
    /// `.`/`..` components of a relative path are dropped.
    pub fn image_destination(&self, subset: Subset, image_path: &str) -> PathBuf {
        let path = Path::new(image_path);
        let relative: PathBuf = if path.has_root() {
            path.file_name().map(PathBuf::from).unwrap_or_default()
        } else {
            path.components()
                .filter_map(|component| match component {
                    Component::Normal(part) => Some(part),
                    _ => None,
                })
                .collect()
        };
        self.images_dir(subset).join(relative)
    }

    /// Copy `source` to [`image_destination`](Self::image_destination),
    /// keeping permissions and modification time.
    ///
    /// Fails with [`YolosetError::SameImageFile`] instead of copying a file
    /// onto itself. A read-only copy left by an earlier run is replaced.
    pub fn copy_image(
        &self,
        subset: Subset,
        source: &Path,
        image_path: &str,
    ) -> Result<PathBuf, YolosetError> {
        let dest = self.image_destination(subset, image_path);
        let copy_err = |source_err: std::io::Error| YolosetError::ImageCopy {
            from: source.to_path_buf(),
            to: dest.clone(),
            source: source_err,
        };

        if dest == self.images_dir(subset) {
            return Err(copy_err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("image path '{image_path}' has no file name"),
            )));
        }

        if let Ok(existing) = fs::metadata(&dest) {
            if is_same_file(source, &dest) {
                return Err(YolosetError::SameImageFile { path: dest.clone() });
            }
            if existing.permissions().readonly() {
                fs::remove_file(&dest).map_err(copy_err)?;
            }
        } else if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(copy_err)?;
        }

        fs::copy(source, &dest).map_err(copy_err)?;

        // The copied mode may be read-only; set the time through a read handle.
        let modified = fs::metadata(source)
            .and_then(|meta| meta.modified())
            .map_err(copy_err)?;
        fs::File::open(&dest)
            .and_then(|file| file.set_modified(modified))
            .map_err(copy_err)?;

        Ok(dest)
    }
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Find the image a record refers to.
///
/// Looks in `input_root` first, then next to the record file.
pub fn locate_source_image(
    input_root: &Path,
    record_path: &Path,
    image_path: &str,
) -> Option<PathBuf> {
    let beside_record = record_path
        .parent()
        .map(|dir| dir.join(image_path))
        .unwrap_or_else(|| PathBuf::from(image_path));

    [input_root.join(image_path), beside_record]
        .into_iter()
        .find(|candidate| candidate.is_file())
}

/// Base name of a record file without its extension, used for the label file.
pub fn record_stem(record_path: &Path) -> String {
    record_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
