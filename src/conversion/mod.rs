//! LabelMe directory to YOLO dataset conversion.
//!
//! One call to [`convert_dataset`] discovers the LabelMe files, splits them
//! into train/val/test, writes a label file (and copies the image) for each
//! record, and finishes with the `data.yaml` manifest. Records are processed
//! one after another; a bad record is reported and skipped without stopping
//! the run.

pub mod report;

pub use report::{
    ConversionIssue, ConversionIssueCode, ConversionReport, ConversionSeverity, RecordFailure,
    RecordOutcome, RecordStatus, SubsetCounts,
};

use std::path::{Path, PathBuf};

use log::{error, info, warn};
use walkdir::WalkDir;

use crate::config::ConvertConfig;
use crate::error::YolosetError;
use crate::labelme::{parse_record, read_labelme_json};
use crate::layout::{locate_source_image, record_stem, OutputLayout};
use crate::manifest::write_manifest;
use crate::split::{split_records, Subset};

const RECORD_EXTENSION: &str = "json";

/// List the LabelMe files directly inside `input_root`, sorted by path.
///
/// Sub-directories are not searched.
pub fn discover_records(input_root: &Path) -> Result<Vec<PathBuf>, YolosetError> {
    let mut records = Vec::new();

    for entry in WalkDir::new(input_root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| YolosetError::InputDirRead {
            path: input_root.to_path_buf(),
            message: source.to_string(),
        })?;

        // `Path::is_file` follows symlinked records; broken links are skipped.
        if entry.path().is_file() && has_record_extension(entry.path()) {
            records.push(entry.into_path());
        }
    }

    records.sort();
    Ok(records)
}

fn has_record_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(RECORD_EXTENSION))
        .unwrap_or(false)
}

/// Convert every LabelMe record under `config.input_root` into a YOLO dataset
/// at `config.output_root`.
///
/// Returns [`YolosetError::NoInputFound`] before touching the output
/// directory when there is nothing to convert. Per-record problems never fail
/// the run; they are collected in the returned report.
pub fn convert_dataset(config: &ConvertConfig) -> Result<ConversionReport, YolosetError> {
    config.validate()?;

    let records = discover_records(&config.input_root)?;
    if records.is_empty() {
        return Err(YolosetError::NoInputFound {
            path: config.input_root.clone(),
        });
    }

    info!("Using classes: {:?}", config.classes.names());

    let layout = OutputLayout::create(&config.output_root)?;
    let split = split_records(&records, &config.ratios, config.seed);
    let mut report = ConversionReport::new(&config.input_root, &config.output_root);

    for (subset, files) in split.iter() {
        info!("Processing {} subset ({} file(s))", subset, files.len());
        for record_path in files {
            let outcome = convert_record(config, &layout, subset, record_path, &mut report)?;
            report.push_record(outcome);
        }
    }

    report.manifest_path = Some(write_manifest(&layout, &config.classes)?);
    Ok(report)
}

/// Convert one record into `subset`.
///
/// Only output-side I/O failures are returned as errors; anything wrong with
/// the record itself ends up in the outcome and the report.
fn convert_record(
    config: &ConvertConfig,
    layout: &OutputLayout,
    subset: Subset,
    record_path: &Path,
    report: &mut ConversionReport,
) -> Result<RecordOutcome, YolosetError> {
    let parsed = match read_labelme_json(record_path)
        .and_then(|record| parse_record(&record, &config.classes, record_path))
    {
        Ok(parsed) => parsed,
        Err(err) => {
            error!("Skipping {}: {}", record_path.display(), err);
            let failure = RecordFailure::from(&err);
            report.add(ConversionIssue::error(
                failure.issue_code(),
                record_path,
                err.to_string(),
            ));
            return Ok(RecordOutcome {
                source: record_path.to_path_buf(),
                subset,
                status: RecordStatus::Failed {
                    failure,
                    message: err.to_string(),
                },
            });
        }
    };

    if parsed.skipped_geometry > 0 {
        report.add(ConversionIssue::warning(
            ConversionIssueCode::UnrecognizedShapeGeometry,
            record_path,
            format!(
                "{} shape(s) dropped: not reducible to 4 points",
                parsed.skipped_geometry
            ),
        ));
    }

    let label_path =
        layout.write_label_file(subset, &record_stem(record_path), &parsed.annotations)?;

    let image_copied =
        match locate_source_image(&config.input_root, record_path, &parsed.image_path) {
            Some(source) => match layout.copy_image(subset, &source, &parsed.image_path) {
                Ok(_) => true,
                Err(err) => {
                    warn!("{}: {}", record_path.display(), err);
                    report.add(ConversionIssue::warning(
                        ConversionIssueCode::ImageCopyFailed,
                        record_path,
                        err.to_string(),
                    ));
                    false
                }
            },
            None => {
                warn!(
                    "{}: image '{}' not found in {} or next to the record",
                    record_path.display(),
                    parsed.image_path,
                    config.input_root.display()
                );
                report.add(ConversionIssue::warning(
                    ConversionIssueCode::MissingSourceImage,
                    record_path,
                    format!("image '{}' not found", parsed.image_path),
                ));
                false
            }
        };

    Ok(RecordOutcome {
        source: record_path.to_path_buf(),
        subset,
        status: RecordStatus::Converted {
            label_path,
            annotations: parsed.annotations.len(),
            skipped_geometry: parsed.skipped_geometry,
            skipped_unknown_label: parsed.skipped_unknown_label,
            image_copied,
        },
    })
}
