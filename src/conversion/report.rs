//! Run report for a LabelMe to YOLO conversion.
//!
//! Every record gets a [`RecordOutcome`], and everything worth telling the
//! user about becomes a [`ConversionIssue`]. Callers can aggregate both
//! without parsing log output.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::error::YolosetError;
use crate::split::Subset;

/// A report generated by a conversion run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ConversionReport {
    /// Directory the records were read from.
    pub input_root: PathBuf,
    /// Root of the generated dataset.
    pub output_root: PathBuf,
    /// Path of the written `data.yaml`, once the run has finished.
    pub manifest_path: Option<PathBuf>,
    /// One entry per source record, in processing order.
    pub records: Vec<RecordOutcome>,
    /// Issues discovered during the run.
    pub issues: Vec<ConversionIssue>,
}

impl ConversionReport {
    pub fn new(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
            ..Default::default()
        }
    }

    /// Add an issue to the report.
    pub fn add(&mut self, issue: ConversionIssue) {
        self.issues.push(issue);
    }

    pub fn push_record(&mut self, outcome: RecordOutcome) {
        self.records.push(outcome);
    }

    /// Counts for one subset.
    pub fn subset_counts(&self, subset: Subset) -> SubsetCounts {
        let mut counts = SubsetCounts::default();
        for outcome in self.records.iter().filter(|r| r.subset == subset) {
            counts.records += 1;
            match &outcome.status {
                RecordStatus::Converted {
                    annotations,
                    image_copied,
                    ..
                } => {
                    counts.converted += 1;
                    counts.annotations += annotations;
                    if *image_copied {
                        counts.images += 1;
                    }
                }
                RecordStatus::Failed { .. } => counts.failed += 1,
            }
        }
        counts
    }

    /// Records whose label file was written.
    pub fn converted_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_converted()).count()
    }

    /// Records that were skipped entirely.
    pub fn failed_count(&self) -> usize {
        self.records.len() - self.converted_count()
    }

    /// Annotation lines written across all label files.
    pub fn annotation_count(&self) -> usize {
        self.records
            .iter()
            .map(|r| match r.status {
                RecordStatus::Converted { annotations, .. } => annotations,
                RecordStatus::Failed { .. } => 0,
            })
            .sum()
    }

    /// Shapes dropped because their label is not a known class.
    pub fn unknown_label_count(&self) -> usize {
        self.records
            .iter()
            .map(|r| match r.status {
                RecordStatus::Converted {
                    skipped_unknown_label,
                    ..
                } => skipped_unknown_label,
                RecordStatus::Failed { .. } => 0,
            })
            .sum()
    }

    /// Number of issues carrying `code`.
    pub fn issue_count(&self, code: ConversionIssueCode) -> usize {
        self.issues.iter().filter(|i| i.code == code).count()
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == ConversionSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == ConversionSeverity::Warning)
            .count()
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Converted {} of {} record(s) into {}",
            self.converted_count(),
            self.records.len(),
            self.output_root.display()
        )?;

        for subset in Subset::ALL {
            let counts = self.subset_counts(subset);
            writeln!(
                f,
                "  {}: {} record(s), {} annotation(s), {} image(s)",
                subset, counts.records, counts.annotations, counts.images
            )?;
        }

        let unknown = self.unknown_label_count();
        if unknown > 0 {
            writeln!(f, "  {} shape(s) with unlisted labels ignored", unknown)?;
        }

        if let Some(manifest) = &self.manifest_path {
            writeln!(f, "  manifest: {}", manifest.display())?;
        }

        for (severity, title) in [
            (ConversionSeverity::Error, "Errors"),
            (ConversionSeverity::Warning, "Warnings"),
        ] {
            let matching: Vec<&ConversionIssue> = self
                .issues
                .iter()
                .filter(|i| i.severity == severity)
                .collect();
            if matching.is_empty() {
                continue;
            }

            writeln!(f)?;
            writeln!(f, "{} ({}):", title, matching.len())?;
            for issue in matching {
                writeln!(f, "  - {}", issue)?;
            }
        }

        Ok(())
    }
}

/// Per-subset counts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SubsetCounts {
    pub records: usize,
    pub converted: usize,
    pub failed: usize,
    pub annotations: usize,
    pub images: usize,
}

/// What happened to one source record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecordOutcome {
    pub source: PathBuf,
    pub subset: Subset,
    pub status: RecordStatus,
}

impl RecordOutcome {
    pub fn is_converted(&self) -> bool {
        matches!(self.status, RecordStatus::Converted { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecordStatus {
    /// The label file was written.
    Converted {
        label_path: PathBuf,
        annotations: usize,
        skipped_geometry: usize,
        skipped_unknown_label: usize,
        image_copied: bool,
    },
    /// The record was skipped; nothing was written for it.
    Failed {
        failure: RecordFailure,
        message: String,
    },
}

/// Why a record was skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordFailure {
    /// `imagePath`, or an image dimension needed for normalization, is absent.
    MissingRequiredField,
    /// Image width or height is zero, negative or not finite.
    InvalidImageSize,
    /// The file could not be read or is not LabelMe JSON.
    InvalidRecord,
}

impl RecordFailure {
    pub fn issue_code(self) -> ConversionIssueCode {
        match self {
            RecordFailure::MissingRequiredField => ConversionIssueCode::MissingRequiredField,
            RecordFailure::InvalidImageSize => ConversionIssueCode::InvalidImageSize,
            RecordFailure::InvalidRecord => ConversionIssueCode::InvalidRecord,
        }
    }
}

impl From<&YolosetError> for RecordFailure {
    fn from(err: &YolosetError) -> Self {
        match err {
            YolosetError::MissingRequiredField { .. } => RecordFailure::MissingRequiredField,
            YolosetError::InvalidImageSize { .. } => RecordFailure::InvalidImageSize,
            _ => RecordFailure::InvalidRecord,
        }
    }
}

/// A single issue discovered during conversion.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConversionIssue {
    pub severity: ConversionSeverity,
    pub code: ConversionIssueCode,
    /// The record the issue belongs to.
    pub source: PathBuf,
    pub message: String,
}

impl ConversionIssue {
    /// A record that was skipped.
    pub fn error(
        code: ConversionIssueCode,
        source: impl Into<PathBuf>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: ConversionSeverity::Error,
            code,
            source: source.into(),
            message: message.into(),
        }
    }

    /// Something was dropped but the record was still converted.
    pub fn warning(
        code: ConversionIssueCode,
        source: impl Into<PathBuf>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: ConversionSeverity::Warning,
            code,
            source: source.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConversionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}: {}", self.code, self.source.display(), self.message)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionSeverity {
    /// The record was skipped.
    Error,
    /// Part of the record was dropped.
    Warning,
}

/// Stable issue codes for programmatic consumption.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionIssueCode {
    /// Record lacks `imagePath` (or an image dimension).
    MissingRequiredField,
    /// Record has an unusable image size.
    InvalidImageSize,
    /// Record could not be read or parsed.
    InvalidRecord,
    /// Shapes that did not reduce to four points were dropped.
    UnrecognizedShapeGeometry,
    /// The referenced image was not found; only the label file was written.
    MissingSourceImage,
    /// The image was found but could not be copied; the label file was written.
    ImageCopyFailed,
}
