//! Output types: the JSON record written per document and the per-file and
//! per-run results returned to callers.

use crate::error::FileError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The JSON body written for each successfully extracted document.
///
/// Serialised as `{"content": "..."}` and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    /// Text of every page, concatenated in page order.
    pub content: String,
}

impl OutputRecord {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Why a file ended without an output document even though nothing failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The document opened fine but yielded no non-whitespace text
    /// (this includes documents with zero pages).
    NoContent,
}

/// Terminal state of one per-file task.
#[derive(Debug)]
pub enum FileOutcome {
    /// The JSON document was written to `output`.
    Written { output: PathBuf },
    /// Nothing was written; not an error.
    Skipped { reason: SkipReason },
    /// Extraction or writing failed.
    Failed { error: FileError },
}

impl FileOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, FileOutcome::Written { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FileOutcome::Failed { .. })
    }
}

/// The result of one per-file task: which input it processed and how it ended.
#[derive(Debug)]
pub struct FileReport {
    pub input: PathBuf,
    pub outcome: FileOutcome,
}

/// Counts for a completed batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// `.pdf` entries found in the input directory.
    pub discovered: usize,
    /// Documents written to the output directory.
    pub written: usize,
    /// Documents skipped because they had no text.
    pub skipped: usize,
    /// Documents whose extraction or write failed.
    pub failed: usize,
    /// Wall-clock duration of the run.
    pub total_duration_ms: u64,
}

impl BatchSummary {
    /// Tally a set of per-file reports.
    pub fn from_reports(reports: &[FileReport], total_duration_ms: u64) -> Self {
        let mut summary = Self {
            discovered: reports.len(),
            total_duration_ms,
            ..Self::default()
        };
        for r in reports {
            match r.outcome {
                FileOutcome::Written { .. } => summary.written += 1,
                FileOutcome::Skipped { .. } => summary.skipped += 1,
                FileOutcome::Failed { .. } => summary.failed += 1,
            }
        }
        summary
    }
}
