//! Error types for the pdf2json library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`Pdf2JsonError`]: **Fatal**: the batch cannot run at all (input
//!   directory missing, output directory not creatable, bad configuration).
//!   Returned as `Err(Pdf2JsonError)` from [`crate::batch::run_batch`].
//!
//! * [`FileError`]: **Per-file**: one document failed to extract or write.
//!   Stored inside [`crate::output::FileOutcome::Failed`] so sibling files
//!   keep going and the run still completes.

use std::path::PathBuf;
use thiserror::Error;

/// All batch-fatal errors returned by the pdf2json library.
#[derive(Debug, Error)]
pub enum Pdf2JsonError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// The input directory does not exist.
    #[error("Input directory does not exist: '{path}'")]
    InputDirNotFound { path: PathBuf },

    /// The input directory exists but could not be listed.
    #[error("Failed to read input directory '{path}': {source}")]
    InputDirUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Output errors ─────────────────────────────────────────────────────
    /// The output directory could not be created.
    #[error("Failed to create output directory '{path}': {source}")]
    OutputDirCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Pdfium binding errors ─────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\n\
Set PDFIUM_LIB_PATH=/path/to/libpdfium, place the library next to the binary,\n\
or install it system-wide.\n"
    )]
    PdfiumBindingFailed(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A failure confined to a single input file.
///
/// The batch continues past every variant; only the file that produced it
/// ends without an output document.
#[derive(Debug, Error)]
pub enum FileError {
    /// The PDF could not be opened or one of its pages could not be read.
    #[error("Failed to extract text from '{path}': {detail}")]
    Extraction { path: PathBuf, detail: String },

    /// The PDF is encrypted and the configured password (if any) did not open it.
    #[error("PDF '{path}' is encrypted; provide the correct password with --password")]
    PasswordProtected { path: PathBuf },

    /// The output record could not be serialised.
    #[error("Failed to serialise output for '{path}': {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON file could not be written.
    #[error("Failed to write JSON file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The per-file task panicked or was aborted.
    #[error("Task for '{path}' did not complete: {detail}")]
    TaskPanicked { path: PathBuf, detail: String },
}

impl FileError {
    /// The input or output path this error is about.
    pub fn path(&self) -> &std::path::Path {
        match self {
            FileError::Extraction { path, .. }
            | FileError::PasswordProtected { path }
            | FileError::Serialize { path, .. }
            | FileError::Write { path, .. }
            | FileError::TaskPanicked { path, .. } => path,
        }
    }
}
