//! # pdf2json
//!
//! Batch-convert a directory of PDF documents into JSON files holding their
//! extracted text.
//!
//! Each `<name>.pdf` in the input directory becomes `<name>.json` in the
//! output directory:
//!
//! ```json
//! {
//!     "content": "text of page 1text of page 2..."
//! }
//! ```
//!
//! ## Pipeline Overview
//!
//! ```text
//! input dir
//!  │
//!  ├─ 1. Discover  list `*.pdf` entries (case-sensitive, no recursion)
//!  ├─ 2. Dispatch  one tokio task per file, at most N holding a slot (N = 5)
//!  ├─ 3. Extract   page text via pdfium (CPU-bound, spawn_blocking)
//!  └─ 4. Write     {"content": ...} pretty-printed with 4-space indent
//! ```
//!
//! A file that fails to open, has no text, or cannot be written is logged and
//! skipped; it never stops the rest of the batch.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2json::{run_batch, BatchConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BatchConfig::builder()
//!         .input_dir("data-processing/pdfs")
//!         .output_dir("extracted_pdfs_data")
//!         .build()?;
//!     let summary = run_batch(&config).await?;
//!     eprintln!("{} written, {} failed", summary.written, summary.failed);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2json` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! pdf2json = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod batch;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use batch::{process_file, run_batch, run_batch_sync, run_batch_with};
pub use config::{BatchConfig, BatchConfigBuilder, DEFAULT_CONCURRENCY};
pub use error::{FileError, Pdf2JsonError};
pub use output::{BatchSummary, FileOutcome, FileReport, OutputRecord, SkipReason};
pub use pipeline::extract::{PdfiumExtractor, TextExtractor};
pub use progress::{BatchProgressCallback, NoopProgressCallback, ProgressCallback};
