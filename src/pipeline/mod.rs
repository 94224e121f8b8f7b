//! Pipeline stages for PDF-to-JSON conversion.
//!
//! Each submodule implements exactly one step of the per-file pipeline.
//!
//! ## Data Flow
//!
//! ```text
//! discover ──▶ extract ──▶ write
//! (read_dir)   (pdfium)    (serde_json)
//! ```
//!
//! 1. [`discover`]: list `.pdf` entries and derive each output path
//! 2. [`extract`] : concatenate page text; runs in `spawn_blocking` because
//!    pdfium is synchronous
//! 3. [`write`]   : pretty-print the `{"content": ...}` record to disk

pub mod discover;
pub mod extract;
pub mod write;
