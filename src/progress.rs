//! Progress-callback trait for per-file batch events.
//!
//! Inject an [`Arc<dyn BatchProgressCallback>`] via
//! [`crate::config::BatchConfigBuilder::progress_callback`] to receive events
//! as the dispatcher works through the input directory.
//!
//! # Example
//!
//! ```rust
//! use pdf2json::{BatchConfig, BatchProgressCallback, FileOutcome};
//! use std::path::Path;
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct CountingCallback {
//!     finished: AtomicUsize,
//! }
//!
//! impl BatchProgressCallback for CountingCallback {
//!     fn on_file_complete(&self, path: &Path, _outcome: &FileOutcome) {
//!         let done = self.finished.fetch_add(1, Ordering::SeqCst) + 1;
//!         eprintln!("{done}: {}", path.display());
//!     }
//! }
//!
//! let config = BatchConfig::builder()
//!     .progress_callback(Arc::new(CountingCallback { finished: AtomicUsize::new(0) }))
//!     .build()
//!     .unwrap();
//! ```

use crate::output::{BatchSummary, FileOutcome};
use std::path::Path;
use std::sync::Arc;

/// Called by the batch driver as it processes each file.
///
/// Files are processed concurrently, so `on_file_start` and
/// `on_file_complete` may be called from different threads at the same time.
/// Implementations must protect shared mutable state with appropriate
/// synchronisation primitives. All methods default to no-ops.
pub trait BatchProgressCallback: Send + Sync {
    /// Called once, after discovery, before any file is dispatched.
    fn on_batch_start(&self, total_files: usize) {
        let _ = total_files;
    }

    /// Called when a file has acquired its concurrency slot.
    fn on_file_start(&self, path: &Path) {
        let _ = path;
    }

    /// Called exactly once per file with its terminal outcome.
    fn on_file_complete(&self, path: &Path, outcome: &FileOutcome) {
        let _ = (path, outcome);
    }

    /// Called once after every dispatched file has finished.
    fn on_batch_complete(&self, summary: &BatchSummary) {
        let _ = summary;
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl BatchProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::BatchConfig`].
pub type ProgressCallback = Arc<dyn BatchProgressCallback>;
