//! Configuration types for a PDF-to-JSON batch run.
//!
//! All batch behaviour is controlled through [`BatchConfig`], built via its
//! [`BatchConfigBuilder`]. The defaults reproduce the fixed layout the tool
//! has always used: read `data-processing/pdfs`, write `extracted_pdfs_data`,
//! at most five files in flight.

use crate::error::Pdf2JsonError;
use crate::progress::ProgressCallback;
use std::fmt;
use std::path::PathBuf;

/// Directory scanned for input PDFs when none is configured.
pub const DEFAULT_INPUT_DIR: &str = "data-processing/pdfs";

/// Directory receiving the JSON documents when none is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "extracted_pdfs_data";

/// Maximum number of files inside their extract+write section at once.
pub const DEFAULT_CONCURRENCY: usize = 5;

/// File-name suffix selecting input documents. Matched case-sensitively.
pub const PDF_SUFFIX: &str = ".pdf";

/// Extension of the generated output documents.
pub const JSON_EXTENSION: &str = "json";

/// Indentation used when pretty-printing output documents.
pub const JSON_INDENT: &[u8] = b"    ";

/// Configuration for a batch run.
///
/// Built via [`BatchConfig::builder()`] or using [`BatchConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf2json::BatchConfig;
///
/// let config = BatchConfig::builder()
///     .input_dir("scans")
///     .output_dir("scans-json")
///     .concurrency(8)
///     .build()
///     .unwrap();
/// assert_eq!(config.concurrency, 8);
/// ```
#[derive(Clone)]
pub struct BatchConfig {
    /// Directory listed for `.pdf` files. Subdirectories are not recursed into.
    pub input_dir: PathBuf,

    /// Directory receiving one `<stem>.json` per extracted document.
    /// Created on demand.
    pub output_dir: PathBuf,

    /// Number of concurrency slots. Default: [`DEFAULT_CONCURRENCY`].
    pub concurrency: usize,

    /// Password tried when opening encrypted documents.
    pub password: Option<String>,

    /// Optional per-file progress events.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            concurrency: DEFAULT_CONCURRENCY,
            password: None,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for BatchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchConfig")
            .field("input_dir", &self.input_dir)
            .field("output_dir", &self.output_dir)
            .field("concurrency", &self.concurrency)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn BatchProgressCallback>"),
            )
            .finish()
    }
}

impl BatchConfig {
    /// Create a new builder for `BatchConfig`.
    pub fn builder() -> BatchConfigBuilder {
        BatchConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`BatchConfig`].
#[derive(Debug)]
pub struct BatchConfigBuilder {
    config: BatchConfig,
}

impl BatchConfigBuilder {
    pub fn input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.input_dir = dir.into();
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    pub fn concurrency(mut self, n: usize) -> Self {
        self.config.concurrency = n;
        self
    }

    pub fn password(mut self, pwd: impl Into<String>) -> Self {
        self.config.password = Some(pwd.into());
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<BatchConfig, Pdf2JsonError> {
        let c = &self.config;
        if c.concurrency == 0 {
            return Err(Pdf2JsonError::InvalidConfig(
                "Concurrency must be ≥ 1".into(),
            ));
        }
        if c.input_dir.as_os_str().is_empty() {
            return Err(Pdf2JsonError::InvalidConfig(
                "Input directory must not be empty".into(),
            ));
        }
        if c.output_dir.as_os_str().is_empty() {
            return Err(Pdf2JsonError::InvalidConfig(
                "Output directory must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}
