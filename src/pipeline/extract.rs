//! Text extraction: turn one PDF into a single string via pdfium.
//!
//! ## Why spawn_blocking?
//!
//! pdfium is a synchronous C++ library and text extraction is CPU-bound.
//! [`extract_text`] moves each call onto tokio's blocking pool so the
//! scheduler threads keep driving the other files' tasks.
//!
//! ## Page assembly
//!
//! Pages are read in document order and concatenated with no separator. A
//! page without text contributes an empty string. If any page fails the
//! whole document fails; partial text is never returned.

use crate::engine;
use crate::error::FileError;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Extracts the text of a document at a path.
///
/// Implementations are shared across concurrently running files, so they
/// must not keep per-document state between calls.
pub trait TextExtractor: Send + Sync {
    /// Return the concatenated text of every page, or `""` for a document
    /// with no pages.
    fn extract(&self, path: &Path) -> Result<String, FileError>;
}

/// Production extractor backed by the process-wide pdfium binding.
#[derive(Debug, Clone, Default)]
pub struct PdfiumExtractor {
    password: Option<String>,
}

impl PdfiumExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `password` when opening encrypted documents.
    pub fn with_password(password: Option<String>) -> Self {
        Self { password }
    }
}

impl TextExtractor for PdfiumExtractor {
    fn extract(&self, path: &Path) -> Result<String, FileError> {
        let pdfium = engine::pdfium().map_err(|e| FileError::Extraction {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;

        let password = self.password.as_deref();
        let document = pdfium
            .load_pdf_from_file(path, password)
            .map_err(|e| open_error(path, e))?;

        let pages = document.pages();
        if pages.len() == 0 {
            warn!("PDF {} is empty or malformed.", path.display());
            return Ok(String::new());
        }
        debug!("PDF {} has {} pages", path.display(), pages.len());

        collect_page_text(pages.iter().enumerate().map(|(idx, page)| {
            page.text()
                .map(|text| text.all())
                .map_err(|e| FileError::Extraction {
                    path: path.to_path_buf(),
                    detail: format!("page {}: {:?}", idx + 1, e),
                })
        }))
    }
}

/// Concatenate per-page text in order, failing on the first page error.
pub fn collect_page_text<I>(pages: I) -> Result<String, FileError>
where
    I: IntoIterator<Item = Result<String, FileError>>,
{
    pages.into_iter().collect()
}

/// Run `extractor` for `path` on the blocking thread pool.
///
/// A panic inside the extractor becomes [`FileError::TaskPanicked`].
pub async fn extract_text(
    extractor: Arc<dyn TextExtractor>,
    path: PathBuf,
) -> Result<String, FileError> {
    let task_path = path.clone();
    tokio::task::spawn_blocking(move || extractor.extract(&task_path))
        .await
        .map_err(|e| FileError::TaskPanicked {
            path,
            detail: format!("extraction task failed: {e}"),
        })?
}

fn open_error(path: &Path, e: PdfiumError) -> FileError {
    let detail = format!("{:?}", e);
    if detail.contains("Password") || detail.contains("password") {
        FileError::PasswordProtected {
            path: path.to_path_buf(),
        }
    } else {
        FileError::Extraction {
            path: path.to_path_buf(),
            detail,
        }
    }
}
