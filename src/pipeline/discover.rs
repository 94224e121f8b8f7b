//! Input discovery: list the `.pdf` files of a directory and map each one to
//! its output path.
//!
//! Matching is on the literal, case-sensitive `.pdf` suffix of the entry
//! name; `report.PDF` is ignored. Directories are skipped even when their
//! name matches, and nothing is recursed into. The listing order is whatever
//! the filesystem returns.

use crate::config::{JSON_EXTENSION, PDF_SUFFIX};
use crate::error::Pdf2JsonError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// List the PDF files directly inside `input_dir`.
///
/// # Errors
/// * [`Pdf2JsonError::InputDirNotFound`] if `input_dir` does not exist.
/// * [`Pdf2JsonError::InputDirUnreadable`] if it exists but cannot be listed.
pub async fn discover_pdfs(input_dir: &Path) -> Result<Vec<PathBuf>, Pdf2JsonError> {
    let unreadable = |source| Pdf2JsonError::InputDirUnreadable {
        path: input_dir.to_path_buf(),
        source,
    };

    if !tokio::fs::try_exists(input_dir).await.map_err(unreadable)? {
        return Err(Pdf2JsonError::InputDirNotFound {
            path: input_dir.to_path_buf(),
        });
    }

    let mut entries = tokio::fs::read_dir(input_dir).await.map_err(unreadable)?;
    let mut pdfs = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(unreadable)? {
        if !is_pdf_name(&entry.file_name().to_string_lossy()) {
            continue;
        }
        match entry.file_type().await {
            Ok(ft) if ft.is_dir() => {
                debug!("Skipping directory {}", entry.path().display());
            }
            Ok(_) => pdfs.push(entry.path()),
            Err(e) => {
                debug!("Skipping {}: {}", entry.path().display(), e);
            }
        }
    }

    Ok(pdfs)
}

/// `true` when `name` carries the exact `.pdf` suffix.
pub fn is_pdf_name(name: &str) -> bool {
    name.ends_with(PDF_SUFFIX)
}

/// Compute `<output_dir>/<name without .pdf>.json` for an input file.
///
/// The name is never decoded, so distinct non-UTF-8 names keep distinct
/// outputs.
pub fn output_path_for(output_dir: &Path, input: &Path) -> PathBuf {
    let name = input.file_name().unwrap_or_default();
    if name == PDF_SUFFIX {
        return output_dir.join(format!(".{JSON_EXTENSION}"));
    }
    output_dir.join(Path::new(name).with_extension(JSON_EXTENSION))
}
