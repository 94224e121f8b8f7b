//! PDFium engine binding.
//!
//! The pdfium shared library is bound once per process and shared by every
//! extraction. `pdfium-render`'s `thread_safe` feature serialises calls into
//! the C library, and its `sync` feature lets the bound instance live in a
//! static; each extraction still opens its own document handle.
//!
//! ## Library lookup
//!
//! The first match wins:
//!
//! 1. `PDFIUM_LIB_PATH`: an explicit path to the library file.
//! 2. The current working directory.
//! 3. The per-user cache directory, e.g. `~/.cache/pdf2json/` on Linux.
//! 4. The system library search path.

use crate::error::Pdf2JsonError;
use once_cell::sync::OnceCell;
use pdfium_render::prelude::*;
use std::path::PathBuf;
use tracing::{debug, info};

/// Environment variable naming an explicit pdfium library file.
pub const PDFIUM_LIB_PATH_ENV: &str = "PDFIUM_LIB_PATH";

static PDFIUM: OnceCell<Pdfium> = OnceCell::new();

/// Return the process-wide pdfium instance, binding it on first use.
///
/// A failed bind is not cached; the next call tries again.
pub fn pdfium() -> Result<&'static Pdfium, Pdf2JsonError> {
    PDFIUM.get_or_try_init(bind)
}

/// Directories searched for the platform pdfium library, in order.
pub fn library_search_dirs() -> Vec<PathBuf> {
    let mut search = vec![PathBuf::from("./")];
    if let Some(cache) = dirs::cache_dir() {
        search.push(cache.join("pdf2json"));
    }
    search
}

fn bind() -> Result<Pdfium, Pdf2JsonError> {
    if let Ok(explicit) = std::env::var(PDFIUM_LIB_PATH_ENV) {
        if !explicit.is_empty() {
            let path = PathBuf::from(explicit);
            info!("Binding pdfium from {}", path.display());
            return Pdfium::bind_to_library(&path)
                .map(Pdfium::new)
                .map_err(|e| {
                    Pdf2JsonError::PdfiumBindingFailed(format!("{}: {}", path.display(), e))
                });
        }
    }

    let mut last_err = None;
    for dir in library_search_dirs() {
        let candidate = dir.join(Pdfium::pdfium_platform_library_name());
        match Pdfium::bind_to_library(&candidate) {
            Ok(bindings) => {
                info!("Bound pdfium from {}", candidate.display());
                return Ok(Pdfium::new(bindings));
            }
            Err(e) => {
                debug!("pdfium not usable at {}: {}", candidate.display(), e);
                last_err = Some(e.to_string());
            }
        }
    }

    Pdfium::bind_to_system_library()
        .map(|bindings| {
            info!("Bound system pdfium library");
            Pdfium::new(bindings)
        })
        .map_err(|e| {
            Pdf2JsonError::PdfiumBindingFailed(match last_err {
                Some(prev) => format!("{e} (last local attempt: {prev})"),
                None => e.to_string(),
            })
        })
}
