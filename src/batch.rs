//! Batch entry points: discover, dispatch, and run the per-file pipeline.
//!
//! ## Failure containment
//!
//! Only problems with the run itself (missing input directory, output
//! directory that cannot be created) are returned as `Err`. Everything that
//! goes wrong with an individual document is logged at that document's
//! boundary, recorded as a [`FileOutcome`], and counted in the
//! [`BatchSummary`]; the other documents carry on.

use crate::config::BatchConfig;
use crate::dispatch::dispatch;
use crate::error::Pdf2JsonError;
use crate::output::{BatchSummary, FileOutcome, OutputRecord, SkipReason};
use crate::pipeline::extract::{self, PdfiumExtractor, TextExtractor};
use crate::pipeline::{discover, write};
use crate::progress::ProgressCallback;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

/// Convert every PDF in `config.input_dir` to JSON in `config.output_dir`.
///
/// This is the primary entry point for the library. Text is extracted with
/// pdfium; use [`run_batch_with`] to supply another [`TextExtractor`].
///
/// # Returns
/// `Ok(BatchSummary)` once every file has finished, even if some failed
/// (check `summary.failed`).
///
/// # Errors
/// * [`Pdf2JsonError::InputDirNotFound`] / [`Pdf2JsonError::InputDirUnreadable`]
/// * [`Pdf2JsonError::OutputDirCreateFailed`]
pub async fn run_batch(config: &BatchConfig) -> Result<BatchSummary, Pdf2JsonError> {
    let extractor = Arc::new(PdfiumExtractor::with_password(config.password.clone()));
    run_batch_with(config, extractor).await
}

/// Like [`run_batch`], but with a caller-supplied extractor.
pub async fn run_batch_with(
    config: &BatchConfig,
    extractor: Arc<dyn TextExtractor>,
) -> Result<BatchSummary, Pdf2JsonError> {
    let start = Instant::now();

    // ── Step 1: Discover inputs ──────────────────────────────────────────
    let pdfs = discover::discover_pdfs(&config.input_dir).await?;
    if pdfs.is_empty() {
        warn!(
            "No PDF files found in the input directory: {}",
            config.input_dir.display()
        );
        return Ok(BatchSummary {
            total_duration_ms: start.elapsed().as_millis() as u64,
            ..BatchSummary::default()
        });
    }

    // ── Step 2: Prepare output directory ─────────────────────────────────
    tokio::fs::create_dir_all(&config.output_dir)
        .await
        .map_err(|source| Pdf2JsonError::OutputDirCreateFailed {
            path: config.output_dir.clone(),
            source,
        })?;

    info!("Found {} PDF(s) to process.", pdfs.len());
    if let Some(ref cb) = config.progress_callback {
        cb.on_batch_start(pdfs.len());
    }

    // ── Step 3: Dispatch per-file pipelines ──────────────────────────────
    let reports = dispatch(
        pdfs,
        config.concurrency,
        |input| {
            process_file(
                input,
                Arc::clone(&extractor),
                config.output_dir.clone(),
                config.progress_callback.clone(),
            )
        },
        |report| {
            if let Some(ref cb) = config.progress_callback {
                cb.on_file_complete(&report.input, &report.outcome);
            }
        },
    )
    .await;

    // ── Step 4: Summarise ────────────────────────────────────────────────
    let summary = BatchSummary::from_reports(&reports, start.elapsed().as_millis() as u64);
    info!(
        "Batch complete: {} written, {} skipped, {} failed of {} PDF(s) in {}ms",
        summary.written,
        summary.skipped,
        summary.failed,
        summary.discovered,
        summary.total_duration_ms
    );

    if let Some(ref cb) = config.progress_callback {
        cb.on_batch_complete(&summary);
    }

    Ok(summary)
}

/// Synchronous wrapper around [`run_batch`].
///
/// Creates a temporary tokio runtime internally.
pub fn run_batch_sync(config: &BatchConfig) -> Result<BatchSummary, Pdf2JsonError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| Pdf2JsonError::Internal(format!("Failed to create tokio runtime: {}", e)))?
        .block_on(run_batch(config))
}

/// Run the extract → validate → write pipeline for a single file.
///
/// Never returns an error: every failure is logged here and reported as
/// [`FileOutcome::Failed`].
pub async fn process_file(
    input: PathBuf,
    extractor: Arc<dyn TextExtractor>,
    output_dir: PathBuf,
    progress: Option<ProgressCallback>,
) -> FileOutcome {
    info!("Processing {} ...", input.display());
    if let Some(ref cb) = progress {
        cb.on_file_start(&input);
    }

    let text = match extract::extract_text(extractor, input.clone()).await {
        Ok(text) => text,
        Err(error) => {
            error!("Error processing {}: {}", input.display(), error);
            return FileOutcome::Failed { error };
        }
    };

    if text.trim().is_empty() {
        warn!("No content extracted from {}.", input.display());
        return FileOutcome::Skipped {
            reason: SkipReason::NoContent,
        };
    }

    let output = discover::output_path_for(&output_dir, &input);
    let record = OutputRecord { content: text };

    if let Err(error) = write::write_record(&output, &record).await {
        error!("Error saving JSON file {}: {}", output.display(), error);
        return FileOutcome::Failed { error };
    }

    info!("Data saved successfully to JSON: {}", output.display());
    info!("Finished processing {}.", input.display());
    FileOutcome::Written { output }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FileError;
    use std::collections::HashMap;
    use std::path::Path;
    use tempfile::TempDir;

    /// Returns scripted text per file name; unknown names fail.
    struct ScriptedExtractor(HashMap<&'static str, &'static str>);

    impl TextExtractor for ScriptedExtractor {
        fn extract(&self, path: &Path) -> Result<String, FileError> {
            let name = path.file_name().unwrap().to_str().unwrap();
            self.0
                .get(name)
                .map(|t| t.to_string())
                .ok_or_else(|| FileError::Extraction {
                    path: path.to_path_buf(),
                    detail: "not scripted".into(),
                })
        }
    }

    fn extractor(pairs: &[(&'static str, &'static str)]) -> Arc<dyn TextExtractor> {
        Arc::new(ScriptedExtractor(pairs.iter().copied().collect()))
    }

    #[tokio::test]
    async fn process_file_writes_record() {
        let tmp = TempDir::new().unwrap();
        let outcome = process_file(
            PathBuf::from("in/report.pdf"),
            extractor(&[("report.pdf", "Hello World")]),
            tmp.path().to_path_buf(),
            None,
        )
        .await;

        let expected = tmp.path().join("report.json");
        assert!(matches!(outcome, FileOutcome::Written { ref output } if *output == expected));
        let body = std::fs::read_to_string(expected).unwrap();
        assert_eq!(body, "{\n    \"content\": \"Hello World\"\n}");
    }

    #[tokio::test]
    async fn blank_text_is_skipped_without_output() {
        let tmp = TempDir::new().unwrap();
        for text in ["", "  \n\t "] {
            let outcome = process_file(
                PathBuf::from("in/blank.pdf"),
                extractor(&[("blank.pdf", text)]),
                tmp.path().to_path_buf(),
                None,
            )
            .await;
            assert!(matches!(
                outcome,
                FileOutcome::Skipped {
                    reason: SkipReason::NoContent
                }
            ));
        }
        assert!(!tmp.path().join("blank.json").exists());
    }

    #[tokio::test]
    async fn extraction_failure_is_contained() {
        let tmp = TempDir::new().unwrap();
        let outcome = process_file(
            PathBuf::from("in/corrupt.pdf"),
            extractor(&[]),
            tmp.path().to_path_buf(),
            None,
        )
        .await;

        assert!(matches!(
            outcome,
            FileOutcome::Failed {
                error: FileError::Extraction { .. }
            }
        ));
        assert!(!tmp.path().join("corrupt.json").exists());
    }

    #[tokio::test]
    async fn write_failure_is_contained() {
        let tmp = TempDir::new().unwrap();
        let outcome = process_file(
            PathBuf::from("in/a.pdf"),
            extractor(&[("a.pdf", "text")]),
            tmp.path().join("does-not-exist"),
            None,
        )
        .await;

        assert!(matches!(
            outcome,
            FileOutcome::Failed {
                error: FileError::Write { .. }
            }
        ));
    }

    #[tokio::test]
    async fn run_creates_output_dir_and_summarises() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("pdfs");
        std::fs::create_dir(&input).unwrap();
        for name in ["a.pdf", "b.pdf", "c.pdf", "notes.txt"] {
            std::fs::write(input.join(name), b"%PDF").unwrap();
        }
        let output = tmp.path().join("nested").join("json");

        let config = BatchConfig::builder()
            .input_dir(&input)
            .output_dir(&output)
            .build()
            .unwrap();
        let summary = run_batch_with(&config, extractor(&[("a.pdf", "A"), ("b.pdf", "")]))
            .await
            .unwrap();

        assert_eq!(summary.discovered, 3);
        assert_eq!(summary.written, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 1);
        assert!(output.join("a.json").exists());
        assert!(!output.join("b.json").exists());
        assert!(!output.join("c.json").exists());
    }

    #[tokio::test]
    async fn missing_input_dir_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let config = BatchConfig::builder()
            .input_dir(tmp.path().join("missing"))
            .output_dir(tmp.path().join("out"))
            .build()
            .unwrap();

        let err = run_batch_with(&config, extractor(&[])).await.unwrap_err();
        assert!(matches!(err, Pdf2JsonError::InputDirNotFound { .. }));
        assert!(!tmp.path().join("out").exists());
    }

    #[test]
    fn sync_wrapper_reports_missing_dir() {
        let tmp = TempDir::new().unwrap();
        let config = BatchConfig::builder()
            .input_dir(tmp.path().join("missing"))
            .build()
            .unwrap();
        assert!(matches!(
            run_batch_sync(&config),
            Err(Pdf2JsonError::InputDirNotFound { .. })
        ));
    }
}
