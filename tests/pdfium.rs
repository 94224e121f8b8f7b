//! Integration tests against the real pdfium engine.
//!
//! Fixture PDFs are generated with pdfium-render at test time. Every test
//! skips itself when no pdfium library can be bound (see `PDFIUM_LIB_PATH`).
//!
//! Run with:
//!   PDFIUM_LIB_PATH=/path/to/libpdfium.so cargo test --test pdfium -- --nocapture

use pdf2json::engine;
use pdf2json::{run_batch, BatchConfig, FileError, OutputRecord, PdfiumExtractor, TextExtractor};
use pdfium_render::prelude::*;
use std::path::Path;
use tempfile::TempDir;

// ── Test helpers ─────────────────────────────────────────────────────────────

/// Bind pdfium or return early from the test.
macro_rules! pdfium_or_skip {
    () => {{
        match engine::pdfium() {
            Ok(pdfium) => pdfium,
            Err(e) => {
                println!("SKIP: pdfium unavailable: {e}");
                return;
            }
        }
    }};
}

/// Write a PDF with one page per entry; empty entries become blank pages.
fn write_pdf(pdfium: &Pdfium, path: &Path, pages: &[&str]) {
    let mut document = pdfium.create_new_pdf().unwrap();
    let font = document.fonts_mut().helvetica();

    for text in pages {
        let mut page = document
            .pages_mut()
            .create_page_at_end(PdfPagePaperSize::a4())
            .unwrap();
        if !text.is_empty() {
            page.objects_mut()
                .create_text_object(
                    PdfPoints::new(72.0),
                    PdfPoints::new(720.0),
                    *text,
                    font,
                    PdfPoints::new(14.0),
                )
                .unwrap();
        }
    }

    document.save_to_file(path).unwrap();
}

fn squash_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

// ── Extractor ────────────────────────────────────────────────────────────────

#[test]
fn pages_are_read_in_order() {
    let pdfium = pdfium_or_skip!();
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("hello.pdf");
    write_pdf(pdfium, &path, &["Hello ", "World"]);

    let text = PdfiumExtractor::new().extract(&path).unwrap();

    let hello = text.find("Hello").expect("page 1 text missing");
    let world = text.find("World").expect("page 2 text missing");
    assert!(hello < world, "pages out of order: {text:?}");
    assert_eq!(squash_whitespace(&text), "HelloWorld");
}

#[test]
fn blank_page_contributes_nothing() {
    let pdfium = pdfium_or_skip!();
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("gap.pdf");
    write_pdf(pdfium, &path, &["first", "", "third"]);

    let text = PdfiumExtractor::new().extract(&path).unwrap();
    assert_eq!(squash_whitespace(&text), "firstthird");
}

#[test]
fn zero_page_document_is_empty_text() {
    let pdfium = pdfium_or_skip!();
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("empty.pdf");
    write_pdf(pdfium, &path, &[]);

    let text = PdfiumExtractor::new().extract(&path).unwrap();
    assert!(text.is_empty(), "got: {text:?}");
}

#[test]
fn corrupt_file_is_an_extraction_error() {
    let _pdfium = pdfium_or_skip!();
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("corrupt.pdf");
    std::fs::write(&path, b"this is not a pdf at all").unwrap();

    let err = PdfiumExtractor::new().extract(&path).unwrap_err();
    assert!(matches!(err, FileError::Extraction { .. }), "got: {err}");
}

// ── Full batch ───────────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn batch_over_real_pdfs() {
    let pdfium = pdfium_or_skip!();
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("pdfs");
    let output = tmp.path().join("json");
    std::fs::create_dir(&input).unwrap();

    write_pdf(pdfium, &input.join("hello.pdf"), &["Hello ", "World"]);
    write_pdf(pdfium, &input.join("empty.pdf"), &[]);
    std::fs::write(input.join("corrupt.pdf"), b"garbage").unwrap();

    let config = BatchConfig::builder()
        .input_dir(&input)
        .output_dir(&output)
        .build()
        .unwrap();
    let summary = run_batch(&config).await.unwrap();

    assert_eq!(summary.discovered, 3);
    assert_eq!(summary.written, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.failed, 1);

    let body = std::fs::read_to_string(output.join("hello.json")).unwrap();
    let record: OutputRecord = serde_json::from_str(&body).unwrap();
    assert_eq!(squash_whitespace(&record.content), "HelloWorld");
    assert!(!output.join("empty.json").exists());
    assert!(!output.join("corrupt.json").exists());
}
