//! CLI binary for pdf2json.
//!
//! A thin shim over the library crate that maps CLI flags to `BatchConfig`,
//! sets up logging, and runs one batch. Run with no arguments it converts
//! `data-processing/pdfs/*.pdf` into `extracted_pdfs_data/*.json`.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pdf2json::config::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use pdf2json::{
    run_batch, BatchConfig, BatchProgressCallback, BatchSummary, FileOutcome, ProgressCallback,
    DEFAULT_CONCURRENCY,
};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::error;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn yellow(s: &str) -> String {
    format!("\x1b[33m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: one bar over the whole batch plus a log line
/// per finished file. Files finish out of order, so lines are printed as
/// they arrive.
struct CliProgressCallback {
    bar: ProgressBar,
    failures: AtomicUsize,
}

impl CliProgressCallback {
    fn new() -> Arc<Self> {
        let bar = ProgressBar::new(0);
        let style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  \
             [{bar:42.green/238}] {pos:>3}/{len} files  \
             ⏱ {elapsed_precise}  {msg:.dim}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ")
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);

        bar.set_style(style);
        bar.set_prefix("Extracting");
        bar.enable_steady_tick(Duration::from_millis(80));

        Arc::new(Self {
            bar,
            failures: AtomicUsize::new(0),
        })
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl BatchProgressCallback for CliProgressCallback {
    fn on_batch_start(&self, total_files: usize) {
        self.bar.set_length(total_files as u64);
    }

    fn on_file_start(&self, path: &Path) {
        self.bar.set_message(file_name(path));
    }

    fn on_file_complete(&self, path: &Path, outcome: &FileOutcome) {
        let line = match outcome {
            FileOutcome::Written { output } => format!(
                "  {} {}  {}",
                green("✓"),
                file_name(path),
                dim(&format!("→ {}", output.display()))
            ),
            FileOutcome::Skipped { .. } => format!(
                "  {} {}  {}",
                yellow("∅"),
                file_name(path),
                dim("no text")
            ),
            FileOutcome::Failed { error } => {
                self.failures.fetch_add(1, Ordering::SeqCst);
                let msg = error.to_string();
                // Keep one line per file.
                let msg = match msg.char_indices().nth(79) {
                    Some((cut, _)) => format!("{}\u{2026}", &msg[..cut]),
                    None => msg,
                };
                format!("  {} {}  {}", red("✗"), file_name(path), red(&msg))
            }
        };
        self.bar.println(line);
        self.bar.inc(1);
    }

    fn on_batch_complete(&self, summary: &BatchSummary) {
        self.bar.finish_and_clear();
        let mark = if self.failures.load(Ordering::SeqCst) == 0 {
            green("✔")
        } else {
            red("✘")
        };
        eprintln!(
            "{} {}/{} files written  {}",
            mark,
            bold(&summary.written.to_string()),
            summary.discovered,
            dim(&format!(
                "({} skipped, {} failed, {}ms)",
                summary.skipped, summary.failed, summary.total_duration_ms
            )),
        );
    }
}

/// Convert a directory of PDF files into JSON documents with their text.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2json",
    version,
    about = "Extract the text of every PDF in a directory into one JSON file per document",
    color = clap::ColorChoice::Auto
)]
struct Cli {
    /// Directory containing the input `.pdf` files.
    #[arg(long, env = "PDF2JSON_INPUT_DIR", default_value = DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,

    /// Directory receiving the `.json` files (created if absent).
    #[arg(long, env = "PDF2JSON_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Maximum number of files processed at the same time.
    #[arg(short, long, env = "PDF2JSON_CONCURRENCY", default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// PDF user password for encrypted documents.
    #[arg(long, env = "PDF2JSON_PASSWORD")]
    password: Option<String>,

    /// Show a progress bar instead of INFO-level logs.
    #[arg(long, env = "PDF2JSON_PROGRESS")]
    progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDF2JSON_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "PDF2JSON_QUIET")]
    quiet: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // The progress bar replaces INFO-level library logs.
    let show_progress = cli.progress && !cli.quiet;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // The exit status does not distinguish outcomes; everything is in the log.
    if let Err(e) = run(&cli, show_progress).await {
        error!("Unexpected error occurred: {:#}", e);
    }
}

async fn run(cli: &Cli, show_progress: bool) -> Result<()> {
    let progress_cb: Option<ProgressCallback> = if show_progress {
        Some(CliProgressCallback::new() as Arc<dyn BatchProgressCallback>)
    } else {
        None
    };

    let config = build_config(cli, progress_cb)?;
    run_batch(&config).await.context("Batch aborted")?;
    Ok(())
}

/// Map CLI args to `BatchConfig`.
fn build_config(cli: &Cli, progress: Option<ProgressCallback>) -> Result<BatchConfig> {
    let mut builder = BatchConfig::builder()
        .input_dir(&cli.input_dir)
        .output_dir(&cli.output_dir)
        .concurrency(cli.concurrency);

    if let Some(ref password) = cli.password {
        builder = builder.password(password);
    }
    if let Some(cb) = progress {
        builder = builder.progress_callback(cb);
    }

    builder.build().context("Invalid configuration")
}
