//! Concurrency-bounded dispatcher for per-file tasks.
//!
//! Every input file gets its own spawned tokio task. Before doing any work a
//! task acquires one permit from a shared [`Semaphore`] sized to the
//! configured concurrency, and holds it until its extract+write sequence has
//! finished, whatever the outcome. Tasks are supervised independently: an
//! error is already a [`FileOutcome::Failed`] value, and a panic surfaces as
//! a `JoinError` that is turned into one here. Siblings are never cancelled.
//!
//! [`dispatch`] returns once every task has reached a terminal state. Reports
//! arrive in completion order, not discovery order.

use crate::error::FileError;
use crate::output::{FileOutcome, FileReport};
use futures::stream::{FuturesUnordered, StreamExt};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, error, warn};

/// Run `task` once per path with at most `concurrency` tasks holding a slot.
///
/// `task` builds the per-file future; it is not polled until the file's
/// slot has been acquired. `on_report` sees each report as soon as its task
/// ends, including tasks that panicked. A `concurrency` of 0 is treated as 1.
pub async fn dispatch<F, Fut, R>(
    paths: Vec<PathBuf>,
    concurrency: usize,
    mut task: F,
    mut on_report: R,
) -> Vec<FileReport>
where
    F: FnMut(PathBuf) -> Fut,
    Fut: Future<Output = FileOutcome> + Send + 'static,
    R: FnMut(&FileReport),
{
    if paths.is_empty() {
        warn!("No files to dispatch.");
        return Vec::new();
    }

    let slots = Arc::new(Semaphore::new(concurrency.max(1)));
    let total = paths.len();
    debug!("Dispatching {} files over {} slots", total, concurrency.max(1));

    let mut running: FuturesUnordered<_> = paths
        .into_iter()
        .map(|path| {
            let slots = Arc::clone(&slots);
            let work = task(path.clone());
            let slot_path = path.clone();
            let handle = tokio::spawn(async move {
                let _permit = match slots.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(e) => {
                        return FileOutcome::Failed {
                            error: FileError::TaskPanicked {
                                path: slot_path,
                                detail: format!("concurrency slot unavailable: {e}"),
                            },
                        }
                    }
                };
                work.await
            });
            async move { (path, handle.await) }
        })
        .collect();

    let mut reports = Vec::with_capacity(total);
    while let Some((input, joined)) = running.next().await {
        let outcome = joined.unwrap_or_else(|e| {
            error!("Error processing {}: {}", input.display(), e);
            FileOutcome::Failed {
                error: FileError::TaskPanicked {
                    path: input.clone(),
                    detail: e.to_string(),
                },
            }
        });
        let report = FileReport { input, outcome };
        on_report(&report);
        reports.push(report);
    }

    reports
}
