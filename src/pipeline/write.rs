//! JSON output: serialise an [`OutputRecord`] and write it to disk.
//!
//! The record is rendered fully in memory and written in a single
//! `tokio::fs::write` call, which creates or truncates the target. Different
//! files never share a handle, so concurrent writers need no locking.

use crate::config::JSON_INDENT;
use crate::error::FileError;
use crate::output::OutputRecord;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Render `record` as JSON indented by four spaces.
pub fn render_json(record: &OutputRecord) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    record.serialize(&mut ser)?;
    Ok(buf)
}

/// Serialise `record` and write it to `output_path`, replacing any previous file.
pub async fn write_record(output_path: &Path, record: &OutputRecord) -> Result<(), FileError> {
    let bytes = render_json(record).map_err(|source| FileError::Serialize {
        path: output_path.to_path_buf(),
        source,
    })?;

    tokio::fs::write(output_path, &bytes)
        .await
        .map_err(|source| FileError::Write {
            path: output_path.to_path_buf(),
            source,
        })?;

    debug!("Wrote {} bytes to {}", bytes.len(), output_path.display());
    Ok(())
}
