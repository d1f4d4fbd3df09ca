// SPDX-License-Identifier: MPL-2.0
//! Diagnostic report structure for JSON export.

use std::io;
use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::DiagnosticEventKind;

/// Header of an exported report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    /// When the report was generated (RFC 3339)
    pub generated_at: String,
    pub app_version: String,
    /// When collection started (RFC 3339)
    pub collection_started_at: String,
    pub collection_duration_ms: u64,
    pub event_count: usize,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(
        collection_started_at: DateTime<Utc>,
        collection_duration_ms: u64,
        event_count: usize,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at: collection_started_at.to_rfc3339(),
            collection_duration_ms,
            event_count,
        }
    }
}

/// An event with its timestamp relative to the start of collection.
#[derive(Debug, Clone, Serialize)]
pub struct SerializableEvent {
    /// Milliseconds since collection started
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(
        event_timestamp: Instant,
        collection_start: Instant,
        kind: DiagnosticEventKind,
    ) -> Self {
        let timestamp_ms = event_timestamp.duration_since(collection_start).as_millis() as u64;
        Self { timestamp_ms, kind }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub events: Vec<SerializableEvent>,
}

/// Writes `content` through a temporary file and renames it into place.
///
/// # Errors
///
/// Returns the underlying I/O error; the temporary file is removed on failure.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");

    std::fs::write(&temp_path, content)?;

    if let Err(e) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn serializable_event_uses_relative_timestamp() {
        let start = Instant::now();
        let event = SerializableEvent::new(
            start + Duration::from_millis(250),
            start,
            DiagnosticEventKind::Warning {
                message: "late".into(),
            },
        );
        assert_eq!(event.timestamp_ms, 250);

        let json = serde_json::to_string(&event).expect("serialize");
        assert!(json.contains("\"timestamp_ms\":250"));
        assert!(json.contains("\"type\":\"warning\""));
    }

    #[test]
    fn write_atomic_replaces_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("report.json");
        write_atomic(&path, "{}").expect("first write");
        write_atomic(&path, "{\"a\":1}").expect("second write");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "{\"a\":1}");
        assert!(!path.with_extension("json.tmp").exists());
    }
}
