// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! The UI thread logs directly into the collector; worker tasks use a
//! [`DiagnosticsHandle`] whose events are drained by [`DiagnosticsCollector::process_pending`].

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::report::{write_atomic, DiagnosticReport, ReportMetadata, SerializableEvent};
use super::{
    AppStateEvent, BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind,
    ErrorEvent, PipelineStage, UserAction,
};
use crate::error::{Error, Result};

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone and safe to move into async tasks. Sends never block; an
/// event is dropped if the channel is full.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Records how long a stage took to run.
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn log_stage_completed(&self, stage: PipelineStage, elapsed: Duration) {
        self.send(DiagnosticEventKind::StageCompleted {
            stage,
            duration_ms: elapsed.as_millis() as u64,
        });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Central collector storing diagnostic events in a circular buffer.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    /// Monotonic start, for relative event timestamps.
    collection_started_at: Instant,
    /// Wall-clock start, for report metadata.
    collection_started_at_utc: DateTime<Utc>,
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish_non_exhaustive()
    }
}

const DEFAULT_CHANNEL_CAPACITY: usize = 100;

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves events sent through handles into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    pub fn log_action(&mut self, action: UserAction) {
        self.push(DiagnosticEventKind::UserAction {
            action,
            details: None,
        });
    }

    pub fn log_stage_started(&mut self, stage: PipelineStage) {
        self.push(DiagnosticEventKind::StageStarted { stage });
    }

    pub fn log_state(&mut self, state: AppStateEvent) {
        self.push(DiagnosticEventKind::AppState { state });
    }

    /// Logs a warning and mirrors it to stderr.
    pub fn log_warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        eprintln!("[WARN] {message}");
        self.push(DiagnosticEventKind::Warning { message });
    }

    /// Logs an error and mirrors it to stderr with its context.
    pub fn log_error(&mut self, error: ErrorEvent) {
        eprintln!("[ERROR] {}: {}", error.error_type, error.message);
        self.push(DiagnosticEventKind::Error { error });
    }

    fn push(&mut self, kind: DiagnosticEventKind) {
        self.buffer.push(DiagnosticEvent::new(kind));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Exports all collected events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    /// Writes the JSON report to `path` atomically.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if serialization or the write fails.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        let json = self
            .export_json()
            .map_err(|e| Error::Io(format!("failed to serialize report: {e}")))?;
        write_atomic(path, &json)?;
        Ok(path.to_path_buf())
    }

    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    fn build_report(&self) -> DiagnosticReport {
        let collection_duration_ms = self.collection_started_at.elapsed().as_millis() as u64;

        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect();

        DiagnosticReport {
            metadata: ReportMetadata::new(
                self.collection_started_at_utc,
                collection_duration_ms,
                events.len(),
            ),
            events,
        }
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
