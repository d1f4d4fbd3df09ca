// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting activity reports.
//!
//! Events are stored in a memory-bounded circular buffer and can be exported
//! as a JSON report.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event
//! - [`DiagnosticsCollector`]: Owns the buffer, drained on each UI tick
//! - [`DiagnosticsHandle`]: Cloneable sender used from worker tasks

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    AppStateEvent, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, PipelineStage, UserAction,
};
pub use report::{write_atomic, DiagnosticReport, ReportMetadata, SerializableEvent};
