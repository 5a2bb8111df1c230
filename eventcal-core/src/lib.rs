//! Core types for the eventcal calendar.
//!
//! This crate provides the in-memory calendar engine used by eventcal-cli:
//! - `Event` and its serialization view
//! - `Calendar`, which keeps events ordered and rejects overlapping spans
//! - the `IdGenerator` and `DiagnosticSink` seams the calendar is built on

pub mod calendar;
pub mod error;
pub mod event;
pub mod id;
pub mod sink;
pub mod span;

// Re-export the common types at crate root for convenience
pub use calendar::{Calendar, CreateOptions, EventUpdate, UpdateOptions};
pub use error::{CalendarError, CalendarResult, ErrorKind};
pub use event::{Event, EventView};
pub use id::{IdGenerator, SequentialIds, UuidGenerator};
pub use sink::{DiagnosticSink, RecordingSink, TracingSink};
pub use span::{Span, SpanOptions};
