//! Diagnostic sinks.
//!
//! Calendar operations never return errors to the caller. Every recoverable
//! failure is turned into a human-readable message and handed to a sink.

use std::sync::{Arc, Mutex};

/// Receives one message per failed calendar operation.
pub trait DiagnosticSink: Send {
    fn report(&self, message: &str);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&str) + Send,
{
    fn report(&self, message: &str) {
        self(message)
    }
}

/// Forwards messages to `tracing` at warn level (the default).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, message: &str) {
        tracing::warn!(target: "eventcal", "{message}");
    }
}

/// Captures messages in memory.
///
/// Clones share the same buffer, so a test can keep one handle and give
/// another to the calendar.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.lock().last().cloned()
    }

    pub fn contains(&self, message: &str) -> bool {
        self.lock().iter().any(|m| m == message)
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // A poisoned buffer still holds valid strings
        self.messages.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, message: &str) {
        self.lock().push(message.to_string());
    }
}
