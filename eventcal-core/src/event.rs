//! Calendar events.
//!
//! An event's end is derived: it always equals `start + duration` and is
//! recomputed whenever either changes. It cannot be set directly. An end
//! beyond chrono's range is clamped to `DateTime::<Utc>::MAX_UTC` (or
//! `MIN_UTC`); `Calendar` refuses such spans before an event is built.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::span::{Span, format_duration, format_instant};

/// A single scheduled item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    id: String,
    title: String,
    start: DateTime<Utc>,
    duration: Duration,
    end: DateTime<Utc>,
}

/// Textual view of an event for external presentation.
///
/// Instants are RFC 3339 UTC strings and the duration is `HH:MM:SS.mmm`.
/// Not used for comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventView {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub start_date: String,
    pub end_date: String,
}

impl Event {
    pub fn new(
        id: impl Into<String>,
        start: DateTime<Utc>,
        duration: Duration,
        title: impl Into<String>,
    ) -> Self {
        Event {
            id: id.into(),
            title: title.into(),
            start,
            duration,
            end: clamped_end(start, duration),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn set_start(&mut self, start: DateTime<Utc>) {
        self.start = start;
        self.recompute();
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
        self.recompute();
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn span(&self) -> Span {
        Span {
            start: self.start,
            end: self.end,
        }
    }

    pub fn view(&self) -> EventView {
        EventView {
            id: self.id.clone(),
            title: self.title.clone(),
            duration: format_duration(&self.duration),
            start_date: format_instant(&self.start),
            end_date: format_instant(&self.end),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.view())
    }

    fn recompute(&mut self) {
        self.end = clamped_end(self.start, self.duration);
    }
}

fn clamped_end(start: DateTime<Utc>, duration: Duration) -> DateTime<Utc> {
    start.checked_add_signed(duration).unwrap_or(if duration < Duration::zero() {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({} - {})",
            self.title,
            format_instant(&self.start),
            format_instant(&self.end)
        )
    }
}
