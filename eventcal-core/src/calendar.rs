//! In-memory event calendar.
//!
//! The calendar owns its events and keeps them sorted by start. Create and
//! update refuse spans that touch a stored event unless overlap is allowed
//! for that one call.
//!
//! Public operations never return errors. A failure is reported to the
//! diagnostic sink and the operation returns `None` (or an empty list).

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::error::{CalendarError, CalendarResult};
use crate::event::Event;
use crate::id::{IdGenerator, UuidGenerator};
use crate::sink::{DiagnosticSink, TracingSink};
use crate::span::{Span, SpanOptions, end_of, resolve_span};

/// Options for `Calendar::create_event`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateOptions {
    pub duration: Option<Duration>,
    pub end: Option<DateTime<Utc>>,
    pub allow_overlapping: bool,
}

impl CreateOptions {
    pub fn with_duration(duration: Duration) -> Self {
        CreateOptions {
            duration: Some(duration),
            ..Default::default()
        }
    }

    pub fn with_end(end: DateTime<Utc>) -> Self {
        CreateOptions {
            end: Some(end),
            ..Default::default()
        }
    }

    pub fn allowing_overlap(mut self) -> Self {
        self.allow_overlapping = true;
        self
    }

    fn span(&self) -> SpanOptions {
        SpanOptions {
            duration: self.duration,
            end: self.end,
        }
    }
}

/// Fields to change in `Calendar::update_event`. `None` keeps the old value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventUpdate {
    pub start: Option<DateTime<Utc>>,
    pub title: Option<String>,
    pub duration: Option<Duration>,
}

impl EventUpdate {
    pub fn new() -> Self {
        EventUpdate::default()
    }

    pub fn start(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

/// Options for `Calendar::update_event`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOptions {
    pub allow_overlapping: bool,
}

impl UpdateOptions {
    pub fn allowing_overlap() -> Self {
        UpdateOptions {
            allow_overlapping: true,
        }
    }
}

pub struct Calendar {
    /// Sorted ascending by start; equal starts keep insertion order.
    events: Vec<Event>,
    ids: Box<dyn IdGenerator>,
    sink: Box<dyn DiagnosticSink>,
}

impl Calendar {
    /// Empty calendar with UUID ids that reports failures through `tracing`.
    pub fn new() -> Self {
        Calendar::with_collaborators(UuidGenerator, TracingSink)
    }

    pub fn with_collaborators(
        ids: impl IdGenerator + 'static,
        sink: impl DiagnosticSink + 'static,
    ) -> Self {
        Calendar {
            events: Vec::new(),
            ids: Box::new(ids),
            sink: Box::new(sink),
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id() == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    // EVENT OPERATIONS:

    /// Create an event and return its id.
    ///
    /// The duration comes from `options.duration`, or from `options.end`
    /// when no duration is given.
    pub fn create_event(
        &mut self,
        title: impl Into<String>,
        start: DateTime<Utc>,
        options: CreateOptions,
    ) -> Option<String> {
        let result = self.try_create_event(title.into(), start, &options);
        self.settle("create", result)
    }

    /// Apply `update` to an event and return a snapshot of the result.
    ///
    /// The event is taken out of the calendar before the overlap check, so
    /// it is never compared with its old self. If the check fails the event
    /// is not put back: it is gone from the calendar.
    pub fn update_event(
        &mut self,
        id: &str,
        update: EventUpdate,
        options: UpdateOptions,
    ) -> Option<Event> {
        let result = self.try_update_event(id, update, options);
        self.settle("update", result)
    }

    pub fn delete_event(&mut self, id: &str) {
        let result = self.index_of(id).map(|index| {
            let removed = self.events.remove(index);
            debug!(id = removed.id(), "event deleted");
        });
        self.settle("delete", result);
    }

    /// Events with their start or end inside `[start, end]`, in start order.
    ///
    /// An event that starts before the window and ends after it is not
    /// returned.
    pub fn list_events(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<&Event> {
        if start > end {
            self.fail("list", CalendarError::StartAfterEnd);
            return Vec::new();
        }

        let window = Span::new(start, end);
        self.events
            .iter()
            .filter(|event| window.touches(&event.span()))
            .collect()
    }

    // INTERNALS:

    fn try_create_event(
        &mut self,
        title: String,
        start: DateTime<Utc>,
        options: &CreateOptions,
    ) -> CalendarResult<String> {
        let duration = resolve_span(start, &options.span())?;
        end_of(start, duration)?;
        let event = Event::new(self.ids.next_id(), start, duration, title);

        let index = self.add_event(event, options.allow_overlapping)?;
        let id = self.events[index].id().to_string();
        debug!(id = %id, "event created");
        Ok(id)
    }

    fn try_update_event(
        &mut self,
        id: &str,
        update: EventUpdate,
        options: UpdateOptions,
    ) -> CalendarResult<Event> {
        let index = self.index_of(id)?;
        let current = &self.events[index];
        end_of(
            update.start.unwrap_or(current.start()),
            update.duration.unwrap_or(current.duration()),
        )?;

        let mut event = self.events.remove(index);

        if let Some(title) = update.title {
            event.set_title(title);
        }
        if let Some(start) = update.start {
            event.set_start(start);
        }
        if let Some(duration) = update.duration {
            event.set_duration(duration);
        }

        let index = self.add_event(event, options.allow_overlapping)?;
        debug!(id, "event updated");
        Ok(self.events[index].clone())
    }

    /// Insert after the overlap check. Returns the new index.
    fn add_event(&mut self, event: Event, allow_overlapping: bool) -> CalendarResult<usize> {
        self.check_overlap(&event.span(), allow_overlapping)?;

        let index = self.events.partition_point(|e| e.start() <= event.start());
        self.events.insert(index, event);
        Ok(index)
    }

    /// First stored event (in start order) touched by `candidate`.
    fn check_overlap(&self, candidate: &Span, allow_overlapping: bool) -> CalendarResult<()> {
        if allow_overlapping {
            return Ok(());
        }

        match self.events.iter().find(|e| e.span().touches(candidate)) {
            Some(conflict) => Err(CalendarError::Overlap(conflict.id().to_string())),
            None => Ok(()),
        }
    }

    fn index_of(&self, id: &str) -> CalendarResult<usize> {
        self.events
            .iter()
            .position(|e| e.id() == id)
            .ok_or(CalendarError::NotFound)
    }

    fn settle<T>(&self, operation: &'static str, result: CalendarResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.fail(operation, error);
                None
            }
        }
    }

    fn fail(&self, operation: &'static str, error: CalendarError) {
        debug!(
            operation,
            kind = ?error.kind(),
            conflict = error.conflicting_id(),
            "{error}"
        );
        self.sink.report(&error.to_string());
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Calendar::new()
    }
}

impl fmt::Debug for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Calendar")
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}
