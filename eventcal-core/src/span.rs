//! Time spans and span resolution.
//!
//! A span is a closed interval `[start, end]` of UTC instants. Both the
//! overlap check and the list query use boundary containment: a span
//! touches another when either of its boundaries lies inside the other,
//! bounds inclusive.

use chrono::{DateTime, Duration, SecondsFormat, Utc};

use crate::error::{CalendarError, CalendarResult};

/// Closed interval `[start, end]`. A span whose start is after its end
/// (an event with a negative duration) contains no instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Span {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        debug_assert!(start <= end, "Span start must not be after end");
        Span { start, end }
    }

    /// Both bounds inclusive.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// True if either boundary of `other` lies within `self`.
    ///
    /// This is not a full interval-overlap test: an `other` that encloses
    /// `self` with both boundaries outside it does not touch.
    pub fn touches(&self, other: &Span) -> bool {
        self.contains(other.start) || self.contains(other.end)
    }
}

/// Optional span information supplied when creating an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanOptions {
    pub duration: Option<Duration>,
    pub end: Option<DateTime<Utc>>,
}

impl SpanOptions {
    pub fn with_duration(duration: Duration) -> Self {
        SpanOptions {
            duration: Some(duration),
            end: None,
        }
    }

    pub fn with_end(end: DateTime<Utc>) -> Self {
        SpanOptions {
            duration: None,
            end: Some(end),
        }
    }
}

/// Work out an event's duration from its start and the supplied options.
///
/// A supplied duration takes precedence and any end date is ignored. It is
/// passed through as given, negative values included. Otherwise the
/// duration is `end - start`.
pub fn resolve_span(start: DateTime<Utc>, options: &SpanOptions) -> CalendarResult<Duration> {
    match (options.duration, options.end) {
        (Some(duration), _) => Ok(duration),
        (None, Some(end)) => {
            if start > end {
                return Err(CalendarError::StartAfterEnd);
            }
            Ok(end - start)
        }
        (None, None) => Err(CalendarError::MissingSpan),
    }
}

/// `start + duration`, or `OutOfRange` if chrono cannot represent it.
pub fn end_of(start: DateTime<Utc>, duration: Duration) -> CalendarResult<DateTime<Utc>> {
    start
        .checked_add_signed(duration)
        .ok_or(CalendarError::OutOfRange)
}

/// Format an instant as RFC 3339 in UTC with millisecond precision.
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Format a duration as `HH:MM:SS.mmm`. Hours are not wrapped at 24.
pub fn format_duration(duration: &Duration) -> String {
    let total_ms = duration.num_milliseconds();
    let sign = if total_ms < 0 { "-" } else { "" };
    let ms = total_ms.unsigned_abs();

    format!(
        "{}{:02}:{:02}:{:02}.{:03}",
        sign,
        ms / 3_600_000,
        (ms / 60_000) % 60,
        (ms / 1_000) % 60,
        ms % 1_000
    )
}
