//! Error types for calendar operations.
//!
//! The `Display` text of each variant is the exact message handed to the
//! diagnostic sink, so existing consumers can match on it.

use thiserror::Error;

/// Errors raised by span resolution, overlap checks and id lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("You need to provide duration or end date")]
    MissingSpan,

    #[error("Start date can't be after end date")]
    StartAfterEnd,

    #[error("This event overlaps with id {0}")]
    Overlap(String),

    #[error("Event does not exist")]
    NotFound,

    #[error("Event end date is out of range")]
    OutOfRange,
}

/// Coarse classification of a `CalendarError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Neither a duration nor an end date was supplied.
    Configuration,
    /// A start instant comes after its end instant, or the end cannot be
    /// represented.
    Ordering,
    /// The candidate span touches a stored event.
    Overlap,
    /// No event with the requested id.
    NotFound,
}

impl CalendarError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalendarError::MissingSpan => ErrorKind::Configuration,
            CalendarError::StartAfterEnd => ErrorKind::Ordering,
            CalendarError::Overlap(_) => ErrorKind::Overlap,
            CalendarError::NotFound => ErrorKind::NotFound,
            CalendarError::OutOfRange => ErrorKind::Ordering,
        }
    }

    /// Id of the stored event that caused an overlap, if any.
    pub fn conflicting_id(&self) -> Option<&str> {
        match self {
            CalendarError::Overlap(id) => Some(id),
            _ => None,
        }
    }
}

/// Result type alias for calendar operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
