//! Apply agenda script steps to a calendar.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Duration, Utc};
use eventcal_core::{Calendar, CreateOptions, Event, EventUpdate, RecordingSink, UpdateOptions};
use std::collections::HashMap;

use crate::script::{Step, parse_duration, parse_instant};

/// What a step did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Created { key: String, id: String },
    Updated(Event),
    Deleted { key: String },
    Listed(Vec<Event>),
    /// The calendar refused the step; the reason is in `messages`.
    Rejected { messages: Vec<String> },
}

impl Outcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected { .. })
    }
}

/// Settings applied to every step on top of what the step says.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayDefaults {
    pub allow_overlapping: bool,
    pub fill_duration: Option<Duration>,
}

pub struct Replay {
    calendar: Calendar,
    sink: RecordingSink,
    keys: HashMap<String, String>,
    defaults: ReplayDefaults,
}

impl Replay {
    /// `sink` must be the sink `calendar` reports to.
    pub fn new(calendar: Calendar, sink: RecordingSink, defaults: ReplayDefaults) -> Self {
        Replay {
            calendar,
            sink,
            keys: HashMap::new(),
            defaults,
        }
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Apply one step. Errors are script problems (bad timestamps, unknown
    /// keys); calendar refusals come back as `Outcome::Rejected`.
    pub fn apply(&mut self, step: &Step) -> Result<Outcome> {
        self.sink.clear();

        let outcome = match step {
            Step::Create {
                key,
                title,
                start,
                duration,
                end,
                allow_overlapping,
            } => {
                let start = parse_instant(start)?;
                let mut options = CreateOptions {
                    duration: duration.as_deref().map(parse_duration).transpose()?,
                    end: end.as_deref().map(parse_instant).transpose()?,
                    allow_overlapping: *allow_overlapping || self.defaults.allow_overlapping,
                };
                if options.duration.is_none() && options.end.is_none() {
                    options.duration = self.defaults.fill_duration;
                }

                self.calendar
                    .create_event(title.as_str(), start, options)
                    .map(|id| {
                        let key = key.clone().unwrap_or_else(|| title.clone());
                        self.keys.insert(key.clone(), id.clone());
                        Outcome::Created { key, id }
                    })
            }
            Step::Update {
                key,
                title,
                start,
                duration,
                allow_overlapping,
            } => {
                let id = self.id_for(key)?;
                let update = EventUpdate {
                    start: start.as_deref().map(parse_instant).transpose()?,
                    title: title.clone(),
                    duration: duration.as_deref().map(parse_duration).transpose()?,
                };
                let options = UpdateOptions {
                    allow_overlapping: *allow_overlapping || self.defaults.allow_overlapping,
                };

                self.calendar
                    .update_event(&id, update, options)
                    .map(Outcome::Updated)
            }
            Step::Delete { key } => {
                let id = self.id_for(key)?;
                let existed = self.calendar.get(&id).is_some();
                self.calendar.delete_event(&id);

                existed.then(|| Outcome::Deleted { key: key.clone() })
            }
            Step::List { from, to } => {
                let from = parse_instant(from)?;
                let to = parse_instant(to)?;
                let events: Vec<Event> = self
                    .calendar
                    .list_events(from, to)
                    .into_iter()
                    .cloned()
                    .collect();

                (from <= to).then_some(Outcome::Listed(events))
            }
        };

        Ok(outcome.unwrap_or_else(|| Outcome::Rejected {
            messages: self.sink.messages(),
        }))
    }

    fn id_for(&self, key: &str) -> Result<String> {
        self.keys
            .get(key)
            .cloned()
            .with_context(|| format!("Unknown event key '{}'", key))
    }

    /// Events touching `[from, to]`, or every event when both are None.
    pub fn agenda(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<&Event>> {
        if from.is_none() && to.is_none() {
            return Ok(self.calendar.events().iter().collect());
        }

        let from = from.unwrap_or(DateTime::<Utc>::MIN_UTC);
        let to = to.unwrap_or(DateTime::<Utc>::MAX_UTC);
        if from > to {
            bail!("--from must not be after --to");
        }
        Ok(self.calendar.list_events(from, to))
    }
}
