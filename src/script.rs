//! Agenda scripts.
//!
//! A script is a TOML file with one `[[step]]` table per calendar operation:
//!
//! ```toml
//! [[step]]
//! action = "create"
//! key = "standup"
//! title = "Standup"
//! start = "2023-03-01T09:00:00Z"
//! duration = "15m"
//!
//! [[step]]
//! action = "list"
//! from = "2023-03-01T00:00:00Z"
//! to = "2023-03-31T23:59:59Z"
//! ```
//!
//! Steps refer to events by a script-local `key`. Times are RFC 3339 strings
//! and durations use humantime syntax ("45m", "1h 30m").

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct Script {
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Step {
    Create {
        /// Defaults to the title
        key: Option<String>,
        title: String,
        start: String,
        duration: Option<String>,
        end: Option<String>,
        #[serde(default)]
        allow_overlapping: bool,
    },
    Update {
        key: String,
        title: Option<String>,
        start: Option<String>,
        duration: Option<String>,
        #[serde(default)]
        allow_overlapping: bool,
    },
    Delete {
        key: String,
    },
    List {
        from: String,
        to: String,
    },
}

impl Step {
    pub fn action(&self) -> &'static str {
        match self {
            Step::Create { .. } => "create",
            Step::Update { .. } => "update",
            Step::Delete { .. } => "delete",
            Step::List { .. } => "list",
        }
    }
}

pub fn parse_script(content: &str) -> Result<Script> {
    toml::from_str(content).context("Invalid agenda script")
}

pub fn load_script(path: &Path) -> Result<Script> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_script(&content).with_context(|| format!("In {}", path.display()))
}

/// Parse an RFC 3339 timestamp into UTC.
pub fn parse_instant(s: &str) -> Result<DateTime<Utc>> {
    let instant = DateTime::parse_from_rfc3339(s)
        .with_context(|| format!("Invalid timestamp '{}'. Expected RFC 3339", s))?;
    Ok(instant.with_timezone(&Utc))
}

/// Parse a humantime duration ("45m", "1h 30m") into a chrono duration.
pub fn parse_duration(s: &str) -> Result<Duration> {
    let std_duration = humantime::parse_duration(s)
        .with_context(|| format!("Invalid duration '{}'. Expected e.g. \"45m\" or \"1h 30m\"", s))?;
    Duration::from_std(std_duration).with_context(|| format!("Duration '{}' is too long", s))
}
