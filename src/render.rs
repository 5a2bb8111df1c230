//! Terminal rendering for calendar types.
//!
//! Extension traits that add colored output to eventcal-core types using
//! owo_colors.

use eventcal_core::Event;
use owo_colors::OwoColorize;

use crate::replay::Outcome;
use crate::script::Step;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        format!("{} {}", self.title().bold(), render_event_time(self).dimmed())
    }
}

/// "2023-03-01 09:00 → 09:15", with the end date shown only if it differs.
pub fn render_event_time(event: &Event) -> String {
    let start = event.start();
    let end = event.end();

    let end_str = if start.date_naive() == end.date_naive() {
        end.format("%H:%M").to_string()
    } else {
        end.format("%Y-%m-%d %H:%M").to_string()
    };

    format!("{} → {}", start.format("%Y-%m-%d %H:%M"), end_str)
}

/// One header line for the step plus detail lines for its outcome.
pub fn render_step(number: usize, step: &Step, outcome: &Outcome) -> Vec<String> {
    let label = format!("{:>3}. {:<6}", number, step.action());
    let mut lines = Vec::new();

    match outcome {
        Outcome::Created { key, id } => {
            lines.push(format!("{} {} {}", label.green(), key, id.dimmed()));
        }
        Outcome::Updated(event) => {
            lines.push(format!("{} {}", label.yellow(), event.render()));
        }
        Outcome::Deleted { key } => {
            lines.push(format!("{} {}", label.red(), key));
        }
        Outcome::Listed(events) => {
            lines.push(format!(
                "{} {} {}",
                label.cyan(),
                events.len(),
                pluralize("event", events.len())
            ));
            lines.extend(events.iter().map(|e| format!("        {}", e.render())));
        }
        Outcome::Rejected { messages } => {
            lines.push(format!("{} {}", label.red().bold(), "rejected".red()));
            lines.extend(messages.iter().map(|m| format!("        {}", m.red())));
        }
    }

    lines
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
