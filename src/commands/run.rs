use anyhow::Result;
use eventcal_core::{Calendar, RecordingSink, SequentialIds, UuidGenerator};
use owo_colors::OwoColorize;
use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::render::{Render, pluralize, render_step};
use crate::replay::{Replay, ReplayDefaults};
use crate::script::{load_script, parse_instant};

pub struct RunArgs {
    pub from: Option<String>,
    pub to: Option<String>,
    pub allow_overlapping: bool,
    pub seed_ids: Option<String>,
}

pub fn run(script_path: &Path, args: RunArgs, config: &Config) -> Result<()> {
    let script = load_script(script_path)?;
    let from = args.from.as_deref().map(parse_instant).transpose()?;
    let to = args.to.as_deref().map(parse_instant).transpose()?;

    let sink = RecordingSink::new();
    let calendar = match args.seed_ids {
        Some(prefix) => Calendar::with_collaborators(SequentialIds::new(prefix), sink.clone()),
        None => Calendar::with_collaborators(UuidGenerator, sink.clone()),
    };
    let defaults = ReplayDefaults {
        allow_overlapping: args.allow_overlapping || config.allow_overlapping,
        fill_duration: config.fill_duration()?,
    };
    let mut replay = Replay::new(calendar, sink, defaults);

    info!(
        path = %script_path.display(),
        steps = script.steps.len(),
        "replaying agenda script"
    );

    let mut rejected: usize = 0;
    for (i, step) in script.steps.iter().enumerate() {
        let outcome = replay.apply(step)?;
        if outcome.is_rejected() {
            rejected += 1;
        }
        for line in render_step(i + 1, step, &outcome) {
            println!("{}", line);
        }
    }

    info!(events = replay.calendar().len(), rejected, "replay finished");

    let agenda = replay.agenda(from, to)?;

    println!();
    println!(
        "{} {}",
        "Agenda".bold(),
        format!("({} {})", agenda.len(), pluralize("event", agenda.len())).dimmed()
    );
    if agenda.is_empty() {
        println!("  {}", "No events".dimmed());
    }
    for event in &agenda {
        println!("  {}", event.render());
    }

    if rejected > 0 {
        println!();
        println!(
            "{}",
            format!("{} {} rejected", rejected, pluralize("step", rejected)).yellow()
        );
    }

    Ok(())
}
