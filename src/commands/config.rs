use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::{CONFIG_ENV, Config, config_path};

pub fn run(config: &Config) -> Result<()> {
    let path = config_path()?;
    let source = if std::env::var_os(CONFIG_ENV).is_some() {
        format!("(from ${})", CONFIG_ENV)
    } else if path.exists() {
        String::new()
    } else {
        "(not found, using defaults)".to_string()
    };

    println!("{}", "Paths".bold());
    println!("  Config:  {} {}", path.display(), source.dimmed());
    println!();
    println!("{}", "Settings".bold());
    println!("  default_duration       {}", config.default_duration);
    println!("  fill_missing_duration  {}", config.fill_missing_duration);
    println!("  allow_overlapping      {}", config.allow_overlapping);
    println!("  log_level              {}", config.log_level);

    Ok(())
}
