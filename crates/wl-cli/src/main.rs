use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wl_cli::commands::{add, check, fit, list, report};
use wl_cli::{Cli, Commands, Config};

/// Load config, logging the resolved values at debug level.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

/// The day a command operates on when `--date` is omitted.
fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    match &cli.command {
        Some(Commands::Add {
            start,
            end,
            date,
            note,
        }) => {
            let config = load_config(cli.config.as_deref())?;
            add::run(&config, date.unwrap_or_else(today), start, end, note.clone())?;
        }
        Some(Commands::Check {
            start,
            end,
            date,
            exclude,
        }) => {
            let config = load_config(cli.config.as_deref())?;
            check::run(
                &config,
                date.unwrap_or_else(today),
                start,
                end,
                exclude.as_deref(),
            )?;
        }
        Some(Commands::Fit { start, end, date }) => {
            let config = load_config(cli.config.as_deref())?;
            fit::run(&config, date.unwrap_or_else(today), start, end)?;
        }
        Some(Commands::List { date }) => {
            let config = load_config(cli.config.as_deref())?;
            list::run(&config, date.unwrap_or_else(today))?;
        }
        Some(Commands::Report {
            week: _,
            last_week,
            day,
            json,
        }) => {
            let config = load_config(cli.config.as_deref())?;
            let period = if *last_week {
                report::Period::LastWeek
            } else if *day {
                report::Period::Day
            } else {
                report::Period::Week
            };
            report::run(&config, period, *json)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
