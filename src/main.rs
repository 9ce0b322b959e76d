mod commands;
mod render;
mod view;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::Session;
use crate::view::{ViewMode, ViewState};

#[derive(Parser)]
#[command(name = "maintcal")]
#[command(about = "Week, day and month views of scheduled maintenance")]
struct Cli {
    /// Anchor date (YYYY-MM-DD). Defaults to today
    #[arg(short, long, global = true)]
    date: Option<String>,

    /// Move this many days/weeks/months from the anchor (negative goes back)
    #[arg(long, global = true, default_value_t = 0, allow_negative_numbers = true)]
    offset: i64,

    /// Events file (.toml or .json). Overrides events_file from the config
    #[arg(short, long, global = true)]
    events: Option<PathBuf>,

    /// Fail when an event in view is not on a configured time slot
    #[arg(long, global = true)]
    strict: bool,

    /// Print the engine output as JSON instead of rendering it
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the week containing the anchor date (default)
    Week,
    /// Show the time slots of a single day
    Day,
    /// Show the month calendar
    Month,
    /// Show the events booked into one slot of the anchor date
    Cell {
        /// Slot time (HH:MM)
        #[arg(short, long)]
        time: String,
    },
    /// List the next maintenance tasks from the anchor date on
    Upcoming {
        /// How many tasks to list (defaults to upcoming_limit from the config)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Count tasks per priority
    Legend,
    /// Show configuration paths and the active slot grid
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let command = cli.command.unwrap_or(Commands::Week);

    if let Commands::Config = command {
        return commands::config::run();
    }

    let session = Session::load(cli.events, cli.strict, cli.json)?;
    let today = chrono::Local::now().date_naive();

    let mode = match command {
        Commands::Day | Commands::Cell { .. } => ViewMode::Day,
        Commands::Month => ViewMode::Month,
        _ => ViewMode::Week,
    };
    let state = ViewState::new(mode, cli.date.as_deref(), today)
        .context("Invalid --date")?
        .shift(cli.offset)
        .with_context(|| format!("Cannot move {} steps from the requested date", cli.offset))?;

    match command {
        Commands::Week => commands::week::run(&session, state),
        Commands::Day => commands::day::run(&session, state),
        Commands::Month => commands::month::run(&session, state),
        Commands::Cell { time } => commands::cell::run(&session, state, &time),
        Commands::Upcoming { limit } => commands::upcoming::run(&session, state, limit),
        Commands::Legend => commands::legend::run(&session),
        Commands::Config => commands::config::run(),
    }
}

/// Log to stderr. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) -> Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}
