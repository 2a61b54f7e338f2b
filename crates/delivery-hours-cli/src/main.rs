//! `delivery-hours` CLI — compute and query effective delivery schedules from
//! the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Effective schedule: store hours ∩ union of active drivers (stdin → stdout)
//! delivery-hours effective --agents drivers.json < store.json
//!
//! # From file to file
//! delivery-hours effective -i store.json --agents drivers.json -o effective.json
//!
//! # Migrate a legacy single-slot document to the multi-slot shape
//! delivery-hours migrate -i legacy.json
//!
//! # Is delivery available at a given instant?
//! delivery-hours check -i store.json --agents drivers.json --at 2026-08-24T12:30
//!
//! # Next available day, scanning forward from a weekday
//! delivery-hours next -i store.json --today mon
//!
//! # List available days
//! delivery-hours summary -i store.json --abbrev
//! ```
//!
//! Schedule inputs accept either the legacy or the multi-slot JSON shape.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDateTime, Weekday};
use clap::{Parser, Subcommand};
use delivery_hours::query::{available_days, hours_on};
use delivery_hours::{
    effective_schedule, is_available_at, next_available_day, Agent, ScheduleDoc, WeekSchedule,
};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "delivery-hours",
    version,
    about = "Effective delivery hours from store and driver schedules"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the effective weekly schedule (store hours ∩ driver union)
    Effective {
        /// Store schedule JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Agents JSON file (an array of {id, active, schedule})
        #[arg(long)]
        agents: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Migrate a legacy single-slot schedule to the multi-slot shape
    Migrate {
        /// Schedule JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Report whether delivery is available at a given instant
    Check {
        /// Store schedule JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Agents JSON file; omitted means agent availability is not tracked
        #[arg(long)]
        agents: Option<String>,
        /// The instant to check, e.g. 2026-08-24T12:30
        #[arg(long)]
        at: String,
    },
    /// Show the next available delivery day
    Next {
        /// Store schedule JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Agents JSON file; omitted means agent availability is not tracked
        #[arg(long)]
        agents: Option<String>,
        /// Weekday to scan forward from (inclusive), e.g. mon
        #[arg(long)]
        today: String,
    },
    /// List the days with delivery availability
    Summary {
        /// Store schedule JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Agents JSON file; omitted means agent availability is not tracked
        #[arg(long)]
        agents: Option<String>,
        /// Use abbreviated day labels (Mon, Tue, ...)
        #[arg(long)]
        abbrev: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Effective {
            input,
            agents,
            output,
        } => {
            let effective = load_effective(input.as_deref(), agents.as_deref())?;
            let json = serde_json::to_string_pretty(&effective)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Migrate { input, output } => {
            let week = load_schedule(input.as_deref())?;
            let json = serde_json::to_string_pretty(&week)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Check { input, agents, at } => {
            let at: NaiveDateTime = NaiveDateTime::parse_from_str(&at, "%Y-%m-%dT%H:%M")
                .with_context(|| format!("Invalid instant: {at} (expected YYYY-MM-DDTHH:MM)"))?;
            let effective = load_effective(input.as_deref(), agents.as_deref())?;
            if is_available_at(&effective, at) {
                println!("open ({})", hours_on(&effective, at.weekday()));
            } else {
                println!("closed");
            }
        }
        Commands::Next {
            input,
            agents,
            today,
        } => {
            let today: Weekday = today
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid weekday: {today} (expected e.g. mon)"))?;
            let effective = load_effective(input.as_deref(), agents.as_deref())?;
            match next_available_day(&effective, today) {
                Some(next) if next.is_today => println!("{} (today)", next.label),
                Some(next) if next.is_tomorrow => println!("{} (tomorrow)", next.label),
                Some(next) => println!("{}", next.label),
                None => println!("No delivery days available"),
            }
        }
        Commands::Summary {
            input,
            agents,
            abbrev,
        } => {
            let effective = load_effective(input.as_deref(), agents.as_deref())?;
            let days = available_days(&effective, abbrev);
            if days.is_empty() {
                println!("No delivery days available");
            } else {
                println!("{}", days.join(", "));
            }
        }
    }

    Ok(())
}

/// Load a store schedule (either on-disk shape) and intersect it with the
/// active agents' union when an agents file is given.
fn load_effective(input: Option<&str>, agents: Option<&str>) -> Result<WeekSchedule> {
    let store = load_schedule(input)?;
    let agents = match agents {
        Some(path) => load_agents(path)?,
        None => Vec::new(),
    };
    Ok(effective_schedule(&store, &agents))
}

fn load_schedule(path: Option<&str>) -> Result<WeekSchedule> {
    let raw = read_input(path)?;
    let doc: ScheduleDoc =
        serde_json::from_str(&raw).context("Schedule is not valid JSON in a known shape")?;
    doc.into_week().context("Invalid schedule")
}

fn load_agents(path: &str) -> Result<Vec<Agent>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {path}"))?;
    let agents: Vec<Agent> =
        serde_json::from_str(&raw).with_context(|| format!("Invalid agents file: {path}"))?;
    for agent in &agents {
        agent
            .schedule
            .validate()
            .with_context(|| format!("Invalid schedule for agent {}", agent.id))?;
    }
    Ok(agents)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {path}"))?;
        }
        None => {
            println!("{content}");
        }
    }
    Ok(())
}
