use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use hours_engine::status::DEFAULT_CLOSING_SOON_MINUTES;
use hours_engine::{
    day_name, find_next_open_time, format_minutes_as_time, get_open_status_with_options,
    reference_from_utc, resolve_reference, week_schedule, DayHours, StatusOptions, WeekStartDay,
};
use log::debug;

/// Evaluate free-text weekly opening hours.
///
/// Hours are read as a JSON array of strings or as plain text with one
/// `"<Day>: <hours>"` entry per line.
#[derive(Parser, Debug)]
#[command(name = "hours", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log parsing and evaluation decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print whether the place is open, as JSON
    Status {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        reference: ReferenceArgs,
        /// Minutes before close that count as "closing soon"
        #[arg(long, default_value_t = DEFAULT_CLOSING_SOON_MINUTES)]
        closing_soon: u32,
        /// Print a one-line summary instead of JSON
        #[arg(long)]
        summary: bool,
    },
    /// Print when the place next opens
    Next {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        reference: ReferenceArgs,
    },
    /// Print the full week, one day per line
    Week {
        #[command(flatten)]
        input: InputArgs,
        /// Day that leads the listing
        #[arg(long, value_enum, default_value_t = WeekStart::Monday)]
        week_start: WeekStart,
    },
    /// Format minutes since midnight as a 12-hour time
    Format { minutes: u32 },
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Hours file; `-` or omitted reads stdin
    file: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ReferenceArgs {
    /// Reference instant: RFC 3339, or a local `YYYY-MM-DDTHH:MM[:SS]` (default: now)
    #[arg(long)]
    at: Option<String>,
    /// IANA timezone of the place (default: system local time)
    #[arg(short = 'z', long)]
    timezone: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum WeekStart {
    Monday,
    Sunday,
}

impl From<WeekStart> for WeekStartDay {
    fn from(value: WeekStart) -> Self {
        match value {
            WeekStart::Monday => WeekStartDay::Monday,
            WeekStart::Sunday => WeekStartDay::Sunday,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Command::Status {
            input,
            reference,
            closing_soon,
            summary,
        } => {
            let week = read_week(input.file.as_deref())?;
            let at = reference_instant(&reference)?;
            let options = StatusOptions {
                closing_soon_minutes: closing_soon,
            };
            let status = get_open_status_with_options(&week, at, &options);
            if summary {
                println!("{}", status.summary());
            } else {
                println!("{}", serde_json::to_string_pretty(&status)?);
            }
        }
        Command::Next { input, reference } => {
            let week = read_week(input.file.as_deref())?;
            let at = reference_instant(&reference)?;
            match find_next_open_time(&week, at) {
                Some(label) => println!("{label}"),
                None => println!("none"),
            }
        }
        Command::Week { input, week_start } => {
            let week = read_week(input.file.as_deref())?;
            for (day, hours) in week_schedule(&week, week_start.into()) {
                println!("{}: {}", day_name(day), describe_day(hours.as_ref()));
            }
        }
        Command::Format { minutes } => println!("{}", format_minutes_as_time(minutes)),
    }

    Ok(())
}

/// Render one day's hours for the week listing.
fn describe_day(hours: Option<&DayHours>) -> String {
    match hours {
        Some(day) if day.has_ranges() => day
            .shifts()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        Some(day) if !day.raw_text.trim().is_empty() => day.raw_text.trim().to_string(),
        _ => "Unknown".to_string(),
    }
}

fn read_week(file: Option<&Path>) -> Result<Vec<String>> {
    let text = match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    let week = parse_week(&text)?;
    debug!("read {} hours entries", week.len());
    Ok(week)
}

/// A JSON array of strings, or one entry per non-blank line.
fn parse_week(text: &str) -> Result<Vec<String>> {
    let trimmed = text.trim_start();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).context("expected a JSON array of strings");
    }
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn reference_instant(args: &ReferenceArgs) -> Result<NaiveDateTime> {
    let at = match (args.at.as_deref(), args.timezone.as_deref()) {
        (Some(at), Some(tz)) => resolve_reference(at, tz)?,
        (None, Some(tz)) => reference_from_utc(Utc::now(), tz)?,
        (Some(at), None) => match DateTime::parse_from_rfc3339(at.trim()) {
            Ok(dt) => dt.with_timezone(&Local).naive_local(),
            // zone name is irrelevant for a naive value; it is taken as local
            Err(_) => resolve_reference(at, "UTC")?,
        },
        (None, None) => Local::now().naive_local(),
    };
    debug!("reference instant {at}");
    Ok(at)
}
