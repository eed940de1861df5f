//! Command-line arguments.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// mgevents - inspect and poll Mailgun events
#[derive(Parser, Debug)]
#[command(name = "mgevents")]
#[command(version, about = "Inspect and poll Mailgun events", long_about = None)]
pub struct Args {
    /// Configuration file path (TOML)
    #[arg(short, long, global = true, env = "MGEVENTS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the canonical accepted event sample
    Fixture {
        /// Print on a single line
        #[arg(long)]
        compact: bool,
    },
    /// Decode one event from a file ("-" for stdin) and summarize it
    Inspect {
        /// Event JSON file
        path: PathBuf,
    },
    /// Poll the events API
    Query(QueryArgs),
}

#[derive(clap::Args, Debug, Default)]
pub struct QueryArgs {
    /// Only events at or after this RFC 3339 time
    #[arg(long, value_parser = parse_time)]
    pub begin: Option<DateTime<Utc>>,

    /// Only events before this RFC 3339 time
    #[arg(long, value_parser = parse_time)]
    pub end: Option<DateTime<Utc>>,

    /// Oldest events first
    #[arg(long)]
    pub ascending: bool,

    /// Events per page (1-300)
    #[arg(long)]
    pub limit: Option<u32>,

    /// Event kind expression, e.g. "failed OR rejected"
    #[arg(long)]
    pub event: Option<String>,

    /// Tag filter (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Recipient filter
    #[arg(long)]
    pub recipient: Option<String>,

    /// From filter
    #[arg(long)]
    pub from: Option<String>,

    /// Subject filter
    #[arg(long)]
    pub subject: Option<String>,

    /// Severity filter
    #[arg(long)]
    pub severity: Option<String>,

    /// Maximum number of pages to fetch
    #[arg(long, default_value_t = 1)]
    pub pages: usize,
}

fn parse_time(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("expected RFC 3339 time: {e}"))
}
