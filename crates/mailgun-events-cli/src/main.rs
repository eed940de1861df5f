//! mgevents entry point.

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so command output stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,mailgun_events=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Fixture { compact } => commands::cmd_fixture(&mut out, compact),
        Command::Inspect { path } => commands::cmd_inspect(&mut out, &path),
        Command::Query(query) => {
            commands::cmd_query(&mut out, args.config.as_deref(), &query).await
        }
    }
}
