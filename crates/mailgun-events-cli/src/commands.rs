//! Handlers for each subcommand.
//!
//! Handlers write to a caller-supplied writer so they can be tested
//! without capturing stdout.

use anyhow::{Context, Result};
use mailgun_events_client::{ClientConfig, EventQuery, EventsClient, Filter};
use mailgun_events_core::{fixtures, Event};
use std::io::{Read, Write};
use std::path::Path;

use crate::cli::QueryArgs;

/// Print the accepted sample, verbatim or compacted.
pub fn cmd_fixture<W: Write>(out: &mut W, compact: bool) -> Result<()> {
    if compact {
        let value: serde_json::Value = serde_json::from_str(fixtures::ACCEPTED_JSON)?;
        writeln!(out, "{}", serde_json::to_string(&value)?)?;
    } else {
        write!(out, "{}", fixtures::ACCEPTED_JSON)?;
    }
    Ok(())
}

/// Decode one event and print a summary.
pub fn cmd_inspect<W: Write>(out: &mut W, path: &Path) -> Result<()> {
    let json = read_input(path)?;
    let event = Event::from_json(&json)
        .with_context(|| format!("Failed to decode event from {}", path.display()))?;

    writeln!(out, "kind:      {}", event.kind())?;
    writeln!(out, "id:        {}", event.id())?;
    writeln!(out, "time:      {}", format_time(&event))?;
    writeln!(out, "recipient: {}", event.recipient().unwrap_or("-"))?;
    if let Some(subject) = event.message().subject() {
        writeln!(out, "subject:   {subject}")?;
    }
    if let Event::Accepted(accepted) = &event {
        writeln!(out, "method:    {}", accepted.method)?;
        writeln!(out, "routes:    {}", accepted.routes.len())?;
        writeln!(out, "recipient listed:     {}", yes_no(accepted.recipient_is_listed()))?;
        writeln!(
            out,
            "from matches sender:  {}",
            yes_no(accepted.sender_matches_from_header())
        )?;
    }
    Ok(())
}

/// Poll the events API and print one line per event.
pub async fn cmd_query<W: Write>(
    out: &mut W,
    config_path: Option<&Path>,
    args: &QueryArgs,
) -> Result<()> {
    let config = ClientConfig::load(config_path).context("Failed to load configuration")?;
    let client = EventsClient::new(config)?;
    let query = build_query(client.new_query(), args);

    let events = client.query_pages(&query, args.pages).await?;
    for event in &events {
        writeln!(out, "{}", summary_line(event))?;
    }
    tracing::info!(count = events.len(), "query finished");
    Ok(())
}

/// Applies the command-line options to `query`.
pub fn build_query(mut query: EventQuery, args: &QueryArgs) -> EventQuery {
    if let Some(begin) = args.begin {
        query = query.begin(begin);
    }
    if let Some(end) = args.end {
        query = query.end(end);
    }
    if args.ascending {
        query = query.ascending(true);
    }
    if let Some(limit) = args.limit {
        query = query.limit(limit);
    }

    let single = [
        args.event.clone().map(Filter::Event),
        args.recipient.clone().map(Filter::Recipient),
        args.from.clone().map(Filter::From),
        args.subject.clone().map(Filter::Subject),
        args.severity.clone().map(Filter::Severity),
    ];
    query
        .filters(single.into_iter().flatten())
        .filters(args.tags.iter().cloned().map(Filter::Tags))
}

/// `time<TAB>kind<TAB>id<TAB>recipient`
pub fn summary_line(event: &Event) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        format_time(event),
        event.kind(),
        event.id(),
        event.recipient().unwrap_or("-")
    )
}

fn format_time(event: &Event) -> String {
    event
        .generic()
        .occurred_at()
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| "-".to_string())
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
