//! Inbox command handler.

use anyhow::{Context, Result};
use std::io::{IsTerminal, Read};
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

use super::notion_gateway;
use crate::cli::InboxArgs;
use crate::cli::config::Settings;
use crate::cli::remote::{inbox_endpoint, post_entry};
use crate::domain::{Entry, InboxResponse};
use crate::service::create_inbox_entry;

/// Splits a comma-separated tag list, trimming each tag and dropping empties.
pub fn parse_tags(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Builds an entry from the command arguments (pure function, no I/O).
///
/// `fallback_content` is used when `--content` is absent or empty.
///
/// # Errors
///
/// Returns an error if the title is empty or whitespace-only.
pub fn build_entry(args: &InboxArgs, fallback_content: Option<String>) -> Result<Entry> {
    let content = args
        .content
        .clone()
        .filter(|c| !c.is_empty())
        .or(fallback_content);

    Entry::builder(&args.title)
        .content(content)
        .entry_type(args.entry_type)
        .project(args.project)
        .status(args.status)
        .tags(parse_tags(args.tags.as_deref()))
        .source(args.source)
        .pinned(args.pinned)
        .also_add_to_daily_rollup(args.daily)
        .build()
        .context("failed to create entry")
}

/// Reads piped standard input, trimmed. Returns `None` for an interactive terminal.
fn read_piped_stdin() -> Option<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return None;
    }

    let mut buf = String::new();
    match stdin.read_to_string(&mut buf) {
        Ok(_) => Some(buf.trim().to_string()),
        Err(err) => {
            debug!(error = %err, "ignoring unreadable stdin");
            None
        }
    }
}

/// Prints the outcome and returns the matching exit code.
fn report(response: &InboxResponse) -> ExitCode {
    if response.ok {
        println!("Created: {}", response.url.as_deref().unwrap_or_default());
        ExitCode::SUCCESS
    } else {
        eprintln!(
            "Error: {}",
            response.error.as_deref().unwrap_or("unknown error")
        );
        ExitCode::FAILURE
    }
}

pub fn handle_inbox(args: &InboxArgs, config_path: Option<&Path>) -> Result<ExitCode> {
    let needs_stdin = args.content.as_deref().is_none_or(str::is_empty);
    let fallback = if needs_stdin { read_piped_stdin() } else { None };
    let entry = build_entry(args, fallback)?;

    let response = if args.direct {
        let settings = Settings::load(config_path)?;
        let gateway = notion_gateway(&settings)?;
        create_inbox_entry(&entry, &gateway)
    } else {
        post_entry(&entry, &inbox_endpoint(&args.api_url))
    };

    Ok(report(&response))
}
