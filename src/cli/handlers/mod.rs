//! Command handlers for the CLI.

mod inbox;
mod serve;


use anyhow::{Context, Result};
use clap::CommandFactory;
use std::process::ExitCode;

use crate::cli::config::Settings;
use crate::cli::{Cli, CompletionsArgs};
use crate::notion::{HttpNotionApi, NotionGateway};

pub use inbox::{build_entry, handle_inbox, parse_tags};
pub use serve::handle_serve;

/// Builds a gateway talking to the Notion API described by `settings`.
pub(crate) fn notion_gateway(settings: &Settings) -> Result<NotionGateway<HttpNotionApi>> {
    let api = HttpNotionApi::new(&settings.notion_token, &settings.notion_api_url)
        .context("failed to create Notion client")?;
    Ok(NotionGateway::new(api, settings.gateway_config()))
}

pub fn handle_completions(args: &CompletionsArgs) -> Result<ExitCode> {
    let mut command = Cli::command();
    clap_complete::generate(args.shell, &mut command, "notionw", &mut std::io::stdout());
    Ok(ExitCode::SUCCESS)
}
