//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod remote;

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::{EntryType, Project, Source, Status};

/// notionw - file inbox entries into Notion
#[derive(Parser, Debug)]
#[command(name = "notionw", version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/notion-inbox/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an inbox entry
    Inbox(InboxArgs),

    /// Run the inbox HTTP API
    Serve(ServeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `inbox` command
#[derive(Parser, Debug)]
pub struct InboxArgs {
    /// Entry title
    #[arg(long)]
    pub title: String,

    /// Entry content (supports Markdown); read from piped stdin when omitted
    #[arg(long)]
    pub content: Option<String>,

    /// Entry type
    #[arg(
        long = "type",
        default_value_t = EntryType::default(),
        value_parser = PossibleValuesParser::new(EntryType::NAMES.iter().copied())
            .try_map(|s| s.parse::<EntryType>()),
    )]
    pub entry_type: EntryType,

    /// Project
    #[arg(
        long,
        default_value_t = Project::default(),
        value_parser = PossibleValuesParser::new(Project::NAMES.iter().copied())
            .try_map(|s| s.parse::<Project>()),
    )]
    pub project: Project,

    /// Status
    #[arg(
        long,
        default_value_t = Status::default(),
        value_parser = PossibleValuesParser::new(Status::NAMES.iter().copied())
            .try_map(|s| s.parse::<Status>()),
    )]
    pub status: Status,

    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,

    /// Source
    #[arg(
        long,
        default_value_t = Source::default(),
        value_parser = PossibleValuesParser::new(Source::NAMES.iter().copied())
            .try_map(|s| s.parse::<Source>()),
    )]
    pub source: Source,

    /// Pin the entry
    #[arg(long)]
    pub pinned: bool,

    /// Also add to daily rollup
    #[arg(long)]
    pub daily: bool,

    /// Write directly to Notion (bypass API)
    #[arg(long)]
    pub direct: bool,

    /// API base URL
    #[arg(long, default_value = remote::DEFAULT_API_URL)]
    pub api_url: String,
}

/// Arguments for the `serve` command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = crate::server::DEFAULT_BIND)]
    pub bind: std::net::SocketAddr,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
