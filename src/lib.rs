//! notion-inbox - file quick captures into a Notion inbox database

pub mod blocks;
pub mod cli;
pub mod domain;
pub mod logging;
pub mod notion;
pub mod server;
pub mod service;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use cli::{
    Cli, Command,
    handlers::{handle_completions, handle_inbox, handle_serve},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    // The server logs requests at info unless told to be quieter via RUST_LOG.
    let verbosity = match cli.command {
        Command::Serve(_) => cli.verbose.max(1),
        _ => cli.verbose,
    };
    logging::init(logging::level_for_verbosity(verbosity));

    let config_path = cli.config.as_deref();
    match &cli.command {
        Command::Inbox(args) => handle_inbox(args, config_path),
        Command::Serve(args) => handle_serve(args, config_path),
        Command::Completions(args) => handle_completions(args),
    }
}
