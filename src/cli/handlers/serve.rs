//! Serve command handler.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use super::notion_gateway;
use crate::cli::ServeArgs;
use crate::cli::config::Settings;
use crate::notion::InboxGateway;
use crate::server::{self, GatewayFactory};

pub fn handle_serve(args: &ServeArgs, config_path: Option<&Path>) -> Result<ExitCode> {
    // Fail at startup rather than on the first request.
    let settings = Settings::load(config_path)?;

    let factory: GatewayFactory = Arc::new(move || -> Result<Box<dyn InboxGateway>> {
        Ok(Box::new(notion_gateway(&settings)?))
    });

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(server::serve(args.bind, factory))?;
    Ok(ExitCode::SUCCESS)
}
