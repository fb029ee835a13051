//! Serve command: MCP server on stdio.

use anyhow::Context;
use clap::Args;
use clarity_meter_core::Config;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Run the MCP server until the client disconnects.
///
/// Logs go to stderr (and the optional log file); stdout carries the protocol.
#[instrument(name = "cmd_serve", skip_all, fields(max_input_bytes = ?max_input_bytes))]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input_bytes: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    let metric = config.default_metric();
    info!(metric = %metric, "starting MCP server on stdio");

    let service = ProjectServer::new()
        .with_max_input_bytes(max_input_bytes)
        .with_default_metric(metric)
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;

    service
        .waiting()
        .await
        .context("MCP server terminated unexpectedly")?;

    info!("MCP server stopped");
    Ok(())
}
