//! Pacer CLI Application
//!
//! Command-line interface for the lesson auto-pacing scheduler.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{PacerMcpServer, run_stdio_server};
use pacer_core::{SchedulerBuilder, YearFallback};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        json,
        utilization_ceiling,
        strict_year,
        command,
    } = Args::parse();

    let mut builder = SchedulerBuilder::new().with_database_path(database_file);
    if let Some(ceiling) = utilization_ceiling {
        builder = builder.with_utilization_ceiling(ceiling);
    }
    if strict_year {
        builder = builder.with_year_fallback(YearFallback::Reject);
    }
    let scheduler = builder
        .build()
        .await
        .context("Failed to initialize scheduler")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Pacer started");

    match command {
        Preview(args) => Cli::new(scheduler, renderer, json).preview(args).await,
        Commit(args) => Cli::new(scheduler, renderer, json).commit(args).await,
        Show(args) => Cli::new(scheduler, renderer, json).show(args).await,
        Clear(args) => Cli::new(scheduler, renderer, json).clear(args).await,
        School { command } => {
            Cli::new(scheduler, renderer, json)
                .handle_school_command(command)
                .await
        }
        Serve => {
            info!("Starting Pacer MCP server");
            run_stdio_server(PacerMcpServer::new(scheduler))
                .await
                .context("MCP server failed")
        }
    }
}
