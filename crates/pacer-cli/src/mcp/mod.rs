//! MCP server implementation for Pacer
//!
//! Exposes schedule preview, commit and lookup as Model Context Protocol
//! tools over stdio. Tool inputs are the core parameter types, whose JSON
//! schemas come from the `schema` feature of `pacer-core`.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use pacer_core::{
    CommitResult, ExistingSchedule, SchedulePreview, Scheduler,
    params::{CommitSchedule, PreviewSchedule, ScopeParams},
};
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use tokio::signal::unix::{SignalKind, signal};

pub mod errors;

use errors::to_mcp_error;

pub type McpResult = Result<CallToolResult, McpError>;

/// MCP server for Pacer
#[derive(Clone)]
pub struct PacerMcpServer {
    scheduler: Arc<Scheduler>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl PacerMcpServer {
    pub fn new(scheduler: Scheduler) -> Self {
        Self {
            scheduler: Arc::new(scheduler),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "preview_schedule",
        description = "Compute the lesson schedule for a class, section, subject and academic year without saving it. Provide the scope ids, start_date (YYYY-MM-DD) and the syllabus as an ordered array of units, each with ordered chapters of ordered topics. Returns the day-by-day lessons, per-unit timelines, and whether every task fitted. When slots are plentiful, chapter and unit revision sessions are added."
    )]
    async fn preview_schedule(
        &self,
        Parameters(params): Parameters<PreviewSchedule>,
    ) -> McpResult {
        debug!("preview_schedule: {} from {}", params.scope, params.start_date);

        let result = self
            .scheduler
            .preview(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to preview schedule", &e))?;

        let preview = SchedulePreview {
            scope: params.scope,
            result,
        };
        Ok(CallToolResult::success(vec![Content::text(
            preview.to_string(),
        )]))
    }

    #[tool(
        name = "commit_schedule",
        description = "Compute the lesson schedule exactly like preview_schedule and save it as the lesson plan of the scope, replacing any previously committed plan atomically. Requires teacher_id of a teacher registered in the school. Fails when the timetable and calendar leave no teaching slot. An empty syllabus saves nothing and leaves the existing plan in place."
    )]
    async fn commit_schedule(&self, Parameters(params): Parameters<CommitSchedule>) -> McpResult {
        debug!(
            "commit_schedule: {} for teacher {}",
            params.schedule.scope, params.teacher_id
        );

        let outcome = self
            .scheduler
            .commit(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to commit schedule", &e))?;

        let result = CommitResult {
            scope: params.schedule.scope,
            outcome,
        };
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    #[tool(
        name = "show_schedule",
        description = "Show the committed lesson plan of a class, section, subject and academic year, with per-unit timelines. Reports when nothing has been committed yet."
    )]
    async fn show_schedule(&self, Parameters(params): Parameters<ScopeParams>) -> McpResult {
        debug!("show_schedule: {}", params.scope);

        let result = self
            .scheduler
            .load_existing(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to load schedule", &e))?;

        let existing = ExistingSchedule {
            scope: params.scope,
            result,
        };
        Ok(CallToolResult::success(vec![Content::text(
            existing.to_string(),
        )]))
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for PacerMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "pacer".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Pacer spreads a syllabus over the teaching slots of a class.

## Core Concepts
- **Scope**: school_id, class_id, section_id, subject_id and academic_year_id together identify one schedule
- **Syllabus**: ordered units, each with ordered chapters of ordered topics
- **Slots**: one per published timetable period on every school day up to the end of the academic year; holidays and events remove whole days

## Workflow
1. Call `preview_schedule` to see how the syllabus fits
2. If the result looks right, call `commit_schedule` with the same arguments plus teacher_id
3. Use `show_schedule` later to read the committed plan

Committing again replaces the scope's plan completely."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: PacerMcpServer) -> Result<()> {
    use rmcp::{ServiceExt, transport::stdio};

    info!("Starting Pacer MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pacer_core::SchedulerBuilder;
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_server_exposes_three_tools() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let scheduler = SchedulerBuilder::new()
            .with_database_path(Some(temp_dir.path().join("test.db")))
            .build()
            .await
            .expect("Failed to create scheduler");

        let server = PacerMcpServer::new(scheduler);
        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();

        assert_eq!(
            names,
            vec!["commit_schedule", "preview_schedule", "show_schedule"]
        );
    }
}
