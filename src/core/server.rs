//! Overseer server implementation and lifecycle management.
//!
//! The server owns the tool service and exposes a lightweight execution
//! helper. The actual wire-protocol transport (accepting tool-invocation
//! requests from an external agent runtime) is an unimplemented extension
//! point; once it exists it calls `execute_tool` on this server.

use std::sync::Arc;

use tracing::info;

use super::config::Config;
use super::context::ToolLogger;
use crate::domains::tools::{PlanProjectTool, ToolDefinition, ToolError, ToolService};

/// The main Overseer server.
///
/// Holds tool registrations and dispatches executions. Constructed with the
/// plan_project tool pre-registered.
pub struct OverseerServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for registering and executing tools.
    tool_service: ToolService,
}

impl OverseerServer {
    /// Create a new server with the given configuration.
    pub fn new(config: Config) -> Self {
        let mut tool_service = ToolService::new();
        tool_service.register_tool(Arc::new(PlanProjectTool));

        Self {
            config: Arc::new(config),
            tool_service,
        }
    }

    /// Create a new server with a caller-supplied tool logger.
    pub fn with_logger(config: Config, logger: Arc<dyn ToolLogger>) -> Self {
        let mut tool_service = ToolService::with_logger(logger);
        tool_service.register_tool(Arc::new(PlanProjectTool));

        Self {
            config: Arc::new(config),
            tool_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Register a new tool. Existing tools with the same name are replaced.
    pub fn register_tool(&mut self, tool: Arc<dyn ToolDefinition>) {
        self.tool_service.register_tool(tool);
    }

    /// List registered tools for introspection and documentation.
    pub fn list_tools(&self) -> Vec<Arc<dyn ToolDefinition>> {
        self.tool_service.list_tools()
    }

    /// Get all registered tool names in first-insertion order.
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_service.tool_names()
    }

    /// Execute a registered tool by name.
    ///
    /// In the full MCP integration this is triggered by the agent runtime
    /// invoking the tool over the protocol transport.
    pub async fn execute_tool(
        &self,
        name: &str,
        input: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        self.tool_service.execute_tool(name, input).await
    }

    /// Placeholder start routine.
    ///
    /// Only logs for now; replace with the MCP SDK transport wiring once
    /// the protocol layer is ready.
    // TODO: bind execute_tool to an MCP transport (stdio first).
    pub async fn start(&self) -> super::error::Result<()> {
        info!("{} starting...", self.config.server.name);
        info!("Transport layer not wired up yet; tools are callable in-process only");
        Ok(())
    }
}
