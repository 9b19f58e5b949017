//! Tool service - dispatches tool invocations.
//!
//! The service resolves a tool name against the registry, builds a fresh
//! per-call context, and invokes the handler. Handler results and failures
//! pass through to the caller unchanged; there is no retry, timeout, or
//! cancellation here.

use std::sync::Arc;

use super::definitions::ToolDefinition;
use super::error::ToolError;
use super::registry::ToolRegistry;
use crate::core::context::{ToolContext, ToolLogger, TracingToolLogger};

/// Service for registering and executing tools.
///
/// Owns the registry and the shared logger handle that every dispatched
/// context borrows. Registration is expected during setup; dispatch is
/// read-only with respect to registry state.
pub struct ToolService {
    /// Registry of available tools.
    registry: ToolRegistry,

    /// Logger handle shared across all dispatched contexts.
    logger: Arc<dyn ToolLogger>,
}

impl ToolService {
    /// Create a new service with the default tracing-backed logger.
    pub fn new() -> Self {
        Self::with_logger(Arc::new(TracingToolLogger))
    }

    /// Create a new service with a caller-supplied logger.
    pub fn with_logger(logger: Arc<dyn ToolLogger>) -> Self {
        Self {
            registry: ToolRegistry::new(),
            logger,
        }
    }

    /// Register a tool. Existing tools with the same name will be replaced.
    pub fn register_tool(&mut self, tool: Arc<dyn ToolDefinition>) {
        self.registry.register(tool);
    }

    /// List registered tools for introspection and documentation.
    pub fn list_tools(&self) -> Vec<Arc<dyn ToolDefinition>> {
        self.registry.list()
    }

    /// Get all registered tool names in first-insertion order.
    pub fn tool_names(&self) -> Vec<String> {
        self.registry.tool_names()
    }

    /// Execute a registered tool by name.
    ///
    /// Looks up the tool, builds a fresh `ToolContext` (new request id,
    /// current timestamp, shared logger), and awaits the handler. Fails with
    /// `ToolError::NotFound` for unregistered names; any handler failure
    /// propagates unchanged.
    pub async fn execute_tool(
        &self,
        name: &str,
        input: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let tool = self
            .registry
            .get(name)
            .ok_or_else(|| ToolError::not_found(name))?;

        let context = ToolContext::new(self.logger.clone());

        self.logger.info(&format!(
            "Executing tool: {} (requestId: {})",
            name, context.request_id
        ));

        tool.invoke(input, &context).await
    }
}

impl Default for ToolService {
    fn default() -> Self {
        Self::new()
    }
}
