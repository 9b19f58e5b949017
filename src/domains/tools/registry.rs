//! Tool Registry - central registration and lookup for all tools.
//!
//! The registry owns the current set of available tools, keyed by name.
//! Registration is insert-or-replace (last write wins) and listing preserves
//! first-insertion order. Mutation is expected only during setup, before
//! concurrent dispatches begin; see the service module for dispatch.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use super::definitions::ToolDefinition;

/// Tool registry - the owning store mapping tool names to definitions.
///
/// Entries are type-erased `ToolDefinition` trait objects; callers receive
/// shared references for read-only introspection, never mutable access.
#[derive(Default)]
pub struct ToolRegistry {
    /// Lookup table keyed by tool name.
    tools: HashMap<String, Arc<dyn ToolDefinition>>,

    /// Names in first-insertion order. Replacement keeps the original slot.
    order: Vec<String>,
}

impl ToolRegistry {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. An existing tool with the same name is replaced.
    ///
    /// Always succeeds; the tool's name must be non-empty and is used as
    /// the registry key.
    pub fn register(&mut self, tool: Arc<dyn ToolDefinition>) {
        let name = tool.name().to_string();
        info!("Registering tool: {}", name);

        if self.tools.insert(name.clone(), tool).is_none() {
            self.order.push(name);
        }
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn ToolDefinition>> {
        self.tools.get(name).cloned()
    }

    /// List registered tools in first-insertion order.
    ///
    /// Returns a snapshot; registrations after the call do not affect an
    /// already-returned sequence.
    pub fn list(&self) -> Vec<Arc<dyn ToolDefinition>> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name).cloned())
            .collect()
    }

    /// Get all registered tool names in first-insertion order.
    pub fn tool_names(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::ToolContext;
    use crate::domains::tools::error::ToolError;
    use async_trait::async_trait;

    struct StubTool {
        name: &'static str,
        reply: &'static str,
    }

    #[async_trait]
    impl ToolDefinition for StubTool {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "stub tool for registry tests"
        }

        fn input_schema(&self) -> serde_json::Value {
            serde_json::json!({ "type": "object" })
        }

        async fn invoke(
            &self,
            _input: serde_json::Value,
            _context: &ToolContext,
        ) -> Result<serde_json::Value, ToolError> {
            Ok(serde_json::json!({ "reply": self.reply }))
        }
    }

    fn stub(name: &'static str, reply: &'static str) -> Arc<dyn ToolDefinition> {
        Arc::new(StubTool { name, reply })
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = ToolRegistry::new();
        registry.register(stub("alpha", "a"));

        assert!(registry.get("alpha").is_some());
        assert!(registry.get("missing").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut registry = ToolRegistry::new();
        registry.register(stub("alpha", "a"));
        registry.register(stub("beta", "b"));

        let names: Vec<_> = registry.list().iter().map(|t| t.name().to_string()).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_list_is_idempotent() {
        let mut registry = ToolRegistry::new();
        registry.register(stub("alpha", "a"));
        registry.register(stub("beta", "b"));

        let first: Vec<_> = registry.list().iter().map(|t| t.name().to_string()).collect();
        let second: Vec<_> = registry.list().iter().map(|t| t.name().to_string()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_list_snapshot_unaffected_by_later_register() {
        let mut registry = ToolRegistry::new();
        registry.register(stub("alpha", "a"));

        let snapshot = registry.list();
        registry.register(stub("beta", "b"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(registry.list().len(), 2);
    }

    #[tokio::test]
    async fn test_reregistration_replaces_handler() {
        let mut registry = ToolRegistry::new();
        registry.register(stub("alpha", "old"));
        registry.register(stub("alpha", "new"));

        assert_eq!(registry.len(), 1);

        let tool = registry.get("alpha").unwrap();
        let ctx = ToolContext::new(std::sync::Arc::new(
            crate::core::context::TracingToolLogger,
        ));
        let result = tool.invoke(serde_json::json!({}), &ctx).await.unwrap();
        assert_eq!(result["reply"], "new");
    }

    #[test]
    fn test_replacement_keeps_insertion_slot() {
        let mut registry = ToolRegistry::new();
        registry.register(stub("alpha", "a"));
        registry.register(stub("beta", "b"));
        registry.register(stub("alpha", "a2"));

        assert_eq!(registry.tool_names(), vec!["alpha", "beta"]);
    }
}
