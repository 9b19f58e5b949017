//! Tool definitions module.
//!
//! Each tool is defined in its own file with:
//! - Typed input and output structs (serde + schemars)
//! - An `execute()` method holding the core logic, fully typed
//! - A `ToolDefinition` impl that erases the types at the registry boundary
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file (e.g., `my_tool.rs`)
//! 2. Implement the `ToolDefinition` trait
//! 3. Export it here
//! 4. Register it in `OverseerServer::new` (or at runtime via `register_tool`)

mod plan_project;

pub use plan_project::{
    PlanPhase, PlanProjectInput, PlanProjectOutput, PlanProjectTool, PlanStep,
};

use async_trait::async_trait;

use crate::core::context::ToolContext;
use super::error::ToolError;

/// Trait for tool definitions.
///
/// Concrete tools keep full static typing internally; this trait is the
/// type-erasure boundary where the registry and dispatcher operate on
/// `serde_json::Value` payloads. Each impl deserializes its input at the
/// edge, calls its typed logic, and serializes the result back out.
#[async_trait]
pub trait ToolDefinition: Send + Sync {
    /// Machine-readable name the server exposes. Acts as the registry key
    /// and must be non-empty.
    fn name(&self) -> &str;

    /// Short description that helps clients understand the tool's purpose.
    fn description(&self) -> &str;

    /// JSON schema document describing the expected input payload.
    ///
    /// Advisory metadata for discovery and documentation; the dispatcher
    /// does not validate payloads against it.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool against a type-erased payload.
    async fn invoke(
        &self,
        input: serde_json::Value,
        context: &ToolContext,
    ) -> Result<serde_json::Value, ToolError>;
}
