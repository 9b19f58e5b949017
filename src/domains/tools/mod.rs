//! Tools domain module.
//!
//! This module handles all tool-related functionality for the Overseer
//! server. Tools are named, schema-described units of work that can be
//! invoked by name with a fresh per-call context.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//!   plus the `ToolDefinition` trait they all implement
//! - `registry.rs` - Insertion-ordered, name-keyed tool store
//! - `service.rs` - Dispatcher: lookup, context construction, invocation
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Implement the `ToolDefinition` trait
//! 3. Export it in `definitions/mod.rs`
//! 4. Register it in `OverseerServer::new` (or at runtime via `register_tool`)

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::{PlanProjectTool, ToolDefinition};
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use service::ToolService;
