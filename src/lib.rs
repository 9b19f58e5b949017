//! Overseer MCP Server Library
//!
//! This crate provides the scaffold for an Overseer MCP (Model Context
//! Protocol) server: a registry of named, schema-described tools and a
//! dispatcher that invokes them by name with a fresh per-call context.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the per-invocation tool context, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: Tools that can be executed by name
//!
//! The wire-protocol transport is not implemented yet; `execute_tool` is the
//! surface a future transport binding calls into.
//!
//! # Example
//!
//! ```rust,no_run
//! use overseer_mcp_server::core::{Config, OverseerServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let server = OverseerServer::new(Config::from_env());
//!     server.start().await?;
//!
//!     let plan = server
//!         .execute_tool("plan_project", serde_json::json!({ "goal": "Ship it" }))
//!         .await?;
//!     println!("{plan}");
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, OverseerServer, Result, ToolContext};
pub use domains::tools::{ToolDefinition, ToolError, ToolRegistry, ToolService};
