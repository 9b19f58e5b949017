//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the Overseer
//! server: error handling, configuration, the per-invocation tool context,
//! and server lifecycle management.

pub mod config;
pub mod context;
pub mod error;
pub mod server;

pub use config::Config;
pub use context::{ToolContext, ToolLogger, TracingToolLogger};
pub use error::{Error, Result};
pub use server::OverseerServer;
