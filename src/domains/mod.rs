//! Domain modules containing business logic.
//!
//! Each domain represents a bounded context within the Overseer server.
//! Currently there is a single domain: tools. Resources and prompts are
//! natural future domains once the transport is wired up.

pub mod tools;
