//! Reserva core - turn orchestration
//!
//! This crate drives one user turn to completion: it submits the
//! conversation to the completion client, executes the tool calls the model
//! requests, feeds results back, and decides when the turn is done. It owns
//! the persona concept (named instructions + tool set + turn memory) and
//! persona handoff between tool executions.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod memory;
pub mod orchestrator;
pub mod persona;

pub use error::{Error, Result};
pub use memory::{MemoryEntry, TurnMemory};
pub use orchestrator::{Orchestrator, OrchestratorConfig, TurnOutcome};
pub use persona::{Persona, PersonaRegistry};
