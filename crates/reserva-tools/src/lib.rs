//! Reserva tools - tool registry and booking tools
//!
//! This crate provides the capabilities exposed to the language model:
//! - `Tool` trait and `ToolRegistry` (name-based dispatch)
//! - `ToolOutcome`: result-or-error structure, optionally carrying a
//!   persona handoff and context-variable updates
//! - Builtin booking tools over the domain collaborators

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod builtins;
pub mod error;
pub mod registry;

pub use builtins::{
    BookAppointmentTool, CheckAvailabilityTool, GetEmployeesForServiceTool, GetEmployeesTool,
    GetServicesForEmployeeTool, GetServicesTool, TransferTool,
};
pub use error::{Error, Result};
pub use registry::{ContextVars, Tool, ToolOutcome, ToolRegistry};
