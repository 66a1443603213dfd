//! Builtin booking tools
//!
//! Each tool decodes a typed argument struct from the raw JSON, validates
//! required string fields before touching the domain collaborators, and
//! reports failures as error outcomes so the model can correct itself.

mod availability;
mod booking;
mod services;
mod staff;
mod transfer;

pub use availability::CheckAvailabilityTool;
pub use booking::BookAppointmentTool;
pub use services::GetServicesTool;
pub use staff::{GetEmployeesForServiceTool, GetEmployeesTool, GetServicesForEmployeeTool};
pub use transfer::TransferTool;

use crate::registry::ToolOutcome;
use reserva_domain::Service;
use serde::Serialize;
use tracing::warn;

/// Service fields exposed to the model (names, never ids)
#[derive(Debug, Serialize)]
pub(crate) struct ServiceInfo {
    pub name: String,
    pub duration_minutes: u32,
    pub price: f64,
}

impl From<&Service> for ServiceInfo {
    fn from(service: &Service) -> Self {
        Self {
            name: service.name.clone(),
            duration_minutes: service.duration_minutes,
            price: service.price,
        }
    }
}

/// Serialize a payload for the model, falling back to an error outcome
pub(crate) fn encode<T: Serialize>(value: &T, context: &str) -> ToolOutcome {
    match serde_json::to_string(value) {
        Ok(json) => ToolOutcome::ok(json),
        Err(e) => {
            warn!(error = %e, context, "Failed to encode tool result");
            ToolOutcome::error(context)
        }
    }
}
