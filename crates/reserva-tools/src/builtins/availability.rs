//! Availability check tool

use crate::error::Result;
use crate::registry::{ContextVars, Tool, ToolOutcome};
use reserva_domain::{ServiceCatalog, StaffDirectory};
use reserva_llm::ToolDefinition;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AvailabilityArgs {
    employee: String,
    service: String,
    date: String,
    time: String,
}

/// Check whether an employee is free for a service at a given slot
pub struct CheckAvailabilityTool {
    staff: Arc<dyn StaffDirectory>,
    catalog: Arc<dyn ServiceCatalog>,
    definition: ToolDefinition,
}

impl CheckAvailabilityTool {
    /// Create the tool over the given directory and catalog
    #[must_use]
    pub fn new(staff: Arc<dyn StaffDirectory>, catalog: Arc<dyn ServiceCatalog>) -> Self {
        Self {
            staff,
            catalog,
            definition: ToolDefinition::new(
                "check_availability",
                "Check if an employee is available for a booking at a given time and date. \
                 All fields are required; the date format is YYYY-MM-DD and the time format is HH:MM.",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "employee": {
                            "type": "string",
                            "description": "The name of the employee"
                        },
                        "service": {
                            "type": "string",
                            "description": "The name of the service"
                        },
                        "date": {
                            "type": "string",
                            "description": "The date to check, YYYY-MM-DD"
                        },
                        "time": {
                            "type": "string",
                            "description": "The time to check, HH:MM"
                        }
                    },
                    "required": ["employee", "service", "date", "time"]
                }),
            ),
        }
    }
}

#[async_trait::async_trait]
impl Tool for CheckAvailabilityTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, input: serde_json::Value, _ctx: &ContextVars) -> Result<ToolOutcome> {
        debug!(args = %input, "check_availability called");
        let args: AvailabilityArgs = match serde_json::from_value(input) {
            Ok(args) => args,
            Err(e) => return Ok(ToolOutcome::error(format!("invalid arguments: {e}"))),
        };
        if args.employee.trim().is_empty() {
            return Ok(ToolOutcome::error("invalid employee argument"));
        }
        if args.service.trim().is_empty() {
            return Ok(ToolOutcome::error("invalid service argument"));
        }
        if args.date.trim().is_empty() {
            return Ok(ToolOutcome::error("invalid date argument"));
        }
        if args.time.trim().is_empty() {
            return Ok(ToolOutcome::error("invalid time argument"));
        }

        let employee = match self.staff.by_name(&args.employee) {
            Ok(Some(employee)) => employee,
            Ok(None) => return Ok(ToolOutcome::error("employee not found")),
            Err(e) => return Ok(ToolOutcome::error(format!("employee not found: {e}"))),
        };
        let service = match self.catalog.by_name(&args.service) {
            Ok(Some(service)) => service,
            Ok(None) => return Ok(ToolOutcome::error("service not found")),
            Err(e) => return Ok(ToolOutcome::error(format!("service not found: {e}"))),
        };

        if !employee.service_ids.contains(&service.id) {
            return Ok(ToolOutcome::error("employee does not offer the service"));
        }

        debug!(
            employee_id = employee.id,
            service_id = service.id,
            date = %args.date,
            time = %args.time,
            "Checking availability"
        );

        match self
            .staff
            .check_availability(employee.id, service.id, &args.date, &args.time)
        {
            Ok(available) => Ok(ToolOutcome::ok(available.to_string())),
            Err(e) => Ok(ToolOutcome::error(format!(
                "failed to check availability: {e}"
            ))),
        }
    }
}
