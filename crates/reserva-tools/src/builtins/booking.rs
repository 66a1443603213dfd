//! Appointment booking tool

use crate::error::Result;
use crate::registry::{ContextVars, Tool, ToolOutcome};
use reserva_domain::{parse_slot, Booking, BookingLedger, ServiceCatalog, StaffDirectory};
use reserva_llm::ToolDefinition;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BookingArgs {
    employee: String,
    service: String,
    date: String,
    time: String,
    name: String,
    phone: String,
}

/// Book an appointment for a customer
///
/// Availability is re-checked immediately before saving, but the check and
/// the save are separate ledger operations: two concurrent sessions can
/// both pass the check for the same slot and both save.
pub struct BookAppointmentTool {
    staff: Arc<dyn StaffDirectory>,
    catalog: Arc<dyn ServiceCatalog>,
    ledger: Arc<dyn BookingLedger>,
    definition: ToolDefinition,
}

impl BookAppointmentTool {
    /// Create the tool over the given collaborators
    #[must_use]
    pub fn new(
        staff: Arc<dyn StaffDirectory>,
        catalog: Arc<dyn ServiceCatalog>,
        ledger: Arc<dyn BookingLedger>,
    ) -> Self {
        Self {
            staff,
            catalog,
            ledger,
            definition: ToolDefinition::new(
                "book_appointment",
                "Book an appointment with an employee for a specific service, date, and time. \
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
                            "description": "The date of the appointment, YYYY-MM-DD"
                        },
                        "time": {
                            "type": "string",
                            "description": "The time of the appointment, HH:MM"
                        },
                        "name": {
                            "type": "string",
                            "description": "The name of the customer"
                        },
                        "phone": {
                            "type": "string",
                            "description": "The phone number of the customer"
                        }
                    },
                    "required": ["employee", "service", "date", "time", "name", "phone"]
                }),
            ),
        }
    }
}

#[async_trait::async_trait]
impl Tool for BookAppointmentTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, input: serde_json::Value, _ctx: &ContextVars) -> Result<ToolOutcome> {
        debug!(args = %input, "book_appointment called");
        let args: BookingArgs = match serde_json::from_value(input) {
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
        if args.name.trim().is_empty() {
            return Ok(ToolOutcome::error("invalid name argument"));
        }
        if args.phone.trim().is_empty() {
            return Ok(ToolOutcome::error("invalid phone argument"));
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

        match self
            .staff
            .check_availability(employee.id, service.id, &args.date, &args.time)
        {
            Ok(true) => {}
            Ok(false) => return Ok(ToolOutcome::error("employee is not available")),
            Err(e) => {
                return Ok(ToolOutcome::error(format!(
                    "failed to check availability: {e}"
                )))
            }
        }

        let starts_at = match parse_slot(&args.date, &args.time) {
            Ok(starts_at) => starts_at,
            Err(e) => return Ok(ToolOutcome::error(format!("invalid date and time: {e}"))),
        };

        info!(
            employee_id = employee.id,
            service_id = service.id,
            starts_at = %starts_at,
            customer = %args.name,
            "Booking appointment"
        );

        match self.ledger.save(Booking {
            id: 0,
            employee_id: employee.id,
            service_id: service.id,
            starts_at,
            customer_name: args.name.clone(),
            customer_phone: args.phone.clone(),
        }) {
            Ok(_) => Ok(ToolOutcome::ok("\"ok\"")),
            Err(e) => Ok(ToolOutcome::error(format!("failed to save booking: {e}"))),
        }
    }
}
