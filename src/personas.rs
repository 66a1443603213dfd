//! Persona presets and tool wiring
//!
//! Two personas share the clinic: the front desk answers questions about
//! services and staff, the scheduler checks availability and books. Each
//! can hand the conversation to the other mid-turn.

use reserva_core::{Persona, PersonaRegistry};
use reserva_domain::seed::DemoClinic;
use reserva_tools::{
    BookAppointmentTool, CheckAvailabilityTool, GetEmployeesForServiceTool, GetEmployeesTool,
    GetServicesForEmployeeTool, GetServicesTool, ToolRegistry, TransferTool,
};
use std::sync::Arc;

/// Name of the default persona
pub const RECEPTIONIST: &str = "receptionist";

/// Name of the scheduling persona
pub const SCHEDULER: &str = "scheduler";

const RECEPTIONIST_INSTRUCTIONS: &str = "You are the front-desk assistant for a dental clinic, \
helping clients find the right service and practitioner. The clinic has multiple employees, \
each performing different services with different durations and prices. You can use multiple \
tools. Always use service and employee names, never ids. It's important to only answer \
relevant questions about the clinic and the services provided, do not provide information \
about unrelated topics. When a client wants to check availability or book an appointment, \
transfer the conversation to the scheduling assistant. Current time is {current_time}.";

const SCHEDULER_INSTRUCTIONS: &str = "You are the scheduling assistant for a dental clinic, \
helping clients book appointments. Clients book an appointment with one employee and need to \
specify a service, a date, a time, a name and a phone number. Bookings can be made at \
multiples of 15 minutes, never anything else. Always use service and employee names, never \
ids. Ask for the name and phone number as the final info if not already provided. Ask for \
confirmation before performing the final booking. If the client only wants general \
information about the clinic, transfer the conversation back to the front desk. Current \
time is {current_time}.";

/// Register every clinic tool over the demo collaborators
#[must_use]
pub fn build_registry(clinic: &DemoClinic) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(Arc::new(GetServicesTool::new(clinic.catalog.clone())));
    registry.register(Arc::new(GetEmployeesTool::new(clinic.staff.clone())));
    registry.register(Arc::new(GetServicesForEmployeeTool::new(
        clinic.staff.clone(),
    )));
    registry.register(Arc::new(GetEmployeesForServiceTool::new(
        clinic.staff.clone(),
        clinic.catalog.clone(),
    )));
    registry.register(Arc::new(CheckAvailabilityTool::new(
        clinic.staff.clone(),
        clinic.catalog.clone(),
    )));
    registry.register(Arc::new(BookAppointmentTool::new(
        clinic.staff.clone(),
        clinic.catalog.clone(),
        clinic.ledger.clone(),
    )));
    registry.register(Arc::new(TransferTool::new(
        SCHEDULER,
        "Hand the conversation to the scheduling assistant when the client wants to check \
         availability or book an appointment.",
    )));
    registry.register(Arc::new(TransferTool::new(
        RECEPTIONIST,
        "Hand the conversation back to the front desk for general questions about the clinic.",
    )));

    registry
}

/// Build the clinic personas, optionally overriding the model
#[must_use]
pub fn build_personas(model: Option<&str>) -> PersonaRegistry {
    let mut receptionist = Persona::new(RECEPTIONIST, RECEPTIONIST_INSTRUCTIONS).with_tools(vec![
        "get_services".to_string(),
        "get_employees".to_string(),
        "get_services_for_employee".to_string(),
        "get_employees_for_service".to_string(),
        format!("transfer_to_{SCHEDULER}"),
    ]);

    let mut scheduler = Persona::new(SCHEDULER, SCHEDULER_INSTRUCTIONS).with_tools(vec![
        "get_services".to_string(),
        "get_employees".to_string(),
        "get_services_for_employee".to_string(),
        "get_employees_for_service".to_string(),
        "check_availability".to_string(),
        "book_appointment".to_string(),
        format!("transfer_to_{RECEPTIONIST}"),
    ]);

    if let Some(model) = model {
        receptionist = receptionist.with_model(model);
        scheduler = scheduler.with_model(model);
    }

    PersonaRegistry::new()
        .with_persona(receptionist)
        .with_persona(scheduler)
}
