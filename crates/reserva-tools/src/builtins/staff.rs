//! Staff directory tools

use super::{encode, ServiceInfo};
use crate::error::Result;
use crate::registry::{ContextVars, Tool, ToolOutcome};
use reserva_domain::{ServiceCatalog, StaffDirectory};
use reserva_llm::ToolDefinition;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Employee fields exposed to the model
#[derive(Debug, Serialize)]
struct EmployeeInfo {
    name: String,
    description: String,
    services: Vec<String>,
}

/// List every employee and the services they offer
pub struct GetEmployeesTool {
    staff: Arc<dyn StaffDirectory>,
    definition: ToolDefinition,
}

impl GetEmployeesTool {
    /// Create the tool over the given directory
    #[must_use]
    pub fn new(staff: Arc<dyn StaffDirectory>) -> Self {
        Self {
            staff,
            definition: ToolDefinition::new(
                "get_employees",
                "Get the list of employees and the services they offer.",
                serde_json::json!({
                    "type": "object",
                    "properties": {},
                    "required": []
                }),
            ),
        }
    }
}

#[async_trait::async_trait]
impl Tool for GetEmployeesTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, _input: serde_json::Value, _ctx: &ContextVars) -> Result<ToolOutcome> {
        debug!("get_employees called");
        let employees = match self.staff.all() {
            Ok(employees) => employees,
            Err(e) => return Ok(ToolOutcome::error(format!("failed to get employees: {e}"))),
        };

        let mut infos = Vec::with_capacity(employees.len());
        for employee in &employees {
            let services = match self.staff.services_for(employee.id) {
                Ok(services) => services.into_iter().map(|s| s.name).collect(),
                Err(e) => return Ok(ToolOutcome::error(format!("failed to get employees: {e}"))),
            };
            infos.push(EmployeeInfo {
                name: employee.name.clone(),
                description: employee.description.clone(),
                services,
            });
        }

        Ok(encode(&infos, "failed to get employees"))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EmployeeArgs {
    employee: String,
}

/// List the services offered by one employee
pub struct GetServicesForEmployeeTool {
    staff: Arc<dyn StaffDirectory>,
    definition: ToolDefinition,
}

impl GetServicesForEmployeeTool {
    /// Create the tool over the given directory
    #[must_use]
    pub fn new(staff: Arc<dyn StaffDirectory>) -> Self {
        Self {
            staff,
            definition: ToolDefinition::new(
                "get_services_for_employee",
                "Get the list of services offered by a specific employee.",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "employee": {
                            "type": "string",
                            "description": "The name of the employee"
                        }
                    },
                    "required": ["employee"]
                }),
            ),
        }
    }
}

#[async_trait::async_trait]
impl Tool for GetServicesForEmployeeTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, input: serde_json::Value, _ctx: &ContextVars) -> Result<ToolOutcome> {
        debug!(args = %input, "get_services_for_employee called");
        let args: EmployeeArgs = match serde_json::from_value(input) {
            Ok(args) => args,
            Err(e) => return Ok(ToolOutcome::error(format!("invalid arguments: {e}"))),
        };
        if args.employee.trim().is_empty() {
            return Ok(ToolOutcome::error("invalid employee argument"));
        }

        let employee = match self.staff.by_name(&args.employee) {
            Ok(Some(employee)) => employee,
            Ok(None) => return Ok(ToolOutcome::error("employee not found")),
            Err(e) => return Ok(ToolOutcome::error(format!("employee not found: {e}"))),
        };

        match self.staff.services_for(employee.id) {
            Ok(services) => {
                let infos: Vec<ServiceInfo> = services.iter().map(ServiceInfo::from).collect();
                Ok(encode(&infos, "failed to get services for employee"))
            }
            Err(e) => Ok(ToolOutcome::error(format!(
                "failed to get services for employee: {e}"
            ))),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ServiceArgs {
    service: String,
}

/// List the employees who perform one service
pub struct GetEmployeesForServiceTool {
    staff: Arc<dyn StaffDirectory>,
    catalog: Arc<dyn ServiceCatalog>,
    definition: ToolDefinition,
}

impl GetEmployeesForServiceTool {
    /// Create the tool over the given directory and catalog
    #[must_use]
    pub fn new(staff: Arc<dyn StaffDirectory>, catalog: Arc<dyn ServiceCatalog>) -> Self {
        Self {
            staff,
            catalog,
            definition: ToolDefinition::new(
                "get_employees_for_service",
                "Get the list of employees who perform a specific service.",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "service": {
                            "type": "string",
                            "description": "The name of the service"
                        }
                    },
                    "required": ["service"]
                }),
            ),
        }
    }
}

#[async_trait::async_trait]
impl Tool for GetEmployeesForServiceTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, input: serde_json::Value, _ctx: &ContextVars) -> Result<ToolOutcome> {
        debug!(args = %input, "get_employees_for_service called");
        let args: ServiceArgs = match serde_json::from_value(input) {
            Ok(args) => args,
            Err(e) => return Ok(ToolOutcome::error(format!("invalid arguments: {e}"))),
        };
        if args.service.trim().is_empty() {
            return Ok(ToolOutcome::error("invalid service argument"));
        }

        let service = match self.catalog.by_name(&args.service) {
            Ok(Some(service)) => service,
            Ok(None) => return Ok(ToolOutcome::error("service not found")),
            Err(e) => return Ok(ToolOutcome::error(format!("service not found: {e}"))),
        };

        match self.staff.staff_for_service(service.id) {
            Ok(employees) => {
                let names: Vec<String> = employees.into_iter().map(|e| e.name).collect();
                if names.is_empty() {
                    return Ok(ToolOutcome::error("no employee offers the service"));
                }
                Ok(encode(&names, "failed to get employees for service"))
            }
            Err(e) => Ok(ToolOutcome::error(format!(
                "failed to get employees for service: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reserva_domain::seed::demo_clinic;

    #[tokio::test]
    async fn test_get_employees_resolves_service_names() {
        let clinic = demo_clinic();
        let tool = GetEmployeesTool::new(clinic.staff);

        let outcome = tool
            .execute(serde_json::json!({}), &ContextVars::new())
            .await
            .unwrap();

        assert!(outcome.success);
        assert!(outcome.data.contains("Alice"));
        assert!(outcome.data.contains("Dental Cleaning"));
        assert!(!outcome.data.contains("service_ids"));
    }

    #[tokio::test]
    async fn test_services_for_employee_case_insensitive() {
        let clinic = demo_clinic();
        let tool = GetServicesForEmployeeTool::new(clinic.staff);

        let outcome = tool
            .execute(
                serde_json::json!({"employee": "alice"}),
                &ContextVars::new(),
            )
            .await
            .unwrap();

        assert!(outcome.success);
        assert!(outcome.data.contains("Teeth Whitening"));
    }

    #[tokio::test]
    async fn test_services_for_employee_requires_name() {
        let clinic = demo_clinic();
        let tool = GetServicesForEmployeeTool::new(clinic.staff);

        let outcome = tool
            .execute(serde_json::json!({"employee": ""}), &ContextVars::new())
            .await
            .unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.content(), "Error: invalid employee argument");

        let outcome = tool
            .execute(serde_json::json!({}), &ContextVars::new())
            .await
            .unwrap();
        assert!(!outcome.success);
    }

    #[tokio::test]
    async fn test_services_for_unknown_employee() {
        let clinic = demo_clinic();
        let tool = GetServicesForEmployeeTool::new(clinic.staff);

        let outcome = tool
            .execute(
                serde_json::json!({"employee": "Nadia"}),
                &ContextVars::new(),
            )
            .await
            .unwrap();
        assert_eq!(outcome.content(), "Error: employee not found");
    }

    #[tokio::test]
    async fn test_employees_for_service_filters() {
        let clinic = demo_clinic();
        let tool = GetEmployeesForServiceTool::new(clinic.staff, clinic.catalog);

        let outcome = tool
            .execute(
                serde_json::json!({"service": "tooth extraction"}),
                &ContextVars::new(),
            )
            .await
            .unwrap();

        assert!(outcome.success);
        let names: Vec<String> = serde_json::from_str(&outcome.data).unwrap();
        assert_eq!(names, vec!["George".to_string()]);
    }

    #[tokio::test]
    async fn test_employees_for_unknown_service() {
        let clinic = demo_clinic();
        let tool = GetEmployeesForServiceTool::new(clinic.staff, clinic.catalog);

        let outcome = tool
            .execute(
                serde_json::json!({"service": "Dog Grooming"}),
                &ContextVars::new(),
            )
            .await
            .unwrap();
        assert_eq!(outcome.content(), "Error: service not found");
    }
}
