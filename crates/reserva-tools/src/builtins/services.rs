//! Service catalog tool

use super::{encode, ServiceInfo};
use crate::error::Result;
use crate::registry::{ContextVars, Tool, ToolOutcome};
use reserva_domain::ServiceCatalog;
use reserva_llm::ToolDefinition;
use std::sync::Arc;
use tracing::debug;

/// List every service with its duration and price
pub struct GetServicesTool {
    catalog: Arc<dyn ServiceCatalog>,
    definition: ToolDefinition,
}

impl GetServicesTool {
    /// Create the tool over the given catalog
    #[must_use]
    pub fn new(catalog: Arc<dyn ServiceCatalog>) -> Self {
        Self {
            catalog,
            definition: ToolDefinition::new(
                "get_services",
                "Get the list of services and their details (duration and price) offered by the business.",
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
impl Tool for GetServicesTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, _input: serde_json::Value, _ctx: &ContextVars) -> Result<ToolOutcome> {
        debug!("get_services called");
        match self.catalog.all() {
            Ok(services) => {
                let infos: Vec<ServiceInfo> = services.iter().map(ServiceInfo::from).collect();
                Ok(encode(&infos, "failed to get services"))
            }
            Err(e) => Ok(ToolOutcome::error(format!("failed to get services: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reserva_domain::seed::demo_clinic;

    #[tokio::test]
    async fn test_lists_all_services() {
        let clinic = demo_clinic();
        let tool = GetServicesTool::new(clinic.catalog);

        let outcome = tool
            .execute(serde_json::json!({}), &ContextVars::new())
            .await
            .unwrap();

        assert!(outcome.success);
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&outcome.data).unwrap();
        assert_eq!(parsed.len(), 5);
        assert!(outcome.data.contains("Dental Cleaning"));
        assert!(outcome.data.contains("duration_minutes"));
        // ids are internal, the model only sees names
        assert!(!outcome.data.contains("\"id\""));
    }
}
