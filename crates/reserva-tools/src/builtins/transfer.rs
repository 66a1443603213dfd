//! Persona transfer tool
//!
//! Lets one persona hand the conversation to another mid-turn; the
//! orchestration loop switches the active persona when it sees the
//! handoff field on the outcome.

use crate::error::Result;
use crate::registry::{ContextVars, Tool, ToolOutcome};
use reserva_llm::ToolDefinition;
use tracing::debug;

/// Hand the conversation to a named persona
pub struct TransferTool {
    target: String,
    definition: ToolDefinition,
}

impl TransferTool {
    /// Create a transfer tool for the given target persona
    #[must_use]
    pub fn new(target: impl Into<String>, description: impl Into<String>) -> Self {
        let target = target.into();
        Self {
            definition: ToolDefinition::new(
                format!("transfer_to_{target}"),
                description,
                serde_json::json!({
                    "type": "object",
                    "properties": {},
                    "required": []
                }),
            ),
            target,
        }
    }
}

#[async_trait::async_trait]
impl Tool for TransferTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, _input: serde_json::Value, _ctx: &ContextVars) -> Result<ToolOutcome> {
        debug!(target = %self.target, "Handing off conversation");
        Ok(
            ToolOutcome::ok(format!("Transferring the conversation to {}.", self.target))
                .with_handoff(self.target.clone()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_transfer_carries_handoff() {
        let tool = TransferTool::new("scheduler", "Hand off to the scheduling assistant.");
        assert_eq!(tool.definition().name, "transfer_to_scheduler");

        let outcome = tool
            .execute(serde_json::json!({}), &ContextVars::new())
            .await
            .unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.handoff.as_deref(), Some("scheduler"));
    }
}
