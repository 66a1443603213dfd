//! Registry - tool registration and dispatch
//!
//! Tools are registered by name and resolved by map lookup. Each execution
//! receives the raw JSON arguments plus the session's context variables and
//! returns a `ToolOutcome`; tool-level failures are carried inside the
//! outcome so the conversation can continue.

use crate::error::{Error, Result};
use reserva_llm::ToolDefinition;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Opaque per-session variables threaded through every tool call
pub type ContextVars = HashMap<String, serde_json::Value>;

/// Result of a tool execution
#[derive(Debug, Clone, Default)]
pub struct ToolOutcome {
    /// Whether execution succeeded
    pub success: bool,
    /// Output data (JSON string or plain text)
    pub data: String,
    /// Error message if failed
    pub error: Option<String>,
    /// Persona to hand the conversation to, if any
    pub handoff: Option<String>,
    /// Context-variable updates to merge into the session
    pub context_updates: ContextVars,
}

impl ToolOutcome {
    /// Create a successful outcome
    #[must_use]
    pub fn ok(data: impl Into<String>) -> Self {
        Self {
            success: true,
            data: data.into(),
            ..Default::default()
        }
    }

    /// Create a failed outcome
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            ..Default::default()
        }
    }

    /// Hand the conversation to another persona
    #[must_use]
    pub fn with_handoff(mut self, persona: impl Into<String>) -> Self {
        self.handoff = Some(persona.into());
        self
    }

    /// Merge a context-variable update into the session after this call
    #[must_use]
    pub fn with_context_update(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.context_updates.insert(key.into(), value);
        self
    }

    /// Message content for the conversation history
    #[must_use]
    pub fn content(&self) -> String {
        if self.success {
            self.data.clone()
        } else {
            format!("Error: {}", self.error.as_deref().unwrap_or("unknown error"))
        }
    }
}

/// Trait for tool implementations
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool definition
    fn definition(&self) -> &ToolDefinition;

    /// Execute the tool with given input and session context
    async fn execute(&self, input: serde_json::Value, ctx: &ContextVars) -> Result<ToolOutcome>;
}

/// Registry for managing tools
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.definition().name.clone();
        debug!(tool = %name, "Registering tool");
        self.tools.insert(name, tool);
    }

    /// Get a tool by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Check if a tool exists
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// List all tool names
    #[must_use]
    pub fn list_names(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }

    /// Get tool count
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Definitions of all tools, sorted by name for a stable prompt order
    #[must_use]
    pub fn llm_tools(&self) -> Vec<ToolDefinition> {
        let mut tools: Vec<ToolDefinition> = self
            .tools
            .values()
            .map(|t| t.definition().clone())
            .collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }

    /// Definitions restricted to `allowed` names; an empty slice means all
    #[must_use]
    pub fn llm_tools_for(&self, allowed: &[String]) -> Vec<ToolDefinition> {
        if allowed.is_empty() {
            return self.llm_tools();
        }
        self.llm_tools()
            .into_iter()
            .filter(|def| allowed.iter().any(|name| name == &def.name))
            .collect()
    }

    /// Execute a tool by name
    ///
    /// # Errors
    /// Returns `Error::NotFound` for unknown names; tool-level failures are
    /// reported inside the returned `ToolOutcome`.
    pub async fn execute(
        &self,
        name: &str,
        input: serde_json::Value,
        ctx: &ContextVars,
    ) -> Result<ToolOutcome> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;
        tool.execute(input, ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoTool {
        definition: ToolDefinition,
    }

    impl EchoTool {
        fn new() -> Self {
            Self {
                definition: ToolDefinition::new(
                    "echo",
                    "Echo the input back",
                    serde_json::json!({"type": "object", "properties": {}}),
                ),
            }
        }
    }

    #[async_trait::async_trait]
    impl Tool for EchoTool {
        fn definition(&self) -> &ToolDefinition {
            &self.definition
        }

        async fn execute(
            &self,
            input: serde_json::Value,
            _ctx: &ContextVars,
        ) -> Result<ToolOutcome> {
            Ok(ToolOutcome::ok(input.to_string()))
        }
    }

    #[test]
    fn test_outcome_content() {
        assert_eq!(ToolOutcome::ok("[1,2]").content(), "[1,2]");
        assert_eq!(
            ToolOutcome::error("service not found").content(),
            "Error: service not found"
        );
    }

    #[test]
    fn test_outcome_handoff_and_context() {
        let outcome = ToolOutcome::ok("done")
            .with_handoff("scheduler")
            .with_context_update("customer_name", serde_json::json!("Jane"));
        assert_eq!(outcome.handoff.as_deref(), Some("scheduler"));
        assert_eq!(
            outcome.context_updates.get("customer_name"),
            Some(&serde_json::json!("Jane"))
        );
    }

    #[tokio::test]
    async fn test_registry_dispatch() {
        let mut registry = ToolRegistry::new();
        assert!(registry.is_empty());

        registry.register(Arc::new(EchoTool::new()));
        assert_eq!(registry.len(), 1);
        assert!(registry.has("echo"));

        let outcome = registry
            .execute("echo", serde_json::json!({"a": 1}), &ContextVars::new())
            .await
            .unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.data, r#"{"a":1}"#);
    }

    #[tokio::test]
    async fn test_registry_unknown_tool() {
        let registry = ToolRegistry::new();
        let result = registry
            .execute("nope", serde_json::json!({}), &ContextVars::new())
            .await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_llm_tools_for_filters() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool::new()));

        let all = registry.llm_tools_for(&[]);
        assert_eq!(all.len(), 1);

        let none = registry.llm_tools_for(&["other".to_string()]);
        assert!(none.is_empty());
    }
}
