//! Personas
//!
//! A persona is a named configuration of model, system instructions, and
//! tool set. Exactly one persona is active at any point in a turn; a tool
//! result may hand control to a different persona mid-turn.

use crate::memory::TurnMemory;
use reserva_tools::ContextVars;
use std::collections::HashMap;
use std::sync::Arc;

/// A named agent configuration
pub struct Persona {
    name: String,
    model: Option<String>,
    instructions: String,
    tool_names: Vec<String>,
    memory: TurnMemory,
}

impl Persona {
    /// Create a persona with the given name and instruction template
    #[must_use]
    pub fn new(name: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: None,
            instructions: instructions.into(),
            tool_names: Vec::new(),
            memory: TurnMemory::default(),
        }
    }

    /// Set a model override for this persona
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Restrict the persona to the given tools (empty = all registered)
    #[must_use]
    pub fn with_tools(mut self, tool_names: Vec<String>) -> Self {
        self.tool_names = tool_names;
        self
    }

    /// Set the turn-memory capacity
    #[must_use]
    pub fn with_memory_capacity(mut self, capacity: usize) -> Self {
        self.memory = TurnMemory::new(capacity);
        self
    }

    /// Persona name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Model override, if any
    #[must_use]
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Tool names this persona may call
    #[must_use]
    pub fn tool_names(&self) -> &[String] {
        &self.tool_names
    }

    /// Turn memory attached to this persona
    #[must_use]
    pub fn memory(&self) -> &TurnMemory {
        &self.memory
    }

    /// Whether this persona may call the given tool
    #[must_use]
    pub fn allows_tool(&self, name: &str) -> bool {
        self.tool_names.is_empty() || self.tool_names.iter().any(|t| t == name)
    }

    /// Render the system instructions, substituting `{key}` placeholders
    /// from the context variables. Evaluated fresh for every request.
    #[must_use]
    pub fn render_instructions(&self, context: &ContextVars) -> String {
        let mut instructions = self.instructions.clone();
        for (key, value) in context {
            let placeholder = format!("{{{key}}}");
            if !instructions.contains(&placeholder) {
                continue;
            }
            let rendered = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            instructions = instructions.replace(&placeholder, &rendered);
        }
        instructions
    }
}

/// Registry of personas, resolved case-insensitively by name
#[derive(Default)]
pub struct PersonaRegistry {
    personas: HashMap<String, Arc<Persona>>,
}

impl PersonaRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a persona
    pub fn register(&mut self, persona: Persona) {
        self.personas
            .insert(persona.name.to_lowercase(), Arc::new(persona));
    }

    /// Register a persona, builder style
    #[must_use]
    pub fn with_persona(mut self, persona: Persona) -> Self {
        self.register(persona);
        self
    }

    /// Resolve a persona by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<Persona>> {
        self.personas.get(&name.to_lowercase()).cloned()
    }

    /// Registered persona names
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.personas.values().map(|p| p.name.as_str()).collect()
    }

    /// Number of registered personas
    #[must_use]
    pub fn len(&self) -> usize {
        self.personas.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_instructions_substitutes_context() {
        let persona = Persona::new(
            "receptionist",
            "You work at {business_name}. Current time is {current_time}.",
        );
        let mut context = ContextVars::new();
        context.insert(
            "business_name".to_string(),
            serde_json::json!("Brightsmile Dental"),
        );
        context.insert(
            "current_time".to_string(),
            serde_json::json!("2025-06-01 08:00"),
        );

        let rendered = persona.render_instructions(&context);
        assert_eq!(
            rendered,
            "You work at Brightsmile Dental. Current time is 2025-06-01 08:00."
        );
    }

    #[test]
    fn test_render_instructions_leaves_unknown_placeholders() {
        let persona = Persona::new("p", "Hello {missing}");
        assert_eq!(
            persona.render_instructions(&ContextVars::new()),
            "Hello {missing}"
        );
    }

    #[test]
    fn test_memory_capacity_override() {
        let persona = Persona::new("p", "x").with_memory_capacity(5);
        assert_eq!(persona.memory().capacity(), 5);
    }

    #[test]
    fn test_allows_tool() {
        let open = Persona::new("open", "x");
        assert!(open.allows_tool("anything"));

        let restricted =
            Persona::new("restricted", "x").with_tools(vec!["get_services".to_string()]);
        assert!(restricted.allows_tool("get_services"));
        assert!(!restricted.allows_tool("book_appointment"));
    }

    #[test]
    fn test_registry_case_insensitive() {
        let registry =
            PersonaRegistry::new().with_persona(Persona::new("Scheduler", "instructions"));
        assert!(registry.get("scheduler").is_some());
        assert!(registry.get("SCHEDULER").is_some());
        assert!(registry.get("nobody").is_none());
        assert_eq!(registry.len(), 1);
    }
}
