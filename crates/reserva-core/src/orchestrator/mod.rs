//! Orchestrator - the multi-turn tool-calling loop
//!
//! Drives one user turn to completion: completion request, tool execution,
//! result feedback, repeat, bounded by a maximum number of model
//! round-trips.

mod config;
mod turn;
mod types;

pub use config::OrchestratorConfig;
pub use types::TurnOutcome;

use crate::persona::PersonaRegistry;
use reserva_llm::LlmProvider;
use reserva_tools::ToolRegistry;
use std::sync::Arc;

/// Main orchestrator that coordinates turn execution
pub struct Orchestrator {
    pub(crate) provider: Arc<dyn LlmProvider>,
    pub(crate) registry: Arc<ToolRegistry>,
    pub(crate) personas: PersonaRegistry,
    pub(crate) config: OrchestratorConfig,
}

impl Orchestrator {
    /// Create a new orchestrator
    #[must_use]
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        registry: Arc<ToolRegistry>,
        personas: PersonaRegistry,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            provider,
            registry,
            personas,
            config,
        }
    }

    /// Get the LLM provider name
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Get the configuration
    #[must_use]
    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Get the persona registry
    #[must_use]
    pub fn personas(&self) -> &PersonaRegistry {
        &self.personas
    }

    /// List all registered tool names
    #[must_use]
    pub fn list_tool_names(&self) -> Vec<String> {
        self.registry
            .list_names()
            .iter()
            .map(|s| (*s).to_string())
            .collect()
    }
}
