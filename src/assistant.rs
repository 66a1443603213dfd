//! Assistant wiring
//!
//! Builds the orchestrator stack shared by the server and the CLI:
//! provider, demo collaborators, tool registry, personas.

use crate::config::AppConfig;
use crate::personas;
use anyhow::{Context, Result};
use reserva_core::{Orchestrator, OrchestratorConfig};
use reserva_domain::seed::demo_clinic;
use reserva_llm::{OpenAiConfig, OpenAiProvider};
use std::sync::Arc;
use tracing::info;

/// Build the orchestrator from configuration and environment
pub fn build_orchestrator(config: &AppConfig) -> Result<Arc<Orchestrator>> {
    let mut provider_config =
        OpenAiConfig::from_env().context("failed to configure the LLM provider")?;
    if let Some(model) = &config.model {
        provider_config = provider_config.with_model(model);
    }
    let provider = OpenAiProvider::new(provider_config);

    let clinic = demo_clinic();
    let registry = personas::build_registry(&clinic);
    let personas = personas::build_personas(config.model.as_deref());

    info!(
        tools = registry.len(),
        personas = personas.len(),
        max_round_trips = config.max_round_trips,
        "Assistant ready"
    );

    Ok(Arc::new(Orchestrator::new(
        Arc::new(provider),
        Arc::new(registry),
        personas,
        OrchestratorConfig::new().with_max_round_trips(config.max_round_trips),
    )))
}
