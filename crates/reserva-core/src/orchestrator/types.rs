//! Orchestrator result types

use reserva_llm::Message;
use reserva_tools::ContextVars;

/// Result of one orchestrated turn
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// Messages appended during this turn, in order
    pub messages: Vec<Message>,
    /// Persona active when the turn ended (may differ after a handoff)
    pub active_persona: String,
    /// Context variables after tool updates
    pub context: ContextVars,
    /// Final plain-text answer, or `None` when the round-trip budget was
    /// exhausted first (soft truncation, not an error)
    pub response: Option<String>,
}

impl TurnOutcome {
    /// Content of the last appended message, if any
    #[must_use]
    pub fn last_content(&self) -> Option<&str> {
        self.messages.last().map(|m| m.content.as_str())
    }
}
