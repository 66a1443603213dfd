//! Chat sessions
//!
//! A session owns the growing conversation history, the active persona,
//! and the context variables for one client (WebSocket connection or CLI).
//! It keeps only the user message and the turn's final assistant message;
//! intermediate tool chatter stays inside the turn.

use chrono::Local;
use reserva_core::{Orchestrator, Result, TurnOutcome};
use reserva_llm::Message;
use reserva_tools::ContextVars;
use tokio_util::sync::CancellationToken;

/// Per-client conversation state
pub struct ChatSession {
    messages: Vec<Message>,
    persona: String,
    context: ContextVars,
}

impl ChatSession {
    /// Create a session starting with the given persona
    #[must_use]
    pub fn new(persona: impl Into<String>) -> Self {
        Self {
            messages: Vec::new(),
            persona: persona.into(),
            context: ContextVars::new(),
        }
    }

    /// Active persona name
    #[must_use]
    pub fn persona(&self) -> &str {
        &self.persona
    }

    /// Run one turn for an incoming user message and return the reply text
    pub async fn send(&mut self, orchestrator: &Orchestrator, text: &str) -> Result<String> {
        self.context.insert(
            "current_time".to_string(),
            serde_json::json!(Local::now().format("%Y-%m-%d %H:%M:%S, %A").to_string()),
        );

        self.messages.push(Message::user(text));

        let outcome = orchestrator
            .run_turn(
                &self.persona,
                &self.messages,
                self.context.clone(),
                CancellationToken::new(),
            )
            .await?;

        let reply = reply_text(&outcome);
        self.messages.push(Message::assistant(reply.clone()));
        self.persona = outcome.active_persona;
        self.context = outcome.context;

        Ok(reply)
    }
}

/// The user-facing reply for a turn: the final answer, or on soft
/// truncation the content of the last message produced.
fn reply_text(outcome: &TurnOutcome) -> String {
    outcome
        .response
        .clone()
        .or_else(|| outcome.last_content().map(str::to_string))
        .unwrap_or_else(|| "Can't process request.".to_string())
}
