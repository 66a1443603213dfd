//! Turn execution
//!
//! Contains `run_turn`, the main loop, and per-call tool execution.

use crate::error::{Error, Result};
use crate::persona::Persona;
use reserva_llm::{CompletionRequest, Message, MessageRole, ToolCall, ToolCompletionRequest};
use reserva_tools::ContextVars;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::types::TurnOutcome;
use super::Orchestrator;

impl Orchestrator {
    /// Drive one user turn to completion.
    ///
    /// `history` is the conversation so far (the new user message last);
    /// it is cloned and only ever appended to. `context` is threaded
    /// unchanged into every tool call unless a tool merges updates.
    /// `cancel` aborts the turn between model round-trips.
    ///
    /// Returns the messages appended during the turn, the persona active at
    /// the end, the (possibly updated) context, and the final answer
    /// (`None` when the round-trip budget ran out first).
    ///
    /// # Errors
    /// Completion-client failures and cancellation abort the turn. Tool
    /// failures never do; they are fed back into the conversation.
    pub async fn run_turn(
        &self,
        persona_name: &str,
        history: &[Message],
        context: ContextVars,
        cancel: CancellationToken,
    ) -> Result<TurnOutcome> {
        let turn_id = Uuid::new_v4();
        let mut active = self
            .personas
            .get(persona_name)
            .ok_or_else(|| Error::UnknownPersona(persona_name.to_string()))?;
        let mut context = context;
        let mut history: Vec<Message> = history.to_vec();
        let initial_len = history.len();

        info!(
            turn_id = %turn_id,
            persona = %active.name(),
            messages = initial_len,
            "Starting turn"
        );

        // Record the incoming user utterance in the persona's turn memory.
        if let Some(last) = history.last() {
            if last.role == MessageRole::User {
                active.memory().add(last.content.clone());
            }
        }

        let mut rounds = 0;
        let mut final_response = None;

        while rounds < self.config.max_round_trips {
            if cancel.is_cancelled() {
                info!(turn_id = %turn_id, "Turn cancelled");
                return Err(Error::Cancelled);
            }

            // One fresh system message per request; instructions may depend
            // on context variables updated by earlier tool calls.
            let system = active.render_instructions(&context);
            let mut messages = Vec::with_capacity(history.len() + 1);
            messages.push(Message::system(system));
            messages.extend(history.iter().cloned());

            let tools = self.registry.llm_tools_for(active.tool_names());
            let request = ToolCompletionRequest::new(
                CompletionRequest {
                    model: active.model().map(str::to_string).unwrap_or_default(),
                    messages,
                    max_tokens: self.config.max_tokens,
                    temperature: self.config.temperature,
                    stop: None,
                },
                tools,
            );

            debug!(
                turn_id = %turn_id,
                round = rounds + 1,
                persona = %active.name(),
                "Requesting completion"
            );

            let response = self.provider.complete_with_tools(request).await?;

            if response.tool_calls.is_empty() {
                // The only non-bound exit: a plain answer ends the turn.
                let content = response.content.unwrap_or_default();
                history.push(Message::assistant(content.clone()));
                final_response = Some(content);
                break;
            }

            history.push(Message::assistant_with_tool_calls(
                response.content.clone().unwrap_or_default(),
                response.tool_calls.clone(),
            ));

            // Execute sequentially in the order the model listed them;
            // later calls may depend on earlier ones through context or a
            // persona handoff.
            for call in &response.tool_calls {
                let (message, handoff) = self
                    .execute_tool_call(turn_id, call, &active, &mut context)
                    .await;
                history.push(message);

                if let Some(target) = handoff {
                    match self.personas.get(&target) {
                        Some(next) => {
                            info!(
                                turn_id = %turn_id,
                                from = %active.name(),
                                to = %next.name(),
                                "Persona handoff"
                            );
                            active = next;
                        }
                        None => {
                            warn!(
                                turn_id = %turn_id,
                                target = %target,
                                "Handoff to unknown persona ignored"
                            );
                        }
                    }
                }
            }

            rounds += 1;
            // The model always gets a chance to react to tool results.
        }

        if final_response.is_none() {
            info!(
                turn_id = %turn_id,
                rounds,
                "Round-trip budget exhausted, returning partial turn"
            );
        }

        Ok(TurnOutcome {
            messages: history.split_off(initial_len),
            active_persona: active.name().to_string(),
            context,
            response: final_response,
        })
    }

    /// Execute one tool call, producing its Tool message and an optional
    /// handoff target. Failures become message content, never errors.
    async fn execute_tool_call(
        &self,
        turn_id: Uuid,
        call: &ToolCall,
        active: &Arc<Persona>,
        context: &mut ContextVars,
    ) -> (Message, Option<String>) {
        info!(
            turn_id = %turn_id,
            tool = %call.name,
            args = %call.arguments,
            "Executing tool"
        );

        if !active.allows_tool(&call.name) || !self.registry.has(&call.name) {
            warn!(turn_id = %turn_id, tool = %call.name, "Tool not found");
            return (
                Message::tool_response_named(
                    &call.id,
                    &call.name,
                    format!("Error: tool '{}' not found", call.name),
                ),
                None,
            );
        }

        let input: serde_json::Value = match serde_json::from_str(&call.arguments) {
            Ok(value) => value,
            Err(e) => {
                warn!(
                    turn_id = %turn_id,
                    tool = %call.name,
                    error = %e,
                    arguments = %call.arguments,
                    "Failed to parse tool arguments"
                );
                return (
                    Message::tool_response_named(
                        &call.id,
                        &call.name,
                        format!("Error: invalid tool arguments: {e}"),
                    ),
                    None,
                );
            }
        };

        match self.registry.execute(&call.name, input, context).await {
            Ok(outcome) => {
                let content = outcome.content();
                debug!(
                    turn_id = %turn_id,
                    tool = %call.name,
                    success = outcome.success,
                    "Tool completed"
                );
                context.extend(outcome.context_updates);
                (
                    Message::tool_response_named(&call.id, &call.name, content),
                    outcome.handoff,
                )
            }
            Err(e) => {
                warn!(
                    turn_id = %turn_id,
                    tool = %call.name,
                    error = %e,
                    "Tool execution failed"
                );
                (
                    Message::tool_response_named(&call.id, &call.name, format!("Error: {e}")),
                    None,
                )
            }
        }
    }
}
