//! Mock LLM provider for testing
//!
//! Returns scripted responses in FIFO order and records every request it
//! receives so tests can assert on system prompts and round-trip counts.

use crate::completion::{
    CompletionRequest, CompletionResponse, ToolCompletionRequest, ToolCompletionResponse,
};
use crate::error::Result;
use crate::provider::LlmProvider;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A mock LLM provider that returns queued responses or default empty ones.
pub struct MockProvider {
    responses: Arc<Mutex<VecDeque<ToolCompletionResponse>>>,
    requests: Arc<Mutex<Vec<ToolCompletionRequest>>>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    /// Create a new mock provider.
    #[must_use]
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response to the queue.
    pub fn add_tool_response(&self, response: ToolCompletionResponse) {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(response);
    }

    /// Requests received so far (tool completions only).
    #[must_use]
    pub fn recorded_requests(&self) -> Vec<ToolCompletionRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Number of tool-completion requests received so far.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

#[async_trait::async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn supports_tools(&self) -> bool {
        true
    }

    fn available_models(&self) -> Vec<String> {
        vec!["mock-model".to_string()]
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse> {
        Ok(CompletionResponse {
            content: "mock response".to_string(),
            usage: None,
            finish_reason: Some("stop".to_string()),
            model: "mock-model".to_string(),
        })
    }

    async fn complete_with_tools(
        &self,
        request: ToolCompletionRequest,
    ) -> Result<ToolCompletionResponse> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request);

        let mut responses = self.responses.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(resp) = responses.pop_front() {
            Ok(resp)
        } else {
            Ok(ToolCompletionResponse {
                content: Some("mock response".to_string()),
                tool_calls: vec![],
                usage: None,
                finish_reason: Some("stop".to_string()),
                model: "mock-model".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Message;
    use crate::tools::ToolCall;

    #[tokio::test]
    async fn test_scripted_responses_in_order() {
        let provider = MockProvider::new();
        provider.add_tool_response(ToolCompletionResponse::calls(vec![ToolCall {
            id: "call_1".to_string(),
            name: "get_services".to_string(),
            arguments: "{}".to_string(),
        }]));
        provider.add_tool_response(ToolCompletionResponse::text("done"));

        let request = ToolCompletionRequest::new(
            CompletionRequest::new("mock-model").with_message(Message::user("hi")),
            vec![],
        );

        let first = provider.complete_with_tools(request.clone()).await.unwrap();
        assert!(first.has_tool_calls());

        let second = provider.complete_with_tools(request).await.unwrap();
        assert_eq!(second.content.as_deref(), Some("done"));
        assert_eq!(provider.request_count(), 2);
    }

    #[tokio::test]
    async fn test_records_system_prompt() {
        let provider = MockProvider::new();
        let request = ToolCompletionRequest::new(
            CompletionRequest::new("mock-model").with_message(Message::system("be brief")),
            vec![],
        );
        let _ = provider.complete_with_tools(request).await.unwrap();

        let recorded = provider.recorded_requests();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].request.messages[0].content, "be brief");
    }
}
