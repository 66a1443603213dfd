//! Reserva LLM - completion client abstraction
//!
//! This crate provides the LLM integration for Reserva:
//! - Message and tool-call types shared across the workspace
//! - `LlmProvider`: the provider trait (text completion + tool calling)
//! - OpenAI: provider for any OpenAI-compatible chat-completions endpoint
//! - Mock: scripted provider for tests

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod completion;
pub mod error;
pub mod message;
pub mod mock;
pub mod openai;
pub mod provider;
pub mod tools;

pub use completion::{
    CompletionRequest, CompletionResponse, TokenUsage, ToolCompletionRequest,
    ToolCompletionResponse,
};
pub use error::{Error, Result};
pub use message::{Message, MessageRole};
pub use mock::MockProvider;
pub use openai::{OpenAiConfig, OpenAiProvider};
pub use provider::LlmProvider;
pub use tools::{ToolCall, ToolChoice, ToolDefinition};
