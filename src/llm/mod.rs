//! LLM module for momgen
//!
//! Prompt construction and the chat-completion client.

mod client;
mod openai;
mod prompts;

pub use client::{build_provider, CompletionRequest, LlmProvider};
pub use openai::OpenAiClient;
pub use prompts::{build_mom_prompt, SYSTEM_PROMPT};
