use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::openai::OpenAiClient;

/// One chat-completion exchange: a system role and a user role.
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub system: &'a str,
    pub user: &'a str,
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send the request and return the generated text, trimmed.
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String>;

    /// Model identifier used for every request.
    fn model(&self) -> &str;
}

/// Build an LLM provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn LlmProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "openai" => Ok(Box::new(OpenAiClient::from_settings(settings)?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: openai",
            other
        ),
    }
}
