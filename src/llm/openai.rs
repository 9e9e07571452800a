use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::client::{CompletionRequest, LlmProvider};

const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4-turbo";

pub struct OpenAiClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl OpenAiClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.require_api_key()?.to_string();

        let model = if settings.llm.model.trim().is_empty() {
            DEFAULT_OPENAI_MODEL.to_string()
        } else {
            settings.llm.model.trim().to_string()
        };

        let endpoint = if settings.llm.endpoint.trim().is_empty() {
            DEFAULT_OPENAI_ENDPOINT.to_string()
        } else {
            settings
                .llm
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        let mut builder =
            Client::builder().timeout(std::time::Duration::from_secs(settings.llm.timeout_secs));
        // Local OpenAI-compatible servers must not go through HTTP(S)_PROXY.
        if is_loopback(&endpoint) {
            builder = builder.no_proxy();
        }

        Ok(Self {
            http: builder
                .build()
                .context("Failed to build OpenAI HTTP client")?,
            api_key,
            model,
            endpoint,
        })
    }

    fn request_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }

    fn request_body<'a>(&'a self, request: CompletionRequest<'a>) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.system,
                },
                ChatMessage {
                    role: "user",
                    content: request.user,
                },
            ],
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiClient {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String> {
        let body = self.request_body(request);

        tracing::info!(model = %self.model, "Requesting chat completion");

        let response = self
            .http
            .post(self.request_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("OpenAI request failed")?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            anyhow::bail!("OpenAI returned {}: {}", status, detail.trim());
        }

        let payload: ChatCompletionResponse = response
            .json()
            .await
            .context("Failed to parse OpenAI response")?;

        let text = extract_completion_text(payload)?;
        tracing::debug!(chars = text.len(), "Chat completion received");

        Ok(text)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

fn is_loopback(endpoint: &str) -> bool {
    reqwest::Url::parse(endpoint)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .map(|host| host == "localhost" || host == "127.0.0.1" || host == "[::1]")
        .unwrap_or(false)
}

/// Take the first choice's message content, trimmed.
fn extract_completion_text(payload: ChatCompletionResponse) -> Result<String> {
    payload
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .context("OpenAI response did not contain any choices")
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
