//! Chat completions client
//!
//! Speaks the OpenAI-compatible `POST /chat/completions` endpoint, which both
//! a local Ollama (`/v1`) and hosted model gateways expose.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::ModelConfig;
use crate::errors::{Result, TravelError};
use crate::llm::types::ChatMessage;

/// Default endpoint: local Ollama's OpenAI-compatible API
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:11434/v1";

/// Default model
pub const DEFAULT_MODEL: &str = "qwen2.5:7b-instruct";

/// Anything that turns role-tagged messages into generated text
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, messages: &[ChatMessage]) -> Result<String>;
}

/// HTTP chat completions client
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    temperature: f32,
    max_tokens: u32,
}

impl ChatClient {
    /// Create client with default sampling settings
    pub fn new(base_url: &str, model: &str) -> Result<Self> {
        Self::build(base_url, model, Duration::from_secs(60))
    }

    /// Create client from the `[model]` config section.
    ///
    /// The API key is read from the environment variable the config names;
    /// an unset variable means no `Authorization` header.
    pub fn from_config(config: &ModelConfig) -> Result<Self> {
        let mut client = Self::build(
            &config.base_url,
            &config.model,
            Duration::from_secs(config.timeout_secs),
        )?;
        client.temperature = config.temperature;
        client.max_tokens = config.max_tokens;
        client.api_key = config
            .api_key_env
            .as_deref()
            .and_then(|var| std::env::var(var).ok())
            .filter(|key| !key.is_empty());

        if config.api_key_env.is_some() && client.api_key.is_none() {
            warn!(
                var = config.api_key_env.as_deref().unwrap_or_default(),
                "API key variable not set; sending requests without credentials"
            );
        }
        Ok(client)
    }

    fn build(base_url: &str, model: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TravelError::HttpError)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: None,
            temperature: 0.7,
            max_tokens: 500,
        })
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Get current model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn request_body<'a>(&'a self, messages: &'a [ChatMessage]) -> CompletionRequest<'a> {
        CompletionRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

#[async_trait]
impl Generator for ChatClient {
    async fn generate(&self, messages: &[ChatMessage]) -> Result<String> {
        debug!(model = %self.model, messages = messages.len(), "requesting completion");

        let mut request = self
            .client
            .post(self.completions_url())
            .json(&self.request_body(messages));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TravelError::Generation(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let completion: CompletionResponse = response.json().await?;
        extract_content(completion)
    }
}

fn extract_content(completion: CompletionResponse) -> Result<String> {
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| TravelError::Generation("Model returned no choices".to_string()))
}

/// Chat completions request body
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

/// Chat completions response (only the parts we read)
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}
