use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;

use planner_core::Config;

use crate::compat::{
    build_chat_body, parse_completion_response, parse_models_response, parse_sse_data,
};
use crate::provider::{CompletionStream, LlmError, Result, TextProvider};
use crate::sse::completion_stream_from_sse;
use crate::types::{ChatMessage, Completion, CompletionChunk, CompletionParams};

/// Client for Groq's OpenAI-compatible chat-completions API.
pub struct GroqClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GroqClient {
    /// Build a client from configuration. Fails when no API key is
    /// configured; the key is never defaulted.
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(LlmError::MissingApiKey)?
            .to_string();

        Ok(GroqClient {
            client: Client::new(),
            api_key,
            base_url: config.api_base().trim_end_matches('/').to_string(),
            model: config.model().to_string(),
        })
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn resolve_model<'a>(&'a self, params: &'a CompletionParams) -> &'a str {
        let model = params.model.as_deref().unwrap_or(&self.model);
        if params.model.is_some() {
            debug!(
                "using override model '{}' (default: '{}')",
                model, self.model
            );
        }
        model
    }

    async fn post_chat(
        &self,
        messages: &[ChatMessage],
        params: &CompletionParams,
        stream: bool,
    ) -> Result<reqwest::Response> {
        let body = build_chat_body(
            self.resolve_model(params),
            messages,
            stream,
            params.max_tokens,
            params.temperature,
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await?;
            error!("chat completion request failed: HTTP {status}");
            return Err(LlmError::Api(format!("HTTP {status}: {text}")));
        }

        Ok(response)
    }
}

#[async_trait]
impl TextProvider for GroqClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &CompletionParams,
    ) -> Result<Completion> {
        let response = self.post_chat(messages, params, false).await?;
        let body = response.text().await?;
        parse_completion_response(&body)
    }

    async fn complete_stream(
        &self,
        messages: &[ChatMessage],
        params: &CompletionParams,
    ) -> Result<CompletionStream> {
        let response = self.post_chat(messages, params, true).await?;

        let stream = completion_stream_from_sse(response, |_event, data| {
            if data.trim().is_empty() {
                return Ok(None);
            }

            match parse_sse_data(data)? {
                CompletionChunk::Done => Ok(None),
                other => Ok(Some(other)),
            }
        });

        Ok(stream)
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        let response = self
            .client
            .get(format!("{}/models", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await?;
            return Err(LlmError::Api(format!("HTTP {status}: {text}")));
        }

        let body = response.text().await?;
        parse_models_response(&body)
    }
}
