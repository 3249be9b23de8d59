use crate::types::{ChatMessage, Completion, CompletionChunk, CompletionParams};
use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("stream error: {0}")]
    Stream(String),

    #[error("missing Groq API key: set GROQ_API_KEY (or `key`) in the environment or .env")]
    MissingApiKey,

    #[error("empty completion: the API returned no choices")]
    EmptyCompletion,
}

pub type Result<T> = std::result::Result<T, LlmError>;

pub type CompletionStream = Pin<Box<dyn Stream<Item = Result<CompletionChunk>> + Send>>;

#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Run a chat completion and return the full generated text.
    ///
    /// # Arguments
    /// * `messages` - Chat messages
    /// * `params` - Per-request overrides. A `None` model uses the provider's default
    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &CompletionParams,
    ) -> Result<Completion>;

    /// Stream a chat completion token by token.
    async fn complete_stream(
        &self,
        messages: &[ChatMessage],
        params: &CompletionParams,
    ) -> Result<CompletionStream>;

    /// List available models
    async fn list_models(&self) -> Result<Vec<String>> {
        // Default implementation returns empty list
        Ok(vec![])
    }
}
