//! groq_client - HTTP client for Groq's OpenAI-compatible inference API
//!
//! - `provider` - the `TextProvider` trait, error type and stream alias
//! - `compat` - OpenAI-compatible request/response shapes
//! - `sse` - SSE response to completion-chunk stream adapter
//! - `client` - the `GroqClient` implementation

pub mod client;
pub mod compat;
pub mod provider;
pub mod sse;
pub mod types;

pub use client::GroqClient;
pub use provider::{CompletionStream, LlmError, Result, TextProvider};
pub use types::{
    ChatMessage, Completion, CompletionChunk, CompletionParams, Role, TokenUsage,
};
