//! OpenAI-compatible request/response shapes.
//!
//! Groq serves the OpenAI chat-completions wire format. These helpers build
//! the request JSON and parse both buffered responses and SSE stream chunks
//! without leaking internal types into the wire shape.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::provider::{LlmError, Result};
use crate::types::{ChatMessage, Completion, CompletionChunk, TokenUsage};

/// Convert internal [`ChatMessage`] values to the OpenAI-compatible JSON array.
pub fn messages_to_json(messages: &[ChatMessage]) -> Vec<Value> {
    messages.iter().map(|m| json!(m)).collect()
}

/// Build a chat-completions request body.
pub fn build_chat_body(
    model: &str,
    messages: &[ChatMessage],
    stream: bool,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
) -> Value {
    let mut body = json!({
        "model": model,
        "messages": messages_to_json(messages),
        "stream": stream,
    });

    if let Some(max_tokens) = max_tokens {
        body["max_tokens"] = json!(max_tokens);
    }

    if let Some(temperature) = temperature {
        body["temperature"] = json!(temperature);
    }

    body
}

// --- Buffered response parsing ---

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatCompletionChoice>,
    usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    message: ChatCompletionMessage,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionMessage {
    content: Option<String>,
}

/// Parse a buffered chat-completions response body into a [`Completion`].
pub fn parse_completion_response(body: &str) -> Result<Completion> {
    let response: ChatCompletionResponse = serde_json::from_str(body)?;

    let Some(choice) = response.choices.first() else {
        return Err(LlmError::EmptyCompletion);
    };

    Ok(Completion {
        content: choice.message.content.clone().unwrap_or_default(),
        usage: response.usage,
    })
}

// --- Streaming chunk parsing ---

#[derive(Debug, Deserialize)]
pub struct StreamChunk {
    #[allow(dead_code)]
    id: Option<String>,
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    delta: StreamDelta,
    #[allow(dead_code)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct StreamDelta {
    content: Option<String>,
    #[allow(dead_code)]
    role: Option<String>,
}

fn chunk_to_completion_chunk(chunk: StreamChunk) -> CompletionChunk {
    let Some(choice) = chunk.choices.first() else {
        return CompletionChunk::Token(String::new());
    };

    match &choice.delta.content {
        Some(content) => CompletionChunk::Token(content.clone()),
        None => CompletionChunk::Token(String::new()),
    }
}

/// Parse an SSE `data:` payload in strict mode (OpenAI behavior).
///
/// - `"[DONE]"` -> `CompletionChunk::Done`
/// - Invalid JSON -> error
pub fn parse_sse_data(data: &str) -> Result<CompletionChunk> {
    if data.trim() == "[DONE]" {
        return Ok(CompletionChunk::Done);
    }

    let chunk: StreamChunk = serde_json::from_str(data)?;
    Ok(chunk_to_completion_chunk(chunk))
}

// --- Models listing ---

#[derive(Debug, Deserialize)]
struct ModelsResponse {
    data: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    id: String,
}

/// Parse a `/models` response body into model ids.
pub fn parse_models_response(body: &str) -> Result<Vec<String>> {
    let response: ModelsResponse = serde_json::from_str(body)?;
    Ok(response.data.into_iter().map(|m| m.id).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatMessage;

    #[test]
    fn messages_to_json_serializes_roles_lowercase() {
        let messages = vec![
            ChatMessage::system("Be brief"),
            ChatMessage::user("Hello"),
            ChatMessage::assistant("Hi"),
        ];

        let out = messages_to_json(&messages);

        assert_eq!(out.len(), 3);
        assert_eq!(out[0]["role"], "system");
        assert_eq!(out[1]["role"], "user");
        assert_eq!(out[2]["role"], "assistant");
        assert_eq!(out[1]["content"], "Hello");
    }

    #[test]
    fn build_chat_body_includes_required_fields() {
        let messages = vec![ChatMessage::user("Hello")];

        let body = build_chat_body("openai/gpt-oss-20b", &messages, true, None, None);

        assert_eq!(body["model"], "openai/gpt-oss-20b");
        assert_eq!(body["stream"], true);
        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
        assert!(body.get("max_tokens").is_none());
        assert!(body.get("temperature").is_none());
    }

    #[test]
    fn build_chat_body_with_optional_knobs() {
        let messages = vec![ChatMessage::user("Hello")];

        let body = build_chat_body("m", &messages, false, Some(4096), Some(0.5));

        assert_eq!(body["stream"], false);
        assert_eq!(body["max_tokens"], 4096);
        assert_eq!(body["temperature"], 0.5);
    }

    #[test]
    fn parse_completion_response_extracts_content_and_usage() {
        let body = r##"{
            "id": "chatcmpl-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "# Lesson"}, "finish_reason": "stop"}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 20, "total_tokens": 30}
        }"##;

        let completion = parse_completion_response(body).unwrap();

        assert_eq!(completion.content, "# Lesson");
        let usage = completion.usage.expect("usage");
        assert_eq!(usage.prompt_tokens, 10);
        assert_eq!(usage.completion_tokens, 20);
        assert_eq!(usage.total_tokens, 30);
    }

    #[test]
    fn parse_completion_response_without_usage() {
        let body = r#"{"choices": [{"message": {"content": "hi"}}]}"#;
        let completion = parse_completion_response(body).unwrap();
        assert_eq!(completion.content, "hi");
        assert!(completion.usage.is_none());
    }

    #[test]
    fn parse_completion_response_no_choices_is_empty_completion() {
        let body = r#"{"choices": []}"#;
        let err = parse_completion_response(body).unwrap_err();
        assert!(matches!(err, LlmError::EmptyCompletion));
    }

    #[test]
    fn parse_completion_response_invalid_json_errors() {
        assert!(parse_completion_response("{not json}").is_err());
    }

    #[test]
    fn parse_sse_data_content_delta_yields_token() {
        let data = r#"{"id":"chatcmpl_1","choices":[{"delta":{"content":"Hello"}}]}"#;

        let chunk = parse_sse_data(data).unwrap();

        match chunk {
            CompletionChunk::Token(token) => assert_eq!(token, "Hello"),
            other => panic!("expected CompletionChunk::Token, got {other:?}"),
        }
    }

    #[test]
    fn parse_sse_data_done_yields_done() {
        let chunk = parse_sse_data("[DONE]").unwrap();
        assert!(matches!(chunk, CompletionChunk::Done));
    }

    #[test]
    fn parse_sse_data_done_with_whitespace() {
        let chunk = parse_sse_data("  [DONE]  ").unwrap();
        assert!(matches!(chunk, CompletionChunk::Done));
    }

    #[test]
    fn parse_sse_data_empty_delta_yields_empty_token() {
        let data = r#"{"id":"chatcmpl_1","choices":[{"delta":{}}]}"#;

        let chunk = parse_sse_data(data).unwrap();

        match chunk {
            CompletionChunk::Token(token) => assert!(token.is_empty()),
            other => panic!("expected CompletionChunk::Token, got {other:?}"),
        }
    }

    #[test]
    fn parse_sse_data_no_choices_yields_empty_token() {
        let data = r#"{"id":"chatcmpl_1","choices":[]}"#;
        let chunk = parse_sse_data(data).unwrap();
        match chunk {
            CompletionChunk::Token(token) => assert!(token.is_empty()),
            other => panic!("expected CompletionChunk::Token, got {other:?}"),
        }
    }

    #[test]
    fn parse_sse_data_multiple_choices_uses_first() {
        let data = r#"{"id":"1","choices":[{"delta":{"content":"First"}},{"delta":{"content":"Second"}}]}"#;
        let chunk = parse_sse_data(data).unwrap();
        match chunk {
            CompletionChunk::Token(token) => assert_eq!(token, "First"),
            other => panic!("expected CompletionChunk::Token, got {other:?}"),
        }
    }

    #[test]
    fn parse_sse_data_invalid_json_errors() {
        assert!(parse_sse_data("{invalid json}").is_err());
    }

    #[test]
    fn parse_models_response_extracts_ids() {
        let body = r#"{"object":"list","data":[{"id":"openai/gpt-oss-20b","object":"model"},{"id":"llama-3.3-70b-versatile","object":"model"}]}"#;

        let models = parse_models_response(body).unwrap();

        assert_eq!(models, vec!["openai/gpt-oss-20b", "llama-3.3-70b-versatile"]);
    }
}
