//! Integration tests for GroqClient against a mocked chat-completions API.

use futures_util::StreamExt;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use groq_client::{
    ChatMessage, CompletionChunk, CompletionParams, GroqClient, LlmError, TextProvider,
};
use planner_core::Config;

fn client_for(server: &MockServer) -> GroqClient {
    let config = Config {
        api_key: Some("gsk_test".to_string()),
        api_base: Some(server.uri()),
        model: None,
    };
    GroqClient::new(&config).expect("client")
}

#[tokio::test]
async fn complete_returns_response_content_unmodified() {
    let mock_server = MockServer::start().await;

    let generated = "# The Solar System\n\n| Step | Time |\n|---|---|\n| Hook | 5m |\n";

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer gsk_test"))
        .and(body_partial_json(serde_json::json!({ "stream": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "model": "openai/gpt-oss-20b",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": generated },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 42, "completion_tokens": 120, "total_tokens": 162 }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let completion = client
        .complete(
            &[ChatMessage::user("make a lesson plan")],
            &CompletionParams::default(),
        )
        .await
        .expect("completion");

    assert_eq!(completion.content, generated);
    assert_eq!(completion.usage.expect("usage").total_tokens, 162);
}

#[tokio::test]
async fn complete_sends_configured_model_and_messages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(serde_json::json!({
            "model": "llama-3.3-70b-versatile",
            "messages": [{ "role": "user", "content": "hello" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": "hi" } }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let params = CompletionParams {
        model: Some("llama-3.3-70b-versatile".to_string()),
        ..Default::default()
    };

    let completion = client
        .complete(&[ChatMessage::user("hello")], &params)
        .await
        .expect("completion");

    assert_eq!(completion.content, "hi");
}

#[tokio::test]
async fn complete_surfaces_api_errors_with_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string(r#"{"error":{"message":"Invalid API Key"}}"#),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .complete(
            &[ChatMessage::user("hello")],
            &CompletionParams::default(),
        )
        .await
        .expect_err("api error");

    match err {
        LlmError::Api(message) => {
            assert!(message.contains("401"), "message: {message}");
            assert!(message.contains("Invalid API Key"), "message: {message}");
        }
        other => panic!("expected LlmError::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn complete_stream_yields_tokens_in_order() {
    let mock_server = MockServer::start().await;

    let sse_body = concat!(
        "data: {\"id\":\"1\",\"choices\":[{\"delta\":{\"role\":\"assistant\",\"content\":\"# \"}}]}\n\n",
        "data: {\"id\":\"1\",\"choices\":[{\"delta\":{\"content\":\"Lesson\"}}]}\n\n",
        "data: {\"id\":\"1\",\"choices\":[{\"delta\":{\"content\":\" Plan\"}}]}\n\n",
        "data: [DONE]\n\n",
    );

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(serde_json::json!({ "stream": true })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/event-stream")
                .set_body_string(sse_body),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut stream = client
        .complete_stream(
            &[ChatMessage::user("make a lesson plan")],
            &CompletionParams::default(),
        )
        .await
        .expect("stream");

    let mut content = String::new();
    while let Some(chunk) = stream.next().await {
        match chunk.expect("chunk") {
            CompletionChunk::Token(token) => content.push_str(&token),
            CompletionChunk::Done => break,
        }
    }

    assert_eq!(content, "# Lesson Plan");
}

#[tokio::test]
async fn complete_stream_surfaces_http_error_before_streaming() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .complete_stream(
            &[ChatMessage::user("hello")],
            &CompletionParams::default(),
        )
        .await
        .err()
        .expect("api error");

    assert!(matches!(err, LlmError::Api(_)));
}

#[tokio::test]
async fn list_models_returns_model_ids() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/models"))
        .and(header("Authorization", "Bearer gsk_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "list",
            "data": [
                { "id": "openai/gpt-oss-20b", "object": "model" },
                { "id": "llama-3.3-70b-versatile", "object": "model" }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let models = client.list_models().await.expect("models");

    assert_eq!(
        models,
        vec!["openai/gpt-oss-20b", "llama-3.3-70b-versatile"]
    );
}

#[tokio::test]
async fn missing_api_key_never_reaches_the_network() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = Config {
        api_key: None,
        api_base: Some(mock_server.uri()),
        model: None,
    };

    let err = GroqClient::new(&config).err().expect("missing key");
    assert!(matches!(err, LlmError::MissingApiKey));
}
