//! Shared SSE -> [`CompletionStream`] adapter.

use eventsource_stream::Eventsource;
use futures_util::StreamExt;
use reqwest::Response;

use crate::provider::{CompletionStream, LlmError, Result};
use crate::types::CompletionChunk;

fn to_stream_error(err: LlmError) -> LlmError {
    match err {
        LlmError::Stream(msg) => LlmError::Stream(msg),
        other => LlmError::Stream(other.to_string()),
    }
}

/// Convert an SSE HTTP [`Response`] into a [`CompletionStream`].
///
/// `handler` receives the SSE event name and data payload for each event, and can either:
/// - return `Ok(Some(chunk))` to emit a chunk
/// - return `Ok(None)` to skip an event
/// - return `Err(_)` to emit a stream error (mapped to `LlmError::Stream`)
pub fn completion_stream_from_sse<H>(response: Response, mut handler: H) -> CompletionStream
where
    H: FnMut(&str, &str) -> Result<Option<CompletionChunk>> + Send + 'static,
{
    let stream = response
        .bytes_stream()
        .eventsource()
        .map(move |event| {
            let event = event.map_err(|e| LlmError::Stream(e.to_string()))?;
            handler(event.event.as_str(), event.data.as_str()).map_err(to_stream_error)
        })
        .filter_map(|result| async move {
            match result {
                Ok(Some(chunk)) => Some(Ok(chunk)),
                Ok(None) => None,
                Err(err) => Some(Err(err)),
            }
        });

    Box::pin(stream)
}
