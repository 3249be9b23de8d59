//! Orchestration between validated requests and the text provider.
//!
//! Every entry point validates its request before anything touches the
//! network, so bad input fails fast and never spends tokens.

use anyhow::Context;
use colored::Colorize;
use futures_util::StreamExt;
use std::io::{self, Write};

use groq_client::{
    ChatMessage, Completion, CompletionChunk, CompletionParams, CompletionStream, TextProvider,
};
use planner_core::prompt::{build_lesson_prompt, build_quiz_prompt};
use planner_core::{LessonRequest, QuizRequest};

pub async fn generate_lesson<P: TextProvider + ?Sized>(
    provider: &P,
    request: &LessonRequest,
    params: &CompletionParams,
) -> anyhow::Result<Completion> {
    request.validate()?;
    let messages = [ChatMessage::user(build_lesson_prompt(request))];
    let completion = provider
        .complete(&messages, params)
        .await
        .context("lesson plan generation failed")?;
    Ok(completion)
}

pub async fn stream_lesson<P: TextProvider + ?Sized>(
    provider: &P,
    request: &LessonRequest,
    params: &CompletionParams,
) -> anyhow::Result<CompletionStream> {
    request.validate()?;
    let messages = [ChatMessage::user(build_lesson_prompt(request))];
    let stream = provider
        .complete_stream(&messages, params)
        .await
        .context("lesson plan generation failed")?;
    Ok(stream)
}

pub async fn generate_quiz<P: TextProvider + ?Sized>(
    provider: &P,
    request: &QuizRequest,
    params: &CompletionParams,
) -> anyhow::Result<Completion> {
    request.validate()?;
    let messages = [ChatMessage::user(build_quiz_prompt(request))];
    let completion = provider
        .complete(&messages, params)
        .await
        .context("quiz generation failed")?;
    Ok(completion)
}

pub async fn stream_quiz<P: TextProvider + ?Sized>(
    provider: &P,
    request: &QuizRequest,
    params: &CompletionParams,
) -> anyhow::Result<CompletionStream> {
    request.validate()?;
    let messages = [ChatMessage::user(build_quiz_prompt(request))];
    let stream = provider
        .complete_stream(&messages, params)
        .await
        .context("quiz generation failed")?;
    Ok(stream)
}

/// Print tokens to stdout as they arrive and return the full accumulated text.
pub async fn print_stream(mut stream: CompletionStream) -> anyhow::Result<String> {
    let mut content_buffer = String::new();

    while let Some(chunk) = stream.next().await {
        match chunk? {
            CompletionChunk::Token(token) => {
                print!("{token}");
                io::stdout().flush()?;
                content_buffer.push_str(&token);
            }
            CompletionChunk::Done => break,
        }
    }
    println!();

    Ok(content_buffer)
}

/// Export to `path` when given, reporting where the content landed.
pub fn export_if_requested(
    content: &str,
    out: Option<&std::path::Path>,
) -> anyhow::Result<()> {
    let Some(path) = out else {
        return Ok(());
    };

    planner_core::export::export_plan(path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;

    let kind = match planner_core::ExportFormat::from_path(path) {
        planner_core::ExportFormat::Markdown => "Markdown",
        planner_core::ExportFormat::Text => "plain text",
    };
    println!(
        "{}",
        format!("💾 Saved {} to {}", kind, path.display()).green()
    );
    Ok(())
}
