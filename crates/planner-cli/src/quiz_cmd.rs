use anyhow::Context;
use clap::Args;
use colored::Colorize;
use std::io::Read;
use std::path::PathBuf;

use groq_client::CompletionParams;
use planner_core::{Config, Difficulty, ExportFormat, QuizRequest, DEFAULT_QUIZ_QUESTIONS};

use crate::generate::{export_if_requested, generate_quiz, print_stream, stream_quiz};
use crate::plan_cmd::ExportTarget;

#[derive(Args)]
pub struct QuizArgs {
    /// Lesson plan file to quiz on; reads stdin when omitted
    #[arg(long)]
    lesson: Option<PathBuf>,

    /// Grade level the quiz targets
    #[arg(long)]
    grade: String,

    /// Quiz difficulty: easy, medium or hard
    #[arg(long, default_value = "medium")]
    difficulty: Difficulty,

    /// Output language
    #[arg(long, default_value = "English")]
    language: String,

    /// Number of questions
    #[arg(long, default_value_t = DEFAULT_QUIZ_QUESTIONS)]
    questions: u8,

    /// Write the generated quiz to this file
    #[arg(long)]
    out: Option<PathBuf>,

    /// Export format (md or txt); picks a default file name when --out is omitted
    #[arg(long)]
    format: Option<ExportFormat>,

    /// Wait for the full response instead of streaming tokens
    #[arg(long)]
    no_stream: bool,

    /// Override the configured model for this request
    #[arg(long)]
    model: Option<String>,

    /// Cap on generated tokens
    #[arg(long)]
    max_tokens: Option<u32>,

    /// Sampling temperature
    #[arg(long)]
    temperature: Option<f32>,
}

fn read_lesson_plan(source: Option<&PathBuf>) -> anyhow::Result<String> {
    match source {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            eprintln!("{}", "reading lesson plan from stdin...".dimmed());
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read lesson plan from stdin")?;
            Ok(buffer)
        }
    }
}

pub async fn run(config: &Config, args: QuizArgs, debug: bool) -> anyhow::Result<()> {
    let lesson_plan = read_lesson_plan(args.lesson.as_ref())?;

    let request = QuizRequest {
        lesson_plan,
        grade: args.grade,
        difficulty: args.difficulty,
        language: args.language,
        num_questions: args.questions,
    };

    let params = CompletionParams {
        model: args.model,
        max_tokens: args.max_tokens,
        temperature: args.temperature,
    };

    let export = ExportTarget {
        out: args.out,
        format: args.format,
    };

    let client = crate::new_client(config)?;

    if debug {
        eprintln!(
            "{}",
            format!(
                "[DEBUG] Quiz: grade={}, difficulty={}, questions={}, lesson plan {} bytes",
                request.grade,
                request.difficulty,
                request.num_questions,
                request.lesson_plan.len()
            )
            .dimmed()
        );
    }

    println!(
        "{}",
        format!("📝 Quiz: {} questions (grade {})", request.num_questions, request.grade)
            .cyan()
            .bold()
    );
    println!("{}", "─".repeat(50).dimmed());

    let content = if args.no_stream {
        let completion = generate_quiz(&client, &request, &params).await?;
        println!("{}", completion.content);
        if let Some(usage) = completion.usage {
            println!(
                "{}",
                format!(
                    "📊 Tokens: prompt={}, completion={}, total={}",
                    usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
                )
                .dimmed()
            );
        }
        completion.content
    } else {
        let stream = stream_quiz(&client, &request, &params).await?;
        print_stream(stream).await?
    };

    println!("{}", "─".repeat(50).dimmed());

    export_if_requested(&content, export.resolve("quiz").as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_lesson_plan_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("plan.md");
        std::fs::write(&path, "# Plan\n").expect("write");

        let content = read_lesson_plan(Some(&path)).expect("content");
        assert_eq!(content, "# Plan\n");
    }

    #[test]
    fn read_lesson_plan_missing_file_names_the_path() {
        let err = read_lesson_plan(Some(&PathBuf::from("no/such/plan.md"))).expect_err("missing");
        assert!(err.to_string().contains("no/such/plan.md"), "err: {err:#}");
    }
}
