use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use groq_client::CompletionParams;
use planner_core::export::default_export_path;
use planner_core::{Config, Difficulty, ExportFormat, LessonRequest};

use crate::generate::{export_if_requested, generate_lesson, print_stream, stream_lesson};

#[derive(Args)]
pub struct PlanArgs {
    /// Subject area, e.g. "Science"
    #[arg(long)]
    subject: Option<String>,

    /// Lesson topic, e.g. "The Solar System"
    #[arg(long)]
    topic: Option<String>,

    /// Grade level, e.g. "5"
    #[arg(long)]
    grade: Option<String>,

    /// Class duration, e.g. "1 hour"
    #[arg(long)]
    duration: Option<String>,

    /// What students should be able to do afterwards
    #[arg(long)]
    objectives: Option<String>,

    /// Free-form adjustments, e.g. "make it hands-on"
    #[arg(long)]
    customization: Option<String>,

    /// Lesson difficulty: easy, medium or hard
    #[arg(long, default_value = "medium")]
    difficulty: Difficulty,

    /// Output language
    #[arg(long, default_value = "English")]
    language: String,

    /// Fill any missing inputs from a built-in example request
    #[arg(long)]
    example: bool,

    /// Write the generated plan to this file
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

impl PlanArgs {
    fn into_request(self) -> (LessonRequest, CompletionParams, ExportTarget, bool) {
        let base = if self.example {
            LessonRequest::example()
        } else {
            LessonRequest {
                subject: String::new(),
                topic: String::new(),
                grade: String::new(),
                duration: String::new(),
                learning_objectives: String::new(),
                customization: String::new(),
                difficulty: self.difficulty,
                language: self.language.clone(),
            }
        };

        let request = LessonRequest {
            subject: self.subject.unwrap_or(base.subject),
            topic: self.topic.unwrap_or(base.topic),
            grade: self.grade.unwrap_or(base.grade),
            duration: self.duration.unwrap_or(base.duration),
            learning_objectives: self.objectives.unwrap_or(base.learning_objectives),
            customization: self.customization.unwrap_or(base.customization),
            difficulty: self.difficulty,
            language: self.language,
        };

        let params = CompletionParams {
            model: self.model,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let export = ExportTarget {
            out: self.out,
            format: self.format,
        };

        (request, params, export, self.no_stream)
    }
}

pub struct ExportTarget {
    pub out: Option<PathBuf>,
    pub format: Option<ExportFormat>,
}

impl ExportTarget {
    /// `--out` wins; `--format` alone falls back to a default file name.
    pub fn resolve(&self, stem: &str) -> Option<PathBuf> {
        match (&self.out, self.format) {
            (Some(path), _) => Some(path.clone()),
            (None, Some(format)) => Some(default_export_path(stem, format)),
            (None, None) => None,
        }
    }
}

pub async fn run(config: &Config, args: PlanArgs, debug: bool) -> anyhow::Result<()> {
    let (request, params, export, no_stream) = args.into_request();
    let client = crate::new_client(config)?;

    if debug {
        eprintln!("{}", format!("[DEBUG] Request: {request:?}").dimmed());
    }

    println!(
        "{}",
        format!("📘 Lesson plan: {} (grade {})", request.topic, request.grade)
            .cyan()
            .bold()
    );
    println!("{}", "─".repeat(50).dimmed());

    let content = if no_stream {
        let completion = generate_lesson(&client, &request, &params).await?;
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
        let stream = stream_lesson(&client, &request, &params).await?;
        print_stream(stream).await?
    };

    println!("{}", "─".repeat(50).dimmed());

    export_if_requested(&content, export.resolve("lesson_plan").as_deref())
}
