//! Guided mode: ask for every input on the terminal, then generate.

use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

use groq_client::CompletionParams;
use planner_core::{
    Config, Difficulty, LessonRequest, QuizRequest, DEFAULT_QUIZ_QUESTIONS,
};

use crate::generate::{export_if_requested, print_stream, stream_lesson, stream_quiz};

fn prompt(label: &str, default: &str) -> anyhow::Result<String> {
    if default.is_empty() {
        print!("{} ", format!("{label}:").cyan().bold());
    } else {
        print!(
            "{} {} ",
            format!("{label}:").cyan().bold(),
            format!("[{default}]").dimmed()
        );
    }
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let input = input.trim();

    Ok(if input.is_empty() {
        default.to_string()
    } else {
        input.to_string()
    })
}

fn prompt_difficulty(default: Difficulty) -> anyhow::Result<Difficulty> {
    loop {
        let answer = prompt("Difficulty (easy/medium/hard)", &default.to_string())?;
        match Difficulty::from_str(&answer) {
            Ok(difficulty) => return Ok(difficulty),
            Err(error) => println!("{}", format!("❌ {error}").red()),
        }
    }
}

fn prompt_yes_no(label: &str) -> anyhow::Result<bool> {
    let answer = prompt(label, "y/N")?;
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

pub async fn run(config: &Config, debug: bool) -> anyhow::Result<()> {
    let client = crate::new_client(config)?;
    let example = LessonRequest::example();

    println!("{}", "🎓 Lesson Planner".cyan().bold());
    println!(
        "{}",
        "Press Enter to accept the bracketed default for any question.".dimmed()
    );
    println!();

    let request = LessonRequest {
        subject: prompt("Subject", &example.subject)?,
        topic: prompt("Topic", &example.topic)?,
        grade: prompt("Grade level", &example.grade)?,
        duration: prompt("Class duration", &example.duration)?,
        learning_objectives: prompt("Learning objectives", &example.learning_objectives)?,
        customization: prompt("Customization (optional)", "")?,
        difficulty: prompt_difficulty(Difficulty::default())?,
        language: prompt("Language", "English")?,
    };

    if debug {
        eprintln!("{}", format!("[DEBUG] Request: {request:?}").dimmed());
    }

    println!();
    println!(
        "{}",
        format!("📘 Lesson plan: {} (grade {})", request.topic, request.grade)
            .cyan()
            .bold()
    );
    println!("{}", "─".repeat(50).dimmed());

    let params = CompletionParams::default();
    let stream = stream_lesson(&client, &request, &params).await?;
    let lesson_plan = print_stream(stream).await?;

    println!("{}", "─".repeat(50).dimmed());

    let out = prompt("Save to file (blank to skip)", "")?;
    if !out.is_empty() {
        export_if_requested(&lesson_plan, Some(&PathBuf::from(out)))?;
    }

    if !prompt_yes_no("Generate a quiz from this lesson plan?")? {
        println!("{}", "👋 Done".cyan());
        return Ok(());
    }

    let questions = loop {
        let answer = prompt("Number of questions", &DEFAULT_QUIZ_QUESTIONS.to_string())?;
        match answer.parse::<u8>() {
            Ok(n) => break n,
            Err(_) => println!("{}", format!("❌ not a number: {answer}").red()),
        }
    };

    let quiz_request = QuizRequest {
        lesson_plan,
        grade: request.grade.clone(),
        difficulty: request.difficulty,
        language: request.language.clone(),
        num_questions: questions,
    };

    println!();
    println!(
        "{}",
        format!("📝 Quiz: {} questions (grade {})", quiz_request.num_questions, quiz_request.grade)
            .cyan()
            .bold()
    );
    println!("{}", "─".repeat(50).dimmed());

    let stream = stream_quiz(&client, &quiz_request, &params).await?;
    let quiz = print_stream(stream).await?;

    println!("{}", "─".repeat(50).dimmed());

    let out = prompt("Save quiz to file (blank to skip)", "")?;
    if !out.is_empty() {
        export_if_requested(&quiz, Some(&PathBuf::from(out)))?;
    }

    println!("{}", "👋 Done".cyan());
    Ok(())
}
