//! planner_core - Core types for the lesson planner
//!
//! This crate provides the foundational types used across the planner crates:
//! - `request` - LessonRequest, QuizRequest and their validation
//! - `prompt` - prompt builders for lesson plans and quizzes
//! - `config` - provider configuration from file and environment
//! - `export` - writing generated plans to disk

pub mod config;
pub mod export;
pub mod prompt;
pub mod request;

// Re-export commonly used types
pub use config::{Config, DEFAULT_API_BASE, DEFAULT_MODEL};
pub use export::ExportFormat;
pub use request::{
    Difficulty, LessonRequest, QuizRequest, ValidationError, DEFAULT_QUIZ_QUESTIONS,
    MAX_QUIZ_QUESTIONS, MIN_QUIZ_QUESTIONS,
};
