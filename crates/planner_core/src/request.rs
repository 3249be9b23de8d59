//! Request records for lesson and quiz generation.
//!
//! Both are ephemeral: built from user input, validated, turned into a
//! prompt, and dropped when the interaction ends.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_QUIZ_QUESTIONS: u8 = 3;
pub const MAX_QUIZ_QUESTIONS: u8 = 15;
pub const DEFAULT_QUIZ_QUESTIONS: u8 = 7;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("lesson plan content is empty")]
    EmptyLessonPlan,

    #[error("question count {0} out of range ({MIN_QUIZ_QUESTIONS}..={MAX_QUIZ_QUESTIONS})")]
    QuestionCountOutOfRange(u8),

    #[error("unknown difficulty: {0} (expected easy, medium or hard)")]
    UnknownDifficulty(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Per-level guidance sentence appended to the lesson prompt.
    pub fn guidance(&self) -> &'static str {
        match self {
            Difficulty::Easy => {
                "Use simple language, foundational explainers, and concrete everyday examples."
            }
            Difficulty::Medium => {
                "Use balanced depth, some technical vocabulary, and 1-2 brief real-world examples."
            }
            Difficulty::Hard => {
                "Use advanced terminology, deeper conceptual links, and include extension tasks for high achievers."
            }
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Difficulty {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(ValidationError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// Parameters for a single lesson plan generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonRequest {
    pub subject: String,
    pub topic: String,
    pub grade: String,
    pub duration: String,
    pub learning_objectives: String,
    #[serde(default)]
    pub customization: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "English".to_string()
}

impl LessonRequest {
    /// Reject empty required fields before any network call is made.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, value) in [
            ("subject", &self.subject),
            ("topic", &self.topic),
            ("grade", &self.grade),
            ("duration", &self.duration),
            ("learning objectives", &self.learning_objectives),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(name));
            }
        }
        Ok(())
    }

    /// Prefilled demo inputs for a quick run without typing anything.
    pub fn example() -> Self {
        LessonRequest {
            subject: "Science".to_string(),
            topic: "The Solar System".to_string(),
            grade: "5".to_string(),
            duration: "1 hour".to_string(),
            learning_objectives: "Students will be able to list the eight planets, describe \
                their order from the sun, and compare two planets by size and composition."
                .to_string(),
            customization: "Make it fun and interactive with a quick game and a hands-on \
                mini-model activity."
                .to_string(),
            difficulty: Difficulty::Medium,
            language: default_language(),
        }
    }
}

/// Parameters for generating a quiz from an existing lesson plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    pub lesson_plan: String,
    pub grade: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_num_questions")]
    pub num_questions: u8,
}

fn default_num_questions() -> u8 {
    DEFAULT_QUIZ_QUESTIONS
}

impl QuizRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.lesson_plan.trim().is_empty() {
            return Err(ValidationError::EmptyLessonPlan);
        }
        if self.grade.trim().is_empty() {
            return Err(ValidationError::MissingField("grade"));
        }
        if !(MIN_QUIZ_QUESTIONS..=MAX_QUIZ_QUESTIONS).contains(&self.num_questions) {
            return Err(ValidationError::QuestionCountOutOfRange(self.num_questions));
        }
        Ok(())
    }
}
