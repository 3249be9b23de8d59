//! Prompt builders for lesson plan and quiz generation.
//!
//! Every user-supplied field appears verbatim in the built prompt; the
//! surrounding template carries the format constraints and the required
//! section headings.

use crate::request::{LessonRequest, QuizRequest};

/// Build the instructional-designer prompt for a lesson plan.
pub fn build_lesson_prompt(request: &LessonRequest) -> String {
    format!(
        "You are an expert instructional designer and teacher. Create a detailed, \
classroom-ready LESSON PLAN.

Constraints & format:
- Write the ENTIRE output in {language}.
- Tailor to grade/level: {grade}
- Total duration: {duration}
- Difficulty level: {difficulty}. {guidance}
- The lesson must be fun, practical, and interactive.
- Return ONLY Markdown (no code fences). Use headings, bullets, and tables where helpful.

Required sections (use clear Markdown headings):
1. Title & Overview (1-2 sentences)
2. Learning Objectives (bulleted, measurable)
3. Required Materials (bulleted)
4. Prior Knowledge (short)
5. Lesson Flow with Time Boxes (table: Step | Time | What to do | Teacher notes)
6. Interactive Activities (2-3 activities; include clear instructions)
7. Differentiation & Accommodations (for mixed ability learners)
8. Assessment (formative + one quick exit ticket)
9. Homework or Extension
10. Safety/Notes (if applicable)

Subject: {subject}
Topic: {topic}
Learning Objectives: {objectives}
Customization request: {customization}
",
        language = request.language,
        grade = request.grade,
        duration = request.duration,
        difficulty = request.difficulty,
        guidance = request.difficulty.guidance(),
        subject = request.subject,
        topic = request.topic,
        objectives = request.learning_objectives,
        customization = request.customization,
    )
}

/// Build the assessment-designer prompt for a quiz over an existing lesson plan.
pub fn build_quiz_prompt(request: &QuizRequest) -> String {
    format!(
        "You are an assessment designer. Based ONLY on the lesson plan content below, \
create a quiz.

- Number of questions: {num_questions}
- Difficulty: {difficulty}
- Grade/Level: {grade}
- Language: {language}
- Mix question types: multiple choice, short answer, and 1 challenge question.
- For multiple choice, include 4 options labeled A-D.
- Provide an **Answer Key** at the end under a collapsible details block.
- Return the quiz as clean Markdown (no code fences).

LESSON PLAN START
---
{lesson_plan}
---
LESSON PLAN END
",
        num_questions = request.num_questions,
        difficulty = request.difficulty,
        grade = request.grade,
        language = request.language,
        lesson_plan = request.lesson_plan,
    )
}
