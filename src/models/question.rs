// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use validator::Validate;

use crate::error::AppError;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,

    /// Display label, defaults to "Quiz" when the author does not set one.
    pub title: String,

    /// The prompt text shown to the quiz taker.
    pub question: String,

    /// Ordered list of options (e.g., ["Option A", "Option B"]).
    /// Stored as a JSON array in the database.
    pub options: Json<Vec<String>>,

    /// Zero-based index into `options`. Invariant: within bounds of `options`.
    pub correct_answer: i64,

    /// Free-text classification.
    pub category: String,

    /// One of 'easy', 'medium', 'hard'.
    pub difficulty: String,

    /// ID of the authoring admin user.
    pub created_by: i64,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for sending a question to a quiz taker.
/// Excludes `correct_answer` and `created_by`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    pub id: i64,
    pub question: String,
    pub options: Vec<String>,
    pub category: String,
    pub difficulty: String,
}

impl From<Question> for QuestionView {
    fn from(q: Question) -> Self {
        QuestionView {
            id: q.id,
            question: q.question,
            options: q.options.0,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// DTO for creating or fully replacing a question.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPayload {
    #[serde(default = "default_title")]
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[validate(length(max = 1000))]
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: i64,
    #[validate(length(max = 100))]
    pub category: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

fn default_title() -> String {
    "Quiz".to_string()
}

fn default_difficulty() -> String {
    "medium".to_string()
}

const DIFFICULTIES: [&str; 3] = ["easy", "medium", "hard"];

impl QuestionPayload {
    /// Validates the payload and returns it with text fields trimmed.
    ///
    /// Runs on the write path before any SQL executes:
    /// * `question` and `category` must be non-empty after trimming,
    /// * every option must be non-empty after trimming,
    /// * `difficulty` must be one of easy/medium/hard,
    /// * `correct_answer` must index into `options`.
    pub fn validated(mut self) -> Result<Self, AppError> {
        self.validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        self.question = self.question.trim().to_string();
        if self.question.is_empty() {
            return Err(AppError::BadRequest("Question text is required".to_string()));
        }

        self.category = self.category.trim().to_string();
        if self.category.is_empty() {
            return Err(AppError::BadRequest("Category is required".to_string()));
        }

        self.options = self
            .options
            .into_iter()
            .map(|o| o.trim().to_string())
            .collect();
        if self.options.is_empty() {
            return Err(AppError::BadRequest(
                "At least one option is required".to_string(),
            ));
        }
        if self.options.iter().any(|o| o.is_empty()) {
            return Err(AppError::BadRequest("Options cannot be empty".to_string()));
        }

        if !DIFFICULTIES.contains(&self.difficulty.as_str()) {
            return Err(AppError::BadRequest(
                "Difficulty must be one of: easy, medium, hard".to_string(),
            ));
        }

        if self.correct_answer < 0 || self.correct_answer >= self.options.len() as i64 {
            return Err(AppError::BadRequest(
                "Correct answer index must be within options array bounds".to_string(),
            ));
        }

        Ok(self)
    }
}
