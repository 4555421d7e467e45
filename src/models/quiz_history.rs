// src/models/quiz_history.rs

use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};

/// Represents the 'quiz_history' table in the database.
/// One row per completed quiz attempt; never mutated after insert.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizHistory {
    pub id: i64,

    #[serde(rename = "user")]
    pub user_id: i64,

    /// Representative question ID for the attempt (the first sampled one).
    #[serde(rename = "quiz")]
    pub quiz_id: i64,

    /// Count of correctly answered questions.
    pub score: i64,

    pub total_questions: i64,

    /// Submitted option indices, null for unanswered, positionally aligned
    /// with the sampled question order.
    pub answers: Json<Vec<Option<i64>>>,

    pub date: chrono::DateTime<chrono::Utc>,
}

/// DTO for submitting a completed quiz attempt.
/// Also produced by the client flow when it leaves `InProgress`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitHistoryRequest {
    pub quiz_id: i64,
    pub score: i64,
    pub total_questions: i64,
    pub answers: Vec<Option<i64>>,
}

/// A history row with the quiz title resolved, as shown to its owner.
/// `quiz_title` is null when the referenced question has been deleted.
#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: i64,
    pub quiz_id: i64,
    pub quiz_title: Option<String>,
    pub score: i64,
    pub total_questions: i64,
    pub answers: Json<Vec<Option<i64>>>,
    pub date: chrono::DateTime<chrono::Utc>,
}

/// A history row with user and quiz identity resolved, for the admin view.
#[derive(Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AdminHistoryEntry {
    pub id: i64,
    pub username: String,
    pub quiz_id: i64,
    pub quiz_title: Option<String>,
    pub score: i64,
    pub total_questions: i64,
    pub answers: Json<Vec<Option<i64>>>,
    pub date: chrono::DateTime<chrono::Utc>,
}
