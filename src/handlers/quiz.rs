// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{Extension, State},
    http::StatusCode,
    response::IntoResponse,
};
use rand::seq::SliceRandom;
use sqlx::{SqlitePool, types::Json as SqlJson};

use crate::{
    auth::Claims,
    error::AppError,
    models::{
        question::{Question, QuestionView},
        quiz_history::{AdminHistoryEntry, HistoryEntry, QuizHistory, SubmitHistoryRequest},
    },
};

/// Number of questions per quiz session.
const QUIZ_SIZE: usize = 10;

/// Starts a new quiz session.
///
/// Samples up to [`QUIZ_SIZE`] questions uniformly at random without
/// replacement (shuffle-then-take over the pool, so it works the same on any
/// backing store). Returns fewer when the pool is smaller, and 404 when it is
/// empty. Answer keys and authorship are stripped before the response.
pub async fn start_quiz(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let mut questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, title, question, options, correct_answer,
               category, difficulty, created_by, created_at
        FROM questions
        "#,
    )
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch quiz questions: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    if questions.is_empty() {
        return Err(AppError::NotFound("No questions available".to_string()));
    }

    questions.shuffle(&mut rand::thread_rng());
    questions.truncate(QUIZ_SIZE);

    let views: Vec<QuestionView> = questions.into_iter().map(QuestionView::from).collect();

    Ok(Json(views))
}

/// Records a completed quiz attempt for the calling user.
///
/// The entry is stamped at the moment of the call and never mutated
/// afterwards. `quizId` may reference a since-deleted question.
pub async fn submit_history(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<SubmitHistoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id()?;

    let entry = sqlx::query_as::<_, QuizHistory>(
        r#"
        INSERT INTO quiz_history (user_id, quiz_id, score, total_questions, answers, date)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, user_id, quiz_id, score, total_questions, answers, date
        "#,
    )
    .bind(user_id)
    .bind(req.quiz_id)
    .bind(req.score)
    .bind(req.total_questions)
    .bind(SqlJson(&req.answers))
    .bind(chrono::Utc::now())
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to record quiz history: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Lists the calling user's quiz history, newest first, with quiz titles
/// resolved. The join is LEFT so entries survive question deletion.
pub async fn my_history(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id()?;

    let history = sqlx::query_as::<_, HistoryEntry>(
        r#"
        SELECT h.id, h.quiz_id, q.title AS quiz_title,
               h.score, h.total_questions, h.answers, h.date
        FROM quiz_history h
        LEFT JOIN questions q ON q.id = h.quiz_id
        WHERE h.user_id = ?
        ORDER BY h.date DESC, h.id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(&pool)
    .await?;

    Ok(Json(history))
}

/// Lists every user's quiz history, newest first, with usernames and quiz
/// titles resolved.
/// Admin only.
pub async fn all_history(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let history = sqlx::query_as::<_, AdminHistoryEntry>(
        r#"
        SELECT h.id, u.username, h.quiz_id, q.title AS quiz_title,
               h.score, h.total_questions, h.answers, h.date
        FROM quiz_history h
        JOIN users u ON u.id = h.user_id
        LEFT JOIN questions q ON q.id = h.quiz_id
        ORDER BY h.date DESC, h.id DESC
        "#,
    )
    .fetch_all(&pool)
    .await?;

    Ok(Json(history))
}
