// src/handlers/questions.rs
//
// Admin CRUD over the question store. All writes run the payload validation
// (trim checks and the answer-index bounds invariant) before touching SQL.

use axum::{
    Json,
    extract::{Extension, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::{SqlitePool, types::Json as SqlJson};

use crate::{
    auth::Claims,
    error::AppError,
    models::question::{Question, QuestionPayload},
};

/// Lists all questions including answer keys, newest-created first.
/// Admin only.
pub async fn list_questions(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, title, question, options, correct_answer,
               category, difficulty, created_by, created_at
        FROM questions
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(&pool)
    .await?;

    Ok(Json(questions))
}

/// Creates a new quiz question authored by the calling admin.
/// Admin only.
pub async fn create_question(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<QuestionPayload>,
) -> Result<impl IntoResponse, AppError> {
    let payload = payload.validated()?;
    let created_by = claims.user_id()?;

    let question = sqlx::query_as::<_, Question>(
        r#"
        INSERT INTO questions
        (title, question, options, correct_answer, category, difficulty, created_by, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id, title, question, options, correct_answer,
                  category, difficulty, created_by, created_at
        "#,
    )
    .bind(&payload.title)
    .bind(&payload.question)
    .bind(SqlJson(&payload.options))
    .bind(payload.correct_answer)
    .bind(&payload.category)
    .bind(&payload.difficulty)
    .bind(created_by)
    .bind(chrono::Utc::now())
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create question: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok((StatusCode::CREATED, Json(question)))
}

/// Fully replaces a question's content, options, answer key, category and
/// difficulty. Last writer wins; `title` and authorship are untouched.
/// Admin only.
pub async fn update_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(payload): Json<QuestionPayload>,
) -> Result<impl IntoResponse, AppError> {
    let payload = payload.validated()?;

    let question = sqlx::query_as::<_, Question>(
        r#"
        UPDATE questions
        SET question = ?, options = ?, correct_answer = ?, category = ?, difficulty = ?
        WHERE id = ?
        RETURNING id, title, question, options, correct_answer,
                  category, difficulty, created_by, created_at
        "#,
    )
    .bind(&payload.question)
    .bind(SqlJson(&payload.options))
    .bind(payload.correct_answer)
    .bind(&payload.category)
    .bind(&payload.difficulty)
    .bind(id)
    .fetch_optional(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to update question: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?
    .ok_or(AppError::NotFound("Question not found".to_string()))?;

    Ok(Json(question))
}

/// Deletes a quiz question by ID. Hard delete; history rows that reference
/// the question keep their dangling ID.
/// Admin only.
pub async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let result = sqlx::query("DELETE FROM questions WHERE id = ?")
        .bind(id)
        .execute(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete question: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Question not found".to_string()));
    }

    Ok(Json(
        serde_json::json!({"message": "Question deleted successfully"}),
    ))
}
