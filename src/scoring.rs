// src/scoring.rs

use crate::models::question::Question;

/// Counts the positions where the submitted answer matches the answer key.
///
/// Precondition: `answers.len() == answer_key.len()`, position `i` of
/// `answers` belongs to position `i` of the key. `None` (unanswered) never
/// counts as correct, and an index outside the question's option range is
/// simply incorrect, never an error.
pub fn score(answer_key: &[i64], answers: &[Option<i64>]) -> i64 {
    answer_key
        .iter()
        .zip(answers)
        .filter(|(correct, submitted)| **submitted == Some(**correct))
        .count() as i64
}

/// Extracts the answer key from a set of questions, in presentation order.
pub fn answer_key(questions: &[Question]) -> Vec<i64> {
    questions.iter().map(|q| q.correct_answer).collect()
}

/// Per-question correctness, positionally aligned with the key.
pub fn correctness(answer_key: &[i64], answers: &[Option<i64>]) -> Vec<bool> {
    answer_key
        .iter()
        .zip(answers)
        .map(|(correct, submitted)| *submitted == Some(*correct))
        .collect()
}
