// src/flow.rs
//
// Client-side quiz-taking state machine. Transport is deliberately absent:
// the caller performs the HTTP calls and feeds their results back in, so the
// machine stays a pure value that tests can drive step by step.
//
//   Loading -> InProgress -> Submitting -> Results
//      \                        /
//       +-------> Error <------+        (retry re-enters Loading)

use crate::models::question::QuestionView;
use crate::models::quiz_history::{QuizHistory, SubmitHistoryRequest};
use crate::scoring;

/// One quiz attempt, from session fetch to rendered result.
/// Every transition consumes the old state and returns the next one.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizFlow {
    /// Session fetch in flight.
    Loading,

    /// Questions on screen; `answers[i]` holds the selected option index
    /// for question `i`, or `None` while unanswered.
    InProgress {
        questions: Vec<QuestionView>,
        current: usize,
        answers: Vec<Option<i64>>,
    },

    /// History record persist in flight.
    Submitting {
        questions: Vec<QuestionView>,
        answers: Vec<Option<i64>>,
    },

    /// Attempt finished; `score` is the server-confirmed persisted score.
    Results {
        score: i64,
        total_questions: i64,
        answers: Vec<Option<i64>>,
    },

    /// A fetch or submit failed; `retry` returns to `Loading`.
    Error { message: String },
}

impl QuizFlow {
    /// Starts a new attempt in the `Loading` state.
    pub fn new() -> Self {
        QuizFlow::Loading
    }

    /// Feeds in the result of the session fetch.
    pub fn questions_loaded(self, result: Result<Vec<QuestionView>, String>) -> Self {
        match (self, result) {
            (QuizFlow::Loading, Ok(questions)) if !questions.is_empty() => {
                let answers = vec![None; questions.len()];
                QuizFlow::InProgress {
                    questions,
                    current: 0,
                    answers,
                }
            }
            (QuizFlow::Loading, Ok(_)) => QuizFlow::Error {
                message: "No questions available".to_string(),
            },
            (QuizFlow::Loading, Err(message)) => QuizFlow::Error { message },
            (other, _) => other,
        }
    }

    /// Records the selected option for the current question.
    /// Re-selecting overwrites the previous choice.
    pub fn select(self, option: i64) -> Self {
        match self {
            QuizFlow::InProgress {
                questions,
                current,
                mut answers,
            } => {
                answers[current] = Some(option);
                QuizFlow::InProgress {
                    questions,
                    current,
                    answers,
                }
            }
            other => other,
        }
    }

    /// Moves to the next question. Never moves past the last one and never
    /// touches answers.
    pub fn next(self) -> Self {
        match self {
            QuizFlow::InProgress {
                questions,
                current,
                answers,
            } => {
                let current = (current + 1).min(questions.len() - 1);
                QuizFlow::InProgress {
                    questions,
                    current,
                    answers,
                }
            }
            other => other,
        }
    }

    /// Moves to the previous question. Never moves before the first one.
    pub fn previous(self) -> Self {
        match self {
            QuizFlow::InProgress {
                questions,
                current,
                answers,
            } => QuizFlow::InProgress {
                questions,
                current: current.saturating_sub(1),
                answers,
            },
            other => other,
        }
    }

    /// True once every question has an answer; gates the submit action.
    pub fn ready_to_submit(&self) -> bool {
        match self {
            QuizFlow::InProgress { answers, .. } => answers.iter().all(Option::is_some),
            _ => false,
        }
    }

    /// Leaves `InProgress` once every question is answered.
    /// Incomplete attempts stay where they are.
    pub fn submit(self) -> Self {
        if !self.ready_to_submit() {
            return self;
        }
        match self {
            QuizFlow::InProgress {
                questions, answers, ..
            } => QuizFlow::Submitting { questions, answers },
            other => other,
        }
    }

    /// Builds the wire request for the history record while `Submitting`.
    ///
    /// The session payload never reveals answer keys, so the key is supplied
    /// here and the score computed locally from it. The first question's ID
    /// stands in as the attempt's quiz identifier.
    pub fn submission(&self, answer_key: &[i64]) -> Option<SubmitHistoryRequest> {
        match self {
            QuizFlow::Submitting { questions, answers } => Some(SubmitHistoryRequest {
                quiz_id: questions[0].id,
                score: scoring::score(answer_key, answers),
                total_questions: questions.len() as i64,
                answers: answers.clone(),
            }),
            _ => None,
        }
    }

    /// Feeds in the result of the history persist.
    pub fn submitted(self, result: Result<QuizHistory, String>) -> Self {
        match (self, result) {
            (QuizFlow::Submitting { .. }, Ok(entry)) => QuizFlow::Results {
                score: entry.score,
                total_questions: entry.total_questions,
                answers: entry.answers.0,
            },
            (QuizFlow::Submitting { .. }, Err(message)) => QuizFlow::Error { message },
            (other, _) => other,
        }
    }

    /// Restarts the attempt after a failure.
    pub fn retry(self) -> Self {
        match self {
            QuizFlow::Error { .. } => QuizFlow::Loading,
            other => other,
        }
    }
}

impl Default for QuizFlow {
    fn default() -> Self {
        QuizFlow::new()
    }
}
