// tests/quiz_flow_tests.rs
//
// Pure tests for the scoring function and the quiz-taking state machine.
// No database or server involved.

use quiz_backend::flow::QuizFlow;
use quiz_backend::models::question::QuestionView;
use quiz_backend::models::quiz_history::QuizHistory;
use quiz_backend::scoring;
use sqlx::types::Json;

fn view(id: i64) -> QuestionView {
    QuestionView {
        id,
        question: format!("Question {}", id),
        options: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        category: "general".to_string(),
        difficulty: "medium".to_string(),
    }
}

fn history_entry(score: i64, total: i64, answers: Vec<Option<i64>>) -> QuizHistory {
    QuizHistory {
        id: 1,
        user_id: 1,
        quiz_id: 1,
        score,
        total_questions: total,
        answers: Json(answers),
        date: chrono::Utc::now(),
    }
}

#[test]
fn score_counts_matching_positions() {
    let key = vec![1, 0, 2];
    let answers = vec![Some(1), None, Some(2)];

    assert_eq!(scoring::score(&key, &answers), 2);
}

#[test]
fn score_is_deterministic() {
    let key = vec![0, 1, 2, 0];
    let answers = vec![Some(0), Some(2), Some(2), None];

    let first = scoring::score(&key, &answers);
    let second = scoring::score(&key, &answers);
    assert_eq!(first, second);
}

#[test]
fn all_unanswered_scores_zero() {
    let key = vec![0, 1, 2];
    let answers = vec![None, None, None];

    assert_eq!(scoring::score(&key, &answers), 0);
}

#[test]
fn all_correct_scores_full() {
    let key = vec![3, 1, 0];
    let answers: Vec<Option<i64>> = key.iter().copied().map(Some).collect();

    assert_eq!(scoring::score(&key, &answers), key.len() as i64);
}

#[test]
fn out_of_range_answer_is_incorrect_not_an_error() {
    let key = vec![1, 1];
    let answers = vec![Some(99), Some(-5)];

    assert_eq!(scoring::score(&key, &answers), 0);
}

#[test]
fn correctness_aligns_with_positions() {
    let key = vec![1, 0, 2];
    let answers = vec![Some(1), None, Some(0)];

    assert_eq!(scoring::correctness(&key, &answers), vec![true, false, false]);
}

#[test]
fn load_success_enters_in_progress_with_blank_answers() {
    let flow = QuizFlow::new().questions_loaded(Ok(vec![view(1), view(2), view(3)]));

    match flow {
        QuizFlow::InProgress {
            questions,
            current,
            answers,
        } => {
            assert_eq!(questions.len(), 3);
            assert_eq!(current, 0);
            assert_eq!(answers, vec![None, None, None]);
        }
        other => panic!("expected InProgress, got {:?}", other),
    }
}

#[test]
fn load_failure_enters_error_and_retry_reloads() {
    let flow = QuizFlow::new().questions_loaded(Err("connection refused".to_string()));
    assert!(matches!(flow, QuizFlow::Error { .. }));

    let flow = flow.retry();
    assert_eq!(flow, QuizFlow::Loading);
}

#[test]
fn empty_question_list_is_an_error() {
    let flow = QuizFlow::new().questions_loaded(Ok(vec![]));
    assert!(matches!(flow, QuizFlow::Error { .. }));
}

#[test]
fn selection_overwrites_current_slot() {
    let flow = QuizFlow::new()
        .questions_loaded(Ok(vec![view(1), view(2)]))
        .select(0)
        .select(2);

    match flow {
        QuizFlow::InProgress { answers, .. } => {
            assert_eq!(answers, vec![Some(2), None]);
        }
        other => panic!("expected InProgress, got {:?}", other),
    }
}

#[test]
fn navigation_clamps_and_never_touches_answers() {
    let mut flow = QuizFlow::new()
        .questions_loaded(Ok(vec![view(1), view(2), view(3)]))
        .select(1);

    // Walk far past the end, then far before the start.
    for _ in 0..10 {
        flow = flow.next();
    }
    match &flow {
        QuizFlow::InProgress { current, .. } => assert_eq!(*current, 2),
        other => panic!("expected InProgress, got {:?}", other),
    }

    for _ in 0..10 {
        flow = flow.previous();
    }
    match &flow {
        QuizFlow::InProgress { current, answers, .. } => {
            assert_eq!(*current, 0);
            assert_eq!(*answers, vec![Some(1), None, None]);
        }
        other => panic!("expected InProgress, got {:?}", other),
    }
}

#[test]
fn submit_is_gated_on_a_complete_answer_sheet() {
    let flow = QuizFlow::new()
        .questions_loaded(Ok(vec![view(1), view(2)]))
        .select(0);

    assert!(!flow.ready_to_submit());
    let flow = flow.submit();
    assert!(matches!(flow, QuizFlow::InProgress { .. }));

    let flow = flow.next().select(1);
    assert!(flow.ready_to_submit());
    let flow = flow.submit();
    assert!(matches!(flow, QuizFlow::Submitting { .. }));
}

#[test]
fn submission_carries_score_and_first_question_id() {
    let flow = QuizFlow::new()
        .questions_loaded(Ok(vec![view(7), view(8), view(9)]))
        .select(1)
        .next()
        .select(0)
        .next()
        .select(2)
        .submit();

    let key = vec![1, 2, 2];
    let req = flow.submission(&key).expect("submission available");

    assert_eq!(req.quiz_id, 7);
    assert_eq!(req.score, 2);
    assert_eq!(req.total_questions, 3);
    assert_eq!(req.answers, vec![Some(1), Some(0), Some(2)]);
}

#[test]
fn confirmed_submit_enters_results_with_server_score() {
    let flow = QuizFlow::new()
        .questions_loaded(Ok(vec![view(1)]))
        .select(0)
        .submit()
        .submitted(Ok(history_entry(1, 1, vec![Some(0)])));

    match flow {
        QuizFlow::Results {
            score,
            total_questions,
            answers,
        } => {
            assert_eq!(score, 1);
            assert_eq!(total_questions, 1);
            assert_eq!(answers, vec![Some(0)]);
        }
        other => panic!("expected Results, got {:?}", other),
    }
}

#[test]
fn failed_submit_enters_error_with_retry() {
    let flow = QuizFlow::new()
        .questions_loaded(Ok(vec![view(1)]))
        .select(0)
        .submit()
        .submitted(Err("persist failed".to_string()));

    match &flow {
        QuizFlow::Error { message } => assert_eq!(message, "persist failed"),
        other => panic!("expected Error, got {:?}", other),
    }

    assert_eq!(flow.retry(), QuizFlow::Loading);
}

#[test]
fn submission_is_unavailable_outside_submitting() {
    let flow = QuizFlow::new().questions_loaded(Ok(vec![view(1)]));
    assert!(flow.submission(&[0]).is_none());
}
