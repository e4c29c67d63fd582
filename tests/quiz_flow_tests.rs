use newsquiz_client::{ApiError, Question, QuizSession, QuizStore, session_from_wire};
use serde_json::json;

fn sample_session() -> QuizSession {
    let quiz = serde_json::from_value(json!({
        "id": 17,
        "difficulty": "medium",
        "created_at": "2026-08-20T09:30:00Z",
        "questions": [
            {
                "question": "Which agency launched the probe?",
                "options": ["NASA", "ESA", "JAXA", "ISRO"],
                "answer": 1
            },
            {
                "question": "What was the reported inflation figure?",
                "options": ["2.1%", "3.4%", "4.0%"],
                "answer": 0
            },
            {
                "question": "Which country hosted the summit?",
                "options": ["Brazil", "Kenya"],
                "answer": 1
            }
        ]
    }))
    .unwrap();
    session_from_wire(quiz, &[3, 7], "medium")
}

#[test]
fn test_full_attempt_from_wire_to_result() {
    let mut store = QuizStore::new();
    store.set_current_session(Some(sample_session()));

    // Answer while navigating forward, with one revision along the way.
    store.record_answer(0, 3);
    store.record_answer(0, 1); // changed their mind
    store.next_question();
    store.record_answer(1, 2);
    store.next_question();
    store.record_answer(2, 1);

    let result = store.compute_result().unwrap();
    assert_eq!(result.session_id, "17");
    assert_eq!(result.total_questions, 3);
    assert_eq!(result.score, 2);
    assert!((result.percentage - 200.0 / 3.0).abs() < 1e-9);
    assert_eq!(result.difficulty, "medium");
    assert_eq!(result.category_name, "");

    let verdicts: Vec<bool> = result.questions.iter().map(|q| q.is_correct).collect();
    assert_eq!(verdicts, vec![true, false, true]);
}

#[test]
fn test_score_stays_within_question_count() {
    let mut store = QuizStore::new();
    store.set_current_session(Some(sample_session()));

    // Answer everything correctly, then recompute after spoiling one.
    store.record_answer(0, 1);
    store.record_answer(1, 0);
    store.record_answer(2, 1);

    let result = store.compute_result().unwrap();
    assert_eq!(result.score, 3);
    assert!(result.score <= result.total_questions);

    store.record_answer(1, 1);
    let result = store.compute_result().unwrap();
    assert_eq!(result.score, 2);
}

#[test]
fn test_forward_navigation_blocked_until_answered() {
    let mut store = QuizStore::new();
    store.set_current_session(Some(sample_session()));

    store.next_question();
    assert_eq!(store.current_session().unwrap().current_question_index, 0);

    store.record_answer(0, 0);
    store.next_question();
    assert_eq!(store.current_session().unwrap().current_question_index, 1);

    // Going back never requires anything.
    store.previous_question();
    assert_eq!(store.current_session().unwrap().current_question_index, 0);
}

#[test]
fn test_retake_resets_the_store() {
    let mut store = QuizStore::new();
    store.set_current_session(Some(sample_session()));
    store.record_answer(0, 1);
    store.compute_result().unwrap();
    store.set_error(Some(ApiError::Message("stale".to_string())));

    store.clear_session();

    assert!(store.current_session().is_none());
    assert!(store.last_result().is_none());
    assert!(store.error().is_none());
    assert!(store.compute_result().is_none());

    // A second attempt starts from a clean cursor.
    store.set_current_session(Some(sample_session()));
    let session = store.current_session().unwrap();
    assert_eq!(session.current_question_index, 0);
    assert_eq!(session.answers, vec![None, None, None]);
}

#[test]
fn test_empty_quiz_scores_immediately_without_panicking() {
    // A 2xx generate response with no questions is valid; the attempt has
    // nothing to ask and goes straight to a zero-total result.
    let quiz = serde_json::from_value(json!({
        "id": 23,
        "difficulty": "easy",
        "questions": []
    }))
    .unwrap();

    let mut store = QuizStore::new();
    store.set_current_session(Some(session_from_wire(quiz, &[4], "easy")));

    let session = store.current_session().unwrap();
    assert!(session.questions.is_empty());
    assert_eq!(session.current_question_index, 0);

    let result = store.compute_result().unwrap();
    assert_eq!(result.total_questions, 0);
    assert_eq!(result.score, 0);
    assert_eq!(result.percentage, 0.0);
    assert!(result.questions.is_empty());
}

#[test]
fn test_second_generate_replaces_outstanding_session() {
    // No de-duplication guard exists: whichever generated session lands
    // last wins, even mid-attempt.
    let mut store = QuizStore::new();
    store.set_current_session(Some(sample_session()));
    store.record_answer(0, 1);

    let replacement = QuizSession::new(
        "99".to_string(),
        "5".to_string(),
        "hard".to_string(),
        vec![Question {
            id: "0".to_string(),
            text: "Replacement question?".to_string(),
            options: vec!["Yes".to_string(), "No".to_string()],
            correct_answer: 0,
            explanation: String::new(),
        }],
        chrono::Utc::now(),
    );
    store.set_current_session(Some(replacement));

    let session = store.current_session().unwrap();
    assert_eq!(session.id, "99");
    assert_eq!(session.answers, vec![None]);
}
