use crate::errors::ApiError;
use crate::models::{QuestionResult, QuizResult, QuizSession};

// Import logging macros
use crate::{log_store_event, log_store_noop};

/// Single source of truth for the in-progress quiz and the latest result.
///
/// Owned state object: construct one empty with [`QuizStore::new`] and hand
/// it by reference to whatever renders it. All mutation goes through the
/// operations below; execution is single-threaded and every update is a
/// synchronous replacement of the relevant sub-state.
///
/// Operations with violated preconditions (no active session, out-of-range
/// index) are silent no-ops by contract, not errors: callers are written
/// against "ignore and leave state unchanged" and must not rely on anything
/// being raised.
#[derive(Debug, Clone, Default)]
pub struct QuizStore {
    current_session: Option<QuizSession>,
    last_result: Option<QuizResult>,
    loading: bool,
    loading_message: String,
    error: Option<ApiError>,
}

impl QuizStore {
    /// Empty store: no session, no result, not loading, no error.
    pub fn new() -> Self {
        QuizStore::default()
    }

    pub fn current_session(&self) -> Option<&QuizSession> {
        self.current_session.as_ref()
    }

    /// Last computed result, held until a new quiz starts or the session is
    /// cleared.
    pub fn last_result(&self) -> Option<&QuizResult> {
        self.last_result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn loading_message(&self) -> &str {
        &self.loading_message
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    /// Replaces the active session wholesale. The caller (the API
    /// integration layer) is responsible for having built a structurally
    /// valid session; nothing is revalidated here.
    pub fn set_current_session(&mut self, session: Option<QuizSession>) {
        match &session {
            Some(s) => log_store_event!("set_current_session", session_id = s.id),
            None => log_store_event!("set_current_session", "session removed"),
        }
        self.current_session = session;
    }

    /// Sets the transient loading flag and its message; the session is
    /// untouched.
    pub fn set_loading(&mut self, loading: bool, message: impl Into<String>) {
        self.loading = loading;
        self.loading_message = message.into();
    }

    /// Sets or clears the transient error; the session is untouched. Each
    /// new error overwrites the previous one, nothing is queued.
    pub fn set_error(&mut self, error: Option<ApiError>) {
        self.error = error;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Records (or re-records) the answer for one question. Overwrites the
    /// existing entry, so a question can be re-answered before advancing;
    /// recording the same answer twice is idempotent.
    ///
    /// No-op when there is no active session or either index is out of
    /// range. An out-of-range index is a caller bug, not a runtime
    /// condition to recover from.
    pub fn record_answer(&mut self, question_index: usize, answer_index: usize) {
        let Some(session) = self.current_session.as_mut() else {
            log_store_noop!("record_answer", "no active session");
            return;
        };
        let Some(question) = session.questions.get(question_index) else {
            log_store_noop!("record_answer", "question index out of range");
            return;
        };
        if answer_index >= question.options.len() {
            log_store_noop!("record_answer", "answer index out of range");
            return;
        }
        session.answers[question_index] = Some(answer_index);
        log_store_event!(
            "record_answer",
            question_index = question_index,
            answer_index = answer_index
        );
    }

    /// Moves the cursor forward one question. Requires the current question
    /// to have a recorded answer; no-op at the last question.
    pub fn next_question(&mut self) {
        let Some(session) = self.current_session.as_mut() else {
            log_store_noop!("next_question", "no active session");
            return;
        };
        let index = session.current_question_index;
        if index + 1 >= session.questions.len() {
            log_store_noop!("next_question", "already at last question");
            return;
        }
        if session.answers[index].is_none() {
            log_store_noop!("next_question", "current question unanswered");
            return;
        }
        session.current_question_index = index + 1;
        log_store_event!("next_question", "cursor advanced");
    }

    /// Moves the cursor back one question; no-op at the first question.
    pub fn previous_question(&mut self) {
        let Some(session) = self.current_session.as_mut() else {
            log_store_noop!("previous_question", "no active session");
            return;
        };
        if session.current_question_index == 0 {
            log_store_noop!("previous_question", "already at first question");
            return;
        }
        session.current_question_index -= 1;
        log_store_event!("previous_question", "cursor retreated");
    }

    /// Scores the active session and stores the result as the last result.
    ///
    /// Pure with respect to session content: reads `questions` and
    /// `answers`, mutates neither, and does not touch the session's
    /// `completed` flag (scoring is kept separate from the session by
    /// design). An unanswered question counts as incorrect. Calling this
    /// again without intervening answers recomputes the identical result.
    ///
    /// Returns `None` (state unchanged) when there is no active session.
    pub fn compute_result(&mut self) -> Option<QuizResult> {
        let session = match self.current_session.as_ref() {
            Some(session) => session,
            None => {
                log_store_noop!("compute_result", "no active session");
                return None;
            }
        };

        let total = session.questions.len();
        let mut score = 0usize;

        let questions: Vec<QuestionResult> = session
            .questions
            .iter()
            .enumerate()
            .map(|(index, q)| {
                let user_answer = session.answers[index];
                let is_correct = user_answer == Some(q.correct_answer);
                if is_correct {
                    score += 1;
                }
                QuestionResult {
                    id: q.id.clone(),
                    text: q.text.clone(),
                    user_answer,
                    correct_answer: q.correct_answer,
                    options: q.options.clone(),
                    explanation: q.explanation.clone(),
                    is_correct,
                }
            })
            .collect();

        let percentage = if total > 0 {
            (score as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        let result = QuizResult {
            session_id: session.id.clone(),
            // The original front end never resolves category ids to names
            // at scoring time; the field stays empty.
            category_name: String::new(),
            difficulty: session.difficulty.clone(),
            score,
            total_questions: total,
            percentage,
            questions,
        };

        log_store_event!("compute_result", session_id = result.session_id);
        self.last_result = Some(result.clone());
        Some(result)
    }

    /// Resets session, last result and transient status in one update.
    /// Used both for "retake quiz" and to recover from an invalid results
    /// view.
    pub fn clear_session(&mut self) {
        self.current_session = None;
        self.last_result = None;
        self.loading = false;
        self.loading_message.clear();
        self.error = None;
        log_store_event!("clear_session", "state reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;
    use chrono::Utc;

    fn question(id: &str, correct: usize, option_count: usize) -> Question {
        Question {
            id: id.to_string(),
            text: format!("Question {id}?"),
            options: (0..option_count).map(|i| format!("Option {i}")).collect(),
            correct_answer: correct,
            explanation: String::new(),
        }
    }

    fn session(questions: Vec<Question>) -> QuizSession {
        QuizSession::new(
            "session-1".to_string(),
            "1,2".to_string(),
            "medium".to_string(),
            questions,
            Utc::now(),
        )
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = QuizStore::new();
        assert!(store.current_session().is_none());
        assert!(store.last_result().is_none());
        assert!(!store.is_loading());
        assert_eq!(store.loading_message(), "");
        assert!(store.error().is_none());
    }

    #[test]
    fn test_record_answer_without_session_is_noop() {
        let mut store = QuizStore::new();
        store.record_answer(0, 0);
        assert!(store.current_session().is_none());
    }

    #[test]
    fn test_record_answer_overwrites_previous_value() {
        let mut store = QuizStore::new();
        store.set_current_session(Some(session(vec![question("0", 1, 4)])));

        store.record_answer(0, 3);
        assert_eq!(store.current_session().unwrap().answers[0], Some(3));

        store.record_answer(0, 1);
        assert_eq!(store.current_session().unwrap().answers[0], Some(1));
    }

    #[test]
    fn test_record_answer_out_of_range_question_index_is_noop() {
        let mut store = QuizStore::new();
        store.set_current_session(Some(session(vec![
            question("0", 0, 4),
            question("1", 0, 4),
            question("2", 0, 4),
        ])));

        store.record_answer(5, 0);
        assert_eq!(
            store.current_session().unwrap().answers,
            vec![None, None, None]
        );
    }

    #[test]
    fn test_record_answer_out_of_range_answer_index_is_noop() {
        let mut store = QuizStore::new();
        store.set_current_session(Some(session(vec![question("0", 1, 4)])));

        store.record_answer(0, 4);
        assert_eq!(store.current_session().unwrap().answers[0], None);
    }

    #[test]
    fn test_next_question_requires_answer() {
        let mut store = QuizStore::new();
        store.set_current_session(Some(session(vec![
            question("0", 0, 4),
            question("1", 0, 4),
        ])));

        store.next_question();
        assert_eq!(store.current_session().unwrap().current_question_index, 0);

        store.record_answer(0, 2);
        store.next_question();
        assert_eq!(store.current_session().unwrap().current_question_index, 1);
    }

    #[test]
    fn test_cursor_is_bounded() {
        let mut store = QuizStore::new();
        store.set_current_session(Some(session(vec![
            question("0", 0, 4),
            question("1", 0, 4),
        ])));

        store.previous_question();
        assert_eq!(store.current_session().unwrap().current_question_index, 0);

        store.record_answer(0, 0);
        store.next_question();
        store.record_answer(1, 0);
        store.next_question();
        assert_eq!(store.current_session().unwrap().current_question_index, 1);

        store.previous_question();
        assert_eq!(store.current_session().unwrap().current_question_index, 0);
    }

    #[test]
    fn test_compute_result_scores_recorded_answers() {
        let mut store = QuizStore::new();
        store.set_current_session(Some(session(vec![
            question("0", 1, 4),
            question("1", 0, 4),
        ])));
        store.record_answer(0, 1);
        store.record_answer(1, 2);

        let result = store.compute_result().unwrap();
        assert_eq!(result.score, 1);
        assert_eq!(result.total_questions, 2);
        assert_eq!(result.percentage, 50.0);
        assert!(result.questions[0].is_correct);
        assert!(!result.questions[1].is_correct);
        assert_eq!(result.questions[1].user_answer, Some(2));
    }

    #[test]
    fn test_compute_result_does_not_mutate_session() {
        let mut store = QuizStore::new();
        store.set_current_session(Some(session(vec![question("0", 1, 4)])));
        store.record_answer(0, 1);

        let before = store.current_session().unwrap().clone();
        store.compute_result().unwrap();
        let after = store.current_session().unwrap();

        assert_eq!(&before, after);
        assert!(!after.completed);
    }

    #[test]
    fn test_compute_result_is_idempotent() {
        let mut store = QuizStore::new();
        store.set_current_session(Some(session(vec![
            question("0", 1, 4),
            question("1", 0, 4),
        ])));
        store.record_answer(0, 1);

        let first = store.compute_result().unwrap();
        let second = store.compute_result().unwrap();
        assert_eq!(first, second);
        assert_eq!(store.last_result(), Some(&second));
    }

    #[test]
    fn test_unanswered_questions_count_incorrect() {
        let mut store = QuizStore::new();
        store.set_current_session(Some(session(vec![
            question("0", 0, 4),
            question("1", 1, 4),
        ])));

        let result = store.compute_result().unwrap();
        assert_eq!(result.score, 0);
        assert_eq!(result.percentage, 0.0);
        for q in &result.questions {
            assert!(!q.is_correct);
            assert_eq!(q.user_answer, None);
        }
    }

    #[test]
    fn test_empty_session_has_zero_percentage() {
        let mut store = QuizStore::new();
        store.set_current_session(Some(session(vec![])));

        let result = store.compute_result().unwrap();
        assert_eq!(result.total_questions, 0);
        assert_eq!(result.score, 0);
        assert_eq!(result.percentage, 0.0);
    }

    #[test]
    fn test_clear_session_resets_everything() {
        let mut store = QuizStore::new();
        store.set_current_session(Some(session(vec![question("0", 0, 4)])));
        store.record_answer(0, 0);
        store.compute_result();
        store.set_loading(true, "Calculating your score...");
        store.set_error(Some(ApiError::Message("boom".to_string())));

        store.clear_session();
        assert!(store.current_session().is_none());
        assert!(store.last_result().is_none());
        assert!(!store.is_loading());
        assert_eq!(store.loading_message(), "");
        assert!(store.error().is_none());

        // Scoring after a clear returns nothing and does not panic.
        assert!(store.compute_result().is_none());
    }
}
