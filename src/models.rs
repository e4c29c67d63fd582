use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Quiz category as listed by the remote service.
///
/// Field names mirror the wire format of `GET /category/` exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Slug")]
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique within a session; the zero-based position rendered as a string.
    pub id: String,
    pub text: String,
    /// Order is significant: answers are recorded as indexes into this list.
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct_answer: usize,
    pub explanation: String,
}

/// One user's attempt at a quiz: a fixed question set plus answer progress.
///
/// `answers` always has the same length as `questions`; an entry is `None`
/// until the user picks an option for that question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSession {
    pub id: String,
    /// Comma-joined ids of the categories the quiz was generated from.
    pub category_id: String,
    /// Lowercased difficulty label.
    pub difficulty: String,
    pub questions: Vec<Question>,
    pub current_question_index: usize,
    pub answers: Vec<Option<usize>>,
    /// Unused; scoring lives in `QuizResult`. Kept for shape fidelity.
    pub score: i32,
    /// Unused; never written by result computation. Kept for shape fidelity.
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl QuizSession {
    /// Builds a fresh session over `questions`: cursor at 0, nothing answered.
    pub fn new(
        id: String,
        category_id: String,
        difficulty: String,
        questions: Vec<Question>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let answers = vec![None; questions.len()];
        QuizSession {
            id,
            category_id,
            difficulty,
            questions,
            current_question_index: 0,
            answers,
            score: 0,
            completed: false,
            created_at,
        }
    }
}

/// Scored, read-only summary derived from a session at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub session_id: String,
    pub category_name: String,
    pub difficulty: String,
    pub score: usize,
    pub total_questions: usize,
    /// `score / total * 100`, or 0 when the session has no questions.
    pub percentage: f64,
    pub questions: Vec<QuestionResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub id: String,
    pub text: String,
    pub user_answer: Option<usize>,
    pub correct_answer: usize,
    pub options: Vec<String>,
    pub explanation: String,
    pub is_correct: bool,
}
