use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;
use crate::models::{Category, Question, QuizSession};

// Import logging macros
use crate::{log_api_error, log_api_start, log_api_success};

/// Question count requested when the caller has no preference.
pub const DEFAULT_QUESTION_COUNT: usize = 5;

/// Request body for `POST /quiz/generate`, collaborator-owned contract.
#[derive(Debug, Clone, Serialize)]
struct GenerateQuizRequest {
    category_ids: Vec<i64>,
    difficulty: String,
    number_of_questions: usize,
}

/// Wire shape of a generated quiz. Fields the service may omit fall back
/// locally, so everything beyond `questions` is optional here.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedQuiz {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub questions: Vec<GeneratedQuestion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: usize,
}

/// Maps the service's quiz payload into a fresh [`QuizSession`]: cursor at
/// 0, all answers unset. Question ids are the zero-based position rendered
/// as a string (the service does not assign question ids).
///
/// Fallbacks when the service omits a field: empty session id, the
/// requested difficulty, creation time "now".
pub fn session_from_wire(
    quiz: GeneratedQuiz,
    category_ids: &[i64],
    requested_difficulty: &str,
) -> QuizSession {
    let questions: Vec<Question> = quiz
        .questions
        .into_iter()
        .enumerate()
        .map(|(index, q)| Question {
            id: index.to_string(),
            text: q.question,
            options: q.options,
            correct_answer: q.answer,
            explanation: String::new(),
        })
        .collect();

    let category_id = category_ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",");

    QuizSession::new(
        quiz.id.map(|id| id.to_string()).unwrap_or_default(),
        category_id,
        quiz.difficulty
            .unwrap_or_else(|| requested_difficulty.to_string()),
        questions,
        quiz.created_at.unwrap_or_else(Utc::now),
    )
}

/// Thin client for the remote quiz service. One HTTP request per call: no
/// retries, no caching, no timeout overrides.
#[derive(Debug, Clone)]
pub struct QuizApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl QuizApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        QuizApiClient {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /category/` — every call re-fetches the full category list.
    pub async fn get_categories(&self) -> Result<Vec<Category>, ApiError> {
        log_api_start!("get_categories");

        let response = self
            .client
            .get(format!("{}/category/", self.base_url))
            .send()
            .await
            .map_err(|err| {
                log_api_error!("get_categories", error = err, "transport failure");
                ApiError::from(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            let err = ApiError::from_status(status);
            log_api_error!("get_categories", error = err, "non-success status");
            return Err(err);
        }

        let categories: Vec<Category> = response
            .json()
            .await
            .map_err(|err| ApiError::InvalidResponse(err.to_string()))?;

        log_api_success!(
            "get_categories",
            count = categories.len(),
            "categories fetched"
        );
        Ok(categories)
    }

    /// `POST /quiz/generate` — asks the service for a quiz over the given
    /// categories and returns it as a ready-to-play session. The difficulty
    /// label is lowercased before it goes on the wire.
    pub async fn generate_quiz(
        &self,
        category_ids: &[i64],
        difficulty: &str,
        number_of_questions: usize,
    ) -> Result<QuizSession, ApiError> {
        log_api_start!("generate_quiz", category_ids = category_ids);

        let difficulty = difficulty.to_lowercase();
        let request_body = GenerateQuizRequest {
            category_ids: category_ids.to_vec(),
            difficulty: difficulty.clone(),
            number_of_questions,
        };

        let response = self
            .client
            .post(format!("{}/quiz/generate", self.base_url))
            .json(&request_body)
            .send()
            .await
            .map_err(|err| {
                log_api_error!("generate_quiz", error = err, "transport failure");
                ApiError::from(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            let err = ApiError::from_status(status);
            log_api_error!("generate_quiz", error = err, "non-success status");
            return Err(err);
        }

        let quiz: GeneratedQuiz = response
            .json()
            .await
            .map_err(|err| ApiError::InvalidResponse(err.to_string()))?;

        let session = session_from_wire(quiz, category_ids, &difficulty);
        log_api_success!("generate_quiz", session_id = session.id, "quiz generated");
        Ok(session)
    }
}
