pub mod api_client;
pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod quiz_store;

pub use api_client::{DEFAULT_QUESTION_COUNT, QuizApiClient, session_from_wire};
pub use config::Config;
pub use errors::ApiError;
pub use models::*;
pub use quiz_store::QuizStore;
