//! Error types for homework API requests.

use thiserror::Error;

/// Errors that can occur while fetching homework statuses.
#[derive(Debug, Error)]
pub enum ApiRequestError {
    #[error("Что-то пошло не так при выполнении запроса: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Ошибка при запросе к API: {status}")]
    UnexpectedStatus { status: u16 },

    #[error("Ответ API не является корректным JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiRequestError>;
