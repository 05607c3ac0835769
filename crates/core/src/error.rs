//! Error types for response validation and status mapping.

use thiserror::Error;

/// The API answer does not have the documented shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("Ответ API не является словарём")]
    NotAMapping,

    #[error("Список homeworks отсутствует в ответе или имеет неверный тип")]
    MissingOrWrongTypeHomeworks,
}

/// A single homework record cannot be turned into a notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    #[error("В ответе API домашки нет ключа \"{field}\"")]
    MissingField { field: &'static str },

    #[error("Статус проверки для работы \"{homework_name}\" неизвестен: {}", .status.as_deref().unwrap_or("отсутствует"))]
    UnknownStatus {
        homework_name: String,
        status: Option<String>,
    },
}

/// Result type for response validation.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Result type for status mapping.
pub type StatusResult<T> = Result<T, StatusError>;
