//! Mapping of homework records to chat messages.

use crate::{HomeworkStatus, StatusError, StatusResult};
use serde_json::Value;
use tracing::debug;

/// Record field with the homework name.
pub const NAME_KEY: &str = "homework_name";

/// Record field with the review status code.
pub const STATUS_KEY: &str = "status";

/// Build the status change message for one homework record.
pub fn parse_status(homework: &Value) -> StatusResult<String> {
    let Some(name) = homework.get(NAME_KEY).and_then(Value::as_str) else {
        let err = StatusError::MissingField { field: NAME_KEY };
        debug!("{}", err);
        return Err(err);
    };

    let code = homework.get(STATUS_KEY).and_then(Value::as_str);
    let status = code.and_then(|c| c.parse::<HomeworkStatus>().ok());

    match status {
        Some(status) => Ok(format_status_message(name, status)),
        None => {
            let err = StatusError::UnknownStatus {
                homework_name: name.to_string(),
                status: code.map(str::to_string),
            };
            debug!("{}", err);
            Err(err)
        }
    }
}

/// Message text for a homework whose status changed.
pub fn format_status_message(name: &str, status: HomeworkStatus) -> String {
    format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    )
}
