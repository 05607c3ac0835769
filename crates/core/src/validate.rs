//! Shape checks for the homework API answer.

use crate::{SchemaError, SchemaResult};
use serde_json::Value;
use tracing::{debug, warn};

/// Key holding the list of homework records.
pub const HOMEWORKS_KEY: &str = "homeworks";

/// Check that the answer is a mapping with a `homeworks` list and return that list.
///
/// An empty list is valid and only logged. The answer is borrowed, so
/// repeated calls on the same value return the same records.
pub fn check_response(response: &Value) -> SchemaResult<&[Value]> {
    let Some(object) = response.as_object() else {
        let err = SchemaError::NotAMapping;
        debug!("{}", err);
        return Err(err);
    };

    let Some(homeworks) = object.get(HOMEWORKS_KEY).and_then(Value::as_array) else {
        let err = SchemaError::MissingOrWrongTypeHomeworks;
        debug!("{}", err);
        return Err(err);
    };

    if homeworks.is_empty() {
        warn!("Список homeworks пуст");
    }

    Ok(homeworks.as_slice())
}
