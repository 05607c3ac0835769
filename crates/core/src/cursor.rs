//! Rolling `from_date` cursor for homework fetches.

use serde_json::Value;

/// Key of the server time in the API answer.
pub const CURRENT_DATE_KEY: &str = "current_date";

/// Lower bound (UNIX seconds) of the next fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cursor(i64);

impl Cursor {
    pub fn new(timestamp: i64) -> Self {
        Self(timestamp)
    }

    /// Cursor starting at the current wall-clock time.
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp())
    }

    #[inline]
    pub fn timestamp(self) -> i64 {
        self.0
    }

    /// Move the cursor to the answer's `current_date`.
    ///
    /// Returns false and keeps the cursor when the answer carries no integer
    /// `current_date`, or when it would move the cursor backwards.
    pub fn advance(&mut self, response: &Value) -> bool {
        match response.get(CURRENT_DATE_KEY).and_then(Value::as_i64) {
            Some(ts) if ts >= self.0 => {
                self.0 = ts;
                true
            }
            _ => false,
        }
    }
}
