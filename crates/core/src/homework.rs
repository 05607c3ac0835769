//! Homework review statuses and their verdict texts.

use std::fmt;
use std::str::FromStr;

/// Review status of a homework as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    /// Reviewer accepted the work.
    Approved,
    /// Work is under review.
    Reviewing,
    /// Reviewer returned the work with remarks.
    Rejected,
}

impl HomeworkStatus {
    /// Every status known to the verdict table.
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    /// Status code as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    /// Human-readable verdict sent to the chat.
    pub fn verdict(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a status code is not in the verdict table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatusCode(pub String);

impl FromStr for HomeworkStatus {
    type Err = UnknownStatusCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatusCode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_known() {
        assert_eq!("approved".parse::<HomeworkStatus>(), Ok(HomeworkStatus::Approved));
        assert_eq!("reviewing".parse::<HomeworkStatus>(), Ok(HomeworkStatus::Reviewing));
        assert_eq!("rejected".parse::<HomeworkStatus>(), Ok(HomeworkStatus::Rejected));
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert_eq!(
            "Approved".parse::<HomeworkStatus>(),
            Err(UnknownStatusCode("Approved".to_string()))
        );
    }

    #[test]
    fn test_verdicts() {
        assert_eq!(
            HomeworkStatus::Reviewing.verdict(),
            "Работа взята на проверку ревьюером."
        );
        assert_eq!(
            HomeworkStatus::Rejected.verdict(),
            "Работа проверена: у ревьюера есть замечания."
        );
    }

    #[test]
    fn test_wire_code_parses_back() {
        for status in HomeworkStatus::ALL {
            assert_eq!(status.to_string().parse::<HomeworkStatus>(), Ok(status));
        }
    }
}
