//! Task progress status.

use crate::common::{EnumRepr, ParseEnumError};
use serde::{Deserialize, Serialize};

/// Progress status of a task.
///
/// Request bodies may carry either the name or the ordinal (`0` to `3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EnumRepr")]
pub enum TaskStatus {
    /// Work has not begun.
    NotStarted,
    /// Work is under way.
    InProgress,
    /// Work has been postponed.
    Deferred,
    /// Work is finished.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "NotStarted",
            Self::InProgress => "InProgress",
            Self::Deferred => "Deferred",
            Self::Completed => "Completed",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "NotStarted" => Ok(Self::NotStarted),
            "InProgress" => Ok(Self::InProgress),
            "Deferred" => Ok(Self::Deferred),
            "Completed" => Ok(Self::Completed),
            _ => Err(ParseEnumError::new("status", value)),
        }
    }
}

impl TryFrom<EnumRepr> for TaskStatus {
    type Error = ParseEnumError;

    fn try_from(value: EnumRepr) -> Result<Self, Self::Error> {
        match value {
            EnumRepr::Name(name) => Self::try_from(name.as_str()),
            EnumRepr::Ordinal(0) => Ok(Self::NotStarted),
            EnumRepr::Ordinal(1) => Ok(Self::InProgress),
            EnumRepr::Ordinal(2) => Ok(Self::Deferred),
            EnumRepr::Ordinal(3) => Ok(Self::Completed),
            EnumRepr::Ordinal(other) => Err(ParseEnumError::new("status", other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TaskStatus;
    use rstest::rstest;

    #[rstest]
    #[case("0", TaskStatus::NotStarted)]
    #[case("3", TaskStatus::Completed)]
    #[case("\"Deferred\"", TaskStatus::Deferred)]
    fn accepts_ordinal_or_name(#[case] raw: &str, #[case] expected: TaskStatus) {
        let parsed: TaskStatus = serde_json::from_str(raw).expect("accepted status");
        assert_eq!(parsed, expected);
    }

    #[test]
    fn suspended_is_not_a_task_manager_status() {
        assert!(serde_json::from_str::<TaskStatus>("4").is_err());
        assert!(serde_json::from_str::<TaskStatus>("\"Suspended\"").is_err());
    }
}
