//! Progress status shared by projects and tasks.

use crate::common::{EnumRepr, ParseEnumError};
use serde::{Deserialize, Serialize};

/// Progress status of a project or task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EnumRepr")]
pub enum Status {
    /// Work has not begun.
    NotStarted,
    /// Work is under way.
    InProgress,
    /// Work has been postponed.
    Deferred,
    /// Work is on hold until further notice.
    Suspended,
    /// Work is finished.
    Completed,
}

impl Status {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "NotStarted",
            Self::InProgress => "InProgress",
            Self::Deferred => "Deferred",
            Self::Suspended => "Suspended",
            Self::Completed => "Completed",
        }
    }
}

impl TryFrom<&str> for Status {
    type Error = ParseEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "NotStarted" => Ok(Self::NotStarted),
            "InProgress" => Ok(Self::InProgress),
            "Deferred" => Ok(Self::Deferred),
            "Suspended" => Ok(Self::Suspended),
            "Completed" => Ok(Self::Completed),
            _ => Err(ParseEnumError::new("status", value)),
        }
    }
}

impl TryFrom<EnumRepr> for Status {
    type Error = ParseEnumError;

    fn try_from(value: EnumRepr) -> Result<Self, Self::Error> {
        match value {
            EnumRepr::Name(name) => Self::try_from(name.as_str()),
            EnumRepr::Ordinal(0) => Ok(Self::NotStarted),
            EnumRepr::Ordinal(1) => Ok(Self::InProgress),
            EnumRepr::Ordinal(2) => Ok(Self::Deferred),
            EnumRepr::Ordinal(3) => Ok(Self::Suspended),
            EnumRepr::Ordinal(4) => Ok(Self::Completed),
            EnumRepr::Ordinal(other) => Err(ParseEnumError::new("status", other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Status;
    use rstest::rstest;

    #[rstest]
    #[case(Status::NotStarted)]
    #[case(Status::Suspended)]
    #[case(Status::Completed)]
    fn storage_names_parse_back(#[case] status: Status) {
        assert_eq!(Status::try_from(status.as_str()), Ok(status));
    }

    #[test]
    fn lowercase_names_are_rejected() {
        assert!(Status::try_from("suspended").is_err());
    }

    #[test]
    fn ordinal_three_is_suspended() {
        let parsed: Status = serde_json::from_str("3").expect("accepted status");
        assert_eq!(parsed, Status::Suspended);
    }
}
