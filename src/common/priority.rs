//! Task and project priority.

use super::{EnumRepr, ParseEnumError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority shared by tasks and projects.
///
/// Serialized and stored by variant name. Request bodies may also carry the
/// ordinal (`0`, `2`, `3`, `4`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EnumRepr")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal scheduling.
    Medium,
    /// Scheduled ahead of normal work.
    High,
    /// Needs attention now.
    Urgent,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParseEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(ParseEnumError::new("priority", value)),
        }
    }
}

impl TryFrom<EnumRepr> for Priority {
    type Error = ParseEnumError;

    fn try_from(value: EnumRepr) -> Result<Self, Self::Error> {
        match value {
            EnumRepr::Name(name) => Self::try_from(name.as_str()),
            EnumRepr::Ordinal(0) => Ok(Self::Low),
            EnumRepr::Ordinal(2) => Ok(Self::Medium),
            EnumRepr::Ordinal(3) => Ok(Self::High),
            EnumRepr::Ordinal(4) => Ok(Self::Urgent),
            EnumRepr::Ordinal(other) => Err(ParseEnumError::new("priority", other.to_string())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Priority;
    use rstest::rstest;

    #[rstest]
    #[case("Low", Priority::Low)]
    #[case("medium", Priority::Medium)]
    #[case(" HIGH ", Priority::High)]
    #[case("Urgent", Priority::Urgent)]
    fn parses_stored_names_case_insensitively(#[case] raw: &str, #[case] expected: Priority) {
        assert_eq!(Priority::try_from(raw), Ok(expected));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = Priority::try_from("Critical").expect_err("unknown priority");
        assert_eq!(err.to_string(), "unknown priority value: Critical");
    }

    #[test]
    fn serializes_as_variant_name() {
        let json = serde_json::to_string(&Priority::Urgent).expect("serializable");
        assert_eq!(json, "\"Urgent\"");
    }

    #[rstest]
    #[case("0", Priority::Low)]
    #[case("2", Priority::Medium)]
    #[case("4", Priority::Urgent)]
    #[case("\"high\"", Priority::High)]
    fn deserializes_ordinals_and_names(#[case] raw: &str, #[case] expected: Priority) {
        let parsed: Priority = serde_json::from_str(raw).expect("accepted priority");
        assert_eq!(parsed, expected);
    }

    #[test]
    fn unused_ordinal_is_rejected() {
        assert!(serde_json::from_str::<Priority>("1").is_err());
    }
}
