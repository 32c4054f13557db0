//! User record and its request payload.

use crate::common::{ModelState, ProjectId, UserId, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const NAME_MAX_CHARS: usize = 500;
const EMPLOYEE_ID_MAX_CHARS: usize = 6;

/// Client-editable columns of a user, already validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFields {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Unique employee number.
    pub employee_id: String,
    /// Project the user is a member of.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
}

impl UserFields {
    /// Creates fields for a user without project membership.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        employee_id: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            employee_id: employee_id.into(),
            project_id: None,
        }
    }

    /// Returns `"{last}, {first}"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }
}

/// Persisted user row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "userId")]
    id: UserId,
    #[serde(flatten)]
    fields: UserFields,
    #[serde(default)]
    full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    managed_project_id: Option<ProjectId>,
    timestamp: DateTime<Utc>,
}

impl User {
    /// Assembles a user from its stored parts.
    #[must_use]
    pub fn new(id: UserId, fields: UserFields, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            full_name: fields.full_name(),
            fields,
            managed_project_id: None,
            timestamp,
        }
    }

    /// Records the project this user manages. Not a stored column.
    #[must_use]
    pub const fn with_managed_project(mut self, project_id: Option<ProjectId>) -> Self {
        self.managed_project_id = project_id;
        self
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the editable columns.
    #[must_use]
    pub const fn fields(&self) -> &UserFields {
        &self.fields
    }

    /// Returns the employee number.
    #[must_use]
    pub fn employee_id(&self) -> &str {
        &self.fields.employee_id
    }

    /// Returns the display name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns the project the user belongs to, if any.
    #[must_use]
    pub const fn project_id(&self) -> Option<ProjectId> {
        self.fields.project_id
    }

    /// Returns the managed project, when it has been resolved.
    #[must_use]
    pub const fn managed_project_id(&self) -> Option<ProjectId> {
        self.managed_project_id
    }

    /// Returns the row-version timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Overwrites every editable column and stamps a new row version.
    pub fn update_with(&mut self, fields: UserFields, timestamp: DateTime<Utc>) {
        self.full_name = fields.full_name();
        self.fields = fields;
        self.timestamp = timestamp;
    }

    pub(crate) fn clear_project(&mut self) {
        self.fields.project_id = None;
    }
}

/// User body accepted by `POST` and `PUT`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserPayload {
    /// Ignored; the store assigns identifiers.
    pub user_id: Option<i32>,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Unique employee number.
    pub employee_id: Option<String>,
    /// Project membership.
    pub project_id: Option<ProjectId>,
}

impl Validate for UserPayload {
    fn validate(&self) -> ModelState {
        let mut state = ModelState::new();
        state.require_text("firstName", self.first_name.as_deref(), NAME_MAX_CHARS);
        state.require_text("lastName", self.last_name.as_deref(), NAME_MAX_CHARS);
        state.require_text(
            "employeeId",
            self.employee_id.as_deref(),
            EMPLOYEE_ID_MAX_CHARS,
        );
        state
    }
}

impl TryFrom<UserPayload> for UserFields {
    type Error = ModelState;

    fn try_from(payload: UserPayload) -> Result<Self, Self::Error> {
        payload.validate().into_result()?;
        Ok(Self {
            first_name: payload.first_name.unwrap_or_default(),
            last_name: payload.last_name.unwrap_or_default(),
            employee_id: payload.employee_id.unwrap_or_default(),
            project_id: payload.project_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{User, UserFields, UserPayload};
    use crate::common::UserId;
    use chrono::Utc;

    #[test]
    fn full_name_is_last_comma_first() {
        let user = User::new(
            UserId::new(1),
            UserFields::new("Alan", "Turing", "100000"),
            Utc::now(),
        );
        assert_eq!(user.full_name(), "Turing, Alan");
    }

    #[test]
    fn update_with_refreshes_full_name() {
        let mut user = User::new(
            UserId::new(1),
            UserFields::new("Alan", "Turing", "100000"),
            Utc::now(),
        );
        user.update_with(UserFields::new("Ada", "Lovelace", "100000"), Utc::now());
        assert_eq!(user.full_name(), "Lovelace, Ada");
    }

    #[test]
    fn overlong_employee_id_is_reported() {
        let payload = UserPayload {
            first_name: Some("Grace".to_owned()),
            last_name: Some("Hopper".to_owned()),
            employee_id: Some("1234567".to_owned()),
            ..UserPayload::default()
        };
        let state = UserFields::try_from(payload).expect_err("should be invalid");
        assert_eq!(
            state.field_errors("employeeId"),
            ["employeeId cannot be longer than 6 characters.".to_owned()]
        );
    }
}
