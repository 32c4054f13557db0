//! Project record and its request payload.

use super::{Status, Task};
use crate::common::{ModelState, Priority, ProjectId, UserId, Validate};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

const SUMMARY_MAX_CHARS: usize = 255;
const DESCRIPTION_MAX_CHARS: usize = 5000;

/// Client-editable columns of a project, already validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFields {
    /// One-line summary.
    pub summary: String,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Planned start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Planned end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Progress status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// Managing user; a user manages at most one project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<UserId>,
}

impl ProjectFields {
    /// Creates fields with only the required summary set.
    #[must_use]
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            description: None,
            start_date: None,
            end_date: None,
            priority: None,
            status: None,
            manager_id: None,
        }
    }
}

/// Persisted project row, optionally carrying its tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "projectId")]
    id: ProjectId,
    #[serde(flatten)]
    fields: ProjectFields,
    timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tasks: Option<Vec<Task>>,
}

impl Project {
    /// Assembles a project from its stored parts, without tasks loaded.
    #[must_use]
    pub const fn new(id: ProjectId, fields: ProjectFields, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            fields,
            timestamp,
            tasks: None,
        }
    }

    /// Attaches the project's tasks.
    #[must_use]
    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = Some(tasks);
        self
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the editable columns.
    #[must_use]
    pub const fn fields(&self) -> &ProjectFields {
        &self.fields
    }

    /// Returns the summary.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.fields.summary
    }

    /// Returns the managing user, if any.
    #[must_use]
    pub const fn manager_id(&self) -> Option<UserId> {
        self.fields.manager_id
    }

    /// Returns the loaded tasks, if they were requested.
    #[must_use]
    pub fn tasks(&self) -> Option<&[Task]> {
        self.tasks.as_deref()
    }

    /// Returns the row-version timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Overwrites every editable column and stamps a new row version.
    pub fn update_with(&mut self, fields: ProjectFields, timestamp: DateTime<Utc>) {
        self.fields = fields;
        self.timestamp = timestamp;
    }

    pub(crate) fn clear_manager(&mut self) {
        self.fields.manager_id = None;
    }
}

/// Project body accepted by `POST` and `PUT`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectPayload {
    /// Ignored; the store assigns identifiers.
    pub project_id: Option<i32>,
    /// One-line summary.
    pub summary: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Planned start.
    pub start_date: Option<NaiveDate>,
    /// Planned end.
    pub end_date: Option<NaiveDate>,
    /// Priority.
    pub priority: Option<Priority>,
    /// Progress status.
    pub status: Option<Status>,
    /// Managing user.
    pub manager_id: Option<UserId>,
}

impl Validate for ProjectPayload {
    fn validate(&self) -> ModelState {
        let mut state = ModelState::new();
        state.require_text("summary", self.summary.as_deref(), SUMMARY_MAX_CHARS);
        state.limit_text("description", self.description.as_deref(), DESCRIPTION_MAX_CHARS);
        state
    }
}

impl TryFrom<ProjectPayload> for ProjectFields {
    type Error = ModelState;

    fn try_from(payload: ProjectPayload) -> Result<Self, Self::Error> {
        payload.validate().into_result()?;
        Ok(Self {
            summary: payload.summary.unwrap_or_default(),
            description: payload.description,
            start_date: payload.start_date,
            end_date: payload.end_date,
            priority: payload.priority,
            status: payload.status,
            manager_id: payload.manager_id,
        })
    }
}
