//! Project task record and its request payload.

use super::Status;
use crate::common::{ModelState, Priority, ProjectId, TaskId, UserId, Validate};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

const SUMMARY_MAX_CHARS: usize = 255;
const DESCRIPTION_MAX_CHARS: usize = 5000;

/// Client-editable columns of a project task, already validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFields {
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
    /// Owning project.
    pub project_id: ProjectId,
    /// Parent task, if this is a sub-task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<TaskId>,
    /// Assigned user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

impl TaskFields {
    /// Creates fields with only the required columns set.
    #[must_use]
    pub fn new(project_id: ProjectId, summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            description: None,
            start_date: None,
            end_date: None,
            priority: None,
            status: None,
            project_id,
            parent_id: None,
            user_id: None,
        }
    }
}

/// Persisted project task row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "taskId")]
    id: TaskId,
    #[serde(flatten)]
    fields: TaskFields,
    timestamp: DateTime<Utc>,
}

impl Task {
    /// Assembles a task from its stored parts.
    #[must_use]
    pub const fn new(id: TaskId, fields: TaskFields, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            fields,
            timestamp,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the editable columns.
    #[must_use]
    pub const fn fields(&self) -> &TaskFields {
        &self.fields
    }

    /// Returns the summary.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.fields.summary
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.fields.project_id
    }

    /// Returns the parent task, if any.
    #[must_use]
    pub const fn parent_id(&self) -> Option<TaskId> {
        self.fields.parent_id
    }

    /// Returns the assigned user, if any.
    #[must_use]
    pub const fn user_id(&self) -> Option<UserId> {
        self.fields.user_id
    }

    /// Returns the row-version timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Overwrites every editable column and stamps a new row version.
    pub fn update_with(&mut self, fields: TaskFields, timestamp: DateTime<Utc>) {
        self.fields = fields;
        self.timestamp = timestamp;
    }

    pub(crate) fn clear_parent(&mut self) {
        self.fields.parent_id = None;
    }

    pub(crate) fn clear_user(&mut self) {
        self.fields.user_id = None;
    }
}

/// Project task body accepted by `POST` and `PUT`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskPayload {
    /// Ignored; the store assigns identifiers.
    pub task_id: Option<i32>,
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
    /// Owning project.
    pub project_id: Option<ProjectId>,
    /// Parent task.
    pub parent_id: Option<TaskId>,
    /// Assigned user.
    pub user_id: Option<UserId>,
}

impl Validate for TaskPayload {
    fn validate(&self) -> ModelState {
        let mut state = ModelState::new();
        state.require_text("summary", self.summary.as_deref(), SUMMARY_MAX_CHARS);
        state.limit_text("description", self.description.as_deref(), DESCRIPTION_MAX_CHARS);
        state.require("projectId", self.project_id.as_ref());
        state
    }
}

impl TryFrom<TaskPayload> for TaskFields {
    type Error = ModelState;

    fn try_from(payload: TaskPayload) -> Result<Self, Self::Error> {
        let state = payload.validate();
        let Some(project_id) = payload.project_id else {
            return Err(state);
        };
        state.into_result()?;
        Ok(Self {
            summary: payload.summary.unwrap_or_default(),
            description: payload.description,
            start_date: payload.start_date,
            end_date: payload.end_date,
            priority: payload.priority,
            status: payload.status,
            project_id,
            parent_id: payload.parent_id,
            user_id: payload.user_id,
        })
    }
}
