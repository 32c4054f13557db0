//! Task record and its request payload.

use super::TaskStatus;
use crate::common::{ModelState, Priority, TaskId, Validate};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

const SUMMARY_MAX_CHARS: usize = 255;
const DESCRIPTION_MAX_CHARS: usize = 5000;

/// Client-editable columns of a task, already validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFields {
    /// Parent task, if this is a sub-task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<TaskId>,
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
    pub status: Option<TaskStatus>,
}

impl TaskFields {
    /// Creates fields with only the required summary set.
    #[must_use]
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            parent_id: None,
            summary: summary.into(),
            description: None,
            start_date: None,
            end_date: None,
            priority: None,
            status: None,
        }
    }
}

/// Persisted task row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
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

    /// Returns the parent task, if any.
    #[must_use]
    pub const fn parent_id(&self) -> Option<TaskId> {
        self.fields.parent_id
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

    /// Detaches the task from a deleted parent.
    pub(crate) fn clear_parent(&mut self) {
        self.fields.parent_id = None;
    }
}

/// Task body accepted by `POST` and `PUT`.
///
/// Every field is optional at the wire level so that missing values are
/// reported through [`ModelState`] instead of a parse failure. Identifier and
/// timestamp fields are accepted and ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskPayload {
    /// Ignored; the store assigns identifiers.
    #[serde(alias = "taskID")]
    pub task_id: Option<i32>,
    /// Parent task.
    #[serde(alias = "parentID")]
    pub parent_id: Option<TaskId>,
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
    pub status: Option<TaskStatus>,
}

impl Validate for TaskPayload {
    fn validate(&self) -> ModelState {
        let mut state = ModelState::new();
        state.require_text("summary", self.summary.as_deref(), SUMMARY_MAX_CHARS);
        state.limit_text("description", self.description.as_deref(), DESCRIPTION_MAX_CHARS);
        state
    }
}

impl TryFrom<TaskPayload> for TaskFields {
    type Error = ModelState;

    fn try_from(payload: TaskPayload) -> Result<Self, Self::Error> {
        payload.validate().into_result()?;
        Ok(Self {
            parent_id: payload.parent_id,
            summary: payload.summary.unwrap_or_default(),
            description: payload.description,
            start_date: payload.start_date,
            end_date: payload.end_date,
            priority: payload.priority,
            status: payload.status,
        })
    }
}
