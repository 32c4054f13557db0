//! Diesel row models for task persistence.

use super::schema::tasks;
use crate::common::{ParseEnumError, Priority, TaskId};
use crate::task_manager::domain::{Task, TaskFields, TaskStatus};
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    pub task_id: i32,
    pub parent_id: Option<i32>,
    pub summary: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub row_version: DateTime<Utc>,
}

/// Insert and full-overwrite model for task records.
///
/// `None` values are written as `NULL` so that updates replace every column.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    pub parent_id: Option<i32>,
    pub summary: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub row_version: DateTime<Utc>,
}

impl TaskChangeset {
    pub fn new(fields: &TaskFields, timestamp: DateTime<Utc>) -> Self {
        Self {
            parent_id: fields.parent_id.map(TaskId::value),
            summary: fields.summary.clone(),
            description: fields.description.clone(),
            start_date: fields.start_date,
            end_date: fields.end_date,
            priority: fields.priority.map(|priority| priority.as_str().to_owned()),
            status: fields.status.map(|status| status.as_str().to_owned()),
            row_version: timestamp,
        }
    }
}

impl TryFrom<TaskRow> for Task {
    type Error = ParseEnumError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        let fields = TaskFields {
            parent_id: row.parent_id.map(TaskId::new),
            summary: row.summary,
            description: row.description,
            start_date: row.start_date,
            end_date: row.end_date,
            priority: row.priority.as_deref().map(Priority::try_from).transpose()?,
            status: row.status.as_deref().map(TaskStatus::try_from).transpose()?,
        };
        Ok(Self::new(TaskId::new(row.task_id), fields, row.row_version))
    }
}

#[cfg(test)]
mod tests {
    use super::{TaskChangeset, TaskRow};
    use crate::common::{Priority, TaskId};
    use crate::task_manager::domain::{Task, TaskFields, TaskStatus};
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn rows_convert_to_tasks_and_back() {
        let timestamp = Utc.with_ymd_and_hms(2018, 7, 1, 9, 0, 0).single().expect("valid");
        let row = TaskRow {
            task_id: 4,
            parent_id: Some(1),
            summary: "Create Channel Service Repository".to_owned(),
            description: None,
            start_date: NaiveDate::from_ymd_opt(2018, 7, 2),
            end_date: None,
            priority: Some("High".to_owned()),
            status: Some("InProgress".to_owned()),
            row_version: timestamp,
        };

        let task = Task::try_from(row).expect("row should convert");
        assert_eq!(task.id(), TaskId::new(4));
        assert_eq!(task.parent_id(), Some(TaskId::new(1)));
        assert_eq!(task.fields().priority, Some(Priority::High));
        assert_eq!(task.fields().status, Some(TaskStatus::InProgress));

        let changeset = TaskChangeset::new(task.fields(), timestamp);
        assert_eq!(changeset.parent_id, Some(1));
        assert_eq!(changeset.priority.as_deref(), Some("High"));
        assert_eq!(changeset.status.as_deref(), Some("InProgress"));
    }

    #[test]
    fn unknown_stored_status_is_rejected() {
        let row = TaskRow {
            task_id: 1,
            parent_id: None,
            summary: "x".to_owned(),
            description: None,
            start_date: None,
            end_date: None,
            priority: None,
            status: Some("Suspended".to_owned()),
            row_version: Utc::now(),
        };
        assert!(Task::try_from(row).is_err());
    }

    #[test]
    fn changeset_clears_absent_columns() {
        let changeset = TaskChangeset::new(&TaskFields::new("Only a summary"), Utc::now());
        assert_eq!(changeset.parent_id, None);
        assert_eq!(changeset.description, None);
        assert_eq!(changeset.priority, None);
    }
}
