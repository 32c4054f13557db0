//! Diesel row models for the Project Manager tables.

use super::schema::{projects, tasks, users};
use crate::common::{ParseEnumError, Priority, ProjectId, TaskId, UserId};
use crate::project_manager::domain::{
    Project, ProjectFields, Status, Task, TaskFields, User, UserFields,
};
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

fn parse_priority(value: Option<&str>) -> Result<Option<Priority>, ParseEnumError> {
    value.map(Priority::try_from).transpose()
}

fn parse_status(value: Option<&str>) -> Result<Option<Status>, ParseEnumError> {
    value.map(Status::try_from).transpose()
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    pub task_id: i32,
    pub summary: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub project_id: i32,
    pub parent_id: Option<i32>,
    pub user_id: Option<i32>,
    pub row_version: DateTime<Utc>,
}

/// Insert and full-overwrite model for task records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    pub summary: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub project_id: i32,
    pub parent_id: Option<i32>,
    pub user_id: Option<i32>,
    pub row_version: DateTime<Utc>,
}

impl TaskChangeset {
    pub fn new(fields: &TaskFields, timestamp: DateTime<Utc>) -> Self {
        Self {
            summary: fields.summary.clone(),
            description: fields.description.clone(),
            start_date: fields.start_date,
            end_date: fields.end_date,
            priority: fields.priority.map(|priority| priority.as_str().to_owned()),
            status: fields.status.map(|status| status.as_str().to_owned()),
            project_id: fields.project_id.value(),
            parent_id: fields.parent_id.map(TaskId::value),
            user_id: fields.user_id.map(UserId::value),
            row_version: timestamp,
        }
    }
}

impl TryFrom<TaskRow> for Task {
    type Error = ParseEnumError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        let fields = TaskFields {
            priority: parse_priority(row.priority.as_deref())?,
            status: parse_status(row.status.as_deref())?,
            summary: row.summary,
            description: row.description,
            start_date: row.start_date,
            end_date: row.end_date,
            project_id: ProjectId::new(row.project_id),
            parent_id: row.parent_id.map(TaskId::new),
            user_id: row.user_id.map(UserId::new),
        };
        Ok(Self::new(TaskId::new(row.task_id), fields, row.row_version))
    }
}

/// Query result row for project records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    pub project_id: i32,
    pub summary: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub manager_id: Option<i32>,
    pub row_version: DateTime<Utc>,
}

/// Insert and full-overwrite model for project records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = projects)]
#[diesel(treat_none_as_null = true)]
pub struct ProjectChangeset {
    pub summary: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub manager_id: Option<i32>,
    pub row_version: DateTime<Utc>,
}

impl ProjectChangeset {
    pub fn new(fields: &ProjectFields, timestamp: DateTime<Utc>) -> Self {
        Self {
            summary: fields.summary.clone(),
            description: fields.description.clone(),
            start_date: fields.start_date,
            end_date: fields.end_date,
            priority: fields.priority.map(|priority| priority.as_str().to_owned()),
            status: fields.status.map(|status| status.as_str().to_owned()),
            manager_id: fields.manager_id.map(UserId::value),
            row_version: timestamp,
        }
    }
}

impl TryFrom<ProjectRow> for Project {
    type Error = ParseEnumError;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        let fields = ProjectFields {
            priority: parse_priority(row.priority.as_deref())?,
            status: parse_status(row.status.as_deref())?,
            summary: row.summary,
            description: row.description,
            start_date: row.start_date,
            end_date: row.end_date,
            manager_id: row.manager_id.map(UserId::new),
        };
        Ok(Self::new(
            ProjectId::new(row.project_id),
            fields,
            row.row_version,
        ))
    }
}

/// Query result row for user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub employee_id: String,
    pub project_id: Option<i32>,
    pub row_version: DateTime<Utc>,
}

/// Insert and full-overwrite model for user records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub struct UserChangeset {
    pub first_name: String,
    pub last_name: String,
    pub employee_id: String,
    pub project_id: Option<i32>,
    pub row_version: DateTime<Utc>,
}

impl UserChangeset {
    pub fn new(fields: &UserFields, timestamp: DateTime<Utc>) -> Self {
        Self {
            first_name: fields.first_name.clone(),
            last_name: fields.last_name.clone(),
            employee_id: fields.employee_id.clone(),
            project_id: fields.project_id.map(ProjectId::value),
            row_version: timestamp,
        }
    }
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        let fields = UserFields {
            first_name: row.first_name,
            last_name: row.last_name,
            employee_id: row.employee_id,
            project_id: row.project_id.map(ProjectId::new),
        };
        Self::new(UserId::new(row.user_id), fields, row.row_version)
    }
}
