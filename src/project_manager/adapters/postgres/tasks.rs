//! Task port over the `PostgreSQL` store.

use super::{
    PostgresProjectStore, ensure_affected,
    models::{TaskChangeset, TaskRow},
    schema::tasks,
    to_count,
};
use crate::common::{ProjectId, TaskId, UserId};
use crate::persistence::{RepositoryError, RepositoryResult, run_blocking};
use crate::project_manager::{
    domain::{Task, TaskFields},
    ports::TaskRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

fn row_to_task(row: TaskRow) -> RepositoryResult<Task> {
    Task::try_from(row).map_err(RepositoryError::persistence)
}

fn rows_to_tasks(rows: Vec<TaskRow>) -> RepositoryResult<Vec<Task>> {
    rows.into_iter().map(row_to_task).collect()
}

#[async_trait]
impl TaskRepository for PostgresProjectStore {
    async fn list(&self) -> RepositoryResult<Vec<Task>> {
        run_blocking(&self.pool, |connection| {
            let rows = tasks::table
                .order(tasks::task_id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(RepositoryError::from_diesel)?;
            rows_to_tasks(rows)
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>> {
        run_blocking(&self.pool, move |connection| {
            let row = tasks::table
                .find(id.value())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(RepositoryError::from_diesel)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<Task>> {
        run_blocking(&self.pool, move |connection| {
            let rows = tasks::table
                .filter(tasks::project_id.eq(project_id.value()))
                .order(tasks::task_id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(RepositoryError::from_diesel)?;
            rows_to_tasks(rows)
        })
        .await
    }

    async fn list_by_user(&self, user_id: UserId) -> RepositoryResult<Vec<Task>> {
        run_blocking(&self.pool, move |connection| {
            let rows = tasks::table
                .filter(tasks::user_id.eq(user_id.value()))
                .order(tasks::task_id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(RepositoryError::from_diesel)?;
            rows_to_tasks(rows)
        })
        .await
    }

    async fn insert(
        &self,
        fields: &TaskFields,
        timestamp: DateTime<Utc>,
    ) -> RepositoryResult<Task> {
        let new_row = TaskChangeset::new(fields, timestamp);
        run_blocking(&self.pool, move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(RepositoryError::from_diesel)?;
            row_to_task(row)
        })
        .await
    }

    async fn update(&self, task: &Task) -> RepositoryResult<()> {
        let id = task.id();
        let changes = TaskChangeset::new(task.fields(), task.timestamp());
        run_blocking(&self.pool, move |connection| {
            let affected = diesel::update(tasks::table.find(id.value()))
                .set(&changes)
                .execute(connection)
                .map_err(RepositoryError::from_diesel)?;
            ensure_affected(affected, "task", id.value())
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> RepositoryResult<()> {
        run_blocking(&self.pool, move |connection| {
            let affected = diesel::delete(tasks::table.find(id.value()))
                .execute(connection)
                .map_err(RepositoryError::from_diesel)?;
            ensure_affected(affected, "task", id.value())
        })
        .await
    }

    async fn count(&self) -> RepositoryResult<u64> {
        run_blocking(&self.pool, |connection| {
            let total = tasks::table
                .count()
                .get_result::<i64>(connection)
                .map_err(RepositoryError::from_diesel)?;
            to_count(total)
        })
        .await
    }
}
