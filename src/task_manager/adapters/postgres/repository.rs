//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::common::TaskId;
use crate::persistence::{PgPool, RepositoryError, RepositoryResult, run_blocking};
use crate::task_manager::{
    domain::{Task, TaskFields},
    ports::TaskRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, embed_migrations};

/// Schema migrations for the task table.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/task_manager");

const ENTITY: &str = "task";

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn list(&self) -> RepositoryResult<Vec<Task>> {
        run_blocking(&self.pool, |connection| {
            let rows = tasks::table
                .order(tasks::task_id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(RepositoryError::from_diesel)?;
            rows.into_iter().map(row_to_task).collect()
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
            ensure_affected(affected, id)
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> RepositoryResult<()> {
        run_blocking(&self.pool, move |connection| {
            let affected = diesel::delete(tasks::table.find(id.value()))
                .execute(connection)
                .map_err(RepositoryError::from_diesel)?;
            ensure_affected(affected, id)
        })
        .await
    }

    async fn count(&self) -> RepositoryResult<u64> {
        run_blocking(&self.pool, |connection| {
            let total = tasks::table
                .count()
                .get_result::<i64>(connection)
                .map_err(RepositoryError::from_diesel)?;
            u64::try_from(total).map_err(RepositoryError::persistence)
        })
        .await
    }
}

fn row_to_task(row: TaskRow) -> RepositoryResult<Task> {
    Task::try_from(row).map_err(RepositoryError::persistence)
}

fn ensure_affected(affected: usize, id: TaskId) -> RepositoryResult<()> {
    if affected == 0 {
        return Err(RepositoryError::NotFound {
            entity: ENTITY,
            id: id.value(),
        });
    }
    Ok(())
}
