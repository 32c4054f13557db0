//! Project port over the `PostgreSQL` store.

use super::{
    PostgresProjectStore, ensure_affected,
    models::{ProjectChangeset, ProjectRow},
    schema::projects,
    to_count,
};
use crate::common::{ProjectId, UserId};
use crate::persistence::{RepositoryError, RepositoryResult, run_blocking};
use crate::project_manager::{
    domain::{Project, ProjectFields},
    ports::ProjectRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

fn row_to_project(row: ProjectRow) -> RepositoryResult<Project> {
    Project::try_from(row).map_err(RepositoryError::persistence)
}

#[async_trait]
impl ProjectRepository for PostgresProjectStore {
    async fn list(&self) -> RepositoryResult<Vec<Project>> {
        run_blocking(&self.pool, |connection| {
            let rows = projects::table
                .order(projects::project_id.asc())
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(RepositoryError::from_diesel)?;
            rows.into_iter().map(row_to_project).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>> {
        run_blocking(&self.pool, move |connection| {
            let row = projects::table
                .find(id.value())
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(RepositoryError::from_diesel)?;
            row.map(row_to_project).transpose()
        })
        .await
    }

    async fn find_by_manager(&self, manager_id: UserId) -> RepositoryResult<Option<Project>> {
        run_blocking(&self.pool, move |connection| {
            let row = projects::table
                .filter(projects::manager_id.eq(manager_id.value()))
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(RepositoryError::from_diesel)?;
            row.map(row_to_project).transpose()
        })
        .await
    }

    async fn insert(
        &self,
        fields: &ProjectFields,
        timestamp: DateTime<Utc>,
    ) -> RepositoryResult<Project> {
        let new_row = ProjectChangeset::new(fields, timestamp);
        run_blocking(&self.pool, move |connection| {
            let row = diesel::insert_into(projects::table)
                .values(&new_row)
                .returning(ProjectRow::as_returning())
                .get_result::<ProjectRow>(connection)
                .map_err(RepositoryError::from_diesel)?;
            row_to_project(row)
        })
        .await
    }

    async fn update(&self, project: &Project) -> RepositoryResult<()> {
        let id = project.id();
        let changes = ProjectChangeset::new(project.fields(), project.timestamp());
        run_blocking(&self.pool, move |connection| {
            let affected = diesel::update(projects::table.find(id.value()))
                .set(&changes)
                .execute(connection)
                .map_err(RepositoryError::from_diesel)?;
            ensure_affected(affected, "project", id.value())
        })
        .await
    }

    async fn delete(&self, id: ProjectId) -> RepositoryResult<()> {
        run_blocking(&self.pool, move |connection| {
            let affected = diesel::delete(projects::table.find(id.value()))
                .execute(connection)
                .map_err(RepositoryError::from_diesel)?;
            ensure_affected(affected, "project", id.value())
        })
        .await
    }

    async fn count(&self) -> RepositoryResult<u64> {
        run_blocking(&self.pool, |connection| {
            let total = projects::table
                .count()
                .get_result::<i64>(connection)
                .map_err(RepositoryError::from_diesel)?;
            to_count(total)
        })
        .await
    }
}
