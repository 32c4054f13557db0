//! User port over the `PostgreSQL` store.

use super::{
    PostgresProjectStore, ensure_affected,
    models::{UserChangeset, UserRow},
    schema::users,
    to_count,
};
use crate::common::{ProjectId, UserId};
use crate::persistence::{RepositoryError, RepositoryResult, run_blocking};
use crate::project_manager::{
    domain::{User, UserFields},
    ports::UserRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Escapes `LIKE` wildcards so that `ILIKE` performs a case-insensitive
/// equality test.
fn exact_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern
}

#[async_trait]
impl UserRepository for PostgresProjectStore {
    async fn list(&self) -> RepositoryResult<Vec<User>> {
        run_blocking(&self.pool, |connection| {
            let rows = users::table
                .order(users::user_id.asc())
                .select(UserRow::as_select())
                .load::<UserRow>(connection)
                .map_err(RepositoryError::from_diesel)?;
            Ok(rows.into_iter().map(User::from).collect())
        })
        .await
    }

    async fn find_by_id(&self, id: UserId) -> RepositoryResult<Option<User>> {
        run_blocking(&self.pool, move |connection| {
            let row = users::table
                .find(id.value())
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(RepositoryError::from_diesel)?;
            Ok(row.map(User::from))
        })
        .await
    }

    async fn find_by_employee_id(&self, employee_id: &str) -> RepositoryResult<Option<User>> {
        let pattern = exact_pattern(employee_id);
        run_blocking(&self.pool, move |connection| {
            let row = users::table
                .filter(users::employee_id.ilike(pattern))
                .order(users::user_id.asc())
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(RepositoryError::from_diesel)?;
            Ok(row.map(User::from))
        })
        .await
    }

    async fn list_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<User>> {
        run_blocking(&self.pool, move |connection| {
            let rows = users::table
                .filter(users::project_id.eq(project_id.value()))
                .order(users::user_id.asc())
                .select(UserRow::as_select())
                .load::<UserRow>(connection)
                .map_err(RepositoryError::from_diesel)?;
            Ok(rows.into_iter().map(User::from).collect())
        })
        .await
    }

    async fn insert(
        &self,
        fields: &UserFields,
        timestamp: DateTime<Utc>,
    ) -> RepositoryResult<User> {
        let new_row = UserChangeset::new(fields, timestamp);
        run_blocking(&self.pool, move |connection| {
            let row = diesel::insert_into(users::table)
                .values(&new_row)
                .returning(UserRow::as_returning())
                .get_result::<UserRow>(connection)
                .map_err(RepositoryError::from_diesel)?;
            Ok(User::from(row))
        })
        .await
    }

    async fn update(&self, user: &User) -> RepositoryResult<()> {
        let id = user.id();
        let changes = UserChangeset::new(user.fields(), user.timestamp());
        run_blocking(&self.pool, move |connection| {
            let affected = diesel::update(users::table.find(id.value()))
                .set(&changes)
                .execute(connection)
                .map_err(RepositoryError::from_diesel)?;
            ensure_affected(affected, "user", id.value())
        })
        .await
    }

    async fn delete(&self, id: UserId) -> RepositoryResult<()> {
        run_blocking(&self.pool, move |connection| {
            let affected = diesel::delete(users::table.find(id.value()))
                .execute(connection)
                .map_err(RepositoryError::from_diesel)?;
            ensure_affected(affected, "user", id.value())
        })
        .await
    }

    async fn count(&self) -> RepositoryResult<u64> {
        run_blocking(&self.pool, |connection| {
            let total = users::table
                .count()
                .get_result::<i64>(connection)
                .map_err(RepositoryError::from_diesel)?;
            to_count(total)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::exact_pattern;

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(exact_pattern("10_0%"), "10\\_0\\%");
        assert_eq!(exact_pattern("100000"), "100000");
    }
}
