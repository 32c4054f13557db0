//! First-run sample data for the Task Manager API.

use crate::common::{Priority, TaskId};
use crate::persistence::RepositoryResult;
use crate::task_manager::{
    domain::{TaskFields, TaskStatus},
    ports::TaskRepository,
};
use chrono::NaiveDate;
use mockable::Clock;
use tracing::info;

/// Result of a seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store already held rows; nothing was written.
    AlreadySeeded,
    /// Sample rows were inserted.
    Seeded {
        /// Number of tasks inserted.
        tasks: usize,
    },
}

struct ParentTask {
    summary: &'static str,
    description: &'static str,
    start: (i32, u32, u32),
    end: (i32, u32, u32),
    children: [&'static str; 3],
}

const PARENT_TASKS: [ParentTask; 3] = [
    ParentTask {
        summary: "Implement Channel Service",
        description: "Implement Channel Service for the feature which will invoke the factories",
        start: (2018, 7, 2),
        end: (2018, 7, 6),
        children: [
            "Create Channel Service Repository",
            "Create ASP.Net Core WebApi for Channel Service",
            "Create CI/CD pipeline for Channel Service",
        ],
    },
    ParentTask {
        summary: "Implement Front End Service",
        description: "Implement Front End Service for the feature which will invoke the Channel Service",
        start: (2018, 7, 9),
        end: (2018, 7, 13),
        children: [
            "Create Front End Service Repository",
            "Create Node.js service for Front End Service",
            "Create CI/CD pipeline for Front End Service",
        ],
    },
    ParentTask {
        summary: "Implement Front End",
        description: "Implement Front End for the feature which will invoke the Front End Service",
        start: (2018, 7, 16),
        end: (2018, 7, 20),
        children: [
            "Create Front End Repository",
            "Create React/Redux Implementation of the Front End",
            "Create CI/CD pipeline for Front End",
        ],
    },
];

fn date((year, month, day): (i32, u32, u32)) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Inserts the sample tasks when the store is empty.
///
/// Parents are inserted first because each child references the identifier
/// generated for its parent.
///
/// # Errors
///
/// Returns the first repository error encountered.
pub async fn seed(
    repository: &dyn TaskRepository,
    clock: &(dyn Clock + Send + Sync),
) -> RepositoryResult<SeedOutcome> {
    if repository.count().await? > 0 {
        info!("task store already seeded");
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let mut parent_ids: Vec<TaskId> = Vec::with_capacity(PARENT_TASKS.len());
    for parent in &PARENT_TASKS {
        let fields = TaskFields {
            description: Some(parent.description.to_owned()),
            start_date: date(parent.start),
            end_date: date(parent.end),
            priority: Some(Priority::High),
            status: Some(TaskStatus::NotStarted),
            ..TaskFields::new(parent.summary)
        };
        parent_ids.push(repository.insert(&fields, clock.utc()).await?.id());
    }

    let mut inserted = parent_ids.len();
    for (parent, parent_id) in PARENT_TASKS.iter().zip(&parent_ids) {
        for child in parent.children {
            let fields = TaskFields {
                parent_id: Some(*parent_id),
                ..TaskFields::new(child)
            };
            repository.insert(&fields, clock.utc()).await?;
            inserted += 1;
        }
    }

    info!(tasks = inserted, "task store seeded");
    Ok(SeedOutcome::Seeded { tasks: inserted })
}
