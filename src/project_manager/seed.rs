//! First-run sample data for the Project Manager API.

use crate::common::{Priority, TaskId, UserId};
use crate::persistence::{RepositoryError, RepositoryResult};
use crate::project_manager::{
    domain::{ProjectFields, Status, TaskFields, User, UserFields},
    services::Repositories,
};
use chrono::NaiveDate;
use mockable::Clock;
use tracing::info;

/// Result of a seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// At least one table already held rows; nothing was written.
    AlreadySeeded,
    /// Sample rows were inserted.
    Seeded {
        /// Number of users inserted.
        users: usize,
        /// Number of projects inserted.
        projects: usize,
        /// Number of tasks inserted.
        tasks: usize,
    },
}

const USERS: [(&str, &str, &str); 14] = [
    ("Alan", "Turing", "100000"),
    ("Donald", "Knuth", "100001"),
    ("Ken", "Thompson", "100002"),
    ("Larry", "Page", "100003"),
    ("Niklaus", "Wirth", "100004"),
    ("Dennis", "Ritchie", "100005"),
    ("Edsger", "Dijkstra", "100006"),
    ("Claude", "Shannon", "100007"),
    ("John von", "Newmann", "100008"),
    ("Brian", "Kernighan", "100009"),
    ("Bjarne", "Stroustrup", "100010"),
    ("Larry", "Wall", "100011"),
    ("Mark", "Zuckerberg", "100012"),
    ("Jeff", "Sutherland", "100013"),
];

const MANAGER_EMPLOYEE_ID: &str = "100013";

struct ParentTask {
    summary: &'static str,
    description: &'static str,
    start: (i32, u32, u32),
    end: (i32, u32, u32),
    assignee: &'static str,
    children: [(&'static str, &'static str); 3],
}

const PARENT_TASKS: [ParentTask; 3] = [
    ParentTask {
        summary: "Implement Channel Service",
        description: "Implement Channel Service for the feature which will invoke the factories",
        start: (2018, 7, 2),
        end: (2018, 7, 6),
        assignee: "100009",
        children: [
            ("Create Channel Service Repository", "100000"),
            ("Create ASP.Net Core WebApi for Channel Service", "100001"),
            ("Create CI/CD pipeline for Channel Service", "100002"),
        ],
    },
    ParentTask {
        summary: "Implement Front End Service",
        description: "Implement Front End Service for the feature which will invoke the Channel Service",
        start: (2018, 7, 9),
        end: (2018, 7, 13),
        assignee: "100010",
        children: [
            ("Create Front End Service Repository", "100003"),
            ("Create Node.js service for Front End Service", "100004"),
            ("Create CI/CD pipeline for Front End Service", "100005"),
        ],
    },
    ParentTask {
        summary: "Implement Front End",
        description: "Implement Front End for the feature which will invoke the Front End Service",
        start: (2018, 7, 16),
        end: (2018, 7, 20),
        assignee: "100011",
        children: [
            ("Create Front End Repository", "100006"),
            ("Create React/Redux Implementation of the Front End", "100007"),
            ("Create CI/CD pipeline for Front End", "100008"),
        ],
    },
];

fn date((year, month, day): (i32, u32, u32)) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn user_id(users: &[User], employee_id: &str) -> RepositoryResult<UserId> {
    users
        .iter()
        .find(|user| user.employee_id() == employee_id)
        .map(User::id)
        .ok_or_else(|| {
            RepositoryError::ForeignKey(format!("seed employee {employee_id} was not inserted"))
        })
}

async fn is_empty(repositories: &Repositories) -> RepositoryResult<bool> {
    Ok(repositories.tasks.count().await? == 0
        && repositories.users.count().await? == 0
        && repositories.projects.count().await? == 0)
}

/// Inserts the sample users, project and tasks when every table is empty.
///
/// Rows are written in dependency order: users, the project managed by
/// employee `100013`, memberships, parent tasks, then child tasks.
///
/// # Errors
///
/// Returns the first repository error encountered.
pub async fn seed(
    repositories: &Repositories,
    clock: &(dyn Clock + Send + Sync),
) -> RepositoryResult<SeedOutcome> {
    if !is_empty(repositories).await? {
        info!("project store already seeded");
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let mut users = Vec::with_capacity(USERS.len());
    for (first_name, last_name, employee_id) in USERS {
        let fields = UserFields::new(first_name, last_name, employee_id);
        users.push(repositories.users.insert(&fields, clock.utc()).await?);
    }

    let project_fields = ProjectFields {
        description: Some("To implement a Turning Machine that can pass the Turing Test".to_owned()),
        start_date: date((2018, 1, 1)),
        end_date: date((2018, 12, 31)),
        priority: Some(Priority::High),
        status: Some(Status::InProgress),
        manager_id: Some(user_id(&users, MANAGER_EMPLOYEE_ID)?),
        ..ProjectFields::new("The Machine")
    };
    let project = repositories
        .projects
        .insert(&project_fields, clock.utc())
        .await?;

    for user in &mut users {
        let fields = UserFields {
            project_id: Some(project.id()),
            ..user.fields().clone()
        };
        user.update_with(fields, clock.utc());
        repositories.users.update(user).await?;
    }

    let mut parent_ids: Vec<TaskId> = Vec::with_capacity(PARENT_TASKS.len());
    for parent in &PARENT_TASKS {
        let fields = TaskFields {
            description: Some(parent.description.to_owned()),
            start_date: date(parent.start),
            end_date: date(parent.end),
            priority: Some(Priority::High),
            status: Some(Status::NotStarted),
            user_id: Some(user_id(&users, parent.assignee)?),
            ..TaskFields::new(project.id(), parent.summary)
        };
        parent_ids.push(repositories.tasks.insert(&fields, clock.utc()).await?.id());
    }

    let mut tasks = parent_ids.len();
    for (parent, parent_id) in PARENT_TASKS.iter().zip(&parent_ids) {
        for (summary, assignee) in parent.children {
            let fields = TaskFields {
                parent_id: Some(*parent_id),
                user_id: Some(user_id(&users, assignee)?),
                ..TaskFields::new(project.id(), summary)
            };
            repositories.tasks.insert(&fields, clock.utc()).await?;
            tasks += 1;
        }
    }

    info!(users = users.len(), projects = 1, tasks, "project store seeded");
    Ok(SeedOutcome::Seeded {
        users: users.len(),
        projects: 1,
        tasks,
    })
}
