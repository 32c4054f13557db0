//! First-run seeding of the project store.

use super::memory_repositories;
use crate::common::Priority;
use crate::project_manager::{
    domain::Status,
    ports::{ProjectRepository, TaskRepository, UserRepository},
    seed::{SeedOutcome, seed},
};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeds_users_project_and_tasks() {
    let (store, repositories) = memory_repositories();

    let outcome = seed(&repositories, &DefaultClock)
        .await
        .expect("seed should succeed");

    assert_eq!(
        outcome,
        SeedOutcome::Seeded {
            users: 14,
            projects: 1,
            tasks: 12
        }
    );
    let project = ProjectRepository::list(&store)
        .await
        .expect("list projects")
        .into_iter()
        .next()
        .expect("one project");
    assert_eq!(project.summary(), "The Machine");
    assert_eq!(project.fields().priority, Some(Priority::High));
    assert_eq!(project.fields().status, Some(Status::InProgress));

    let manager = UserRepository::find_by_employee_id(&store, "100013")
        .await
        .expect("lookup")
        .expect("manager seeded");
    assert_eq!(project.manager_id(), Some(manager.id()));
    assert_eq!(manager.full_name(), "Sutherland, Jeff");

    let members = UserRepository::list_by_project(&store, project.id())
        .await
        .expect("members");
    assert_eq!(members.len(), 14);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn parent_tasks_are_assigned_and_children_nested() {
    let (store, repositories) = memory_repositories();
    seed(&repositories, &DefaultClock)
        .await
        .expect("seed should succeed");

    let tasks = TaskRepository::list(&store).await.expect("list tasks");
    let parents: Vec<_> = tasks.iter().filter(|task| task.parent_id().is_none()).collect();
    assert_eq!(parents.len(), 3);

    let kernighan = UserRepository::find_by_employee_id(&store, "100009")
        .await
        .expect("lookup")
        .expect("seeded");
    let channel_service = parents
        .iter()
        .find(|task| task.summary() == "Implement Channel Service")
        .expect("parent seeded");
    assert_eq!(channel_service.user_id(), Some(kernighan.id()));

    let children = tasks
        .iter()
        .filter(|task| task.parent_id() == Some(channel_service.id()))
        .map(|task| task.summary())
        .collect::<Vec<_>>();
    assert_eq!(
        children,
        [
            "Create Channel Service Repository",
            "Create ASP.Net Core WebApi for Channel Service",
            "Create CI/CD pipeline for Channel Service"
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn any_existing_row_prevents_seeding() {
    let (store, repositories) = memory_repositories();
    UserRepository::insert(
        &store,
        &crate::project_manager::domain::UserFields::new("Grace", "Hopper", "200000"),
        super::stamp(),
    )
    .await
    .expect("insert");

    let outcome = seed(&repositories, &DefaultClock)
        .await
        .expect("seed should succeed");

    assert_eq!(outcome, SeedOutcome::AlreadySeeded);
    assert_eq!(UserRepository::count(&store).await.expect("count"), 1);
}
