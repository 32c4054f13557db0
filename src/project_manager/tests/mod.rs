//! Unit tests for the Project Manager context.

mod http_tests;
mod seed_tests;

use crate::project_manager::{adapters::memory::InMemoryProjectStore, services::Repositories};
use chrono::{DateTime, TimeZone, Utc};

/// Fixed instant used for rows written directly through a repository.
pub(super) fn stamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2018, 9, 14, 12, 0, 0)
        .single()
        .expect("valid fixed instant")
}

/// Repository bundle over one shared in-memory store.
pub(super) fn memory_repositories() -> (InMemoryProjectStore, Repositories) {
    let store = InMemoryProjectStore::new();
    (store.clone(), Repositories::from_store(store))
}
