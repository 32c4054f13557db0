//! Unit tests for the Task Manager context.


use chrono::{DateTime, TimeZone, Utc};

/// Fixed instant used for rows written directly through a repository.
pub(super) fn stamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2018, 7, 1, 12, 0, 0)
        .single()
        .expect("valid fixed instant")
}
