//! Diesel schema for task persistence.

diesel::table! {
    /// Task records with optional parent nesting.
    tasks (task_id) {
        /// Identity column.
        task_id -> Int4,
        /// Parent task; set null when the parent is deleted.
        parent_id -> Nullable<Int4>,
        /// One-line summary.
        #[max_length = 255]
        summary -> Varchar,
        /// Free-form description.
        #[max_length = 5000]
        description -> Nullable<Varchar>,
        /// Planned start.
        start_date -> Nullable<Date>,
        /// Planned end.
        end_date -> Nullable<Date>,
        /// Priority name.
        #[max_length = 6]
        priority -> Nullable<Varchar>,
        /// Status name.
        #[max_length = 10]
        status -> Nullable<Varchar>,
        /// Row-version timestamp.
        row_version -> Timestamptz,
    }
}
