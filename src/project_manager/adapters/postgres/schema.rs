//! Diesel schema for the Project Manager tables.

diesel::table! {
    /// Project members and managers.
    users (user_id) {
        /// Identity column.
        user_id -> Int4,
        /// Given name.
        #[max_length = 500]
        first_name -> Varchar,
        /// Family name.
        #[max_length = 500]
        last_name -> Varchar,
        /// Unique employee number.
        #[max_length = 6]
        employee_id -> Varchar,
        /// Project membership; set null when the project is deleted.
        project_id -> Nullable<Int4>,
        /// Row-version timestamp.
        row_version -> Timestamptz,
    }
}

diesel::table! {
    /// Projects with an optional unique manager.
    projects (project_id) {
        /// Identity column.
        project_id -> Int4,
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
        /// Managing user; set null when the user is deleted.
        manager_id -> Nullable<Int4>,
        /// Row-version timestamp.
        row_version -> Timestamptz,
    }
}

diesel::table! {
    /// Project tasks.
    tasks (task_id) {
        /// Identity column.
        task_id -> Int4,
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
        /// Owning project; rows cascade with it.
        project_id -> Int4,
        /// Parent task; set null when the parent is deleted.
        parent_id -> Nullable<Int4>,
        /// Assigned user; set null when the user is deleted.
        user_id -> Nullable<Int4>,
        /// Row-version timestamp.
        row_version -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(projects, tasks, users);
