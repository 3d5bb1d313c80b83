//! Diesel schema for task persistence.

diesel::table! {
    /// Tasks owned by projects.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning project identifier.
        project_id -> Uuid,
        /// Task title.
        #[max_length = 200]
        title -> Varchar,
        /// Free-text description.
        description -> Text,
        /// Workflow status.
        #[max_length = 20]
        status -> Varchar,
        /// Optional assignee address.
        #[max_length = 254]
        assignee_email -> Nullable<Varchar>,
        /// Optional due date.
        due_date -> Nullable<Date>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Comments attached to tasks.
    task_comments (id) {
        /// Comment identifier.
        id -> Uuid,
        /// Owning task identifier.
        task_id -> Uuid,
        /// Comment body.
        content -> Text,
        /// Author address.
        #[max_length = 254]
        author_email -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(task_comments -> tasks (task_id));
diesel::allow_tables_to_appear_in_same_query!(tasks, task_comments);
