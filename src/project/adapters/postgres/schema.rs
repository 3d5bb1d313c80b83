//! Diesel schema for project persistence.

diesel::table! {
    /// Projects owned by organizations.
    projects (id) {
        /// Project identifier.
        id -> Uuid,
        /// Owning organization identifier.
        organization_id -> Uuid,
        /// Project name.
        #[max_length = 200]
        name -> Varchar,
        /// Free-text description.
        description -> Text,
        /// Project status.
        #[max_length = 20]
        status -> Varchar,
        /// Optional due date.
        due_date -> Nullable<Date>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
