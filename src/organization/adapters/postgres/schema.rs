//! Diesel schema for organization persistence.

diesel::table! {
    /// Tenant organizations.
    organizations (id) {
        /// Organization identifier.
        id -> Uuid,
        /// Display name.
        #[max_length = 100]
        name -> Varchar,
        /// Unique URL-safe slug.
        #[max_length = 100]
        slug -> Varchar,
        /// Optional contact address.
        #[max_length = 254]
        contact_email -> Nullable<Varchar>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
