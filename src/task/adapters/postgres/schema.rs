//! Diesel schema for task persistence.

diesel::table! {
    /// Task records and their lifecycle timestamps.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Trimmed task title.
        #[max_length = 255]
        title -> Varchar,
        /// Trimmed task description.
        #[max_length = 1000]
        description -> Varchar,
        /// Lifecycle status.
        #[max_length = 20]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last change timestamp.
        updated_at -> Timestamptz,
        /// Soft-deletion timestamp.
        deleted_at -> Nullable<Timestamptz>,
        /// Insertion order, breaking ties between equal creation times.
        insertion_seq -> Int8,
    }
}
