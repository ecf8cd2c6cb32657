//! Diesel schema for task persistence.

diesel::table! {
    /// Timed work sessions.
    tasks (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Owning user; rows are removed with the user.
        user_id -> Int8,
        /// Session label.
        task_name -> Varchar,
        /// Whole elapsed hours, zero while running.
        hours -> Int8,
        /// Total whole elapsed minutes, zero while running.
        minutes -> Int8,
        /// Start instant.
        start_time -> Timestamptz,
        /// Stop instant, null while running.
        end_time -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
