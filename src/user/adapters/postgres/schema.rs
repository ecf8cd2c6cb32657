//! Diesel schema for user persistence.

diesel::table! {
    /// Registered users.
    users (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Unique passport number as supplied at creation.
        #[max_length = 32]
        passport_number -> Varchar,
        /// Surname.
        surname -> Varchar,
        /// Given name.
        name -> Varchar,
        /// Patronymic, possibly empty.
        patronymic -> Varchar,
        /// Postal address.
        address -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
