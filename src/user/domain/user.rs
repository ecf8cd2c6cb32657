//! User aggregate root and identity fields.

use super::{PassportNumber, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;

/// Legal identity fields resolved from the identity registry.
///
/// The patronymic may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalDetails {
    surname: String,
    name: String,
    patronymic: String,
    address: String,
}

impl PersonalDetails {
    /// Creates a set of identity fields.
    #[must_use]
    pub fn new(
        surname: impl Into<String>,
        name: impl Into<String>,
        patronymic: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            surname: surname.into(),
            name: name.into(),
            patronymic: patronymic.into(),
            address: address.into(),
        }
    }

    /// Returns the surname.
    #[must_use]
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Returns the given name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the patronymic, possibly empty.
    #[must_use]
    pub fn patronymic(&self) -> &str {
        &self.patronymic
    }

    /// Returns the postal address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }
}

/// A user that has not been persisted yet and so has no identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    passport_number: PassportNumber,
    details: PersonalDetails,
    created_at: DateTime<Utc>,
}

impl NewUser {
    /// Builds a new user from a passport number and resolved identity.
    #[must_use]
    pub fn new(
        passport_number: PassportNumber,
        details: PersonalDetails,
        clock: &impl Clock,
    ) -> Self {
        Self {
            passport_number,
            details,
            created_at: clock.utc(),
        }
    }

    /// Returns the passport number.
    #[must_use]
    pub const fn passport_number(&self) -> &PassportNumber {
        &self.passport_number
    }

    /// Returns the identity fields.
    #[must_use]
    pub const fn details(&self) -> &PersonalDetails {
        &self.details
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Attaches the store-assigned identifier, producing the persisted user.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            passport_number: self.passport_number,
            details: self.details,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// User aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: UserId,
    passport_number: PassportNumber,
    details: PersonalDetails,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Store-assigned identifier.
    pub id: UserId,
    /// Persisted passport number.
    pub passport_number: PassportNumber,
    /// Persisted identity fields.
    pub details: PersonalDetails,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            passport_number: data.passport_number,
            details: data.details,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the passport number.
    #[must_use]
    pub const fn passport_number(&self) -> &PassportNumber {
        &self.passport_number
    }

    /// Returns the identity fields.
    #[must_use]
    pub const fn details(&self) -> &PersonalDetails {
        &self.details
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Overwrites the mutable identity fields.
    ///
    /// The passport number cannot change after creation.
    pub fn update_details(&mut self, details: PersonalDetails, clock: &impl Clock) {
        self.details = details;
        self.updated_at = clock.utc();
    }
}
