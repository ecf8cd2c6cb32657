//! Domain model for user provisioning.
//!
//! Users are identified by a passport number and carry identity fields
//! resolved from the external registry. Filtering and pagination value types
//! live here so every adapter interprets them identically.

mod error;
mod ids;
mod passport;
mod query;
mod user;

pub use error::UserDomainError;
pub use ids::UserId;
pub use passport::PassportNumber;
pub use query::{PAGE_KEY, PAGE_SIZE_KEY, Pagination, UserFilterField, UserFilters};
pub use user::{NewUser, PersistedUserData, PersonalDetails, User};
