//! In-memory adapters for user provisioning tests and local runs.

mod identity;
mod user;

pub use identity::InMemoryIdentityRegistry;
pub use user::InMemoryUserRepository;
