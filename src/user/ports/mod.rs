//! Port contracts for user provisioning.
//!
//! Ports define infrastructure-agnostic interfaces used by the provisioning
//! service: one for user persistence and one for the identity registry.

pub mod identity;
pub mod repository;

pub use identity::{IdentityResolver, IdentityResolverError, IdentityResult};
pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};

