//! In-memory identity registry.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::user::{
    domain::{PassportNumber, PersonalDetails},
    ports::{IdentityResolver, IdentityResolverError, IdentityResult},
};

/// Identity registry keyed by passport series and number.
///
/// Stands in for the HTTP registry where no registry service is running.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIdentityRegistry {
    identities: Arc<RwLock<HashMap<(i64, i64), PersonalDetails>>>,
}

impl InMemoryIdentityRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the registry with an additional identity.
    #[must_use]
    pub fn with_identity(self, passport: &PassportNumber, details: PersonalDetails) -> Self {
        self.register(passport, details);
        self
    }

    /// Registers or replaces the identity for a passport.
    pub fn register(&self, passport: &PassportNumber, details: PersonalDetails) {
        let mut identities = match self.identities.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        identities.insert((passport.series(), passport.number()), details);
    }
}

#[async_trait]
impl IdentityResolver for InMemoryIdentityRegistry {
    async fn resolve(&self, passport: &PassportNumber) -> IdentityResult<PersonalDetails> {
        let identities = self.identities.read().map_err(|err| {
            IdentityResolverError::transport(std::io::Error::other(err.to_string()))
        })?;
        identities
            .get(&(passport.series(), passport.number()))
            .cloned()
            .ok_or_else(|| IdentityResolverError::NotRegistered(passport.clone()))
    }
}
