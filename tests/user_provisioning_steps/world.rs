//! Shared world state for user provisioning BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use time_tracker::user::{
    adapters::memory::{InMemoryIdentityRegistry, InMemoryUserRepository},
    domain::User,
    services::{UserProvisioningResult, UserProvisioningService},
};

/// Service type used by the BDD world.
pub type TestUserService =
    UserProvisioningService<InMemoryUserRepository, InMemoryIdentityRegistry, DefaultClock>;

/// Scenario world for user provisioning behaviour tests.
pub struct ProvisioningWorld {
    pub service: TestUserService,
    pub registry: InMemoryIdentityRegistry,
    pub last_created: Option<UserProvisioningResult<User>>,
    pub last_listing: Option<Vec<User>>,
}

impl ProvisioningWorld {
    /// Creates a world with an empty store and registry.
    #[must_use]
    pub fn new() -> Self {
        let registry = InMemoryIdentityRegistry::new();
        let service = UserProvisioningService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(registry.clone()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            registry,
            last_created: None,
            last_listing: None,
        }
    }
}

impl Default for ProvisioningWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ProvisioningWorld {
    ProvisioningWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
