//! Application services for user provisioning.

mod provisioning;

pub use provisioning::{
    UserProvisioningError, UserProvisioningResult, UserProvisioningService,
};
