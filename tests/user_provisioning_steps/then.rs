//! Then steps for user provisioning BDD scenarios.

use super::world::{ProvisioningWorld, run_async};
use rstest_bdd_macros::then;
use time_tracker::{error::ErrorKind, user::domain::User};

fn created_user(world: &ProvisioningWorld) -> Result<&User, eyre::Report> {
    world
        .last_created
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing creation result"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("user creation failed: {err}"))
}

fn creation_fails_with(world: &ProvisioningWorld, expected: ErrorKind) -> Result<(), eyre::Report> {
    let result = world
        .last_created
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing creation result"))?;

    match result {
        Err(err) if err.kind() == expected => Ok(()),
        other => Err(eyre::eyre!("expected {expected} failure, got {other:?}")),
    }
}

#[then(r#"the created user has surname "{surname}" and name "{name}""#)]
fn created_user_has_names(
    world: &ProvisioningWorld,
    surname: String,
    name: String,
) -> Result<(), eyre::Report> {
    let user = created_user(world)?;
    let details = user.details();

    if details.surname() != surname || details.name() != name {
        return Err(eyre::eyre!(
            "expected {surname} {name}, found {} {}",
            details.surname(),
            details.name()
        ));
    }
    Ok(())
}

#[then("creation fails as an invalid argument")]
fn creation_fails_invalid_argument(world: &ProvisioningWorld) -> Result<(), eyre::Report> {
    creation_fails_with(world, ErrorKind::InvalidArgument)
}

#[then("creation fails as an external service error")]
fn creation_fails_external(world: &ProvisioningWorld) -> Result<(), eyre::Report> {
    creation_fails_with(world, ErrorKind::ExternalService)
}

#[then("creation fails as a persistence error")]
fn creation_fails_persistence(world: &ProvisioningWorld) -> Result<(), eyre::Report> {
    creation_fails_with(world, ErrorKind::Persistence)
}

#[then("{count:usize} users are stored")]
fn users_are_stored(world: &ProvisioningWorld, count: usize) -> Result<(), eyre::Report> {
    let users = run_async(world.service.list_users())
        .map_err(|err| eyre::eyre!("list users failed: {err}"))?;
    if users.len() != count {
        return Err(eyre::eyre!("expected {count} users, found {}", users.len()));
    }
    Ok(())
}

#[then(r#"the listing names "{names}""#)]
fn listing_names(world: &ProvisioningWorld, names: String) -> Result<(), eyre::Report> {
    let listing = world
        .last_listing
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing listing result"))?;

    let listed: Vec<&str> = listing.iter().map(|user| user.details().name()).collect();
    let expected: Vec<&str> = names.split(", ").collect();
    if listed != expected {
        return Err(eyre::eyre!("expected {expected:?}, found {listed:?}"));
    }
    Ok(())
}
