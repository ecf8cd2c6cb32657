//! When steps for user provisioning BDD scenarios.

use super::world::{ProvisioningWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use time_tracker::user::domain::{Pagination, UserFilters};

#[when(r#"a user is created for passport "{passport}""#)]
fn create_user(world: &mut ProvisioningWorld, passport: String) {
    world.last_created = Some(run_async(world.service.create_user(&passport)));
}

#[when(r#"users with surname "{surname}" are listed on page {page:u32} of size {size:u32}"#)]
fn list_by_surname(
    world: &mut ProvisioningWorld,
    surname: String,
    page: u32,
    size: u32,
) -> Result<(), eyre::Report> {
    let filters = UserFilters::new().with("surname", surname);
    let users = run_async(
        world
            .service
            .list_users_filtered(filters, Pagination::new(page, size)),
    )
    .wrap_err("list users by surname")?;
    world.last_listing = Some(users);
    Ok(())
}
