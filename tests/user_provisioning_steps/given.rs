//! Given steps for user provisioning BDD scenarios.

use super::world::{ProvisioningWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use time_tracker::user::domain::{PassportNumber, PersonalDetails};

#[given(r#"the registry knows passport "{passport}" as "{surname}" "{name}""#)]
fn registry_knows_passport(
    world: &mut ProvisioningWorld,
    passport: String,
    surname: String,
    name: String,
) -> Result<(), eyre::Report> {
    let parsed = PassportNumber::parse(passport).wrap_err("parse scenario passport")?;
    world.registry.register(
        &parsed,
        PersonalDetails::new(surname, name, "", "Moscow, Lenina 1"),
    );
    Ok(())
}

#[given(r#"a user exists for passport "{passport}""#)]
fn user_exists(world: &mut ProvisioningWorld, passport: String) -> Result<(), eyre::Report> {
    run_async(world.service.create_user(&passport))
        .wrap_err_with(|| format!("create user for {passport} in scenario setup"))?;
    Ok(())
}
