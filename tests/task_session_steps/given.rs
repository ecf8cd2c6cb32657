//! Given steps for work session BDD scenarios.

use super::world::{TaskSessionWorld, run_async};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use time_tracker::{task::domain::TaskName, user::domain::UserId};

#[given(r#"the clock reads "{instant}""#)]
fn clock_reads(world: &mut TaskSessionWorld, instant: String) -> Result<(), eyre::Report> {
    let parsed: DateTime<Utc> = instant
        .parse()
        .wrap_err_with(|| format!("parse scenario instant {instant}"))?;
    world.clock.set(parsed);
    Ok(())
}

#[given(r#"user {user_id:i64} finished "{name}" lasting {minutes:i64} minutes on "{date}""#)]
fn finished_task(
    world: &mut TaskSessionWorld,
    user_id: i64,
    name: String,
    minutes: i64,
    date: String,
) -> Result<(), eyre::Report> {
    let day = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .wrap_err_with(|| format!("parse scenario date {date}"))?;
    let start = day
        .and_hms_opt(9, 0, 0)
        .ok_or_else(|| eyre::eyre!("invalid start time for {date}"))?
        .and_utc();
    world.clock.set(start);

    let task = run_async(
        world
            .service
            .start_task(UserId::new(user_id), TaskName::new(name)),
    )
    .wrap_err("start task in scenario setup")?;
    world.clock.advance(Duration::minutes(minutes));
    run_async(world.service.stop_task(task.id())).wrap_err("stop task in scenario setup")?;
    Ok(())
}
