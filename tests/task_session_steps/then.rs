//! Then steps for work session BDD scenarios.

use super::world::TaskSessionWorld;
use time_tracker::task::{domain::TaskDomainError, services::TaskTrackingError};
use rstest_bdd_macros::then;

#[then("the task shows {hours:i64} hours and {minutes:i64} minutes")]
fn task_shows_elapsed(
    world: &TaskSessionWorld,
    hours: i64,
    minutes: i64,
) -> Result<(), eyre::Report> {
    let task = world
        .current_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    let elapsed = task.elapsed();

    if (elapsed.hours(), elapsed.minutes()) != (hours, minutes) {
        return Err(eyre::eyre!(
            "expected {hours}h/{minutes}m, found {}h/{}m",
            elapsed.hours(),
            elapsed.minutes()
        ));
    }
    Ok(())
}

#[then("the task has ended")]
fn task_has_ended(world: &TaskSessionWorld) -> Result<(), eyre::Report> {
    let task = world
        .current_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;

    match task.end_time() {
        Some(end) if end > task.start_time() => Ok(()),
        other => Err(eyre::eyre!("expected an end time after the start, found {other:?}")),
    }
}

#[then("stopping fails because the task already stopped")]
fn stopping_fails_already_stopped(world: &TaskSessionWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_stop
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing stop result"))?;

    if !matches!(
        result,
        Err(TaskTrackingError::Domain(TaskDomainError::AlreadyStopped(_)))
    ) {
        return Err(eyre::eyre!("expected AlreadyStopped error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the report lists "{names}""#)]
fn report_lists(world: &TaskSessionWorld, names: String) -> Result<(), eyre::Report> {
    let report = world
        .last_report
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing report result"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("report failed: {err}"))?;

    let listed: Vec<&str> = report.iter().map(|task| task.name().as_str()).collect();
    let expected: Vec<&str> = names.split(", ").collect();
    if listed != expected {
        return Err(eyre::eyre!("expected {expected:?}, found {listed:?}"));
    }
    Ok(())
}

#[then("the report fails with an invalid date")]
fn report_fails_invalid_date(world: &TaskSessionWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_report
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing report result"))?;

    if !matches!(
        result,
        Err(TaskTrackingError::Domain(TaskDomainError::InvalidDate(_)))
    ) {
        return Err(eyre::eyre!("expected InvalidDate error, got {result:?}"));
    }
    Ok(())
}
