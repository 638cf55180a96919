//! When steps for task reassignment BDD scenarios.

use super::world::{ReassignmentWorld, parse_day, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use workforce::task::services::ReassignTaskRequest;

#[when(r#"customer reference "{reference}" is reassigned to "{staff_id}" by "{manager}""#)]
fn reassign_reference(
    world: &mut ReassignmentWorld,
    reference: String,
    staff_id: String,
    manager: String,
) -> Result<(), eyre::Report> {
    let result = run_async(
        world
            .app()?
            .lifecycle()
            .reassign_by_customer_reference(ReassignTaskRequest::new(reference, staff_id, manager)),
    );
    world.last_reassignment = Some(result);
    Ok(())
}

#[when(r#"the smart daily view from "{start}" to "{end}" is requested"#)]
fn request_smart_daily(
    world: &mut ReassignmentWorld,
    start: String,
    end: String,
) -> Result<(), eyre::Report> {
    let view = run_async(
        world
            .app()?
            .queries()
            .smart_daily(parse_day(&start)?, parse_day(&end)?),
    )
    .wrap_err("smart daily query")?;
    world.last_view = Some(view);
    Ok(())
}

#[when(r#"the date range view from "{start}" to "{end}" is requested"#)]
fn request_date_range(
    world: &mut ReassignmentWorld,
    start: String,
    end: String,
) -> Result<(), eyre::Report> {
    let view = run_async(
        world
            .app()?
            .queries()
            .by_date_range(parse_day(&start)?, parse_day(&end)?),
    )
    .wrap_err("date range query")?;
    world.last_view = Some(view);
    Ok(())
}
