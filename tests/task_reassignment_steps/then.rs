//! Then steps for task reassignment BDD scenarios.

use super::world::{ReassignmentWorld, run_async};
use rstest_bdd_macros::then;
use workforce::task::domain::{ActivityAction, Task, TaskStatus};

fn history(world: &ReassignmentWorld, reference: &str) -> Result<Vec<Task>, eyre::Report> {
    Ok(run_async(
        world
            .app()?
            .lifecycle()
            .history_for_customer_reference(reference),
    )?)
}

#[then(r#"customer reference "{reference}" has {count} tasks"#)]
fn reference_has_tasks(
    world: &ReassignmentWorld,
    reference: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let tasks = history(world, &reference)?;
    if tasks.len() != count {
        return Err(eyre::eyre!(
            "expected {count} tasks for {reference}, found {}",
            tasks.len()
        ));
    }
    Ok(())
}

#[then(r#"exactly one task for customer reference "{reference}" is active"#)]
fn exactly_one_active(world: &ReassignmentWorld, reference: String) -> Result<(), eyre::Report> {
    let active = history(world, &reference)?
        .iter()
        .filter(|task| task.status() == TaskStatus::Active)
        .count();
    if active != 1 {
        return Err(eyre::eyre!("expected one active task, found {active}"));
    }
    Ok(())
}

#[then(r#"the active task for customer reference "{reference}" is assigned to "{name}""#)]
fn active_task_assignee(
    world: &ReassignmentWorld,
    reference: String,
    name: String,
) -> Result<(), eyre::Report> {
    let tasks = history(world, &reference)?;
    let active = tasks
        .iter()
        .find(|task| task.status() == TaskStatus::Active)
        .ok_or_else(|| eyre::eyre!("no active task for {reference}"))?;
    if active.assigned_staff_name() != name {
        return Err(eyre::eyre!(
            "expected assignee {name}, found {}",
            active.assigned_staff_name()
        ));
    }
    Ok(())
}

#[then(r#"the cancelled task for customer reference "{reference}" records "{description}""#)]
fn cancelled_task_records(
    world: &ReassignmentWorld,
    reference: String,
    description: String,
) -> Result<(), eyre::Report> {
    let tasks = history(world, &reference)?;
    let cancelled = tasks
        .iter()
        .find(|task| task.status() == TaskStatus::Cancelled)
        .ok_or_else(|| eyre::eyre!("no cancelled task for {reference}"))?;
    let recorded = cancelled
        .activity_history()
        .iter()
        .any(|entry| {
            entry.action() == ActivityAction::Cancelled && entry.description() == description
        });
    if !recorded {
        return Err(eyre::eyre!("cancellation entry '{description}' not found"));
    }
    Ok(())
}

#[then("the reassignment fails with a not found error")]
fn reassignment_not_found(world: &ReassignmentWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_reassignment
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing reassignment result"))?;
    match result {
        Err(err) if err.is_not_found() => Ok(()),
        other => Err(eyre::eyre!("expected not found error, got {other:?}")),
    }
}

#[then("the view contains {count} tasks")]
fn view_contains(world: &ReassignmentWorld, count: usize) -> Result<(), eyre::Report> {
    let view = world
        .last_view
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing query result"))?;
    if view.len() != count {
        return Err(eyre::eyre!("expected {count} tasks, found {}", view.len()));
    }
    Ok(())
}
