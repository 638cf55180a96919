//! In-memory integration tests for task lifecycle operations.

use super::helpers::{TickingClock, app, august, request};
use eyre::{WrapErr, ensure};
use rstest::rstest;
use workforce::{
    staff::domain::{StaffId, StaffMember},
    task::{
        domain::{ActivityAction, TaskPriority, TaskStatus, TaskUpdate},
        ports::TaskRepository,
        services::{AddCommentRequest, ErrorKind},
    },
    workforce::Workforce,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_is_visible_through_store_and_service(
    app: Workforce<TickingClock>,
) -> eyre::Result<()> {
    let created = app
        .lifecycle()
        .create(
            request("Deliver package", "staff-2", TaskPriority::High, august(3))
                .with_description("Downtown office")
                .with_customer_reference("CR-100"),
        )
        .await
        .wrap_err("create task")?;

    ensure!(created.assigned_staff_name() == "Jane Smith", "assignee name snapshot");
    ensure!(created.description() == "Downtown office", "description copied");
    let stored = app
        .tasks()
        .find_by_id(created.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task missing from store"))?;
    ensure!(stored == created, "stored task differs from returned task");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assignee_name_is_a_snapshot(app: Workforce<TickingClock>) -> eyre::Result<()> {
    let created = app
        .lifecycle()
        .create(request("Audit", "staff-1", TaskPriority::Low, august(4)))
        .await?;
    let renamed = StaffMember::new(
        StaffId::new("staff-1")?,
        "Johnathan Doe",
        "john.doe@company.com",
        "Sales",
    )?;
    app.staff().update(renamed)?;

    let fetched = app.lifecycle().get(created.id()).await?;
    ensure!(
        fetched.assigned_staff_name() == "John Doe",
        "renaming staff must not rewrite existing tasks"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn removed_staff_cannot_receive_new_tasks(
    app: Workforce<TickingClock>,
) -> eyre::Result<()> {
    app.staff().remove(&StaffId::new("staff-4")?)?;

    let result = app
        .lifecycle()
        .create(request("Audit", "staff-4", TaskPriority::Low, august(4)))
        .await;

    let err = result.err().ok_or_else(|| eyre::eyre!("expected failure"))?;
    ensure!(err.kind() == ErrorKind::NotFound, "unexpected error: {err}");
    ensure!(app.tasks().is_empty(), "nothing should be stored");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_records_every_step(app: Workforce<TickingClock>) -> eyre::Result<()> {
    let lifecycle = app.lifecycle();
    let created = lifecycle
        .create(request("Install router", "staff-3", TaskPriority::Medium, august(5)))
        .await?;
    lifecycle
        .update_priority(created.id(), TaskPriority::Urgent, "lead-2")
        .await?;
    lifecycle
        .add_comment(
            created.id(),
            AddCommentRequest::new("staff-3", "Mike Johnson", "On my way"),
        )
        .await?;
    lifecycle
        .update_status(created.id(), TaskStatus::Completed, "staff-3")
        .await?;

    let detailed = lifecycle.get_with_full_details(created.id()).await?;
    let actions: Vec<ActivityAction> = detailed
        .activity_history()
        .iter()
        .map(|entry| entry.action())
        .collect();
    ensure!(
        actions
            == vec![
                ActivityAction::Created,
                ActivityAction::PriorityChanged,
                ActivityAction::CommentAdded,
                ActivityAction::StatusChanged,
            ],
        "unexpected activity sequence: {actions:?}"
    );
    ensure!(detailed.status() == TaskStatus::Completed, "status persisted");
    ensure!(detailed.comments().len() == 1, "comment persisted");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_task_may_be_reopened(app: Workforce<TickingClock>) -> eyre::Result<()> {
    let lifecycle = app.lifecycle();
    let created = lifecycle
        .create(request("Repair", "staff-1", TaskPriority::Medium, august(3)))
        .await?;
    lifecycle
        .update_status(created.id(), TaskStatus::Completed, "lead")
        .await?;
    let reopened = lifecycle
        .update_status(created.id(), TaskStatus::Active, "lead")
        .await?;

    ensure!(reopened.status() == TaskStatus::Active, "status should reopen");
    let last = reopened
        .activity_history()
        .latest()
        .ok_or_else(|| eyre::eyre!("missing status entry"))?;
    ensure!(
        last.description() == "Status changed from COMPLETED to ACTIVE",
        "unexpected description: {}",
        last.description()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn verbatim_update_records_no_activity(app: Workforce<TickingClock>) -> eyre::Result<()> {
    let lifecycle = app.lifecycle();
    let created = lifecycle
        .create(request("Survey", "staff-1", TaskPriority::Medium, august(3)))
        .await?;

    let mut update = TaskUpdate::from_task(&created);
    update.status = TaskStatus::Cancelled;
    update.start_date = Some(august(10));
    let updated = lifecycle.update(created.id(), update).await?;

    ensure!(updated.status() == TaskStatus::Cancelled, "status replaced");
    ensure!(updated.start_date() == Some(august(10)), "start date replaced");
    ensure!(
        updated.activity_history().len() == 1,
        "verbatim update must not add activity"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_disappears_from_listing(app: Workforce<TickingClock>) -> eyre::Result<()> {
    let lifecycle = app.lifecycle();
    let kept = lifecycle
        .create(request("Keep", "staff-1", TaskPriority::Medium, august(3)))
        .await?;
    let dropped = lifecycle
        .create(request("Drop", "staff-2", TaskPriority::Medium, august(3)))
        .await?;

    lifecycle.delete(dropped.id()).await?;

    let remaining: Vec<_> = lifecycle.list_all().await?.iter().map(|t| t.id()).collect();
    ensure!(remaining == vec![kept.id()], "unexpected listing: {remaining:?}");
    let second = lifecycle.delete(dropped.id()).await;
    ensure!(
        second.as_ref().is_err_and(|err| err.is_not_found()),
        "second delete should be not found"
    );
    Ok(())
}
