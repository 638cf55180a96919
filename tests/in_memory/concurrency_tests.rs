//! Parallel writers against a shared in-memory store.

use super::helpers::{TickingClock, august, request};
use eyre::{WrapErr, ensure};
use std::sync::Arc;
use workforce::{
    config::WorkforceConfig,
    task::{
        domain::{ActivityAction, TaskPriority, TaskStatus},
        services::{AddCommentRequest, ReassignTaskRequest, ReassignmentGuard},
    },
    workforce::Workforce,
};

fn guarded_app(guard: ReassignmentGuard) -> eyre::Result<Workforce<TickingClock>> {
    let mut config = WorkforceConfig::default();
    config.reassignment.guard = guard;
    Workforce::from_config(&config, Arc::new(TickingClock::new())).wrap_err("assemble workforce")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_comments_are_not_lost() -> eyre::Result<()> {
    let app = guarded_app(ReassignmentGuard::PerReference)?;
    let created = app
        .lifecycle()
        .create(request("Busy task", "staff-1", TaskPriority::Medium, august(3)))
        .await?;

    let handles: Vec<_> = (0..16)
        .map(|n| {
            let lifecycle = app.lifecycle().clone();
            let id = created.id();
            tokio::spawn(async move {
                lifecycle
                    .add_comment(id, AddCommentRequest::new("u", "User", format!("note {n}")))
                    .await
            })
        })
        .collect();
    for handle in handles {
        handle.await??;
    }

    let task = app.lifecycle().get_with_full_details(created.id()).await?;
    ensure!(task.comments().len() == 16, "lost comments");
    ensure!(
        task.activity_history().count_of(ActivityAction::CommentAdded) == 16,
        "lost activity entries"
    );
    ensure!(task.activity_history().is_chronological(), "history out of order");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_status_and_priority_updates_are_all_recorded() -> eyre::Result<()> {
    let app = guarded_app(ReassignmentGuard::PerReference)?;
    let created = app
        .lifecycle()
        .create(request("Contended", "staff-2", TaskPriority::Low, august(3)))
        .await?;

    let mut handles = Vec::new();
    for n in 0..8 {
        let lifecycle = app.lifecycle().clone();
        let id = created.id();
        handles.push(tokio::spawn(async move {
            if n % 2 == 0 {
                lifecycle.update_status(id, TaskStatus::Completed, "a").await
            } else {
                lifecycle.update_priority(id, TaskPriority::High, "b").await
            }
        }));
    }
    for handle in handles {
        handle.await??;
    }

    let task = app.lifecycle().get(created.id()).await?;
    let history = task.activity_history();
    ensure!(
        history.count_of(ActivityAction::StatusChanged) == 4,
        "status changes lost"
    );
    ensure!(
        history.count_of(ActivityAction::PriorityChanged) == 4,
        "priority changes lost"
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn guarded_concurrent_reassignments_leave_one_active_task() -> eyre::Result<()> {
    let app = guarded_app(ReassignmentGuard::PerReference)?;
    app.lifecycle()
        .create(
            request("Contested", "staff-1", TaskPriority::High, august(3))
                .with_customer_reference("CR-RACE"),
        )
        .await?;

    let handles: Vec<_> = ["staff-2", "staff-3", "staff-4", "staff-2", "staff-3"]
        .into_iter()
        .map(|staff| {
            let lifecycle = app.lifecycle().clone();
            tokio::spawn(async move {
                lifecycle
                    .reassign_by_customer_reference(ReassignTaskRequest::new(
                        "CR-RACE", staff, "mgr",
                    ))
                    .await
            })
        })
        .collect();
    for handle in handles {
        handle.await??;
    }

    let history = app
        .lifecycle()
        .history_for_customer_reference("CR-RACE")
        .await?;
    let active = history
        .iter()
        .filter(|task| task.status() == TaskStatus::Active)
        .count();
    ensure!(history.len() == 6, "every reassignment adds one version");
    ensure!(active == 1, "expected one active task, found {active}");
    Ok(())
}
