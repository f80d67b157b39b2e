//! End-to-end lifecycle flows through the public task manager API.

use rstest::rstest;
use taskboard::task::{
    domain::TaskStatus,
    services::{CreateTaskRequest, UpdateTaskRequest},
};

use super::helpers::{TestManager, create_request, manager, unwrap_data};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_crud_lifecycle(manager: TestManager) -> eyre::Result<()> {
    let created = unwrap_data(manager.create_task(create_request("Ship the beta")).await)?;
    assert_eq!(created.status(), TaskStatus::Todo);

    let listed = unwrap_data(manager.get_all_tasks().await)?;
    assert_eq!(listed, vec![created.clone()]);

    let update = UpdateTaskRequest::new()
        .with_title("Ship the beta to all tenants")
        .with_status(TaskStatus::Doing);
    let updated = unwrap_data(manager.update_task(created.id(), update).await)?;
    assert_eq!(updated.title(), "Ship the beta to all tenants");
    assert_eq!(updated.status(), TaskStatus::Doing);
    assert_eq!(updated.created_at(), created.created_at());

    let fetched = unwrap_data(manager.get_task_by_id(created.id()).await)?;
    assert_eq!(fetched, updated);

    let deletion = manager.delete_task(created.id()).await;
    assert!(deletion.success);

    let remaining = unwrap_data(manager.get_all_tasks().await)?;
    assert!(remaining.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_fan_out_across_board_columns(manager: TestManager) -> eyre::Result<()> {
    for status in TaskStatus::ALL {
        let request = create_request(&format!("{status} column task")).with_status(status);
        unwrap_data(manager.create_task(request).await)?;
    }

    let all = unwrap_data(manager.get_all_tasks().await)?;
    for status in TaskStatus::ALL {
        let column: Vec<_> = all.iter().filter(|task| task.status() == status).collect();
        assert_eq!(column.len(), 1, "expected one task in the {status} column");
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_requests_leave_the_collection_untouched(
    manager: TestManager,
) -> eyre::Result<()> {
    let created = unwrap_data(manager.create_task(create_request("Keep me intact")).await)?;

    let invalid_create = manager.create_task(CreateTaskRequest::new()).await;
    assert_eq!(invalid_create.status, 400);

    let forbidden_update = UpdateTaskRequest {
        updated_at: Some("2031-01-01T00:00:00Z".to_owned()),
        ..UpdateTaskRequest::default()
    };
    let rejected = manager.update_task(created.id(), forbidden_update).await;
    assert_eq!(rejected.status, 400);
    assert_eq!(
        rejected.error.as_deref(),
        Some("Forbidden fields: updatedAt")
    );

    let fetched = unwrap_data(manager.get_task_by_id(created.id()).await)?;
    assert_eq!(fetched, created);

    let all = unwrap_data(manager.get_all_tasks().await)?;
    assert_eq!(all.len(), 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_is_idempotent_from_the_caller_perspective(
    manager: TestManager,
) -> eyre::Result<()> {
    let created = unwrap_data(manager.create_task(create_request("Delete twice")).await)?;

    let first = manager.delete_task(created.id()).await;
    assert!(first.success);

    let second = manager.delete_task(created.id()).await;
    assert!(second.success);
    assert_eq!(second.status, 200);

    let all = unwrap_data(manager.get_all_tasks().await)?;
    assert!(all.is_empty());
    Ok(())
}
