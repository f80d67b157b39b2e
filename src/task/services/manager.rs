//! Use-case layer orchestrating task CRUD with validation.

use super::response::UseCaseResponse;
use crate::task::{
    domain::{Task, TaskChanges, TaskDraft, TaskId, TaskStatus},
    ports::TaskRepository,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Request payload for creating a task.
///
/// All fields are optional at this boundary; the manager reports which
/// required ones are absent instead of failing deserialization. An empty
/// string counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateTaskRequest {
    /// Short human-readable summary. Required.
    pub title: Option<String>,
    /// Free-form details. Required.
    pub description: Option<String>,
    /// Deadline for completing the task. Required.
    pub due_date: Option<DateTime<Utc>>,
    /// Initial workflow status; defaults to [`TaskStatus::Todo`] when absent.
    pub status: Option<TaskStatus>,
}

impl CreateTaskRequest {
    /// Creates an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the initial workflow status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Validates the required fields and converts into a repository draft.
    ///
    /// On failure, returns the missing field names in canonical order.
    fn into_draft(self) -> Result<TaskDraft, Vec<&'static str>> {
        let mut missing = Vec::new();
        if self.title.as_deref().is_none_or(str::is_empty) {
            missing.push("title");
        }
        if self.description.as_deref().is_none_or(str::is_empty) {
            missing.push("description");
        }
        if self.due_date.is_none() {
            missing.push("dueDate");
        }
        match (self.title, self.description, self.due_date) {
            (Some(title), Some(description), Some(due_date)) if missing.is_empty() => {
                Ok(TaskDraft {
                    title,
                    description,
                    status: self.status.unwrap_or_default(),
                    due_date,
                })
            }
            _ => Err(missing),
        }
    }
}

/// Partial update payload for an existing task.
///
/// The `id`, `created_at`, and `updated_at` slots exist only so that
/// caller-supplied values for the immutable fields can be detected and
/// rejected; the manager never writes them through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateTaskRequest {
    /// Replacement title, if any.
    pub title: Option<String>,
    /// Replacement description, if any.
    pub description: Option<String>,
    /// Replacement due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Replacement workflow status, if any.
    pub status: Option<TaskStatus>,
    /// Caller-supplied identifier; rejected when present.
    pub id: Option<String>,
    /// Caller-supplied creation timestamp; rejected when present.
    pub created_at: Option<String>,
    /// Caller-supplied update timestamp; rejected when present.
    pub updated_at: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the replacement workflow status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns the populated immutable-field names in canonical order.
    fn forbidden_fields(&self) -> Vec<&'static str> {
        let mut forbidden = Vec::new();
        if self.id.is_some() {
            forbidden.push("id");
        }
        if self.created_at.is_some() {
            forbidden.push("createdAt");
        }
        if self.updated_at.is_some() {
            forbidden.push("updatedAt");
        }
        forbidden
    }

    /// Converts into the repository-level change set.
    fn into_changes(self) -> TaskChanges {
        TaskChanges {
            title: self.title,
            description: self.description,
            status: self.status,
            due_date: self.due_date,
        }
    }
}

/// Use-case layer for task management.
///
/// The only place business rules live: wraps repository calls with input
/// validation and reports every outcome through [`UseCaseResponse`].
/// Repository failures never escape as errors; they surface as `500`
/// envelopes.
#[derive(Clone)]
pub struct TaskManager<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> TaskManager<R>
where
    R: TaskRepository,
{
    /// Creates a manager backed by the given repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a task after checking the required fields.
    ///
    /// Missing `title`, `description`, or `dueDate` values (absent or empty)
    /// produce a `400` envelope naming the offenders in that order, without
    /// touching the repository. The status defaults to `TODO` when absent.
    pub async fn create_task(&self, request: CreateTaskRequest) -> UseCaseResponse<Task> {
        let draft = match request.into_draft() {
            Ok(draft) => draft,
            Err(missing) => {
                let fields = missing.join(", ");
                debug!(%fields, "task creation rejected: missing fields");
                return UseCaseResponse::failure(400, format!("Missing fields: {fields}"));
            }
        };
        match self.repository.create(draft).await {
            Ok(task) => UseCaseResponse::ok(task),
            Err(err) => UseCaseResponse::failure(500, err.to_string()),
        }
    }

    /// Fetches a task by identifier.
    ///
    /// Returns a `404` envelope when no task has the given identifier.
    pub async fn get_task_by_id(&self, id: TaskId) -> UseCaseResponse<Task> {
        match self.repository.find_by_id(id).await {
            Ok(Some(task)) => UseCaseResponse::ok(task),
            Ok(None) => {
                debug!(%id, "task not found");
                UseCaseResponse::failure(404, format!("Task with id {id} not found"))
            }
            Err(err) => UseCaseResponse::failure(500, err.to_string()),
        }
    }

    /// Returns every task in insertion order.
    ///
    /// The empty list is a success, not an error.
    pub async fn get_all_tasks(&self) -> UseCaseResponse<Vec<Task>> {
        match self.repository.all_tasks().await {
            Ok(tasks) => UseCaseResponse::ok(tasks),
            Err(err) => UseCaseResponse::failure(500, err.to_string()),
        }
    }

    /// Updates the mutable fields of an existing task.
    ///
    /// Caller-supplied `id`, `createdAt`, or `updatedAt` values produce a
    /// `400` envelope naming the offenders in that order. The forbidden-field
    /// check precedes the existence check, so a violation on a missing task
    /// still reports `400` rather than `404`.
    pub async fn update_task(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> UseCaseResponse<Task> {
        let forbidden = request.forbidden_fields();
        if !forbidden.is_empty() {
            let fields = forbidden.join(", ");
            debug!(%id, %fields, "task update rejected: forbidden fields");
            return UseCaseResponse::failure(400, format!("Forbidden fields: {fields}"));
        }
        let lookup = self.get_task_by_id(id).await;
        if !lookup.success {
            return lookup;
        }
        match self.repository.update(id, request.into_changes()).await {
            Ok(task) => UseCaseResponse::ok(task),
            Err(err) => UseCaseResponse::failure(500, err.to_string()),
        }
    }

    /// Deletes a task and verifies the deletion took effect.
    ///
    /// The delete is delegated unconditionally, then existence is re-checked:
    /// a task still present afterwards is reported as a `500` envelope.
    /// Deleting an absent task succeeds.
    pub async fn delete_task(&self, id: TaskId) -> UseCaseResponse<()> {
        if let Err(err) = self.repository.delete(id).await {
            return UseCaseResponse::failure(500, err.to_string());
        }
        match self.repository.find_by_id(id).await {
            Ok(None) => UseCaseResponse::ok_empty(),
            Ok(Some(_)) => {
                warn!(%id, "task survived deletion");
                UseCaseResponse::failure(
                    500,
                    format!("Wasn't able to delete task with id {id}. Please, try again"),
                )
            }
            Err(err) => UseCaseResponse::failure(500, err.to_string()),
        }
    }
}
