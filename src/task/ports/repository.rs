//! Repository port for the task collection.

use crate::task::domain::{Task, TaskChanges, TaskDraft, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Raw CRUD contract over the task collection.
///
/// Implementations perform no business validation; the use-case layer checks
/// inputs before delegating here.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every stored task in insertion order.
    async fn all_tasks(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist; absence is not an error.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Stores a new task built from the given draft.
    ///
    /// Generates a fresh identifier and stamps `created_at` and `updated_at`
    /// from the same clock reading.
    async fn create(&self, draft: TaskDraft) -> TaskRepositoryResult<Task>;

    /// Merges the partial changes onto an existing task, refreshing its
    /// `updated_at` timestamp, and returns the updated task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task has the given
    /// identifier. Callers that need a different not-found shape pre-check
    /// existence via [`TaskRepository::find_by_id`].
    async fn update(&self, id: TaskId, changes: TaskChanges) -> TaskRepositoryResult<Task>;

    /// Removes the task with the given identifier.
    ///
    /// Deleting an absent task is a no-op.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
