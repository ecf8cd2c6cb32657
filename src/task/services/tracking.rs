//! Service layer for starting, stopping, and listing work sessions.

use crate::error::ErrorKind;
use crate::task::{
    domain::{NewTask, Task, TaskDomainError, TaskId, TaskName, TaskPeriod},
    ports::{TaskRepository, TaskRepositoryError},
};
use crate::user::domain::UserId;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task tracking operations.
#[derive(Debug, Error)]
pub enum TaskTrackingError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The requested task does not exist.
    #[error("task {0} not found")]
    NotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskTrackingError {
    /// Returns the failure classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_) => ErrorKind::InvalidArgument,
            Self::NotFound(_) | Self::Repository(TaskRepositoryError::NotFound(_)) => {
                ErrorKind::NotFound
            }
            Self::Repository(TaskRepositoryError::Persistence(_)) => ErrorKind::Persistence,
        }
    }
}

/// Result type for task tracking operations.
pub type TaskTrackingResult<T> = Result<T, TaskTrackingError>;

/// Work session orchestration service.
///
/// Stopping is a load-modify-save sequence without locking; two concurrent
/// stops of one task both succeed and the later write wins.
pub struct TaskTrackingService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskTrackingService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskTrackingService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new task tracking service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Starts a work session for a user at the current instant.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTrackingError::Repository`] when the store rejects the
    /// task.
    pub async fn start_task(&self, user_id: UserId, name: TaskName) -> TaskTrackingResult<Task> {
        tracing::info!(user_id = %user_id, task_name = %name, "starting task");
        let new_task = NewTask::start(user_id, name, &*self.clock);
        let result = self.persist_start(&new_task).await;
        log_start(user_id, &result);
        result
    }

    /// Stops a running work session and records its elapsed time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTrackingError::NotFound`] when the task does not exist,
    /// [`TaskTrackingError::Domain`] when it was already stopped, or
    /// [`TaskTrackingError::Repository`] when persistence fails.
    pub async fn stop_task(&self, id: TaskId) -> TaskTrackingResult<Task> {
        tracing::info!(task_id = %id, "stopping task");
        let result = self.apply_stop(id).await;
        log_stop(id, &result);
        result
    }

    /// Lists a user's sessions inside a calendar-date window, longest first.
    ///
    /// Both dates are `YYYY-MM-DD` and taken at midnight UTC. Running tasks
    /// match on their start time and carry zero elapsed time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTrackingError::Domain`] when either date does not parse,
    /// or [`TaskTrackingError::Repository`] when the lookup fails.
    pub async fn get_user_tasks(
        &self,
        user_id: UserId,
        start_date: &str,
        end_date: &str,
    ) -> TaskTrackingResult<Vec<Task>> {
        tracing::info!(user_id = %user_id, start_date, end_date, "listing user tasks");
        let result = self.find_in_period(user_id, start_date, end_date).await;
        log_listing(user_id, &result);
        result
    }

    async fn persist_start(&self, new_task: &NewTask) -> TaskTrackingResult<Task> {
        Ok(self.repository.create(new_task).await?)
    }

    async fn apply_stop(&self, id: TaskId) -> TaskTrackingResult<Task> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskTrackingError::NotFound(id))?;
        task.stop(&*self.clock)?;
        self.repository.update(&task).await?;
        Ok(task)
    }

    async fn find_in_period(
        &self,
        user_id: UserId,
        start_date: &str,
        end_date: &str,
    ) -> TaskTrackingResult<Vec<Task>> {
        let period = TaskPeriod::parse(start_date, end_date)?;
        Ok(self
            .repository
            .find_for_user_in_period(user_id, &period)
            .await?)
    }
}

fn log_start(user_id: UserId, result: &TaskTrackingResult<Task>) {
    match result {
        Ok(task) => tracing::info!(task_id = %task.id(), user_id = %user_id, "task started"),
        Err(err) => tracing::debug!(error = %err, user_id = %user_id, "task start failed"),
    }
}

fn log_stop(id: TaskId, result: &TaskTrackingResult<Task>) {
    match result {
        Ok(task) => tracing::info!(
            task_id = %id,
            hours = task.elapsed().hours(),
            minutes = task.elapsed().minutes(),
            "task stopped"
        ),
        Err(TaskTrackingError::NotFound(_)) => {
            tracing::debug!(task_id = %id, "task to stop not found");
        }
        Err(err) => tracing::debug!(error = %err, task_id = %id, "task stop failed"),
    }
}

fn log_listing(user_id: UserId, result: &TaskTrackingResult<Vec<Task>>) {
    match result {
        Ok(tasks) => tracing::info!(user_id = %user_id, count = tasks.len(), "user tasks listed"),
        Err(err) => tracing::debug!(error = %err, user_id = %user_id, "user task listing failed"),
    }
}
