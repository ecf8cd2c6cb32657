//! Task aggregate root for timed work sessions.

use super::{ElapsedTime, TaskDomainError, TaskId, TaskName};
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;

/// A work session that has been started but not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    user_id: UserId,
    name: TaskName,
    start_time: DateTime<Utc>,
}

impl NewTask {
    /// Starts a session for a user at the current clock instant.
    #[must_use]
    pub fn start(user_id: UserId, name: TaskName, clock: &impl Clock) -> Self {
        Self {
            user_id,
            name,
            start_time: clock.utc(),
        }
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the session label.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the start instant.
    #[must_use]
    pub const fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// Attaches the store-assigned identifier, producing a running task.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            user_id: self.user_id,
            name: self.name,
            start_time: self.start_time,
            end_time: None,
            elapsed: ElapsedTime::default(),
            created_at: self.start_time,
            updated_at: self.start_time,
        }
    }
}

/// Task aggregate root.
///
/// A task is running while it has no end time. Elapsed time is zero until
/// the task stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    user_id: UserId,
    name: TaskName,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
    elapsed: ElapsedTime,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Store-assigned identifier.
    pub id: TaskId,
    /// Owning user.
    pub user_id: UserId,
    /// Session label.
    pub name: TaskName,
    /// Start instant.
    pub start_time: DateTime<Utc>,
    /// Stop instant, absent while running.
    pub end_time: Option<DateTime<Utc>>,
    /// Stored elapsed hours and minutes.
    pub elapsed: ElapsedTime,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            user_id: data.user_id,
            name: data.name,
            start_time: data.start_time,
            end_time: data.end_time,
            elapsed: data.elapsed,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the session label.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the start instant.
    #[must_use]
    pub const fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// Returns the stop instant, or `None` while running.
    #[must_use]
    pub const fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    /// Returns the elapsed time; zero while running.
    #[must_use]
    pub const fn elapsed(&self) -> ElapsedTime {
        self.elapsed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` while the task has not been stopped.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.end_time.is_none()
    }

    /// Stops the task at the current clock instant and records elapsed time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::AlreadyStopped`] when the task already has
    /// an end time.
    pub fn stop(&mut self, clock: &impl Clock) -> Result<(), TaskDomainError> {
        if !self.is_running() {
            return Err(TaskDomainError::AlreadyStopped(self.id));
        }
        let now = clock.utc();
        self.end_time = Some(now);
        self.elapsed = ElapsedTime::from_duration(now - self.start_time);
        self.updated_at = now;
        Ok(())
    }
}
