//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// Session label.
    pub task_name: String,
    /// Whole elapsed hours.
    pub hours: i64,
    /// Total whole elapsed minutes.
    pub minutes: i64,
    /// Start instant.
    pub start_time: DateTime<Utc>,
    /// Stop instant, absent while running.
    pub end_time: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for a freshly started task.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Owning user.
    pub user_id: i64,
    /// Session label.
    pub task_name: String,
    /// Start instant.
    pub start_time: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
