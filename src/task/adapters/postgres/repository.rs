//! `PostgreSQL` repository implementation for tasks.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{ElapsedTime, NewTask, PersistedTaskData, Task, TaskId, TaskName, TaskPeriod},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::user::domain::UserId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let new_row = NewTaskRow {
            user_id: task.user_id().value(),
            task_name: task.name().as_str().to_owned(),
            start_time: task.start_time(),
            created_at: task.start_time(),
            updated_at: task.start_time(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(row_to_task(row))
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let end_val = task.end_time();
        let elapsed = task.elapsed();
        let updated_val = task.updated_at();

        self.run_blocking(move |connection| {
            let updated_count = diesel::update(tasks::table.filter(tasks::id.eq(task_id.value())))
                .set((
                    tasks::end_time.eq(end_val),
                    tasks::hours.eq(elapsed.hours()),
                    tasks::minutes.eq(elapsed.minutes()),
                    tasks::updated_at.eq(updated_val),
                ))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.value()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            Ok(row.map(row_to_task))
        })
        .await
    }

    async fn find_for_user_in_period(
        &self,
        user_id: UserId,
        period: &TaskPeriod,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let start_val = period.start();
        let end_val = period.end();

        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::user_id.eq(user_id.value()))
                .filter(tasks::start_time.ge(start_val))
                .filter(tasks::end_time.le(end_val).or(tasks::end_time.is_null()))
                .order((tasks::hours.desc(), tasks::minutes.desc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_task).collect())
        })
        .await
    }
}

fn row_to_task(row: TaskRow) -> Task {
    let TaskRow {
        id,
        user_id,
        task_name,
        hours,
        minutes,
        start_time,
        end_time,
        created_at,
        updated_at,
    } = row;

    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        user_id: UserId::new(user_id),
        name: TaskName::new(task_name),
        start_time,
        end_time,
        elapsed: ElapsedTime::from_parts(hours, minutes),
        created_at,
        updated_at,
    })
}
