//! Shared world state for work session BDD scenarios.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rstest::fixture;
use time_tracker::{
    clock::ManualClock,
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::Task,
        services::{TaskTrackingResult, TaskTrackingService},
    },
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskTrackingService<InMemoryTaskRepository, ManualClock>;

/// Scenario world for work session behaviour tests.
pub struct TaskSessionWorld {
    pub service: TestTaskService,
    pub clock: ManualClock,
    pub current_task: Option<Task>,
    pub last_stop: Option<TaskTrackingResult<Task>>,
    pub last_report: Option<TaskTrackingResult<Vec<Task>>>,
}

impl TaskSessionWorld {
    /// Creates a world whose clock starts at the Unix epoch.
    #[must_use]
    pub fn new() -> Self {
        let clock = ManualClock::new(DateTime::<Utc>::UNIX_EPOCH);
        let service = TaskTrackingService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(clock.clone()),
        );

        Self {
            service,
            clock,
            current_task: None,
            last_stop: None,
            last_report: None,
        }
    }
}

impl Default for TaskSessionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskSessionWorld {
    TaskSessionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
