//! Domain model for timed work sessions.
//!
//! A task is started for a user, stopped exactly once, and read many times
//! afterwards. Elapsed time is derived when the task stops and kept with it.

mod elapsed;
mod error;
mod ids;
mod period;
mod task;

pub use elapsed::ElapsedTime;
pub use error::TaskDomainError;
pub use ids::{TaskId, TaskName};
pub use period::TaskPeriod;
pub use task::{NewTask, PersistedTaskData, Task};
