//! Application services for task tracking.

mod tracking;

pub use tracking::{TaskTrackingError, TaskTrackingResult, TaskTrackingService};
