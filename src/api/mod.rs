//! REST surface over the user and task services.
//!
//! | Route | Operation |
//! |-------|-----------|
//! | `POST /users` | create a user from a passport number |
//! | `GET /users` | filtered, paginated listing |
//! | `GET /users/{id}` | fetch one user |
//! | `PUT /users/{id}` | overwrite identity fields |
//! | `DELETE /users/{id}` | delete a user |
//! | `POST /tasks/start` | start a work session |
//! | `POST /tasks/stop` | stop a work session |
//! | `GET /tasks/user/{user_id}` | a user's sessions in a date window |
//! | `GET /health` | liveness probe |

mod dto;
pub mod error;
mod tasks;
mod users;

pub use dto::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, TaskResponse, UserResponse};
pub use error::{ApiError, ErrorBody, ErrorResponse};

use crate::task::{ports::TaskRepository, services::TaskTrackingService};
use crate::user::{
    ports::{IdentityResolver, UserRepository},
    services::UserProvisioningService,
};
use axum::{
    Json, Router,
    routing::{get, post},
};
use mockable::DefaultClock;
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

/// User service as wired behind the router.
pub type UserService =
    UserProvisioningService<dyn UserRepository, dyn IdentityResolver, DefaultClock>;

/// Task service as wired behind the router.
pub type TaskService = TaskTrackingService<dyn TaskRepository, DefaultClock>;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    /// User provisioning service.
    pub users: UserService,
    /// Task tracking service.
    pub tasks: TaskService,
}

impl AppState {
    /// Bundles the services handed to request handlers.
    #[must_use]
    pub const fn new(users: UserService, tasks: TaskService) -> Self {
        Self { users, tasks }
    }
}

/// Builds the application router with request tracing.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/tasks/start", post(tasks::start_task))
        .route("/tasks/stop", post(tasks::stop_task))
        .route("/tasks/user/{user_id}", get(tasks::get_user_tasks))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
