//! Task routes.

use super::{
    AppState,
    dto::{StartTaskRequest, StopTaskRequest, TaskPeriodQuery, TaskResponse, parse_path_id},
    error::ApiError,
};
use crate::task::domain::{TaskId, TaskName};
use crate::user::domain::UserId;
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};

pub async fn start_task(
    State(state): State<AppState>,
    body: Result<Json<StartTaskRequest>, JsonRejection>,
) -> Result<Json<TaskResponse>, ApiError> {
    let Json(request) = body.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    request.validate()?;

    let task = state
        .tasks
        .start_task(
            UserId::new(request.user_id),
            TaskName::new(request.task_name),
        )
        .await?;
    Ok(Json(TaskResponse::from(&task)))
}

pub async fn stop_task(
    State(state): State<AppState>,
    body: Result<Json<StopTaskRequest>, JsonRejection>,
) -> Result<Json<TaskResponse>, ApiError> {
    let Json(request) = body.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    request.validate()?;

    let task = state.tasks.stop_task(TaskId::new(request.task_id)).await?;
    Ok(Json(TaskResponse::from(&task)))
}

pub async fn get_user_tasks(
    State(state): State<AppState>,
    Path(raw_user_id): Path<String>,
    Query(query): Query<TaskPeriodQuery>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let user_id = parse_path_id("user id", &raw_user_id)?;

    let tasks = state
        .tasks
        .get_user_tasks(UserId::new(user_id), &query.start_date, &query.end_date)
        .await?;
    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}
