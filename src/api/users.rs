//! User routes.

use super::{
    AppState,
    dto::{CreateUserRequest, UpdateUserRequest, UserResponse, bind_user_listing, parse_path_id},
    error::ApiError,
};
use crate::user::domain::UserId;
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};
use serde_json::{Value, json};
use std::collections::HashMap;

pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let Json(request) = body.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    request.validate()?;

    let user = state.users.create_user(&request.passport_number).await?;
    Ok(Json(UserResponse::from(&user)))
}

pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let (filters, pagination) = bind_user_listing(params)?;

    let users = state.users.list_users_filtered(filters, pagination).await?;
    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = parse_path_id("user id", &raw_id)?;

    let user = state.users.get_user_by_id(UserId::new(id)).await?;
    Ok(Json(UserResponse::from(&user)))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = parse_path_id("user id", &raw_id)?;
    let Json(request) = body.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let details = request.into_details()?;

    let user = state.users.update_user(UserId::new(id), details).await?;
    Ok(Json(UserResponse::from(&user)))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_path_id("user id", &raw_id)?;

    state.users.delete_user(UserId::new(id)).await?;
    Ok(Json(json!({ "user": null })))
}
