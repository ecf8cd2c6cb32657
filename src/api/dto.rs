//! Request binding and response shapes for the REST surface.

use super::error::ApiError;
use crate::task::domain::Task;
use crate::user::domain::{
    PAGE_KEY, PAGE_SIZE_KEY, Pagination, PersonalDetails, User, UserFilterField, UserFilters,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Page used when the query has no `page` key.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the query has no `pageSize` key.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Body of `POST /users`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    /// Passport number in `SSSS-NNNNNN` form.
    pub passport_number: String,
}

impl CreateUserRequest {
    /// Rejects an empty passport number.
    pub fn validate(&self) -> Result<(), ApiError> {
        require_non_empty("passport_number", &self.passport_number)
    }
}

/// Body of `PUT /users/{id}`.
///
/// Every field must be present; the patronymic may be empty.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserRequest {
    /// Surname.
    pub surname: String,
    /// Given name.
    pub name: String,
    /// Patronymic.
    pub patronymic: String,
    /// Postal address.
    pub address: String,
}

impl UpdateUserRequest {
    /// Validates the fields and converts them into identity fields.
    pub fn into_details(self) -> Result<PersonalDetails, ApiError> {
        require_non_empty("surname", &self.surname)?;
        require_non_empty("name", &self.name)?;
        require_non_empty("address", &self.address)?;
        Ok(PersonalDetails::new(
            self.surname,
            self.name,
            self.patronymic,
            self.address,
        ))
    }
}

/// Body of `POST /tasks/start`.
#[derive(Debug, Clone, Deserialize)]
pub struct StartTaskRequest {
    /// Owning user.
    pub user_id: i64,
    /// Session label.
    pub task_name: String,
}

impl StartTaskRequest {
    /// Rejects a non-positive user id or an empty task name.
    pub fn validate(&self) -> Result<(), ApiError> {
        require_positive("user_id", self.user_id)?;
        require_non_empty("task_name", &self.task_name)
    }
}

/// Body of `POST /tasks/stop`.
#[derive(Debug, Clone, Deserialize)]
pub struct StopTaskRequest {
    /// Task to stop.
    pub task_id: i64,
}

impl StopTaskRequest {
    /// Rejects a non-positive task id.
    pub fn validate(&self) -> Result<(), ApiError> {
        require_positive("task_id", self.task_id)
    }
}

/// Query of `GET /tasks/user/{user_id}`.
///
/// Missing dates bind as empty strings and fail date parsing downstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPeriodQuery {
    /// Lower bound, `YYYY-MM-DD`.
    #[serde(default)]
    pub start_date: String,
    /// Upper bound, `YYYY-MM-DD`.
    #[serde(default)]
    pub end_date: String,
}

/// User representation returned by every user route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    /// Store-assigned identifier.
    pub id: i64,
    /// Passport number as supplied at creation.
    pub passport_number: String,
    /// Surname.
    pub surname: String,
    /// Given name.
    pub name: String,
    /// Patronymic, possibly empty.
    pub patronymic: String,
    /// Postal address.
    pub address: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        let details = user.details();
        Self {
            id: user.id().value(),
            passport_number: user.passport_number().as_str().to_owned(),
            surname: details.surname().to_owned(),
            name: details.name().to_owned(),
            patronymic: details.patronymic().to_owned(),
            address: details.address().to_owned(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}

/// Task representation returned by every task route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
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
    /// Stop instant, `null` while running.
    pub end_time: Option<DateTime<Utc>>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            user_id: task.user_id().value(),
            task_name: task.name().as_str().to_owned(),
            hours: task.elapsed().hours(),
            minutes: task.elapsed().minutes(),
            start_time: task.start_time(),
            end_time: task.end_time(),
        }
    }
}

/// Splits listing query parameters into filters and a page selection.
///
/// Keys other than the filterable user columns, `page`, and `pageSize` are
/// rejected. The pagination keys stay in the returned filters.
pub fn bind_user_listing(
    params: impl IntoIterator<Item = (String, String)>,
) -> Result<(UserFilters, Pagination), ApiError> {
    let filters: UserFilters = params.into_iter().collect();

    if let Some((key, _)) = filters.iter().find(|(name, _)| !is_listing_key(name)) {
        return Err(ApiError::bad_request(format!(
            "unknown filter field: {key}"
        )));
    }

    let page = parse_page_param(&filters, PAGE_KEY, DEFAULT_PAGE)?;
    let page_size = parse_page_param(&filters, PAGE_SIZE_KEY, DEFAULT_PAGE_SIZE)?;
    Ok((filters, Pagination::new(page, page_size)))
}

/// Parses a positive numeric path identifier.
pub fn parse_path_id(name: &str, raw: &str) -> Result<i64, ApiError> {
    let value = raw
        .parse::<i64>()
        .map_err(|_| ApiError::bad_request(format!("invalid {name}: {raw}")))?;
    require_positive(name, value)?;
    Ok(value)
}

fn is_listing_key(key: &str) -> bool {
    key == PAGE_KEY || key == PAGE_SIZE_KEY || UserFilterField::try_from(key).is_ok()
}

fn parse_page_param(filters: &UserFilters, key: &str, default: u32) -> Result<u32, ApiError> {
    filters.get(key).map_or(Ok(default), |raw| {
        raw.parse::<u32>()
            .map_err(|_| ApiError::bad_request(format!("invalid {key}: {raw}")))
    })
}

fn require_non_empty(field: &str, value: &str) -> Result<(), ApiError> {
    if value.is_empty() {
        return Err(ApiError::bad_request(format!("{field} is required")));
    }
    Ok(())
}

fn require_positive(field: &str, value: i64) -> Result<(), ApiError> {
    if value <= 0 {
        return Err(ApiError::bad_request(format!(
            "{field} must be a positive integer"
        )));
    }
    Ok(())
}
