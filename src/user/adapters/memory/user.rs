//! In-memory user repository.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use crate::user::{
    domain::{NewUser, Pagination, User, UserFilterField, UserFilters, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository with store-assigned identifiers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<InMemoryUserState>>,
}

#[derive(Debug, Default)]
struct InMemoryUserState {
    last_id: i64,
    users: BTreeMap<UserId, User>,
    passport_index: HashMap<String, UserId>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> UserRepositoryError {
    UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Equality predicate over a single user column.
enum Predicate<'a> {
    Id(UserId),
    PassportNumber(&'a str),
    Surname(&'a str),
    Name(&'a str),
    Patronymic(&'a str),
    Address(&'a str),
}

impl<'a> Predicate<'a> {
    fn parse(key: &str, value: &'a str) -> UserRepositoryResult<Self> {
        let field = UserFilterField::try_from(key)
            .map_err(|_| UserRepositoryError::UnknownFilterField(key.to_owned()))?;
        Ok(match field {
            UserFilterField::Id => Self::Id(parse_id(key, value)?),
            UserFilterField::PassportNumber => Self::PassportNumber(value),
            UserFilterField::Surname => Self::Surname(value),
            UserFilterField::Name => Self::Name(value),
            UserFilterField::Patronymic => Self::Patronymic(value),
            UserFilterField::Address => Self::Address(value),
        })
    }

    fn matches(&self, user: &User) -> bool {
        let details = user.details();
        match *self {
            Self::Id(id) => user.id() == id,
            Self::PassportNumber(value) => user.passport_number().as_str() == value,
            Self::Surname(value) => details.surname() == value,
            Self::Name(value) => details.name() == value,
            Self::Patronymic(value) => details.patronymic() == value,
            Self::Address(value) => details.address() == value,
        }
    }
}

fn parse_id(key: &str, value: &str) -> UserRepositoryResult<UserId> {
    value
        .parse::<i64>()
        .map(UserId::new)
        .map_err(|_| UserRepositoryError::InvalidFilterValue {
            field: key.to_owned(),
            value: value.to_owned(),
        })
}

fn build_predicates(filters: &UserFilters) -> UserRepositoryResult<Vec<Predicate<'_>>> {
    filters
        .iter()
        .map(|(key, value)| Predicate::parse(key, value))
        .collect()
}

fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &NewUser) -> UserRepositoryResult<User> {
        let mut state = self.state.write().map_err(lock_error)?;

        let passport = user.passport_number().as_str().to_owned();
        if state.passport_index.contains_key(&passport) {
            return Err(UserRepositoryError::DuplicatePassport(
                user.passport_number().clone(),
            ));
        }

        state.last_id += 1;
        let id = UserId::new(state.last_id);
        let created = user.clone().into_user(id);
        state.passport_index.insert(passport, id);
        state.users.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.users.get(&id).cloned())
    }

    async fn list_all(&self) -> UserRepositoryResult<Vec<User>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.users.values().cloned().collect())
    }

    async fn list_filtered(
        &self,
        filters: &UserFilters,
        pagination: Pagination,
    ) -> UserRepositoryResult<Vec<User>> {
        let predicates = build_predicates(filters)?;
        let state = self.state.read().map_err(lock_error)?;
        let page = state
            .users
            .values()
            .filter(|user| predicates.iter().all(|predicate| predicate.matches(user)))
            .skip(to_usize(pagination.offset()))
            .take(to_usize(pagination.limit()))
            .cloned()
            .collect();
        Ok(page)
    }

    async fn update(&self, user: &User) -> UserRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let stored = state
            .users
            .get_mut(&user.id())
            .ok_or(UserRepositoryError::NotFound(user.id()))?;
        *stored = user.clone();
        Ok(())
    }

    async fn delete(&self, id: UserId) -> UserRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if let Some(removed) = state.users.remove(&id) {
            state
                .passport_index
                .remove(removed.passport_number().as_str());
        }
        Ok(())
    }
}

