//! `PostgreSQL` repository implementation for users.

use super::{
    models::{NewUserRow, UserRow},
    schema::users,
};
use crate::user::{
    domain::{
        NewUser, Pagination, PassportNumber, PersistedUserData, PersonalDetails, User,
        UserFilterField, UserFilters, UserId,
    },
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by user adapters.
pub type UserPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed user repository.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: UserPgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: UserPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> UserRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> UserRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(UserRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(UserRepositoryError::persistence)?
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: &NewUser) -> UserRepositoryResult<User> {
        let passport = user.passport_number().clone();
        let new_row = to_new_row(user);

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(users::table)
                .values(&new_row)
                .returning(UserRow::as_returning())
                .get_result::<UserRow>(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        UserRepositoryError::DuplicatePassport(passport)
                    }
                    _ => UserRepositoryError::persistence(err),
                })?;
            row_to_user(row)
        })
        .await
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::id.eq(id.value()))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn list_all(&self) -> UserRepositoryResult<Vec<User>> {
        self.run_blocking(move |connection| {
            let rows = users::table
                .order(users::id.asc())
                .select(UserRow::as_select())
                .load::<UserRow>(connection)
                .map_err(UserRepositoryError::persistence)?;
            rows.into_iter().map(row_to_user).collect()
        })
        .await
    }

    async fn list_filtered(
        &self,
        filters: &UserFilters,
        pagination: Pagination,
    ) -> UserRepositoryResult<Vec<User>> {
        let columns = resolve_columns(filters)?;
        let offset =
            i64::try_from(pagination.offset()).map_err(UserRepositoryError::persistence)?;
        let limit = i64::try_from(pagination.limit()).map_err(UserRepositoryError::persistence)?;

        self.run_blocking(move |connection| {
            let mut query = users::table.select(UserRow::as_select()).into_boxed();
            for (field, value) in columns {
                query = match field {
                    UserFilterField::Id => query.filter(users::id.eq(parse_id_filter(&value)?)),
                    UserFilterField::PassportNumber => {
                        query.filter(users::passport_number.eq(value))
                    }
                    UserFilterField::Surname => query.filter(users::surname.eq(value)),
                    UserFilterField::Name => query.filter(users::name.eq(value)),
                    UserFilterField::Patronymic => query.filter(users::patronymic.eq(value)),
                    UserFilterField::Address => query.filter(users::address.eq(value)),
                };
            }

            let rows = query
                .order(users::id.asc())
                .offset(offset)
                .limit(limit)
                .load::<UserRow>(connection)
                .map_err(UserRepositoryError::persistence)?;
            rows.into_iter().map(row_to_user).collect()
        })
        .await
    }

    async fn update(&self, user: &User) -> UserRepositoryResult<()> {
        let user_id = user.id();
        let details = user.details().clone();
        let updated_val = user.updated_at();

        self.run_blocking(move |connection| {
            let updated_count = diesel::update(users::table.filter(users::id.eq(user_id.value())))
                .set((
                    users::surname.eq(details.surname()),
                    users::name.eq(details.name()),
                    users::patronymic.eq(details.patronymic()),
                    users::address.eq(details.address()),
                    users::updated_at.eq(updated_val),
                ))
                .execute(connection)
                .map_err(UserRepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(UserRepositoryError::NotFound(user_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: UserId) -> UserRepositoryResult<()> {
        self.run_blocking(move |connection| {
            diesel::delete(users::table.filter(users::id.eq(id.value())))
                .execute(connection)
                .map_err(UserRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

fn resolve_columns(filters: &UserFilters) -> UserRepositoryResult<Vec<(UserFilterField, String)>> {
    filters
        .iter()
        .map(|(key, value)| {
            UserFilterField::try_from(key)
                .map(|field| (field, value.to_owned()))
                .map_err(|_| UserRepositoryError::UnknownFilterField(key.to_owned()))
        })
        .collect()
}

fn parse_id_filter(value: &str) -> UserRepositoryResult<i64> {
    value
        .parse::<i64>()
        .map_err(|_| UserRepositoryError::InvalidFilterValue {
            field: UserFilterField::Id.as_str().to_owned(),
            value: value.to_owned(),
        })
}

fn to_new_row(user: &NewUser) -> NewUserRow {
    let details = user.details();
    NewUserRow {
        passport_number: user.passport_number().as_str().to_owned(),
        surname: details.surname().to_owned(),
        name: details.name().to_owned(),
        patronymic: details.patronymic().to_owned(),
        address: details.address().to_owned(),
        created_at: user.created_at(),
        updated_at: user.created_at(),
    }
}

fn row_to_user(row: UserRow) -> UserRepositoryResult<User> {
    let UserRow {
        id,
        passport_number,
        surname,
        name,
        patronymic,
        address,
        created_at,
        updated_at,
    } = row;

    let parsed_passport = PassportNumber::parse(passport_number)
        .map_err(UserRepositoryError::invalid_persisted_data)?;

    let data = PersistedUserData {
        id: UserId::new(id),
        passport_number: parsed_passport,
        details: PersonalDetails::new(surname, name, patronymic, address),
        created_at,
        updated_at,
    };
    Ok(User::from_persisted(data))
}
