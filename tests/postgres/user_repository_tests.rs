//! `PostgresUserRepository` behaviour against a real schema.

use super::helpers::{TestDatabase, test_runtime};
use mockable::DefaultClock;
use pg_embedded_setup_unpriv::{TestCluster, test_support::shared_test_cluster};
use rstest::rstest;
use time_tracker::user::{
    adapters::postgres::PostgresUserRepository,
    domain::{NewUser, Pagination, PassportNumber, PersonalDetails, User, UserFilters, UserId},
    ports::{UserRepository, UserRepositoryError},
};
use tokio::runtime::Runtime;

fn passport(raw: &str) -> PassportNumber {
    PassportNumber::parse(raw).expect("passport should parse")
}

fn new_user(raw_passport: &str, surname: &str, name: &str) -> NewUser {
    NewUser::new(
        passport(raw_passport),
        PersonalDetails::new(surname, name, "", "1 Test St"),
        &DefaultClock,
    )
}

fn setup(cluster: &'static TestCluster, prefix: &str) -> (TestDatabase, PostgresUserRepository) {
    let database = TestDatabase::create(cluster, prefix).expect("database");
    let repository = PostgresUserRepository::new(database.pool().expect("pool"));
    (database, repository)
}

fn seed(rt: &Runtime, repository: &PostgresUserRepository) -> Vec<User> {
    [
        ("1234-567890", "Ivanov", "Ivan"),
        ("2345-678901", "Petrov", "Petr"),
        ("3456-789012", "Ivanov", "Sergey"),
    ]
    .into_iter()
    .map(|(raw, surname, name)| {
        rt.block_on(repository.create(&new_user(raw, surname, name)))
            .expect("create should succeed")
    })
    .collect()
}

fn names(users: &[User]) -> Vec<&str> {
    users.iter().map(|user| user.details().name()).collect()
}

fn first_page() -> Pagination {
    Pagination::new(1, 10)
}

#[rstest]
fn create_assigns_id_and_round_trips(shared_test_cluster: &'static TestCluster) {
    let (_database, repository) = setup(shared_test_cluster, "users_create");
    let rt = test_runtime();
    let ivan = new_user("1234-567890", "Ivanov", "Ivan");

    let created = rt
        .block_on(repository.create(&ivan))
        .expect("create should succeed");
    let found = rt
        .block_on(repository.find_by_id(created.id()))
        .expect("lookup should succeed")
        .expect("user should exist");

    assert_eq!(found.id(), created.id());
    assert_eq!(found.passport_number().as_str(), "1234-567890");
    assert_eq!(found.details().surname(), "Ivanov");
}

#[rstest]
fn duplicate_passport_is_reported(shared_test_cluster: &'static TestCluster) {
    let (_database, repository) = setup(shared_test_cluster, "users_duplicate");
    let rt = test_runtime();
    rt.block_on(repository.create(&new_user("1234-567890", "Ivanov", "Ivan")))
        .expect("first create should succeed");

    let result = rt.block_on(repository.create(&new_user("1234-567890", "Petrov", "Petr")));

    assert!(matches!(
        result,
        Err(UserRepositoryError::DuplicatePassport(_))
    ));
    let all = rt
        .block_on(repository.list_all())
        .expect("list should succeed");
    assert_eq!(all.len(), 1);
}

#[rstest]
fn filters_combine_and_pages_follow_id_order(shared_test_cluster: &'static TestCluster) {
    let (_database, repository) = setup(shared_test_cluster, "users_filter");
    let rt = test_runtime();
    let created = seed(&rt, &repository);
    let ivanovs = UserFilters::new().with("surname", "Ivanov");
    let sergey = UserFilters::new()
        .with("surname", "Ivanov")
        .with("name", "Sergey");

    let by_surname = rt
        .block_on(repository.list_filtered(&ivanovs, first_page()))
        .expect("filtered list should succeed");
    let by_both = rt
        .block_on(repository.list_filtered(&sergey, first_page()))
        .expect("filtered list should succeed");
    let second_page = rt
        .block_on(repository.list_filtered(&UserFilters::new(), Pagination::new(2, 2)))
        .expect("paged list should succeed");

    assert_eq!(names(&by_surname), ["Ivan", "Sergey"]);
    assert_eq!(names(&by_both), ["Sergey"]);
    assert_eq!(
        second_page.iter().map(User::id).collect::<Vec<_>>(),
        created.iter().skip(2).map(User::id).collect::<Vec<_>>()
    );
}

#[rstest]
fn id_filter_matches_numerically(shared_test_cluster: &'static TestCluster) {
    let (_database, repository) = setup(shared_test_cluster, "users_id_filter");
    let rt = test_runtime();
    let created = seed(&rt, &repository);
    let target = created.get(1).expect("seeded user").id();
    let by_id = UserFilters::new().with("id", target.value().to_string());
    let malformed = UserFilters::new().with("id", "abc");

    let matched = rt
        .block_on(repository.list_filtered(&by_id, first_page()))
        .expect("id filter should succeed");
    let rejected = rt.block_on(repository.list_filtered(&malformed, first_page()));

    assert_eq!(names(&matched), ["Petr"]);
    assert!(matches!(
        rejected,
        Err(UserRepositoryError::InvalidFilterValue { .. })
    ));
}

#[rstest]
fn unknown_filter_key_is_rejected(shared_test_cluster: &'static TestCluster) {
    let (_database, repository) = setup(shared_test_cluster, "users_unknown_key");
    let rt = test_runtime();
    let filters = UserFilters::new().with("nickname", "ivan");

    let result = rt.block_on(repository.list_filtered(&filters, first_page()));

    assert!(matches!(
        result,
        Err(UserRepositoryError::UnknownFilterField(ref key)) if key == "nickname"
    ));
}

#[rstest]
fn update_of_absent_user_is_not_found(shared_test_cluster: &'static TestCluster) {
    let (_database, repository) = setup(shared_test_cluster, "users_update_absent");
    let rt = test_runtime();
    let created = seed(&rt, &repository);
    let mut ghost = created.first().expect("seeded user").clone();
    rt.block_on(repository.delete(ghost.id()))
        .expect("delete should succeed");
    let details = PersonalDetails::new("Sidorov", "Pavel", "", "Kazan");
    ghost.update_details(details, &DefaultClock);

    let result = rt.block_on(repository.update(&ghost));

    assert!(matches!(result, Err(UserRepositoryError::NotFound(id)) if id == ghost.id()));
}

#[rstest]
fn delete_is_idempotent(shared_test_cluster: &'static TestCluster) {
    let (_database, repository) = setup(shared_test_cluster, "users_delete");
    let rt = test_runtime();
    let created = seed(&rt, &repository);
    let target = created.first().expect("seeded user").id();

    rt.block_on(repository.delete(target))
        .expect("delete should succeed");
    rt.block_on(repository.delete(target))
        .expect("repeat delete should succeed");
    rt.block_on(repository.delete(UserId::new(9_999)))
        .expect("absent delete should succeed");

    let found = rt
        .block_on(repository.find_by_id(target))
        .expect("lookup should succeed");
    assert!(found.is_none());
}
