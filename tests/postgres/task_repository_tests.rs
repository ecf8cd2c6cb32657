//! `PostgresTaskRepository` behaviour against a real schema.

use super::helpers::{TestDatabase, test_runtime};
use chrono::{DateTime, Duration, TimeZone, Utc};
use mockable::DefaultClock;
use pg_embedded_setup_unpriv::{TestCluster, test_support::shared_test_cluster};
use rstest::rstest;
use time_tracker::clock::ManualClock;
use time_tracker::task::{
    adapters::postgres::PostgresTaskRepository,
    domain::{ElapsedTime, NewTask, Task, TaskId, TaskName, TaskPeriod},
    ports::{TaskRepository, TaskRepositoryError},
};
use time_tracker::user::{
    adapters::postgres::PostgresUserRepository,
    domain::{NewUser, PassportNumber, PersonalDetails, UserId},
    ports::UserRepository,
};
use tokio::runtime::Runtime;

fn instant(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid instant")
}

struct Fixture {
    rt: Runtime,
    repository: PostgresTaskRepository,
    clock: ManualClock,
    user: UserId,
    _database: TestDatabase,
}

impl Fixture {
    fn new(cluster: &'static TestCluster, prefix: &str) -> Self {
        let database = TestDatabase::create(cluster, prefix).expect("database");
        let pool = database.pool().expect("pool");
        let rt = test_runtime();
        let owner = NewUser::new(
            PassportNumber::parse("1234-567890").expect("passport should parse"),
            PersonalDetails::new("Ivanov", "Ivan", "", "Moscow"),
            &DefaultClock,
        );
        let users = PostgresUserRepository::new(pool.clone());
        let user = rt
            .block_on(users.create(&owner))
            .expect("owner should be created")
            .id();
        Self {
            rt,
            repository: PostgresTaskRepository::new(pool),
            clock: ManualClock::new(instant(2024, 1, 10, 9, 0)),
            user,
            _database: database,
        }
    }

    fn start(&self, name: &str) -> Task {
        let task = NewTask::start(self.user, TaskName::new(name), &self.clock);
        self.rt
            .block_on(self.repository.create(&task))
            .expect("create should succeed")
    }

    /// Starts a task now and stores it stopped after `length`.
    fn record(&self, name: &str, length: Duration) -> Task {
        let mut task = self.start(name);
        self.clock.advance(length);
        task.stop(&self.clock).expect("stop should succeed");
        self.rt
            .block_on(self.repository.update(&task))
            .expect("update should succeed");
        task
    }

    fn report(&self, start: &str, end: &str) -> Vec<Task> {
        let period = TaskPeriod::parse(start, end).expect("period should parse");
        self.rt
            .block_on(self.repository.find_for_user_in_period(self.user, &period))
            .expect("report should succeed")
    }
}

fn names(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.name().as_str()).collect()
}

#[rstest]
fn stop_persists_end_time_and_elapsed(shared_test_cluster: &'static TestCluster) {
    let fixture = Fixture::new(shared_test_cluster, "tasks_stop");

    let stopped = fixture.record("write report", Duration::minutes(95));
    let found = fixture
        .rt
        .block_on(fixture.repository.find_by_id(stopped.id()))
        .expect("lookup should succeed")
        .expect("task should exist");

    assert_eq!(found.end_time(), Some(instant(2024, 1, 10, 10, 35)));
    assert_eq!(found.elapsed(), ElapsedTime::from_parts(1, 95));
}

#[rstest]
fn updating_absent_task_is_not_found(shared_test_cluster: &'static TestCluster) {
    let fixture = Fixture::new(shared_test_cluster, "tasks_update_absent");
    let mut ghost = NewTask::start(fixture.user, TaskName::new("ghost"), &fixture.clock)
        .into_task(TaskId::new(9_999));
    ghost.stop(&fixture.clock).expect("stop should succeed");

    let result = fixture.rt.block_on(fixture.repository.update(&ghost));

    assert!(matches!(result, Err(TaskRepositoryError::NotFound(id)) if id == ghost.id()));
}

#[rstest]
fn report_orders_longest_first_with_id_tiebreak(shared_test_cluster: &'static TestCluster) {
    let fixture = Fixture::new(shared_test_cluster, "tasks_order");
    fixture.record("short", Duration::minutes(20));
    fixture.record("long", Duration::minutes(185));
    fixture.record("medium", Duration::minutes(70));
    fixture.record("medium twin", Duration::minutes(70));

    let report = fixture.report("2024-01-01", "2024-01-31");

    assert_eq!(names(&report), ["long", "medium", "medium twin", "short"]);
}

#[rstest]
fn report_includes_running_tasks_and_excludes_out_of_range(
    shared_test_cluster: &'static TestCluster,
) {
    let fixture = Fixture::new(shared_test_cluster, "tasks_period");
    fixture.clock.set(instant(2023, 12, 20, 10, 0));
    fixture.start("december");
    fixture.clock.set(instant(2024, 1, 10, 9, 0));
    fixture.record("inside", Duration::minutes(30));
    fixture.start("still running");
    fixture.clock.set(instant(2024, 1, 30, 23, 0));
    fixture.record("past the end", Duration::hours(2));

    let report = fixture.report("2024-01-01", "2024-01-31");

    assert_eq!(names(&report), ["inside", "still running"]);
    let running = report.last().expect("running task should be listed");
    assert_eq!(running.end_time(), None);
    assert_eq!(running.elapsed(), ElapsedTime::default());
}
