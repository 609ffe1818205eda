//! Shared helpers for `PostgreSQL` integration tests.
//!
//! The tests run against the database named by
//! `TASKBOARD_TEST_DATABASE_URL`. They are ignored by default; run them with
//! `cargo test --test postgres -- --ignored`.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use rstest::fixture;
use taskboard::task::adapters::postgres::PostgresTaskRepository;

/// Environment variable naming the test database.
pub const TEST_DATABASE_URL_ENV: &str = "TASKBOARD_TEST_DATABASE_URL";

/// Boxed error type for test results.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Provides a [`DefaultClock`] for test fixtures.
#[fixture]
pub fn clock() -> DefaultClock {
    DefaultClock
}

/// Connects to the test database and applies the schema.
///
/// # Errors
///
/// Returns an error if `TASKBOARD_TEST_DATABASE_URL` is unset, the pool cannot
/// be built, or the schema cannot be applied.
pub async fn repository() -> Result<PostgresTaskRepository, BoxError> {
    let url = std::env::var(TEST_DATABASE_URL_ENV)
        .map_err(|err| format!("{TEST_DATABASE_URL_ENV} must name a test database: {err}"))?;
    let pool = tokio::task::spawn_blocking(move || {
        Pool::builder()
            .max_size(2)
            .build(ConnectionManager::<PgConnection>::new(url))
    })
    .await??;
    let repository = PostgresTaskRepository::new(pool);
    repository.ensure_schema().await?;
    Ok(repository)
}
