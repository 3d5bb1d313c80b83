//! Shared `PostgreSQL` plumbing for the Diesel adapters.
//!
//! Every context adapter runs its synchronous Diesel calls through
//! [`run_blocking`] so the async executor is never blocked, and the server
//! applies the bundled migrations through [`apply_migrations`] before it
//! starts accepting requests.

use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;

/// `PostgreSQL` connection pool type shared by all adapters.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Migration scripts in application order.
const MIGRATIONS: [(&str, &str); 3] = [
    (
        "2026-10-01-000000_create_organizations",
        include_str!("../migrations/2026-10-01-000000_create_organizations/up.sql"),
    ),
    (
        "2026-10-01-000001_create_projects",
        include_str!("../migrations/2026-10-01-000001_create_projects/up.sql"),
    ),
    (
        "2026-10-01-000002_create_tasks_and_comments",
        include_str!("../migrations/2026-10-01-000002_create_tasks_and_comments/up.sql"),
    ),
];

/// Errors raised while preparing the database.
#[derive(Debug, Error)]
pub enum DatabaseSetupError {
    /// The connection pool could not be created.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] PoolError),

    /// A connection could not be established.
    #[error("failed to connect to database: {0}")]
    Connection(#[from] ConnectionError),

    /// A migration script failed.
    #[error("migration {name} failed: {source}")]
    Migration {
        /// Migration directory name.
        name: &'static str,
        /// Underlying Diesel error.
        source: diesel::result::Error,
    },

    /// The blocking setup task panicked or was cancelled.
    #[error("database setup task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Repository error types that can wrap an arbitrary persistence failure.
pub trait PersistenceFailure: Sized {
    /// Wraps a persistence-layer error.
    fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self;
}

/// Builds an r2d2 pool for the given database URL.
///
/// # Errors
///
/// Returns [`DatabaseSetupError::Pool`] when the pool cannot open its
/// initial connections.
pub fn build_pool(database_url: &str, max_size: u32) -> Result<PgPool, DatabaseSetupError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder().max_size(max_size).build(manager)?;
    Ok(pool)
}

/// Applies every bundled migration to the database at `database_url`.
///
/// The scripts are idempotent, so running them against an already migrated
/// database is a no-op. This is a blocking call.
///
/// # Errors
///
/// Returns [`DatabaseSetupError`] when connecting or executing a script
/// fails.
pub fn apply_migrations(database_url: &str) -> Result<(), DatabaseSetupError> {
    let mut connection = PgConnection::establish(database_url)?;
    for (name, sql) in MIGRATIONS {
        connection
            .batch_execute(sql)
            .map_err(|source| DatabaseSetupError::Migration { name, source })?;
        tracing::debug!(migration = name, "applied migration");
    }
    Ok(())
}

/// Runs a Diesel operation on the blocking thread pool with a pooled
/// connection.
pub(crate) async fn run_blocking<F, T, E>(pool: &PgPool, f: F) -> Result<T, E>
where
    F: FnOnce(&mut PgConnection) -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: PersistenceFailure + Send + 'static,
{
    let shared = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = shared.get().map_err(E::persistence)?;
        f(&mut connection)
    })
    .await
    .map_err(E::persistence)?
}
