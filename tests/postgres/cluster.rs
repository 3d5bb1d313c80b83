//! Shared `PostgreSQL` server for the Diesel adapter tests.
//!
//! `WORKBOARD_TEST_DATABASE_URL` points the suite at an existing server; the
//! URL must name a database the user may run `CREATE DATABASE` from, usually
//! `postgres`. Without it an embedded server is bootstrapped once per test
//! binary. When neither is available (no network for the binaries, or a root
//! user the embedded server refuses to run as) the fixture yields `None` and
//! each test returns early.

use diesel::prelude::*;
use pg_embedded_setup_unpriv::{
    ExecutionPrivileges, bootstrap_for_tests, detect_execution_privileges,
};
use postgresql_embedded::{PostgreSQL, Status};
use rstest::fixture;
use std::env;
use std::sync::{Mutex, OnceLock};
use tokio::runtime::Runtime;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Environment variable naming an externally managed server.
const EXTERNAL_URL_VAR: &str = "WORKBOARD_TEST_DATABASE_URL";

static SHARED_CLUSTER: OnceLock<Option<ManagedCluster>> = OnceLock::new();
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Shared `PostgreSQL` cluster handle for integration tests.
pub type PostgresCluster = &'static ManagedCluster;

/// Embedded server kept alive for the whole test binary.
struct EmbeddedServer {
    _runtime: Runtime,
    _postgres: PostgreSQL,
}

/// A reachable `PostgreSQL` server plus the admin URL used to manage
/// per-test databases.
pub struct ManagedCluster {
    admin_url: String,
    _embedded: Option<EmbeddedServer>,
}

impl ManagedCluster {
    /// Returns the URL of `database` on this server.
    #[must_use]
    pub fn database_url(&self, database: &str) -> String {
        let (base, query) = self
            .admin_url
            .split_once('?')
            .map_or((self.admin_url.as_str(), None), |(base, query)| {
                (base, Some(query))
            });
        let server = base.rsplit_once('/').map_or(base, |(server, _)| server);
        query.map_or_else(
            || format!("{server}/{database}"),
            |params| format!("{server}/{database}?{params}"),
        )
    }

    /// Creates an empty database.
    ///
    /// # Errors
    ///
    /// Returns an error when the admin connection or statement fails.
    pub fn create_database(&self, database: &str) -> Result<(), BoxError> {
        self.execute_admin_sql(&format!("CREATE DATABASE {}", quote_identifier(database)))
    }

    /// Drops a database, disconnecting any remaining sessions.
    ///
    /// # Errors
    ///
    /// Returns an error when the admin connection or statement fails.
    pub fn drop_database(&self, database: &str) -> Result<(), BoxError> {
        self.execute_admin_sql(&format!(
            "DROP DATABASE IF EXISTS {} WITH (FORCE)",
            quote_identifier(database)
        ))
    }

    fn execute_admin_sql(&self, sql: &str) -> Result<(), BoxError> {
        let mut connection = PgConnection::establish(&self.admin_url)?;
        diesel::sql_query(sql).execute(&mut connection)?;
        Ok(())
    }

    fn from_environment() -> Result<Self, BoxError> {
        if let Some(url) = env::var_os(EXTERNAL_URL_VAR) {
            let admin_url = url
                .into_string()
                .map_err(|_| format!("{EXTERNAL_URL_VAR} is not valid UTF-8"))?;
            return Ok(Self {
                admin_url,
                _embedded: None,
            });
        }
        Self::start_embedded()
    }

    fn start_embedded() -> Result<Self, BoxError> {
        if matches!(detect_execution_privileges(), ExecutionPrivileges::Root) {
            return Err(format!(
                "embedded PostgreSQL refuses to run as root; set {EXTERNAL_URL_VAR}"
            )
            .into());
        }
        let bootstrap = bootstrap_for_tests().map_err(|err| Box::new(err) as BoxError)?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        let mut postgres = PostgreSQL::new(bootstrap.settings.clone());
        with_environment(&bootstrap.environment.to_env(), || {
            runtime.block_on(async {
                postgres
                    .setup()
                    .await
                    .map_err(|err| Box::new(err) as BoxError)?;
                if !matches!(postgres.status(), Status::Started) {
                    postgres
                        .start()
                        .await
                        .map_err(|err| Box::new(err) as BoxError)?;
                }
                Ok::<(), BoxError>(())
            })
        })?;
        let admin_url = postgres.settings().url("postgres");
        Ok(Self {
            admin_url,
            _embedded: Some(EmbeddedServer {
                _runtime: runtime,
                _postgres: postgres,
            }),
        })
    }
}

/// Provides the shared cluster, or `None` when no server can be reached.
#[fixture]
pub fn postgres_cluster() -> Option<PostgresCluster> {
    SHARED_CLUSTER
        .get_or_init(|| match ManagedCluster::from_environment() {
            Ok(cluster) => Some(cluster),
            Err(err) => {
                report_skip(err.as_ref());
                None
            }
        })
        .as_ref()
}

#[expect(
    clippy::print_stderr,
    reason = "The skip notice must reach the test runner output"
)]
fn report_skip(err: &(dyn std::error::Error + Send + Sync)) {
    eprintln!("skipping PostgreSQL adapter tests: {err}");
}

/// Runs `f` with the bootstrap environment applied, restoring the previous
/// values afterwards.
fn with_environment<T>(changes: &[(String, Option<String>)], f: impl FnOnce() -> T) -> T {
    let _guard = ENV_LOCK
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    let previous: Vec<(String, Option<String>)> = changes
        .iter()
        .map(|(key, _)| (key.clone(), env::var(key).ok()))
        .collect();
    apply_environment(changes);
    let outcome = f();
    apply_environment(&previous);
    outcome
}

fn apply_environment(changes: &[(String, Option<String>)]) {
    for (key, value) in changes {
        // SAFETY: ENV_LOCK serializes environment mutations in this binary and
        // the cluster is bootstrapped once, before any test touches the
        // environment.
        unsafe {
            match value {
                Some(new_value) => env::set_var(key, new_value),
                None => env::remove_var(key),
            }
        }
    }
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
