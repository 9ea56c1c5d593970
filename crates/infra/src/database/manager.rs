//! Database connection manager backed by an r2d2 SQLite pool.

use std::path::{Path, PathBuf};
use std::time::Duration;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, Connection};
use tracing::{info, instrument};
use workpace_domain::{DatabaseConfig, Result, WorkpaceError};

use crate::errors::InfraError;

const SCHEMA_VERSION: i32 = 1;
const SCHEMA_SQL: &str = include_str!("schema.sql");
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Pooled connection handed out by [`DbManager`].
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

/// Database manager that wraps an r2d2 connection pool.
pub struct DbManager {
    pool: Pool<SqliteConnectionManager>,
    path: PathBuf,
}

impl DbManager {
    /// Create a new manager with the given pool size.
    ///
    /// # Errors
    /// Returns `WorkpaceError::Database` if the pool cannot be built.
    #[instrument(skip(db_path), fields(db_path = %db_path.as_ref().display()))]
    pub fn new<P: AsRef<Path>>(db_path: P, pool_size: u32) -> Result<Self> {
        let path = db_path.as_ref().to_path_buf();
        let manager = SqliteConnectionManager::file(&path).with_init(apply_connection_pragmas);
        Self::build(Pool::builder(), manager, pool_size, path)
    }

    /// Create a manager from loaded configuration.
    ///
    /// # Errors
    /// Returns `WorkpaceError::Database` if the pool cannot be built.
    pub fn from_config(config: &DatabaseConfig) -> Result<Self> {
        Self::new(&config.path, config.pool_size)
    }

    /// Private in-memory database shared by every pooled connection.
    ///
    /// Used by tests and demos; the pool holds a single connection so all
    /// callers see the same data.
    ///
    /// # Errors
    /// Returns `WorkpaceError::Database` if the pool cannot be built.
    pub fn in_memory() -> Result<Self> {
        let manager = SqliteConnectionManager::memory().with_init(|conn| {
            conn.execute_batch("PRAGMA foreign_keys=ON;")?;
            conn.busy_timeout(BUSY_TIMEOUT)
        });
        // The single connection must never be recycled or the data goes with it.
        let builder = Pool::builder().idle_timeout(None).max_lifetime(None);
        Self::build(builder, manager, 1, PathBuf::from(":memory:"))
    }

    fn build(
        builder: r2d2::Builder<SqliteConnectionManager>,
        manager: SqliteConnectionManager,
        pool_size: u32,
        path: PathBuf,
    ) -> Result<Self> {
        let max_size = pool_size.max(1);
        let pool = builder
            .max_size(max_size)
            .connection_timeout(CONNECTION_TIMEOUT)
            .build(manager)
            .map_err(|e| WorkpaceError::from(InfraError::from(e)))?;

        info!(db_path = %path.display(), max_connections = max_size, "sqlite pool initialised");

        Ok(Self { pool, path })
    }

    /// Borrow the underlying pool.
    pub fn pool(&self) -> &Pool<SqliteConnectionManager> {
        &self.pool
    }

    /// Acquire a connection from the pool.
    ///
    /// # Errors
    /// Returns `WorkpaceError::Database` if no connection becomes available.
    pub fn get_connection(&self) -> Result<DbConnection> {
        self.pool.get().map_err(|e| WorkpaceError::from(InfraError::from(e)))
    }

    /// Ensure the full schema exists on the current database.
    ///
    /// # Errors
    /// Returns `WorkpaceError::Database` if the schema cannot be applied.
    pub fn run_migrations(&self) -> Result<()> {
        let conn = self.get_connection()?;
        create_schema(&conn)?;
        Ok(())
    }

    /// Highest applied schema version, if migrations have run.
    ///
    /// # Errors
    /// Returns `WorkpaceError::Database` if the query fails.
    pub fn schema_version(&self) -> Result<Option<i32>> {
        let conn = self.get_connection()?;
        conn.query_row("SELECT MAX(version) FROM schema_version", params![], |row| row.get(0))
            .map_err(map_sql_error)
    }

    /// Return the configured database path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Perform a health check to verify database connectivity.
    ///
    /// # Errors
    /// Returns `WorkpaceError::Database` if the database does not respond.
    pub fn health_check(&self) -> Result<()> {
        let conn = self.get_connection()?;
        conn.query_row("SELECT 1", params![], |row| row.get::<_, i32>(0))
            .map_err(map_sql_error)?;
        Ok(())
    }
}

fn apply_connection_pragmas(conn: &mut Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "PRAGMA journal_mode=WAL;
         PRAGMA synchronous=NORMAL;
         PRAGMA foreign_keys=ON;",
    )?;
    conn.busy_timeout(BUSY_TIMEOUT)
}

fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL).map_err(map_sql_error)?;
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?, CAST(strftime('%s','now') AS INTEGER))",
        params![SCHEMA_VERSION],
    )
    .map_err(map_sql_error)?;
    Ok(())
}

pub(crate) fn map_sql_error(err: rusqlite::Error) -> WorkpaceError {
    WorkpaceError::from(InfraError::from(err))
}
