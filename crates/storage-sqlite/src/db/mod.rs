use log::{error, info};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use diesel::connection::{Connection, SimpleConnection};
use diesel::r2d2::{self, ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::errors::{IntoCore, StorageError};
use journal_core::errors::{DatabaseError, Error, Result};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// File name used when the configured database path points at a directory.
const DEFAULT_DB_FILE: &str = "journal.db";

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

pub mod write_actor;
pub use write_actor::WriteHandle;

/// Prepares the database file: creates the parent directory and switches the
/// file to WAL mode. Returns the resolved path.
pub fn init(db_location: &str) -> Result<String> {
    let db_path = get_db_path(db_location);

    if let Some(db_dir) = Path::new(&db_path).parent() {
        if !db_dir.as_os_str().is_empty() && !db_dir.exists() {
            fs::create_dir_all(db_dir)?;
        }
    }

    let mut conn = SqliteConnection::establish(&db_path).into_core()?;
    conn.batch_execute(
        "
            PRAGMA journal_mode = WAL;
            PRAGMA foreign_keys = ON;
            PRAGMA busy_timeout = 30000;
            PRAGMA synchronous  = NORMAL;
        ",
    )
    .into_core()?;

    Ok(db_path)
}

pub fn create_pool(db_path: &str) -> Result<Arc<DbPool>> {
    let manager = ConnectionManager::<SqliteConnection>::new(db_path);
    let pool = r2d2::Pool::builder()
        .max_size(8)
        .min_idle(Some(1))
        .connection_timeout(std::time::Duration::from_secs(30))
        .connection_customizer(Box::new(ConnectionCustomizer))
        .build(manager)
        .map_err(|e| Error::Database(DatabaseError::PoolCreationFailed(e.to_string())))?;
    Ok(Arc::new(pool))
}

pub fn run_migrations(pool: &DbPool) -> Result<()> {
    info!("Running database migrations");
    let mut connection = get_connection(pool)?;

    let applied = connection.run_pending_migrations(MIGRATIONS).map_err(|e| {
        error!("Database migration failed: {}", e);
        Error::from(StorageError::MigrationFailed(e.to_string()))
    })?;

    if applied.is_empty() {
        info!("No pending migrations to apply.");
    } else {
        info!("Applied the following migrations:");
        for migration_version in &applied {
            info!("  - {}", migration_version);
        }
    }

    Ok(())
}

/// Resolves the database file path. A directory (existing, or written with a
/// trailing separator) gets the default file name appended.
pub fn get_db_path(db_location: &str) -> String {
    let path = Path::new(db_location);
    if path.is_dir() || db_location.ends_with('/') || db_location.ends_with('\\') {
        path.join(DEFAULT_DB_FILE).to_string_lossy().to_string()
    } else {
        db_location.to_string()
    }
}

/// Gets a connection from the pool
pub fn get_connection(pool: &Pool<ConnectionManager<SqliteConnection>>) -> Result<DbConnection> {
    pool.get().into_core()
}

/// Runs a trivial query to confirm the database is reachable.
pub fn ping(pool: &DbPool) -> Result<()> {
    let mut conn = get_connection(pool)?;
    conn.batch_execute("SELECT 1;").into_core()
}

#[derive(Debug)]
struct ConnectionCustomizer;

impl r2d2::CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionCustomizer {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> std::result::Result<(), r2d2::Error> {
        conn.batch_execute(
            "
            PRAGMA foreign_keys = ON;
            PRAGMA busy_timeout = 30000;
            PRAGMA synchronous = NORMAL;
        ",
        )
        .map_err(r2d2::Error::QueryError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::RunQueryDsl;
    use tempfile::tempdir;

    #[derive(diesel::QueryableByName)]
    struct TableName {
        #[diesel(sql_type = diesel::sql_types::Text)]
        name: String,
    }

    #[test]
    fn test_get_db_path_appends_file_for_directories() {
        let dir = tempdir().unwrap();
        let resolved = get_db_path(dir.path().to_str().unwrap());
        assert!(resolved.ends_with(DEFAULT_DB_FILE));

        assert_eq!(get_db_path("./db/custom.db"), "./db/custom.db");
        assert!(get_db_path("./db/").ends_with(DEFAULT_DB_FILE));
    }

    #[test]
    fn test_init_creates_parent_and_migrations_create_tables() {
        let dir = tempdir().unwrap();
        let location = dir.path().join("nested").join("journal.db");
        let db_path = init(location.to_str().unwrap()).unwrap();
        assert!(Path::new(&db_path).exists());

        let pool = create_pool(&db_path).unwrap();
        run_migrations(&pool).unwrap();
        // Second run is a no-op.
        run_migrations(&pool).unwrap();

        let mut conn = get_connection(&pool).unwrap();
        let mut names: Vec<String> = diesel::sql_query(
            "SELECT name FROM sqlite_master WHERE type = 'table' \
             AND name IN ('journal', 'goals', 'entry_goals')",
        )
        .load::<TableName>(&mut conn)
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
        names.sort();
        assert_eq!(names, vec!["entry_goals", "goals", "journal"]);

        ping(&pool).unwrap();
    }
}
