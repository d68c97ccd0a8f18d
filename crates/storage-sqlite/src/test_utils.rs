//! Shared fixtures for repository tests.

use std::sync::Arc;

use diesel::RunQueryDsl;
use tempfile::TempDir;

use crate::db::{create_pool, get_connection, run_migrations, write_actor::spawn_writer};
use crate::db::{DbPool, WriteHandle};

pub(crate) struct TestDb {
    pub pool: Arc<DbPool>,
    pub writer: WriteHandle,
    // Keeps the database file alive for the duration of the test.
    _dir: TempDir,
}

/// Creates a migrated database in a temp directory and starts its writer.
/// Must be called from within a Tokio runtime.
pub(crate) async fn setup_test_db() -> TestDb {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let db_path = dir.path().join("test.db").to_string_lossy().to_string();
    let db_path = crate::db::init(&db_path).expect("Failed to init database");

    let pool = create_pool(&db_path).expect("Failed to create pool");
    run_migrations(&pool).expect("Failed to run migrations");
    let writer = spawn_writer((*pool).clone()).expect("Failed to start writer");

    TestDb {
        pool,
        writer,
        _dir: dir,
    }
}

#[derive(diesel::QueryableByName)]
struct RowCount {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    count: i64,
}

pub(crate) fn count_rows(pool: &DbPool, table: &str) -> i64 {
    let mut conn = get_connection(pool).expect("Failed to get connection");
    diesel::sql_query(format!("SELECT COUNT(*) AS count FROM {}", table))
        .get_result::<RowCount>(&mut conn)
        .expect("Failed to count rows")
        .count
}
