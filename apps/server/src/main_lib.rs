use std::sync::Arc;

use crate::config::Config;
use journal_core::{
    entries::{EntryService, EntryServiceTrait},
    goals::{GoalService, GoalServiceTrait},
};
use journal_storage_sqlite::{
    db::{self, write_actor, DbPool},
    entries::EntryRepository,
    goals::GoalRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub entry_service: Arc<dyn EntryServiceTrait + Send + Sync>,
    pub goal_service: Arc<dyn GoalServiceTrait + Send + Sync>,
    pub pool: Arc<DbPool>,
}

pub fn init_tracing() {
    let log_format = std::env::var("JOURNAL_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Opens the database, applies pending migrations, starts the writer and
/// wires the services. Must run inside a Tokio runtime.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone())?;

    let entry_repository = Arc::new(EntryRepository::new(pool.clone(), writer.clone()));
    let entry_service = Arc::new(EntryService::new(entry_repository));

    let goal_repository = Arc::new(GoalRepository::new(pool.clone(), writer.clone()));
    let goal_service = Arc::new(GoalService::new(goal_repository));

    Ok(Arc::new(AppState {
        entry_service,
        goal_service,
        pool,
    }))
}
