use std::sync::Arc;

use crate::{
    error::{ApiResult, OrFail},
    main_lib::AppState,
};
use axum::{extract::State, routing::get, Router};

#[utoipa::path(get, path = "/healthz", responses((status = 200, description = "Process is up")))]
pub async fn healthz() -> &'static str {
    "ok"
}

/// Ready once the database answers a query.
#[utoipa::path(get, path = "/readyz", responses(
    (status = 200, description = "Database reachable"),
    (status = 500, description = "Database unreachable"),
))]
pub async fn readyz(State(state): State<Arc<AppState>>) -> ApiResult<&'static str> {
    journal_storage_sqlite::db::ping(&state.pool).or_fail("Database unavailable")?;
    Ok("ok")
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
