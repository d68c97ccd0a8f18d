use std::sync::Arc;

use crate::{
    api::extract::{IdPath, JsonBody},
    error::{ApiResult, OrFail},
    main_lib::AppState,
    models::{ApiResponse, EntryPayload, EntryRow},
};
use axum::{
    extract::State,
    routing::{get, post, put},
    Json, Router,
};

#[utoipa::path(post, path = "/entry", request_body = EntryPayload, responses(
    (status = 200, description = "Entry added"),
    (status = 500, description = "Add failed"),
))]
async fn create_entry(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<EntryPayload>,
) -> ApiResult<Json<ApiResponse<()>>> {
    let entry = state
        .entry_service
        .create_entry(payload.into())
        .await
        .or_fail("Add failed")?;
    tracing::info!(entry_id = entry.id, "Entry added");
    Ok(Json(ApiResponse::ok("Entry added successfully")))
}

#[utoipa::path(get, path = "/entries", responses(
    (status = 200, description = "All entries with their goals", body = [EntryRow]),
    (status = 500, description = "Retrieval failed"),
))]
async fn list_entries(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ApiResponse<Vec<EntryRow>>>> {
    let entries = state
        .entry_service
        .get_entries()
        .or_fail("Retrieval failed")?;
    Ok(Json(ApiResponse::with_data(
        "Entries retrieved successfully",
        entries.into_iter().map(EntryRow::from).collect(),
    )))
}

#[utoipa::path(put, path = "/entry/{id}", request_body = EntryPayload,
    params(("id" = i32, Path, description = "Entry id")),
    responses(
        (status = 200, description = "Entry updated"),
        (status = 500, description = "Update failed"),
    )
)]
async fn update_entry(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
    JsonBody(payload): JsonBody<EntryPayload>,
) -> ApiResult<Json<ApiResponse<()>>> {
    state
        .entry_service
        .update_entry(id, payload.into())
        .await
        .or_fail("Update failed")?;
    Ok(Json(ApiResponse::ok("Entry updated successfully")))
}

#[utoipa::path(delete, path = "/entry/{id}",
    params(("id" = i32, Path, description = "Entry id")),
    responses(
        (status = 200, description = "Entry deleted"),
        (status = 500, description = "Delete failed"),
    )
)]
async fn delete_entry(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
) -> ApiResult<Json<ApiResponse<()>>> {
    state
        .entry_service
        .delete_entry(id)
        .await
        .or_fail("Delete failed")?;
    Ok(Json(ApiResponse::ok("Entry deleted successfully")))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/entry", post(create_entry))
        .route("/entries", get(list_entries))
        .route("/entry/{id}", put(update_entry).delete(delete_entry))
}
