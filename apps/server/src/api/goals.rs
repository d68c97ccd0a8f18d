use std::sync::Arc;

use crate::{
    api::extract::{IdPath, JsonBody},
    error::{ApiResult, OrFail},
    main_lib::AppState,
    models::{ApiResponse, GoalPayload, GoalRow},
};
use axum::{
    extract::State,
    routing::{get, post, put},
    Json, Router,
};

#[utoipa::path(post, path = "/goal", request_body = GoalPayload, responses(
    (status = 200, description = "Goal added"),
    (status = 500, description = "Add failed"),
))]
async fn create_goal(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<GoalPayload>,
) -> ApiResult<Json<ApiResponse<()>>> {
    let goal = state
        .goal_service
        .create_goal(payload.into())
        .await
        .or_fail("Add failed")?;
    tracing::info!(goal_id = goal.id, "Goal added");
    Ok(Json(ApiResponse::ok("Goal added successfully")))
}

#[utoipa::path(get, path = "/goals", responses(
    (status = 200, description = "All goals", body = [GoalRow]),
    (status = 500, description = "Retrieval failed"),
))]
async fn list_goals(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ApiResponse<Vec<GoalRow>>>> {
    let goals = state.goal_service.get_goals().or_fail("Retrieval failed")?;
    Ok(Json(ApiResponse::with_data(
        "Goals retrieved successfully",
        goals.into_iter().map(GoalRow::from).collect(),
    )))
}

#[utoipa::path(put, path = "/goal/{id}", request_body = GoalPayload,
    params(("id" = i32, Path, description = "Goal id")),
    responses(
        (status = 200, description = "Goal updated"),
        (status = 500, description = "Update failed"),
    )
)]
async fn update_goal(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
    JsonBody(payload): JsonBody<GoalPayload>,
) -> ApiResult<Json<ApiResponse<()>>> {
    state
        .goal_service
        .update_goal(id, payload.into())
        .await
        .or_fail("Update failed")?;
    Ok(Json(ApiResponse::ok("Goal updated successfully")))
}

/// Fails while any entry still references the goal.
#[utoipa::path(delete, path = "/goal/{id}",
    params(("id" = i32, Path, description = "Goal id")),
    responses(
        (status = 200, description = "Goal deleted"),
        (status = 500, description = "Delete failed"),
    )
)]
async fn delete_goal(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
) -> ApiResult<Json<ApiResponse<()>>> {
    state
        .goal_service
        .delete_goal(id)
        .await
        .or_fail("Delete failed")?;
    Ok(Json(ApiResponse::ok("Goal deleted successfully")))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goal", post(create_goal))
        .route("/goals", get(list_goals))
        .route("/goal/{id}", put(update_goal).delete(delete_goal))
}
