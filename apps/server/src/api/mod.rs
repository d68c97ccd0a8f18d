use std::sync::Arc;

use crate::{config::Config, error::handle_middleware_error, main_lib::AppState, models};
use axum::{
    error_handling::HandleErrorLayer, http::HeaderValue, routing::get, Json, Router,
};
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

mod entries;
mod extract;
mod goals;
mod health;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        health::readyz,
        entries::create_entry,
        entries::list_entries,
        entries::update_entry,
        entries::delete_entry,
        goals::create_goal,
        goals::list_goals,
        goals::update_goal,
        goals::delete_goal,
    ),
    components(schemas(
        models::EntryRow,
        models::EntryPayload,
        models::GoalRow,
        models::GoalPayload,
    ))
)]
pub struct ApiDoc;

fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if config.cors_allow.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }
    let origins = config
        .cors_allow
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect::<Vec<_>>();
    layer.allow_origin(origins)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let openapi = ApiDoc::openapi();

    Router::new()
        .merge(health::router())
        .merge(entries::router())
        .merge(goals::router())
        .route(
            "/openapi.json",
            get(move || {
                let doc = openapi.clone();
                async move { Json(doc) }
            }),
        )
        .with_state(state)
        .layer(cors_layer(config))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(config.request_timeout)),
        )
        .layer(TraceLayer::new_for_http())
        // Setter outermost so the propagator sees the id.
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
