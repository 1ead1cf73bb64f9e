pub mod demo;
pub mod health;

use axum::{middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::api::middleware::access_log;
use crate::api::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any);

    Router::new()
        .route("/", get(demo::root))
        .route("/user/{id}", get(demo::get_user))
        .route("/error", get(demo::simulate_error))
        .route("/health", get(health::health_check))
        .layer(middleware::from_fn_with_state(
            state.logger.clone(),
            access_log,
        ))
        .layer(cors)
        .with_state(state)
}
