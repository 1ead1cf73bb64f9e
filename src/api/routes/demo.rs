use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::api::state::AppState;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
}

pub async fn root(State(state): State<AppState>) -> &'static str {
    state.logger.debug("Serving the landing route", &[]);
    "Hello from the logging demo!"
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<UserResponse> {
    state.logger.info(format!("Looking up user {id}"), &[]);
    Json(UserResponse {
        id,
        name: "Test User".to_string(),
    })
}

pub async fn simulate_error(State(state): State<AppState>) -> (StatusCode, &'static str) {
    state.logger.error("This route always fails", &[]);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
}
