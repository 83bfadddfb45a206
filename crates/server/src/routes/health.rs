use axum::{extract::State, http::StatusCode, Json};
use common::ApiResponse;

use crate::routes::AppState;

#[utoipa::path(
    get, path = "/categories/health", tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = crate::openapi::MessageResponseDoc),
        (status = 503, description = "Service is not healthy", body = crate::openapi::MessageResponseDoc)
    )
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<ApiResponse<()>>) {
    let status = state.health.status();
    if status.is_healthy {
        (StatusCode::OK, Json(ApiResponse::success(format!("{} is healthy", status.name))))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse::error(format!("{} is not healthy", status.name))),
        )
    }
}
