use axum::{http::StatusCode, response::IntoResponse, Json};

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Laravel Sanctum compatibility stub. No cookie is actually set.
pub async fn csrf_cookie() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "CSRF cookie set" }))
}
