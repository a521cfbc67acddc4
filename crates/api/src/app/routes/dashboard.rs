//! Dashboard statistics.

use axum::{response::IntoResponse, routing::get, Json, Router};

use crate::app::dto;

pub fn router() -> Router {
    Router::new().route("/stats", get(stats))
}

/// Fixed counters for the dashboard widgets. The figures are frozen until
/// the real backend computes them.
pub async fn stats() -> impl IntoResponse {
    Json(dto::StatsResponse {
        requests_total: 25,
        requests_pending: 8,
        materials_total: 150,
        materials_low_stock: 12,
        pending_validations: 5,
        notifications_unread: 3,
    })
}
