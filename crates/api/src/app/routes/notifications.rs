//! Notifications listing with the live `read` filter.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use gestmat_notifications::NotificationFilter;

use crate::app::dto;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", get(list_notifications))
}

pub async fn list_notifications(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::NotificationsListQuery>,
) -> axum::response::Response {
    let filter = NotificationFilter { read: query.read };

    let items = services
        .notifications_list()
        .into_iter()
        .filter(|notification| filter.matches(notification))
        .map(dto::notification_to_json)
        .collect::<Vec<_>>();

    (StatusCode::OK, Json(serde_json::json!({ "data": items }))).into_response()
}
