//! Users listing with live `search`/`role` filters.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use gestmat_auth::UserFilter;
use gestmat_core::{paginate, PageRequest};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/", get(list_users))
}

pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::UsersListQuery>,
) -> axum::response::Response {
    let request = match PageRequest::new(query.page, query.per_page) {
        Ok(r) => r,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let filter = UserFilter {
        search: query.search,
        role: query.role,
    };

    let matched: Vec<_> = services
        .users_list()
        .into_iter()
        .filter(|user| filter.matches(user))
        .collect();

    let page = paginate(matched, &request);

    (
        StatusCode::OK,
        Json(dto::page_to_json(page, dto::user_to_json)),
    )
        .into_response()
}
