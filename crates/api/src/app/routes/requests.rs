//! Material requests listing.
//!
//! `status`/`requester_id` are accepted but deliberately not applied; the
//! backend this mock mirrors declares them without wiring them up, and the
//! black-box suite pins that behaviour down.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use gestmat_core::{paginate, PageRequest};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/", get(list_requests))
}

pub async fn list_requests(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::RequestsListQuery>,
) -> axum::response::Response {
    let request = match PageRequest::new(query.page, query.per_page) {
        Ok(r) => r,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let page = paginate(services.requests_list(), &request);

    (
        StatusCode::OK,
        Json(dto::page_to_json(page, dto::request_to_json)),
    )
        .into_response()
}
