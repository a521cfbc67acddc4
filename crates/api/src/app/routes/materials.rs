//! Materials listing.
//!
//! `search`/`category`/`status` are accepted but deliberately not applied;
//! the backend this mock mirrors declares them without wiring them up, and
//! the black-box suite pins that behaviour down.

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
    Router::new().route("/", get(list_materials))
}

pub async fn list_materials(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::MaterialsListQuery>,
) -> axum::response::Response {
    let request = match PageRequest::new(query.page, query.per_page) {
        Ok(r) => r,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let page = paginate(services.materials_list(), &request);

    (
        StatusCode::OK,
        Json(dto::page_to_json(page, dto::material_to_json)),
    )
        .into_response()
}
