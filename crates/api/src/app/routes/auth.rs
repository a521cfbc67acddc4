//! Authentication routes: login, logout, fixed current user.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use gestmat_auth::SessionToken;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/user", get(current_user))
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    match services.login(&body.email, &body.password) {
        Ok(user) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "user": dto::user_to_json(user),
                "message": "Connexion réussie",
            })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// Unconditionally successful; revokes the presented session, if any.
pub async fn logout(
    Extension(services): Extension<Arc<AppServices>>,
    headers: HeaderMap,
) -> axum::response::Response {
    let token = extract_bearer(&headers).map(SessionToken::new);
    services.logout(token.as_ref());

    (
        StatusCode::OK,
        Json(serde_json::json!({ "message": "Déconnexion réussie" })),
    )
        .into_response()
}

/// Ignores any session context and serves the fixed administrative account.
pub async fn current_user(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.fixed_current_user() {
        Some(user) => (StatusCode::OK, Json(dto::user_to_json(user))).into_response(),
        None => errors::json_error(StatusCode::UNAUTHORIZED, "unauthenticated", "Non authentifié"),
    }
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(axum::http::header::AUTHORIZATION)?;
    let header = header.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();

    if token.is_empty() {
        return None;
    }

    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_extraction_trims_and_rejects_empty() {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::AUTHORIZATION,
            "Bearer session_1_1721039400000000 ".parse().unwrap(),
        );
        assert_eq!(extract_bearer(&headers), Some("session_1_1721039400000000"));

        headers.insert(axum::http::header::AUTHORIZATION, "Bearer ".parse().unwrap());
        assert_eq!(extract_bearer(&headers), None);

        headers.insert(axum::http::header::AUTHORIZATION, "Basic abc".parse().unwrap());
        assert_eq!(extract_bearer(&headers), None);

        assert_eq!(extract_bearer(&HeaderMap::new()), None);
    }
}
