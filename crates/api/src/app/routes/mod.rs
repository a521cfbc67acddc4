use axum::{routing::get, Router};

pub mod auth;
pub mod dashboard;
pub mod directions;
pub mod materials;
pub mod notifications;
pub mod requests;
pub mod system;
pub mod users;

/// Router for everything served under the `/api` prefix.
pub fn router() -> Router {
    Router::new()
        .route("/sanctum/csrf-cookie", get(system::csrf_cookie))
        .nest("/auth", auth::router())
        .nest("/dashboard", dashboard::router())
        .nest("/users", users::router())
        .nest("/directions", directions::router())
        .nest("/materials", materials::router())
        .nest("/requests", requests::router())
        .nest("/notifications", notifications::router())
}
