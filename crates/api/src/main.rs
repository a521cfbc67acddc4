use std::sync::Arc;

#[tokio::main]
async fn main() {
    gestmat_observability::init();

    let addr = std::env::var("GESTMAT_ADDR").unwrap_or_else(|_| {
        tracing::warn!("GESTMAT_ADDR not set; using default 0.0.0.0:8001");
        "0.0.0.0:8001".to_string()
    });

    let services = Arc::new(gestmat_api::app::services::build_services());
    let app = gestmat_api::app::build_app(services);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!("listening on {}", listener.local_addr().expect("bound listener has an address"));

    axum::serve(listener, app).await.expect("server error");
}
