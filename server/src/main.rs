#![recursion_limit = "256"]

mod backend;
mod config;
mod guard;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env().expect("invalid configuration");
    let port = config.port;
    tracing::info!(backend = %config.backend_url, "forwarding API calls");

    let state = state::AppState::new(config).expect("http client init failed");

    let app = routes::app(state).expect("router assembly failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "admin panel listening");
    axum::serve(listener, app).await.expect("server failed");
}
