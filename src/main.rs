mod config;
mod handlers;
mod models;
mod routes;

use axum::Router;
use config::Config;
use tower_http::trace::TraceLayer;

fn app() -> Router {
    // Every method and every path lands in the dispatcher; there is no
    // route table because there are exactly two outcomes.
    Router::new()
        .fallback(handlers::dispatch)
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("hello-backend starting");

    let config = Config::from_env()?;
    config.log_startup();

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    // Announced only once the listener is bound and accepting.
    println!("Backend listening on http://localhost:{}", config.port);

    axum::serve(listener, app()).await?;

    Ok(())
}
