mod error;
mod handlers;
mod message;
mod port;
mod types;

use axum::routing::any;
use axum::Router;
use log::{info, LevelFilter};

fn app() -> Router {
    // Everything under the endpoint path reaches the same handler.
    Router::new()
        .route("/api/messages", any(handlers::messages))
        .route("/api/messages/", any(handlers::messages))
        .route("/api/messages/*rest", any(handlers::messages))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::formatted_timed_builder()
        .filter_level(LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let port = port::resolve_port(&args, |key| std::env::var(key).ok(), port::DEFAULT_PORT);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("HTTP Server started on port {}", port);
    info!("Send POST requests to http://localhost:{}/api/messages", port);
    info!("Expected JSON format: {{\"message\": \"your message here\"}}");

    axum::serve(listener, app()).await?;

    Ok(())
}
