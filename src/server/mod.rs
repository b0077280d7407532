pub mod handlers;
pub mod types;

use crate::{Result, config::Config, session::RecipeSession};
use axum::{
    Router,
    routing::{get, post, put},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/session", get(handlers::get_session))
        .route("/preferences", put(handlers::set_preference))
        .route("/generate", post(handlers::generate))
        .route("/feedback", post(handlers::feedback))
        // The form UI is served from another origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Initialize the single live session
    let session = RecipeSession::new(config.llm.clone());

    let app_state = handlers::AppState {
        session: Arc::new(Mutex::new(session)),
    };

    let app = router(app_state);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
