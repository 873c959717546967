use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State, WebSocketUpgrade},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use common::{log, warn};

use crate::identity::PlayerIdentity;
use crate::score_store::ScoreStore;
use crate::server_config::ServerConfig;
use crate::ws_handler::handle_websocket;

#[derive(Clone)]
pub struct WebServerState {
    pub score_store: Arc<dyn ScoreStore>,
    pub leaderboard_limit: usize,
}

#[derive(Deserialize)]
struct ConnectParams {
    user: Option<String>,
}

pub async fn run_web_server(
    config: &ServerConfig,
    score_store: Arc<dyn ScoreStore>,
) -> Result<(), String> {
    let state = WebServerState {
        score_store,
        leaderboard_limit: config.leaderboard_limit,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/ws", get(ws_upgrade_handler))
        .route("/api/leaderboard", get(leaderboard_handler))
        .nest_service("/ui", ServeDir::new(&config.static_files_path))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| format!("failed to bind {}: {}", config.listen_addr, e))?;

    log!("Web server listening on {}", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("web server error: {}", e))
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C");
    log!("Shutdown signal received");
}

async fn ws_upgrade_handler(
    ws: WebSocketUpgrade,
    Query(params): Query<ConnectParams>,
    State(state): State<WebServerState>,
) -> impl IntoResponse {
    let identity = PlayerIdentity::from_user_param(params.user);
    ws.on_upgrade(move |socket| handle_websocket(socket, state, identity))
}

async fn leaderboard_handler(State(state): State<WebServerState>) -> impl IntoResponse {
    match state.score_store.leaderboard(state.leaderboard_limit) {
        Ok(entries) => Json(entries).into_response(),
        Err(e) => {
            warn!("failed to build leaderboard: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "leaderboard unavailable").into_response()
        }
    }
}
