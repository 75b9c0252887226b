//! Message Board Server - Binary Entry Point

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use message_board::api::http::create_router;
use message_board::api::websocket::state::AppState;
use message_board::board::Board;
use message_board::config::ServerConfig;
use message_board::types::BoardResult;

#[tokio::main]
async fn main() -> BoardResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "message_board=debug,tower_http=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env();

    let board = Arc::new(Board::with_file_path(config.data_file.clone()));
    info!("loaded board from {}", board.data_file_path());

    let state = Arc::new(AppState::new(board));
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("board server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve when ctrl-c is received
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
