use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tower_http::trace::TraceLayer;

mod config;
mod error;
mod game;
mod http;
mod protocol;
mod room;
mod telemetry;
mod util;
mod ws;

use crate::http::routes::{self, AppState};
use crate::room::Room;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let state = AppState { room: Arc::new(Room::new()) };

    let app = routes::router(state)
        .layer(config::cors())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config::server_addr();
    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app).await?;
    Ok(())
}
