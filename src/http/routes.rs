//! HTTP routes: health, game snapshot and the WebSocket endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::protocol::GameSnapshot;
use crate::room::Room;
use crate::ws::connection::ws_handler;

#[derive(Clone)]
pub struct AppState {
    pub room: Arc<Room>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/game", get(game_snapshot))
        .route("/ws", get(ws_handler))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn game_snapshot(State(state): State<AppState>) -> Json<GameSnapshot> {
    Json(state.room.snapshot())
}
