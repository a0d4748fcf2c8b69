//! WebSocket connection lifecycle management.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::http::routes::AppState;
use crate::protocol::{ClientToServer, ServerToClient};
use crate::room::Room;
use crate::util::id::ConnectionId;

pub async fn ws_handler(State(state): State<AppState>, ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state.room))
}

async fn handle_socket(socket: WebSocket, room: Arc<Room>) {
    let conn = ConnectionId::new();
    let (mut ws_tx, mut ws_rx) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerToClient>();

    // Forward queued server messages to the socket.
    let writer = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            let text = match serde_json::to_string(&msg) {
                Ok(text) => text,
                Err(err) => {
                    warn!(%conn, %err, "failed to encode outbound message");
                    continue;
                }
            };
            if ws_tx.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    });

    room.connect(conn, tx.clone());

    while let Some(Ok(msg)) = ws_rx.next().await {
        match msg {
            Message::Text(text) => match ClientToServer::decode(&text) {
                Ok(event) => room.handle(conn, event),
                Err(reply) => {
                    debug!(%conn, ?reply, "undecodable frame");
                    let _ = tx.send(reply);
                }
            },
            Message::Close(_) => break,
            Message::Binary(_) | Message::Ping(_) | Message::Pong(_) => {}
        }
    }

    room.disconnect(conn);
    writer.abort();
}
