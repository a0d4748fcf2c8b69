//! The room: one game session plus everyone connected to it.

use parking_lot::Mutex;
use tracing::{debug, info};

use super::dispatch;
use super::hub::{Hub, Outbox};
use crate::game::{GameSession, Moved};
use crate::protocol::{ClientToServer, GameSnapshot};
use crate::util::id::ConnectionId;

/// Each inbound event runs entirely under the session lock: mutate, build the
/// outbound messages from the committed state, queue them, unlock. Two events
/// can therefore never act on the same snapshot, and every connection sees
/// broadcasts in the same order.
#[derive(Default)]
pub struct Room {
    session: Mutex<GameSession>,
    hub: Hub,
}

impl Room {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start delivering to `conn` and bring it up to date.
    pub fn connect(&self, conn: ConnectionId, tx: Outbox) {
        let session = self.session.lock();
        self.hub.register(conn, tx);
        self.hub.deliver(dispatch::sync(conn, &session));
        info!(%conn, connections = self.hub.len(), "connected");
    }

    pub fn handle(&self, conn: ConnectionId, event: ClientToServer) {
        let mut session = self.session.lock();
        let out = match event {
            ClientToServer::JoinGame => match session.join(conn) {
                Ok(joined) => {
                    info!(%conn, side = joined.side.as_str(), "seated");
                    dispatch::joined(conn, joined)
                }
                Err(err) => {
                    debug!(%conn, %err, "join rejected");
                    dispatch::rejected(conn, err)
                }
            },
            ClientToServer::MakeMove { column } => match session.make_move(conn, column) {
                Ok(moved) => {
                    match moved {
                        Moved::Continue { next } => {
                            debug!(%conn, column, next = next.as_str(), "move accepted")
                        }
                        Moved::Finished(outcome) => info!(%conn, ?outcome, "game over"),
                    }
                    dispatch::moved(&session, moved)
                }
                Err(err) => {
                    debug!(%conn, column, %err, "move rejected");
                    dispatch::rejected(conn, err)
                }
            },
            ClientToServer::NewGame => {
                session.reset();
                info!(%conn, "new game");
                dispatch::reset(&session)
            }
        };
        self.hub.deliver(out);
    }

    pub fn disconnect(&self, conn: ConnectionId) {
        let mut session = self.session.lock();
        self.hub.unregister(conn);
        if let Some(side) = session.leave(conn) {
            info!(%conn, side = side.as_str(), "seat released");
        }
        info!(%conn, connections = self.hub.len(), "disconnected");
        if self.hub.is_empty() && session.players().is_empty() {
            debug!("room idle");
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::of(&self.session.lock())
    }
}
