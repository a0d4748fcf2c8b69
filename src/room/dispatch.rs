//! Turns session outcomes into addressed outbound messages.
//!
//! Kept free of I/O so the fan-out rules can be checked without sockets; the
//! hub does the actual delivery.

use crate::error::GameError;
use crate::game::{GameSession, Joined, Moved, Status};
use crate::protocol::ServerToClient;
use crate::util::id::ConnectionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipients {
    One(ConnectionId),
    All,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub to: Recipients,
    pub msg: ServerToClient,
}

impl Envelope {
    fn to_one(conn: ConnectionId, msg: ServerToClient) -> Self {
        Self { to: Recipients::One(conn), msg }
    }

    fn to_all(msg: ServerToClient) -> Self {
        Self { to: Recipients::All, msg }
    }
}

pub fn joined(conn: ConnectionId, joined: Joined) -> Vec<Envelope> {
    let mut out = vec![Envelope::to_one(conn, ServerToClient::PlayerColor { color: joined.side })];
    if joined.opponent_joined {
        out.push(Envelope::to_all(ServerToClient::OpponentJoined));
    }
    out
}

/// The board always goes out first so observers see the final piece before
/// any game-over notice.
pub fn moved(session: &GameSession, moved: Moved) -> Vec<Envelope> {
    let mut out = vec![Envelope::to_all(ServerToClient::updated_board(
        session.board(),
        session.current_turn(),
    ))];
    if let Moved::Finished(outcome) = moved {
        out.push(Envelope::to_all(ServerToClient::GameOver { winner: outcome.winner() }));
    }
    out
}

pub fn reset(session: &GameSession) -> Vec<Envelope> {
    vec![Envelope::to_all(ServerToClient::updated_board(
        session.board(),
        session.current_turn(),
    ))]
}

pub fn rejected(conn: ConnectionId, err: GameError) -> Vec<Envelope> {
    vec![Envelope::to_one(conn, ServerToClient::MoveRejected { reason: err.reason() })]
}

/// What a freshly connected socket needs to catch up with everyone else.
pub fn sync(conn: ConnectionId, session: &GameSession) -> Vec<Envelope> {
    let mut out = vec![Envelope::to_one(
        conn,
        ServerToClient::updated_board(session.board(), session.current_turn()),
    )];
    if let Status::Finished { outcome } = session.status() {
        out.push(Envelope::to_one(conn, ServerToClient::GameOver { winner: outcome.winner() }));
    }
    out
}
