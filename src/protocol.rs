//! JSON messages exchanged over the WebSocket.
//!
//! Every frame is `{"event": "<name>", "data": <payload>}`, with `data`
//! omitted for events that carry nothing.

use serde::{Deserialize, Serialize};

use crate::game::{Board, GameSession, Side, Status};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientToServer {
    JoinGame,
    MakeMove { column: i64 },
    NewGame,
}

impl ClientToServer {
    /// Decode one text frame, or the `error` reply owed to the sender.
    pub fn decode(text: &str) -> Result<Self, ServerToClient> {
        serde_json::from_str(text)
            .map_err(|err| ServerToClient::Error { message: format!("bad message: {err}") })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerToClient {
    PlayerColor {
        color: Side,
    },
    OpponentJoined,
    UpdatedBoard {
        board: Vec<Vec<Option<Side>>>,
        #[serde(rename = "currentPlayer")]
        current_player: Side,
    },
    GameOver {
        winner: Option<Side>,
    },
    MoveRejected {
        reason: &'static str,
    },
    Error {
        message: String,
    },
}

impl ServerToClient {
    pub fn updated_board(board: &Board, current_player: Side) -> Self {
        ServerToClient::UpdatedBoard { board: board.to_grid(), current_player }
    }
}

/// Read-only view of the session served over HTTP.
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot {
    pub board: Vec<Vec<Option<Side>>>,
    #[serde(rename = "currentPlayer")]
    pub current_player: Side,
    pub status: Status,
    pub players: usize,
}

impl GameSnapshot {
    pub fn of(session: &GameSession) -> Self {
        Self {
            board: session.board().to_grid(),
            current_player: session.current_turn(),
            status: session.status(),
            players: session.players().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_inbound_events() {
        let join: ClientToServer = serde_json::from_str(r#"{"event":"join-game"}"#).unwrap();
        assert_eq!(join, ClientToServer::JoinGame);

        let mv: ClientToServer =
            serde_json::from_str(r#"{"event":"make-move","data":{"column":-2}}"#).unwrap();
        assert_eq!(mv, ClientToServer::MakeMove { column: -2 });

        let reset: ClientToServer = serde_json::from_str(r#"{"event":"new-game"}"#).unwrap();
        assert_eq!(reset, ClientToServer::NewGame);
    }

    #[test]
    fn rejects_unknown_or_malformed_events() {
        assert!(serde_json::from_str::<ClientToServer>(r#"{"event":"cheat"}"#).is_err());
        assert!(serde_json::from_str::<ClientToServer>(r#"{"event":"make-move"}"#).is_err());
        assert!(
            serde_json::from_str::<ClientToServer>(r#"{"event":"make-move","data":{"column":"x"}}"#)
                .is_err()
        );
    }

    #[test]
    fn undecodable_frames_get_an_error_reply() {
        assert_eq!(
            ClientToServer::decode(r#"{"event":"new-game"}"#),
            Ok(ClientToServer::NewGame)
        );

        for frame in ["not json", r#"{"event":"make-move","data":{"column":"x"}}"#] {
            let reply = ClientToServer::decode(frame).unwrap_err();
            let value = serde_json::to_value(&reply).unwrap();
            assert_eq!(value["event"], "error");
            let message = value["data"]["message"].as_str().unwrap();
            assert!(message.starts_with("bad message: "), "{message}");
        }
    }

    #[test]
    fn outbound_shapes() {
        let color = serde_json::to_value(ServerToClient::PlayerColor { color: Side::Yellow }).unwrap();
        assert_eq!(color, json!({"event": "player-color", "data": {"color": "yellow"}}));

        let joined = serde_json::to_value(ServerToClient::OpponentJoined).unwrap();
        assert_eq!(joined, json!({"event": "opponent-joined"}));

        let over = serde_json::to_value(ServerToClient::GameOver { winner: None }).unwrap();
        assert_eq!(over, json!({"event": "game-over", "data": {"winner": null}}));

        let rejected =
            serde_json::to_value(ServerToClient::MoveRejected { reason: "column-full" }).unwrap();
        assert_eq!(rejected, json!({"event": "move-rejected", "data": {"reason": "column-full"}}));
    }

    #[test]
    fn updated_board_uses_camel_case_current_player() {
        let mut board = Board::new();
        board.drop_piece(6, Side::Red).unwrap();
        let value = serde_json::to_value(ServerToClient::updated_board(&board, Side::Yellow)).unwrap();
        assert_eq!(value["event"], "updated-board");
        assert_eq!(value["data"]["currentPlayer"], "yellow");
        assert_eq!(value["data"]["board"][5][6], "red");
        assert!(value["data"]["board"][0][0].is_null());
    }
}
