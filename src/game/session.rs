//! The authoritative game state machine.
//!
//! `GameSession` owns the board, the seat registry, whose turn it is and the
//! lifecycle status. Every operation either applies fully and reports what
//! happened, or returns a [`GameError`] and leaves the session untouched.
//! Callers are expected to serialize access (see `room::manager`).

use serde::Serialize;

use super::board::{Board, Side};
use super::registry::PlayerRegistry;
use super::win;
use crate::error::GameError;
use crate::util::id::ConnectionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "result", content = "winner")]
pub enum Outcome {
    Winner(Side),
    Draw,
}

impl Outcome {
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::Winner(side) => Some(side),
            Outcome::Draw => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "state")]
pub enum Status {
    /// Fewer than two players have ever been seated.
    Waiting,
    /// Both seats filled, no move made yet.
    Ready,
    InProgress,
    Finished { outcome: Outcome },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Joined {
    pub side: Side,
    /// The join filled the second seat.
    pub opponent_joined: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moved {
    Continue { next: Side },
    Finished(Outcome),
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    players: PlayerRegistry,
    current_turn: Side,
    status: Status,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            players: PlayerRegistry::new(),
            current_turn: Side::Red,
            status: Status::Waiting,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    pub fn current_turn(&self) -> Side {
        self.current_turn
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn join(&mut self, conn: ConnectionId) -> Result<Joined, GameError> {
        let side = self.players.join(conn)?;
        let opponent_joined = self.players.is_full();
        if opponent_joined && self.status == Status::Waiting {
            self.status = Status::Ready;
        }
        Ok(Joined { side, opponent_joined })
    }

    /// Drop a piece for the side seated at `conn`.
    ///
    /// The turn only advances on an accepted move that does not end the game.
    pub fn make_move(&mut self, conn: ConnectionId, column: i64) -> Result<Moved, GameError> {
        let mover = self.players.side_of(conn).ok_or(GameError::NotSeated)?;
        match self.status {
            Status::Waiting => return Err(GameError::WaitingForOpponent),
            Status::Finished { .. } => return Err(GameError::GameOver),
            Status::Ready | Status::InProgress => {}
        }
        if mover != self.current_turn {
            return Err(GameError::NotYourTurn);
        }

        self.board.drop_piece(column, mover)?;

        let outcome = match win::detect(&self.board) {
            Some(winner) => Some(Outcome::Winner(winner)),
            None if self.board.is_full() => Some(Outcome::Draw),
            None => None,
        };
        match outcome {
            Some(outcome) => {
                self.status = Status::Finished { outcome };
                Ok(Moved::Finished(outcome))
            }
            None => {
                self.status = Status::InProgress;
                self.current_turn = mover.other();
                Ok(Moved::Continue { next: self.current_turn })
            }
        }
    }

    /// Release the seat held by `conn`. The board and status are kept so a
    /// newcomer can pick up the vacant side.
    pub fn leave(&mut self, conn: ConnectionId) -> Option<Side> {
        self.players.leave(conn)
    }

    /// Start over on an empty board with Red to move. Seats are kept.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_turn = Side::Red;
        self.status = if self.players.is_full() { Status::Ready } else { Status::InProgress };
    }
}
