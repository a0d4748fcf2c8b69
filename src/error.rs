//! Reasons an inbound operation is refused.

use crate::game::board::DropError;
use crate::game::registry::RegistryError;

/// Why an inbound operation was refused. Rejections never change game state.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("column {0} is outside the board")]
    OutOfRange(i64),
    #[error("column {0} is full")]
    ColumnFull(usize),
    #[error("both seats are taken")]
    RegistryFull,
    #[error("connection is already seated")]
    AlreadySeated,
    #[error("connection is not seated")]
    NotSeated,
    #[error("it is not this side's turn")]
    NotYourTurn,
    #[error("waiting for an opponent")]
    WaitingForOpponent,
    #[error("game is over")]
    GameOver,
}

impl GameError {
    /// Stable code sent to clients in `move-rejected`.
    pub fn reason(&self) -> &'static str {
        match self {
            GameError::OutOfRange(_) => "out-of-range",
            GameError::ColumnFull(_) => "column-full",
            GameError::RegistryFull => "registry-full",
            GameError::AlreadySeated => "already-seated",
            GameError::NotSeated => "not-seated",
            GameError::NotYourTurn => "not-your-turn",
            GameError::WaitingForOpponent => "waiting-for-opponent",
            GameError::GameOver => "game-over",
        }
    }
}

impl From<DropError> for GameError {
    fn from(err: DropError) -> Self {
        match err {
            DropError::OutOfRange(col) => GameError::OutOfRange(col),
            DropError::ColumnFull(col) => GameError::ColumnFull(col),
        }
    }
}

impl From<RegistryError> for GameError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Full => GameError::RegistryFull,
            RegistryError::AlreadySeated(_) => GameError::AlreadySeated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_errors_keep_their_column() {
        assert_eq!(GameError::from(DropError::ColumnFull(3)), GameError::ColumnFull(3));
        assert_eq!(GameError::from(DropError::OutOfRange(-1)).reason(), "out-of-range");
    }

    #[test]
    fn display() {
        assert_eq!(GameError::OutOfRange(9).to_string(), "column 9 is outside the board");
        assert_eq!(GameError::NotYourTurn.reason(), "not-your-turn");
    }
}
