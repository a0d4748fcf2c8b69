//! Two-slot mapping from connections to sides.

use std::collections::HashMap;

use super::board::Side;
use crate::util::id::ConnectionId;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    #[error("both seats are taken")]
    Full,
    #[error("connection already plays {}", .0.as_str())]
    AlreadySeated(Side),
}

#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    seats: HashMap<ConnectionId, Side>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat `conn` on the vacant side, Red first.
    pub fn join(&mut self, conn: ConnectionId) -> Result<Side, RegistryError> {
        if let Some(side) = self.side_of(conn) {
            return Err(RegistryError::AlreadySeated(side));
        }
        if self.is_full() {
            return Err(RegistryError::Full);
        }
        let side = if self.holder_of(Side::Red).is_none() { Side::Red } else { Side::Yellow };
        self.seats.insert(conn, side);
        Ok(side)
    }

    /// Frees the seat held by `conn`, if any.
    pub fn leave(&mut self, conn: ConnectionId) -> Option<Side> {
        self.seats.remove(&conn)
    }

    pub fn side_of(&self, conn: ConnectionId) -> Option<Side> {
        self.seats.get(&conn).copied()
    }

    pub fn holder_of(&self, side: Side) -> Option<ConnectionId> {
        self.seats.iter().find(|(_, s)| **s == side).map(|(c, _)| *c)
    }

    pub fn is_full(&self) -> bool {
        self.seats.len() == 2
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_red_then_yellow_then_full() {
        let (a, b, c) = (ConnectionId::new(), ConnectionId::new(), ConnectionId::new());
        let mut reg = PlayerRegistry::new();

        assert_eq!(reg.join(a), Ok(Side::Red));
        assert!(!reg.is_full());
        assert_eq!(reg.join(b), Ok(Side::Yellow));
        assert!(reg.is_full());
        assert_eq!(reg.join(c), Err(RegistryError::Full));

        assert_eq!(reg.side_of(a), Some(Side::Red));
        assert_eq!(reg.side_of(b), Some(Side::Yellow));
        assert_eq!(reg.side_of(c), None);
    }

    #[test]
    fn rejoin_keeps_the_original_seat() {
        let a = ConnectionId::new();
        let mut reg = PlayerRegistry::new();
        reg.join(a).unwrap();
        assert_eq!(reg.join(a), Err(RegistryError::AlreadySeated(Side::Red)));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn leave_is_idempotent() {
        let a = ConnectionId::new();
        let mut reg = PlayerRegistry::new();
        reg.join(a).unwrap();
        assert_eq!(reg.leave(a), Some(Side::Red));
        assert_eq!(reg.leave(a), None);
        assert!(reg.is_empty());
    }

    #[test]
    fn newcomer_takes_the_vacated_side() {
        let (a, b, c) = (ConnectionId::new(), ConnectionId::new(), ConnectionId::new());
        let mut reg = PlayerRegistry::new();
        reg.join(a).unwrap();
        reg.join(b).unwrap();

        reg.leave(a);
        assert_eq!(reg.join(c), Ok(Side::Red));
        assert_eq!(reg.holder_of(Side::Red), Some(c));
        assert_eq!(reg.holder_of(Side::Yellow), Some(b));
    }
}
