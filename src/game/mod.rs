//! Connect-four rules: board, win detection, seating and the session state
//! machine. Nothing in here knows about sockets.

pub mod board;
pub mod registry;
pub mod session;
pub mod win;

pub use board::{Board, Side};
pub use session::{GameSession, Joined, Moved, Status};
