pub mod dispatch;
pub mod hub;
pub mod manager;

pub use manager::Room;
