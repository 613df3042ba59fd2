pub mod aggregate;

pub use aggregate::{Room, RoomId};
