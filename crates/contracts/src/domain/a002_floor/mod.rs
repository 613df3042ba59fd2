pub mod aggregate;

pub use aggregate::{Floor, FloorId};
