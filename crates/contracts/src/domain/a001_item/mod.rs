pub mod aggregate;

pub use aggregate::{InventoryItem, ItemId};
