//! Client-side in-memory dataset and the reductions computed over it.
//!
//! There is no backend: every page reads these fixed records directly.

pub mod dataset;
pub mod stats;

pub use dataset::{
    categories, floors, inventory_items, monthly_movement, rooms, Category, MonthlyMovement,
};
