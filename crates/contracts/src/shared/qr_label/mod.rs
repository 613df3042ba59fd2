//! Deterministic label pattern generator for printable asset tags.
//!
//! An item record is serialized to a compact JSON payload, the payload is
//! hashed into a seed, and the seed drives a linear congruential fill of a
//! square module grid with three finder-style corner markers drawn on top.
//! The result looks like a QR code but is purely decorative: there is no
//! error correction and no symbology compliance, and the exact bit pattern
//! is part of the contract — already printed labels must keep matching what
//! the application renders for the same record.

pub mod hash;
pub mod pattern;
pub mod payload;
pub mod print;
pub mod render;

pub use hash::seed_hash;
pub use pattern::{generate_grid, is_finder_region, ModuleGrid, GRID_SIZE};
pub use payload::LabelPayload;
pub use print::{png_data_uri, print_document};
pub use render::{encode_png, render_bitmap, MODULE_PX};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LabelError {
    /// Grid size must be a positive integer.
    #[error("grid size must be a positive integer")]
    InvalidSize,

    #[error("payload encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("png encoding failed: {0}")]
    Png(#[from] image::ImageError),
}
