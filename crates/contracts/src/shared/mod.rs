pub mod indicators;
pub mod qr_label;
